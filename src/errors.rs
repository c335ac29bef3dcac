use std::fmt;

use axum::http::StatusCode;

/// Everything that can go wrong while taking a reservation. Validation
/// failures are the caller's fault; a persistence failure is ours and keeps
/// the underlying cause text for diagnosis.
#[derive(Debug, Clone, PartialEq)]
pub enum ReservationError {
    InvalidProduct,
    InvalidColor,
    Persistence(String),
}

impl fmt::Display for ReservationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationError::InvalidProduct => write!(f, "Invalid hammock type"),
            ReservationError::InvalidColor => write!(f, "Invalid color for selected product"),
            ReservationError::Persistence(cause) => write!(f, "Database error: {}", cause),
        }
    }
}

impl std::error::Error for ReservationError {}

impl ReservationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReservationError::InvalidProduct => StatusCode::BAD_REQUEST,
            ReservationError::InvalidColor => StatusCode::BAD_REQUEST,
            ReservationError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_bad_request() {
        assert_eq!(ReservationError::InvalidProduct.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ReservationError::InvalidColor.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn persistence_errors_map_to_internal_server_error() {
        let error = ReservationError::Persistence(String::from("connection refused"));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn persistence_message_preserves_the_cause() {
        let error = ReservationError::Persistence(String::from("connection refused"));
        assert_eq!(error.to_string(), "Database error: connection refused");
    }

    #[test]
    fn validation_messages_are_fixed() {
        assert_eq!(ReservationError::InvalidProduct.to_string(), "Invalid hammock type");
        assert_eq!(
            ReservationError::InvalidColor.to_string(),
            "Invalid color for selected product"
        );
    }
}
