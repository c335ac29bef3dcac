use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::Database;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::domain::Reservation;

/// Category name reservations are stored under.
pub static RESERVATION_CATEGORY: &str = "reservation";

/// Document-store contract: durably store a reservation under a named
/// category and hand back the store-assigned opaque id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationStore: Send + Sync {
    async fn create_document(
        &self,
        category: &str,
        reservation: &Reservation,
    ) -> Result<String, String>;
}

/// What actually gets written. The store owns the creation timestamp, so it
/// is stamped here at insert time rather than on the domain struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationDocument {
    pub name: String,
    pub color: String,
    pub hammock_type: String,
    pub phone: String,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct MongoDbReservationRepository {
    database: Option<Database>,
}

impl MongoDbReservationRepository {
    pub fn new(database: Database) -> Self {
        MongoDbReservationRepository {
            database: Some(database),
        }
    }

    /// Client initialization failed at startup. Every write fails until the
    /// process is restarted with a reachable database.
    pub fn unconnected() -> Self {
        MongoDbReservationRepository { database: None }
    }

    pub fn is_connected(&self) -> bool {
        self.database.is_some()
    }
}

#[async_trait]
impl ReservationStore for MongoDbReservationRepository {
    async fn create_document(
        &self,
        category: &str,
        reservation: &Reservation,
    ) -> Result<String, String> {
        match &self.database {
            Some(database) => {
                let document = ReservationDocument {
                    name: reservation.name.clone(),
                    color: reservation.color.clone(),
                    hammock_type: reservation.hammock_type.clone(),
                    phone: reservation.phone.clone(),
                    message: reservation.message.clone(),
                    created_at: Utc::now(),
                };

                match database
                    .collection::<ReservationDocument>(category)
                    .insert_one(document)
                    .await
                {
                    Ok(insert_result) => match insert_result.inserted_id.as_object_id() {
                        Some(object_id) => Ok(object_id.to_hex()),
                        None => Ok(insert_result.inserted_id.to_string()),
                    },
                    Err(e) => Err(format!("Failed to insert reservation: {}", e)),
                }
            }
            None => Err(String::from("database connection is not initialized")),
        }
    }
}

#[derive(Clone)]
pub struct InMemoryReservationRepository {
    documents: Arc<Mutex<HashMap<String, Vec<(String, Reservation)>>>>,
}

impl InMemoryReservationRepository {
    pub fn new() -> Self {
        InMemoryReservationRepository {
            documents: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn find_all(&self, category: &str) -> Vec<(String, Reservation)> {
        let lock = self.documents.lock().await;
        match lock.get(category) {
            Some(documents) => documents.clone(),
            None => Vec::new(),
        }
    }
}

#[async_trait]
impl ReservationStore for InMemoryReservationRepository {
    async fn create_document(
        &self,
        category: &str,
        reservation: &Reservation,
    ) -> Result<String, String> {
        let mut lock = self.documents.lock().await;
        let id = uuid::Uuid::new_v4().to_string();
        lock.entry(String::from(category))
            .or_insert_with(Vec::new)
            .push((id.clone(), reservation.clone()));

        Ok(id)
    }
}
