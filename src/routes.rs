use std::sync::Arc;

use axum::{extract::{Json, State}, http::StatusCode};
use serde_json::{json, Value};

use crate::{cqrs::{CommandHandler, CreateReservationCommand, GetProductsQuery, QueryHandler}, dtos::{ApiError, HealthResponse, MessageResponse}, state::AppState};

pub async fn index() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!(MessageResponse{
        message: String::from("Hamacas Suazo Backend Running")
    })))
}

pub async fn get_products(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    match state.get_products_query_handler.handle(&GetProductsQuery{}).await {
        // The catalog goes over the wire as a bare array of products.
        Ok(response) => (StatusCode::OK, Json(json!(response.products))),
        Err(e) => (e.status_code(), Json(json!(ApiError{detail: e.to_string()})))
    }
}

pub async fn create_reservation(State(state): State<Arc<AppState>>, Json(create_reservation_command): Json<CreateReservationCommand>) -> (StatusCode, Json<Value>) {
    match state.create_reservation_command_handler.handle(&create_reservation_command).await {
        Ok(response) => (StatusCode::OK, Json(json!(response))),
        Err(e) => (e.status_code(), Json(json!(ApiError{detail: e.to_string()})))
    }
}

pub async fn test_database(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!(HealthResponse{
        backend: String::from("running"),
        db_connected: state.db_connected
    })))
}
