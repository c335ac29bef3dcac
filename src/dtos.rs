use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub trait Response{}

#[derive(Debug, Deserialize, Serialize)]
pub struct ProductResponse{
    pub id: String,
    pub name_es: String,
    pub name_en: String,
    pub description_es: String,
    pub description_en: String,
    pub base_price: f64,
    pub colors: Vec<String>,
    pub images: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct GetProductsResponse{
    pub products: Vec<ProductResponse>
}
impl Response for GetProductsResponse{}

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateReservationResponse{
    pub status: String,
    pub reservation_id: String
}
impl Response for CreateReservationResponse{}

#[derive(Debug, Deserialize, Serialize)]
pub struct ApiError{
    pub detail: String
}
impl Response for ApiError{}

#[derive(Debug, Deserialize, Serialize)]
pub struct MessageResponse{
    pub message: String
}
impl Response for MessageResponse{}

#[derive(Debug, Deserialize, Serialize)]
pub struct HealthResponse{
    pub backend: String,
    pub db_connected: bool
}
impl Response for HealthResponse{}
