use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{event, Level};

use crate::{
    catalog,
    domain::Reservation,
    dtos::{CreateReservationResponse, GetProductsResponse, ProductResponse, Response},
    errors::ReservationError,
    repositories::{ReservationStore, RESERVATION_CATEGORY},
};

// traits
pub trait Command{}
pub trait Query{}

pub trait CommandHandler<C: Command, R: Response>{
    async fn handle(&self, input: &C) -> Result<R, ReservationError>;
}

pub trait QueryHandler<Q: Query, R: Response>{
    async fn handle(&self, input: &Q) -> Result<R, ReservationError>;
}

// commands
#[derive(Serialize, Deserialize)]
pub struct CreateReservationCommand{
    pub name: String,
    pub color: String,
    pub hammock_type: String,
    pub phone: String,
    pub message: Option<String>,
}
impl Command for CreateReservationCommand{}

// queries
pub struct GetProductsQuery{}
impl Query for GetProductsQuery{}

// command handlers
#[derive(Clone)]
pub struct CreateReservationCommandHandler<T: ReservationStore>{
    store: Arc<T>
}

impl<T: ReservationStore> CreateReservationCommandHandler<T>{
    pub fn new(store: Arc<T>) -> Self{
        CreateReservationCommandHandler{
            store: store
        }
    }
}

impl<T: ReservationStore> CommandHandler<CreateReservationCommand, CreateReservationResponse> for CreateReservationCommandHandler<T>{
    async fn handle(&self, input: &CreateReservationCommand) -> Result<CreateReservationResponse, ReservationError> {
        // First failing check wins: unknown product, then unknown color.
        let products = catalog::build_products();

        let product = match products.iter().find(|p| p.id == input.hammock_type) {
            Some(product) => product,
            None => {
                event!(Level::INFO, "Rejected reservation for unknown hammock type {}", input.hammock_type);
                return Err(ReservationError::InvalidProduct);
            }
        };

        if !product.colors.iter().any(|c| c == &input.color) {
            event!(Level::INFO, "Rejected reservation for {}: color {} is not offered", input.hammock_type, input.color);
            return Err(ReservationError::InvalidColor);
        }

        let reservation = Reservation{
            name: input.name.clone(),
            color: input.color.clone(),
            hammock_type: input.hammock_type.clone(),
            phone: input.phone.clone(),
            message: input.message.clone(),
        };

        match self.store.create_document(RESERVATION_CATEGORY, &reservation).await {
            Ok(reservation_id) => Ok(CreateReservationResponse{
                status: String::from("ok"),
                reservation_id: reservation_id
            }),
            Err(e) => {
                event!(Level::ERROR, "Failed to persist reservation: {}", e);
                Err(ReservationError::Persistence(e))
            }
        }
    }
}

// query handlers
#[derive(Clone)]
pub struct GetProductsQueryHandler{}

impl GetProductsQueryHandler{
    pub fn new() -> Self {
        GetProductsQueryHandler{}
    }
}

impl QueryHandler<GetProductsQuery, GetProductsResponse> for GetProductsQueryHandler{
    async fn handle(&self, _input: &GetProductsQuery) -> Result<GetProductsResponse, ReservationError> {
        let mut products = Vec::new();

        for domain_product in catalog::build_products() {
            products.push(ProductResponse{
                id: domain_product.id,
                name_es: domain_product.name_es,
                name_en: domain_product.name_en,
                description_es: domain_product.description_es,
                description_en: domain_product.description_en,
                base_price: domain_product.base_price,
                colors: domain_product.colors,
                images: domain_product.images,
            });
        }

        Ok(GetProductsResponse{
            products: products
        })
    }
}
