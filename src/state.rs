use std::sync::Arc;

use crate::cqrs::{CreateReservationCommandHandler, GetProductsQueryHandler};
use crate::repositories::MongoDbReservationRepository;

pub struct AppState {
    pub get_products_query_handler: Arc<GetProductsQueryHandler>,
    pub create_reservation_command_handler:
        Arc<CreateReservationCommandHandler<MongoDbReservationRepository>>,
    /// Captured once at startup; the health probe reports it as-is.
    pub db_connected: bool,
}
