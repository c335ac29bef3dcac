// define modules in crate
mod catalog;
mod config;
mod cqrs;
mod domain;
mod dtos;
mod errors;
mod repositories;
mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use axum_prometheus::PrometheusMetricLayer;
use config::AppConfig;
use cqrs::{CreateReservationCommandHandler, GetProductsQueryHandler};
use dotenv::dotenv;
use mongodb::Client;
use repositories::MongoDbReservationRepository;
use routes::*;
use state::AppState;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{event, Level};

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            event!(Level::ERROR, "Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // An unreachable database is a runtime condition, not a startup failure:
    // the catalog keeps serving and /test reports db_connected = false.
    let reservation_repository = match Client::with_uri_str(&config.mongodb_uri).await {
        Ok(client) => MongoDbReservationRepository::new(client.database(&config.mongodb_db)),
        Err(e) => {
            event!(Level::WARN, "Failed to initialize MongoDB client: {}", e);
            MongoDbReservationRepository::unconnected()
        }
    };
    let db_connected = reservation_repository.is_connected();
    let reservation_repository = Arc::new(reservation_repository);

    let create_reservation_command_handler =
        Arc::new(CreateReservationCommandHandler::new(reservation_repository.clone()));
    let get_products_query_handler = Arc::new(GetProductsQueryHandler::new());

    let state = Arc::new(AppState {
        get_products_query_handler: get_products_query_handler,
        create_reservation_command_handler: create_reservation_command_handler,
        db_connected: db_connected,
    });

    let (prometheus_layer, metrics_handle) = PrometheusMetricLayer::pair();

    let listener = tokio::net::TcpListener::bind(config.server_address())
        .await
        .unwrap();

    event!(Level::INFO, "Hamacas backend listening on {}", config.server_address());

    axum::serve(
        listener,
        Router::new()
            .route("/", get(index))
            .route("/metrics", get(|| async move { metrics_handle.render() }))
            .route("/api/products", get(get_products))
            .route("/api/reservations", post(create_reservation))
            .route("/test", get(test_database))
            .with_state(state)
            .layer(prometheus_layer)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()),
            ),
    )
    .await
    .unwrap();
}
