//! API Routes
//!
//! Configures the Axum router with all car service endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_car_handler, delete_car_handler, get_car_handler, health_handler, list_cars_handler,
    stats_handler, update_car_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// `/cars` and `/cars/` are both accepted for the collection routes.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let collection = get(list_cars_handler)
        .post(add_car_handler)
        .put(update_car_handler);

    Router::new()
        .route("/cars", collection.clone())
        .route("/cars/", collection)
        .route("/cars/:id", get(get_car_handler).delete(delete_car_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
