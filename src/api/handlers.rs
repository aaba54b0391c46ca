//! API Handlers
//!
//! HTTP request handlers for the car endpoints. Handlers only parse input,
//! call the [`CarService`] and map results to responses; caching happens
//! behind the service.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::cache;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{CarResponse, HealthResponse, NewCarRequest, StatsResponse, UpdateCarRequest};
use crate::repository::CarStore;
use crate::usecases::{CachedCarService, CarService, CarUsecases};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Car operations, cached or not
    pub cars: Arc<dyn CarService>,
}

impl AppState {
    /// Creates a new AppState around any car service.
    pub fn new(cars: Arc<dyn CarService>) -> Self {
        Self { cars }
    }

    /// Wires `store` behind the pass-through service and the read-through
    /// cache, using the TTL and delete policy from `config`.
    pub fn cached<S: CarStore + 'static>(store: S, config: &Config) -> Self {
        let service = CachedCarService::new(CarUsecases::new(store), cache::shared(), config.cache_ttl())
            .invalidate_on_delete(config.cache_invalidate_on_delete);
        Self::new(Arc::new(service))
    }
}

fn parse_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|e| AppError::Validation(format!("invalid car id {:?}: {}", raw, e)))
}

fn parse_body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

/// Handler for GET /cars
pub async fn list_cars_handler(State(state): State<AppState>) -> Result<Json<Vec<CarResponse>>> {
    let cars = state.cars.list_all().await?;

    Ok(Json(cars.into_iter().map(CarResponse::from).collect()))
}

/// Handler for GET /cars/:id
pub async fn get_car_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CarResponse>> {
    let id = parse_id(&id)?;
    let car = state.cars.get_by_id(id).await?;

    Ok(Json(car.into()))
}

/// Handler for POST /cars
pub async fn add_car_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewCarRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CarResponse>)> {
    let req = parse_body(payload)?;
    let car = state.cars.add(req.into()).await?;

    Ok((StatusCode::CREATED, Json(car.into())))
}

/// Handler for PUT /cars
pub async fn update_car_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<UpdateCarRequest>, JsonRejection>,
) -> Result<Json<CarResponse>> {
    let req = parse_body(payload)?;
    let car = state.cars.update(req.into()).await?;

    Ok(Json(car.into()))
}

/// Handler for DELETE /cars/:id
pub async fn delete_car_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id)?;
    state.cars.delete_by_id(id).await?;

    Ok(StatusCode::OK)
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cars.cache_stats().await.unwrap_or_default();

    Json(stats.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
