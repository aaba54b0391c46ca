//! API Module
//!
//! HTTP handlers and routing for the cars REST API.
//!
//! # Endpoints
//! - `GET /cars` - List all cars
//! - `GET /cars/:id` - Get a car by id (read-through cached)
//! - `POST /cars` - Add a car
//! - `PUT /cars` - Update a car
//! - `DELETE /cars/:id` - Delete a car
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
