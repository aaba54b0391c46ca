//! Domain entities and HTTP models for the cars service
//!
//! `car` holds the domain types shared by every layer; `requests` and
//! `responses` are the DTOs (Data Transfer Objects) serialized over HTTP.

pub mod car;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use car::{Car, NewCar};
pub use requests::{NewCarRequest, UpdateCarRequest};
pub use responses::{CarResponse, ErrorResponse, HealthResponse, StatsResponse};
