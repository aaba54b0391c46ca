//! Request DTOs for the cars API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use uuid::Uuid;

use crate::models::{Car, NewCar};

/// Request body for creating a car (POST /cars)
#[derive(Debug, Clone, Deserialize)]
pub struct NewCarRequest {
    pub brand: String,
    pub model: String,
    pub color: String,
    pub cost: u64,
}

impl From<NewCarRequest> for NewCar {
    fn from(req: NewCarRequest) -> Self {
        Self {
            brand: req.brand,
            model: req.model,
            color: req.color,
            cost: req.cost,
        }
    }
}

/// Request body for updating a car (PUT /cars)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCarRequest {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub cost: u64,
}

impl From<UpdateCarRequest> for Car {
    fn from(req: UpdateCarRequest) -> Self {
        Self {
            id: req.id,
            brand: req.brand,
            model: req.model,
            color: req.color,
            cost: req.cost,
        }
    }
}
