//! Pass-through car service.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Car, NewCar};
use crate::repository::CarStore;
use crate::usecases::CarService;

/// Forwards every call to the underlying store unchanged.
#[derive(Debug, Clone)]
pub struct CarUsecases<S> {
    store: S,
}

impl<S: CarStore> CarUsecases<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: CarStore> CarService for CarUsecases<S> {
    async fn list_all(&self) -> Result<Vec<Car>> {
        self.store.list_all().await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Car> {
        self.store.get_by_id(id).await
    }

    async fn add(&self, car: NewCar) -> Result<Car> {
        self.store.add(car).await
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        self.store.delete_by_id(id).await
    }

    async fn update(&self, car: Car) -> Result<Car> {
        self.store.update(car).await
    }
}
