//! Record Service Module
//!
//! The [`CarService`] seam between HTTP handlers and the store. The plain
//! implementation forwards to a [`CarStore`](crate::repository::CarStore);
//! the cached one wraps any service with the read-through cache.

mod cached;
mod cars;

use async_trait::async_trait;
use uuid::Uuid;

use crate::cache::CacheStats;
use crate::error::Result;
use crate::models::{Car, NewCar};

pub use cached::CachedCarService;
pub use cars::CarUsecases;

/// Car operations as seen by the request handlers.
#[async_trait]
pub trait CarService: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Car>>;

    async fn get_by_id(&self, id: Uuid) -> Result<Car>;

    async fn add(&self, car: NewCar) -> Result<Car>;

    async fn delete_by_id(&self, id: Uuid) -> Result<()>;

    async fn update(&self, car: Car) -> Result<Car>;

    /// Cache statistics, if this service caches anything.
    async fn cache_stats(&self) -> Option<CacheStats> {
        None
    }
}
