//! Read-through caching decorator for a [`CarService`].
//!
//! Single-record reads are served from the cache when a fresh entry exists
//! and fall through to the wrapped service otherwise. Creates and updates
//! refresh the entry. List-all never touches the cache, and delete only
//! does when invalidation is switched on.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::cache::{CacheStats, SharedCache};
use crate::error::{AppError, Result};
use crate::models::{car::cache_key, Car, NewCar};
use crate::usecases::CarService;

/// Wraps a car service with the shared read-through cache.
///
/// The cache lock is only taken around individual cache operations and is
/// never held across a call into the wrapped service.
pub struct CachedCarService<S> {
    inner: S,
    cache: SharedCache<Car>,
    ttl: Duration,
    invalidate_on_delete: bool,
}

impl<S: CarService> CachedCarService<S> {
    pub fn new(inner: S, cache: SharedCache<Car>, ttl: Duration) -> Self {
        Self {
            inner,
            cache,
            ttl,
            invalidate_on_delete: false,
        }
    }

    /// Drop the cached entry when a record is deleted.
    ///
    /// Off by default: a deleted record stays readable from the cache until
    /// its TTL lapses.
    pub fn invalidate_on_delete(mut self, enabled: bool) -> Self {
        self.invalidate_on_delete = enabled;
        self
    }

    pub fn cache(&self) -> &SharedCache<Car> {
        &self.cache
    }

    async fn cached(&self, key: &str) -> Option<Car> {
        let mut cache = self.cache.write().await;
        match cache.get(key) {
            Ok(car) => {
                debug!("cache hit for car {}", key);
                Some(car)
            }
            Err(AppError::Expired(_)) => {
                debug!("cache is expired for car {}", key);
                cache.delete(key);
                None
            }
            Err(err) => {
                debug!("can not get car {} from cache: {}", key, err);
                None
            }
        }
    }

    async fn remember(&self, car: &Car) {
        self.cache
            .write()
            .await
            .set(car.cache_key(), car.clone(), self.ttl);
    }
}

#[async_trait]
impl<S: CarService> CarService for CachedCarService<S> {
    async fn list_all(&self) -> Result<Vec<Car>> {
        self.inner.list_all().await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Car> {
        let key = cache_key(&id);
        if let Some(car) = self.cached(&key).await {
            return Ok(car);
        }

        let car = self.inner.get_by_id(id).await?;
        self.remember(&car).await;
        Ok(car)
    }

    async fn add(&self, car: NewCar) -> Result<Car> {
        let car = self.inner.add(car).await?;
        self.remember(&car).await;
        Ok(car)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        self.inner.delete_by_id(id).await?;

        if self.invalidate_on_delete {
            self.cache.write().await.delete(&cache_key(&id));
        }
        Ok(())
    }

    async fn update(&self, car: Car) -> Result<Car> {
        let car = self.inner.update(car).await?;
        self.remember(&car).await;
        Ok(car)
    }

    async fn cache_stats(&self) -> Option<CacheStats> {
        Some(self.cache.read().await.stats())
    }
}
