//! Record Store Module
//!
//! Durable persistence of car records behind the [`CarStore`] trait.

pub mod database;
mod sqlite;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Car, NewCar};

pub use sqlite::SqliteCarStore;

/// Persistence contract for car records.
///
/// Implementations own durable state; callers never see a partially
/// written record.
#[async_trait]
pub trait CarStore: Send + Sync {
    /// All records; an empty vector when the table is empty.
    async fn list_all(&self) -> Result<Vec<Car>>;

    /// Fails with `NotFound` when no record has this id.
    async fn get_by_id(&self, id: Uuid) -> Result<Car>;

    /// Persists a new record and returns it with its assigned id.
    async fn add(&self, car: NewCar) -> Result<Car>;

    /// Removes the record if present. Unknown ids are not an error.
    async fn delete_by_id(&self, id: Uuid) -> Result<()>;

    /// Overwrites every field of an existing record.
    ///
    /// Fails with `NotFound` if the id does not exist. The existence check
    /// and the write are separate statements.
    async fn update(&self, car: Car) -> Result<Car>;
}
