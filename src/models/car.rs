//! Car domain types.

use uuid::Uuid;

/// A persisted car record. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub cost: u64,
}

/// A car that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCar {
    pub brand: String,
    pub model: String,
    pub color: String,
    pub cost: u64,
}

impl NewCar {
    /// Attaches a store-assigned identifier.
    pub fn with_id(self, id: Uuid) -> Car {
        Car {
            id,
            brand: self.brand,
            model: self.model,
            color: self.color,
            cost: self.cost,
        }
    }
}

impl Car {
    /// Key under which this car is cached.
    pub fn cache_key(&self) -> String {
        cache_key(&self.id)
    }
}

/// Cache key scheme for car records: the hyphenated lowercase UUID.
pub fn cache_key(id: &Uuid) -> String {
    id.to_string()
}
