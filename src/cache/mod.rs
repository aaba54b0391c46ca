//! Cache Module
//!
//! Provides the in-memory read-through cache with fixed-TTL lazy expiration.

mod entry;
mod stats;
mod store;


use std::sync::Arc;
use tokio::sync::RwLock;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;

/// Process-wide cache handle shared between request tasks.
pub type SharedCache<V> = Arc<RwLock<CacheStore<V>>>;

/// Creates an empty shared cache.
pub fn shared<V: Clone>() -> SharedCache<V> {
    Arc::new(RwLock::new(CacheStore::new()))
}
