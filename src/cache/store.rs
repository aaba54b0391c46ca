//! Cache Store Module
//!
//! Key/value map with a per-entry expiry deadline and lazy expiration.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};
use crate::error::{AppError, Result};

// == Cache Store ==
/// In-memory TTL cache over a single value type.
///
/// Expired entries are only reclaimed when their key is looked up again or
/// overwritten; there is no background sweep and no size bound.
#[derive(Debug)]
pub struct CacheStore<V> {
    entries: HashMap<String, CacheEntry<V>>,
    stats: CacheStats,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
        }
    }

    // == Set ==
    /// Stores `value` under `key`, expiring `ttl` from now.
    ///
    /// Overwrites any existing entry and resets its expiry.
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl: Duration) {
        self.entries.insert(key.into(), CacheEntry::new(value, ttl));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a clone of the value stored under `key`.
    ///
    /// Returns `NotFound` for keys never set or deleted, and `Expired` for
    /// keys past their deadline. An expired entry is removed before returning.
    pub fn get(&mut self, key: &str) -> Result<V> {
        let Some(entry) = self.entries.get(key) else {
            self.stats.record_miss();
            return Err(AppError::NotFound(key.to_string()));
        };

        if entry.is_expired() {
            self.entries.remove(key);
            self.stats.set_total_entries(self.entries.len());
            self.stats.record_expiration();
            return Err(AppError::Expired(key.to_string()));
        }

        let value = entry.value.clone();
        self.stats.record_hit();
        Ok(value)
    }

    // == Delete ==
    /// Removes the entry for `key`. Absent keys are ignored.
    ///
    /// Returns whether an entry was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Whether `key` currently has an entry, expired or not. Does not touch stats.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new()
    }
}
