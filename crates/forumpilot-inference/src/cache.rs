//! Time-bounded memoization of raw model responses.
//!
//! Entries expire lazily: a stale entry reads as absent and is replaced by the
//! next write for the same key. Nothing sweeps the map, so it grows with the
//! number of distinct inputs seen by the process.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

use serde_json::Value;
use tokio::time::Instant;

/// Cache key: model identifier plus the JSON-serialized model input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    model: String,
    input: String,
}

impl CacheKey {
    pub fn new(model: &str, input: &Value) -> Self {
        Self {
            model: model.to_string(),
            input: input.to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

struct CacheEntry {
    value: Value,
    stored_at: Instant,
}

/// Shared response cache. Concurrent writers race with last-write-wins.
pub struct ResponseCache {
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
    ttl: Duration,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached response if it is younger than the TTL.
    pub fn get(&self, key: &CacheKey) -> Option<Value> {
        // Entries are opaque values, so a poisoned lock holds nothing inconsistent.
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries
            .get(key)
            .filter(|entry| entry.stored_at.elapsed() < self.ttl)
            .map(|entry| entry.value.clone())
    }

    pub fn put(&self, key: CacheKey, value: Value) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(
            key,
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    /// Number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
