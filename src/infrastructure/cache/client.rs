//! Fail-open cache clients

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::domain::cache::{Cache, CacheClient};

/// Cache client over a real store that degrades every failure to a miss
#[derive(Debug, Clone)]
pub struct StoreCacheClient {
    store: Arc<dyn Cache>,
}

impl StoreCacheClient {
    pub fn new(store: Arc<dyn Cache>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CacheClient for StoreCacheClient {
    async fn get(&self, key: &str) -> Option<Value> {
        let raw = match self.store.get_raw(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %key, "Cache miss");
                return None;
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Error reading from cache");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => {
                info!(key = %key, "Cache hit");
                Some(value)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Discarding malformed cache entry");
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &Value, ttl: Duration) {
        let data = value.to_string();

        match self.store.set_raw(key, &data, ttl).await {
            Ok(()) => info!(key = %key, ttl_secs = ttl.as_secs(), "Stored data in cache"),
            Err(e) => warn!(key = %key, error = %e, "Error storing in cache"),
        }
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

/// Cache client used when no store is available
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCacheClient;

impl NoopCacheClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheClient for NoopCacheClient {
    async fn get(&self, _key: &str) -> Option<Value> {
        None
    }

    async fn set(&self, _key: &str, _value: &Value, _ttl: Duration) {}

    fn is_enabled(&self) -> bool {
        false
    }
}
