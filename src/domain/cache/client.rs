//! Fail-open cache client capability

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

/// Cache access that never fails
///
/// A miss, an unreachable store and a malformed stored value all look the
/// same to callers: `get` returns `None`. Writes are best effort.
#[async_trait]
pub trait CacheClient: Send + Sync + Debug {
    /// Returns the stored JSON value if present, well-formed and unexpired
    async fn get(&self, key: &str) -> Option<Value>;

    /// Stores a JSON value with a TTL, swallowing any failure
    async fn set(&self, key: &str, value: &Value, ttl: Duration);

    /// Whether writes can ever be observed by later reads
    fn is_enabled(&self) -> bool;
}
