//! Cache store trait definition

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::DomainError;

/// Key-value store with per-entry expiration
///
/// Values are raw JSON strings. Implementations report store failures as
/// `DomainError::Cache`; deciding what to do with them is up to the caller.
#[async_trait]
pub trait Cache: Send + Sync + Debug {
    /// Gets a raw JSON value, `None` if missing or expired
    async fn get_raw(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Sets a raw JSON value with a TTL
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError>;

    /// Verifies that the store is reachable
    async fn ping(&self) -> Result<(), DomainError>;
}
