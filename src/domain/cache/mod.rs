//! Cache domain - Store abstraction and fail-open client capability

mod client;
mod repository;

pub use client::CacheClient;
pub use repository::Cache;

#[cfg(test)]
pub use repository::mock::MockCache;
