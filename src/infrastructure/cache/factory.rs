//! Cache factory for startup-time selection

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::cache::{Cache, CacheClient};
use crate::domain::DomainError;

use super::client::{NoopCacheClient, StoreCacheClient};
use super::in_memory::{InMemoryCache, InMemoryCacheConfig};
use super::redis::{RedisCache, RedisCacheConfig};

/// Supported cache backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum CacheType {
    /// Redis store; falls back to no caching if unreachable at startup
    #[default]
    Redis,
    /// Process-local moka store
    Memory,
    /// No caching at all
    Disabled,
}

impl std::fmt::Display for CacheType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheType::Redis => write!(f, "redis"),
            CacheType::Memory => write!(f, "memory"),
            CacheType::Disabled => write!(f, "disabled"),
        }
    }
}

impl std::str::FromStr for CacheType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "redis" => Ok(CacheType::Redis),
            "memory" | "in_memory" | "inmemory" => Ok(CacheType::Memory),
            "disabled" | "none" | "off" => Ok(CacheType::Disabled),
            _ => Err(DomainError::configuration(format!(
                "Unknown cache type: {}. Valid types: redis, memory, disabled",
                s
            ))),
        }
    }
}

impl TryFrom<String> for CacheType {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Configuration for the cache factory
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub cache_type: CacheType,
    pub redis: RedisCacheConfig,
    /// TTL used to bound in-memory entries
    pub default_ttl: Duration,
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_type: CacheType::default(),
            redis: RedisCacheConfig::default(),
            default_ttl: Duration::from_secs(3600),
            max_capacity: 1_000,
        }
    }
}

impl CacheConfig {
    pub fn in_memory() -> Self {
        Self {
            cache_type: CacheType::Memory,
            ..Default::default()
        }
    }

    pub fn redis(redis: RedisCacheConfig) -> Self {
        Self {
            cache_type: CacheType::Redis,
            redis,
            ..Default::default()
        }
    }

    pub fn disabled() -> Self {
        Self {
            cache_type: CacheType::Disabled,
            ..Default::default()
        }
    }

    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }
}

/// Factory for creating the process-wide cache client
#[derive(Debug, Default)]
pub struct CacheFactory;

impl CacheFactory {
    pub fn new() -> Self {
        Self
    }

    /// Selects the cache client once at startup
    ///
    /// A Redis store that cannot be reached (or does not answer PING) yields
    /// the no-op client for the lifetime of the process.
    pub async fn create_client(&self, config: &CacheConfig) -> Arc<dyn CacheClient> {
        match config.cache_type {
            CacheType::Redis => match Self::connect_redis(&config.redis).await {
                Ok(store) => {
                    info!(url = %config.redis.url, "Redis cache connection established");
                    Arc::new(StoreCacheClient::new(store))
                }
                Err(e) => {
                    warn!(error = %e, "Failed to connect to Redis, running without cache");
                    Arc::new(NoopCacheClient::new())
                }
            },
            CacheType::Memory => {
                info!("Using in-memory cache");
                let store = InMemoryCache::with_config(
                    InMemoryCacheConfig::default()
                        .with_max_capacity(config.max_capacity)
                        .with_default_ttl(config.default_ttl),
                );
                Arc::new(StoreCacheClient::new(Arc::new(store)))
            }
            CacheType::Disabled => {
                info!("Caching disabled");
                Arc::new(NoopCacheClient::new())
            }
        }
    }

    async fn connect_redis(config: &RedisCacheConfig) -> Result<Arc<dyn Cache>, DomainError> {
        let cache = RedisCache::new(config.clone()).await?;
        cache.ping().await?;
        Ok(Arc::new(cache))
    }
}
