//! Cache infrastructure - Cache store and client implementations

mod client;
mod factory;
mod in_memory;
mod redis;

pub use client::{NoopCacheClient, StoreCacheClient};
pub use factory::{CacheConfig, CacheFactory, CacheType};
pub use in_memory::{InMemoryCache, InMemoryCacheConfig};
pub use self::redis::{RedisCache, RedisCacheConfig};
