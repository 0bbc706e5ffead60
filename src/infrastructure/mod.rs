//! Infrastructure layer - Implementations of domain traits

pub mod cache;
pub mod exchange;
pub mod logging;
pub mod services;

pub use cache::{CacheConfig, CacheFactory, CacheType, NoopCacheClient, StoreCacheClient};
pub use exchange::{ExchangeApiClientConfig, ExchangeRateApiProvider};
pub use services::ExchangeService;
