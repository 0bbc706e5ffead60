//! Domain layer - Core business logic and entities

pub mod cache;
pub mod currency;
pub mod error;

pub use cache::{Cache, CacheClient};
pub use currency::{rates_cache_key, ConversionResult, CurrencyCode, RateProvider, RateSnapshot};
pub use error::DomainError;
