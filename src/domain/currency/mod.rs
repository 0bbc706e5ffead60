//! Currency domain - Codes, rate snapshots and conversions

mod code;
mod provider;
mod rates;

pub use code::CurrencyCode;
pub use provider::RateProvider;
pub use rates::{rates_cache_key, ConversionResult, RateSnapshot};

#[cfg(test)]
pub use provider::MockRateProvider;
