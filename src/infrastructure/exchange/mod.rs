//! Exchange-rate provider implementations

mod provider;

pub use provider::{DEFAULT_EXCHANGE_API_URL, ExchangeApiClientConfig, ExchangeRateApiProvider};
