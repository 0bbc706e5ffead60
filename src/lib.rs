//! Currency Exchange API
//!
//! A small HTTP service for exchange-rate lookups and currency conversion:
//! - Cache-aside rate lookups against an external exchange-rate API
//! - Fail-open caching (Redis, in-memory, or none)
//! - Conversion and available-currency enumeration

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use api::state::AppState;
use domain::{DomainError, RateProvider};
use infrastructure::cache::{CacheConfig, CacheFactory, RedisCacheConfig};
use infrastructure::exchange::{ExchangeApiClientConfig, ExchangeRateApiProvider};
use infrastructure::services::ExchangeService;

/// Build the application state from the loaded configuration
pub async fn create_app_state(config: &AppConfig) -> Result<AppState, DomainError> {
    let provider = ExchangeRateApiProvider::new(exchange_client_config(config))?;
    info!(
        provider = provider.provider_name(),
        url = %config.exchange.api_url,
        "Exchange rate provider configured"
    );

    let cache = CacheFactory::new()
        .create_client(&cache_config(config))
        .await;

    let service = ExchangeService::new(
        Arc::new(provider),
        cache,
        Duration::from_secs(config.cache.ttl_secs),
    );

    Ok(AppState::new(Arc::new(service), config.app.clone()))
}

fn exchange_client_config(config: &AppConfig) -> ExchangeApiClientConfig {
    let mut client_config = ExchangeApiClientConfig::new(&config.exchange.api_url)
        .with_timeout(Duration::from_secs(config.exchange.timeout_secs));

    if let Some(api_key) = &config.exchange.api_key {
        client_config = client_config.with_api_key(api_key);
    }

    client_config
}

fn cache_config(config: &AppConfig) -> CacheConfig {
    let settings = &config.cache;

    let mut redis = RedisCacheConfig::from_host_port(&settings.host, settings.port)
        .with_connection_timeout(Duration::from_secs(settings.connect_timeout_secs));

    if let Some(prefix) = &settings.key_prefix {
        redis = redis.with_key_prefix(prefix);
    }

    CacheConfig {
        cache_type: settings.backend,
        redis,
        ..CacheConfig::default()
    }
    .with_default_ttl(Duration::from_secs(settings.ttl_secs))
}
