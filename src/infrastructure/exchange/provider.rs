//! HTTP exchange-rate provider

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{error, info};

use crate::domain::{CurrencyCode, DomainError, RateProvider, RateSnapshot};

pub const DEFAULT_EXCHANGE_API_URL: &str = "https://api.exchangerate-api.com/v4/latest";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the exchange-rate API client
#[derive(Debug, Clone)]
pub struct ExchangeApiClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for ExchangeApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_EXCHANGE_API_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ExchangeApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client for `GET <base_url>/<BASE>` style exchange-rate APIs
#[derive(Debug, Clone)]
pub struct ExchangeRateApiProvider {
    client: reqwest::Client,
    base_url: String,
    auth_header: Option<String>,
}

impl ExchangeRateApiProvider {
    pub fn new(config: ExchangeApiClientConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_header: config
                .api_key
                .filter(|key| !key.is_empty())
                .map(|key| format!("Bearer {}", key)),
        })
    }

    fn rates_url(&self, base: &CurrencyCode) -> String {
        format!("{}/{}", self.base_url, base)
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    async fn fetch_rates(&self, base: &CurrencyCode) -> Result<RateSnapshot, DomainError> {
        let url = self.rates_url(base);
        let mut request = self.client.get(&url);

        if let Some(auth_header) = &self.auth_header {
            request = request.header(reqwest::header::AUTHORIZATION, auth_header);
        }

        info!(base = %base, "Fetching exchange rates from api");

        let response = request.send().await.map_err(|e| {
            error!(base = %base, error = %e, "Error fetching exchange rates");
            DomainError::upstream_unavailable(format!("Error fetching exchange rates: {}", e))
        })?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(DomainError::currency_not_found(base.as_str()));
        }

        if !status.is_success() {
            let message = format!("API returned status code {}", status.as_u16());
            error!(base = %base, status = status.as_u16(), "{}", message);
            return Err(DomainError::upstream_status(status.as_u16(), message));
        }

        response.json::<RateSnapshot>().await.map_err(|e| {
            error!(base = %base, error = %e, "Invalid exchange rates response");
            DomainError::upstream_unavailable(format!("Invalid response from exchange API: {}", e))
        })
    }

    fn provider_name(&self) -> &'static str {
        "exchangerate-api"
    }
}
