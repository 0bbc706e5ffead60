//! Application state for shared services

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::AppInfoConfig;
use crate::domain::{ConversionResult, DomainError};
use crate::infrastructure::services::ExchangeService;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub exchange_service: Arc<dyn ExchangeServiceTrait>,
    pub app_info: Arc<AppInfoConfig>,
}

impl AppState {
    pub fn new(exchange_service: Arc<dyn ExchangeServiceTrait>, app_info: AppInfoConfig) -> Self {
        Self {
            exchange_service,
            app_info: Arc::new(app_info),
        }
    }
}

/// Trait for exchange service operations
#[async_trait::async_trait]
pub trait ExchangeServiceTrait: Send + Sync {
    async fn get_exchange_rates(
        &self,
        base_currency: &str,
    ) -> Result<BTreeMap<String, f64>, DomainError>;
    async fn convert_currency(
        &self,
        amount: f64,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<ConversionResult, DomainError>;
    async fn get_available_currencies(&self) -> Result<Vec<String>, DomainError>;
}

#[async_trait::async_trait]
impl ExchangeServiceTrait for ExchangeService {
    async fn get_exchange_rates(
        &self,
        base_currency: &str,
    ) -> Result<BTreeMap<String, f64>, DomainError> {
        ExchangeService::get_exchange_rates(self, base_currency).await
    }

    async fn convert_currency(
        &self,
        amount: f64,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<ConversionResult, DomainError> {
        ExchangeService::convert_currency(self, amount, from_currency, to_currency).await
    }

    async fn get_available_currencies(&self) -> Result<Vec<String>, DomainError> {
        ExchangeService::get_available_currencies(self).await
    }
}
