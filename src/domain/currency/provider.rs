//! Exchange rate provider trait

use async_trait::async_trait;

use super::code::CurrencyCode;
use super::rates::RateSnapshot;
use crate::domain::error::DomainError;

#[cfg(test)]
use mockall::automock;

/// Source of authoritative exchange rates
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches the latest rates for a base currency
    ///
    /// Fails with `CurrencyNotFound` when the provider does not know the base
    /// currency and with `UpstreamUnavailable` for any other failure.
    async fn fetch_rates(&self, base: &CurrencyCode) -> Result<RateSnapshot, DomainError>;

    /// Name used in logs
    fn provider_name(&self) -> &'static str;
}
