//! Exchange rate lookups and currency conversion

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::domain::{
    rates_cache_key, CacheClient, ConversionResult, CurrencyCode, DomainError, RateProvider,
    RateSnapshot,
};

/// Cache-aside orchestration over a rate provider
#[derive(Clone)]
pub struct ExchangeService {
    provider: Arc<dyn RateProvider>,
    cache: Arc<dyn CacheClient>,
    cache_ttl: Duration,
}

impl fmt::Debug for ExchangeService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExchangeService")
            .field("provider", &"<RateProvider>")
            .field("cache", &self.cache)
            .field("cache_ttl", &self.cache_ttl)
            .finish()
    }
}

impl ExchangeService {
    pub fn new(
        provider: Arc<dyn RateProvider>,
        cache: Arc<dyn CacheClient>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            provider,
            cache,
            cache_ttl,
        }
    }

    /// Latest rates for a base currency, served from cache when possible
    pub async fn get_exchange_rates(
        &self,
        base_currency: &str,
    ) -> Result<BTreeMap<String, f64>, DomainError> {
        let base = CurrencyCode::new(base_currency)?;
        let snapshot = self.rates_for(&base).await?;

        Ok(snapshot.into_rates())
    }

    /// Converts `amount` units of `from_currency` into `to_currency`
    pub async fn convert_currency(
        &self,
        amount: f64,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<ConversionResult, DomainError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(DomainError::invalid_amount("Amount must be a positive number"));
        }

        let from = CurrencyCode::new(from_currency)?;
        let to = CurrencyCode::new(to_currency)?;

        let snapshot = self.rates_for(&from).await?;

        let Some(rate) = snapshot.rate_for(&to) else {
            // The hint lists every known target plus the source; the
            // requested target is the one code known to be invalid.
            let mut available: Vec<String> = snapshot.rates.keys().cloned().collect();
            available.push(from.to_string());

            return Err(DomainError::currency_not_found_with_hint(to.as_str(), available));
        };

        debug!(from = %from, to = %to, rate, amount, "Converting currency");

        let result = ConversionResult::compute(amount, from, to, rate);

        // Non-finite results have no JSON representation
        if !result.converted_amount.is_finite() {
            return Err(DomainError::invalid_amount(
                "Converted amount is out of range",
            ));
        }

        Ok(result)
    }

    /// All currency codes known to the provider, sorted and de-duplicated
    pub async fn get_available_currencies(&self) -> Result<Vec<String>, DomainError> {
        let usd = CurrencyCode::usd();
        let snapshot = self.rates_for(&usd).await?;

        let mut currencies: BTreeSet<String> = snapshot.into_rates().into_keys().collect();
        currencies.insert(usd.to_string());

        Ok(currencies.into_iter().collect())
    }

    async fn rates_for(&self, base: &CurrencyCode) -> Result<RateSnapshot, DomainError> {
        let key = rates_cache_key(base);

        if let Some(cached) = self.cache.get(&key).await {
            match serde_json::from_value::<RateSnapshot>(cached) {
                Ok(snapshot) => return Ok(snapshot),
                Err(e) => debug!(key = %key, error = %e, "Cached entry has no usable rates"),
            }
        }

        let snapshot = self.provider.fetch_rates(base).await?;
        info!(base = %base, currencies = snapshot.rates.len(), "Fetched exchange rates");

        match serde_json::to_value(&snapshot) {
            Ok(value) => self.cache.set(&key, &value, self.cache_ttl).await,
            Err(e) => warn!(key = %key, error = %e, "Failed to serialize rates for cache"),
        }

        Ok(snapshot)
    }
}
