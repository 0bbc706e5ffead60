//! Rate snapshots and conversion results

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::code::CurrencyCode;

const RATES_CACHE_NAMESPACE: &str = "exchange_rates";

/// Builds the cache key under which the rates of a base currency are stored
pub fn rates_cache_key(base: &CurrencyCode) -> String {
    format!("{}:{}", RATES_CACHE_NAMESPACE, base)
}

/// Exchange rates for one base currency as returned by the provider
///
/// Only the `rates` map is interpreted; every other field of the provider
/// response is carried along untouched so the cached copy matches the
/// upstream body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSnapshot {
    pub rates: BTreeMap<String, f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RateSnapshot {
    pub fn new(rates: BTreeMap<String, f64>) -> Self {
        Self {
            rates,
            extra: Map::new(),
        }
    }

    /// Rate for converting one unit of the base currency into `code`
    pub fn rate_for(&self, code: &CurrencyCode) -> Option<f64> {
        self.rates.get(code.as_str()).copied()
    }

    pub fn into_rates(self) -> BTreeMap<String, f64> {
        self.rates
    }
}

/// Outcome of a single currency conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub amount: f64,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub rate: f64,
    pub converted_amount: f64,
    pub timestamp: DateTime<Utc>,
}

impl ConversionResult {
    /// Computes `amount * rate`, stamped with the current time
    pub fn compute(amount: f64, from: CurrencyCode, to: CurrencyCode, rate: f64) -> Self {
        Self {
            amount,
            from,
            to,
            rate,
            converted_amount: amount * rate,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_cache_key() {
        let base = CurrencyCode::new("usd").unwrap();
        assert_eq!(rates_cache_key(&base), "exchange_rates:USD");
    }

    #[test]
    fn test_snapshot_keeps_provider_fields() {
        let body = serde_json::json!({
            "base": "USD",
            "date": "2024-01-01",
            "time_last_updated": 1704067200,
            "rates": {"EUR": 0.9, "GBP": 0.8}
        });

        let snapshot: RateSnapshot = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(snapshot.rates.len(), 2);
        assert_eq!(snapshot.extra.get("base"), Some(&Value::from("USD")));

        let round_tripped = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(round_tripped, body);
    }

    #[test]
    fn test_snapshot_requires_rates() {
        let result: Result<RateSnapshot, _> =
            serde_json::from_value(serde_json::json!({"base": "USD"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_rate_for() {
        let snapshot = RateSnapshot::new(BTreeMap::from([("EUR".to_string(), 0.9)]));

        assert_eq!(snapshot.rate_for(&CurrencyCode::new("EUR").unwrap()), Some(0.9));
        assert_eq!(snapshot.rate_for(&CurrencyCode::new("JPY").unwrap()), None);
    }

    #[test]
    fn test_conversion_result_serialization() {
        let result = ConversionResult::compute(
            100.0,
            CurrencyCode::new("USD").unwrap(),
            CurrencyCode::new("EUR").unwrap(),
            0.9,
        );

        assert_eq!(result.converted_amount, 90.0);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["from"], "USD");
        assert_eq!(json["to"], "EUR");
        assert_eq!(json["rate"], 0.9);
        assert_eq!(json["converted_amount"], 90.0);
        assert!(json["timestamp"].is_string());
    }
}
