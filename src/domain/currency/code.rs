//! Currency code value object

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// ISO-4217 style three-letter currency code, always uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Normalizes and validates a currency code
    ///
    /// Surrounding whitespace is trimmed and the code is uppercased. Anything
    /// other than three ASCII letters is reported as an unknown currency.
    pub fn new(code: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = code.as_ref();
        let normalized = raw.trim().to_ascii_uppercase();

        if normalized.len() != 3 || !normalized.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::currency_not_found(normalized));
        }

        Ok(Self(normalized))
    }

    /// US dollar, the anchor used to enumerate available currencies
    pub fn usd() -> Self {
        Self("USD".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}
