use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid amount: {message}")]
    InvalidAmount { message: String },

    #[error("Currency '{code}' not found")]
    CurrencyNotFound { code: String, available: Vec<String> },

    #[error("Exchange API unavailable: {message}")]
    UpstreamUnavailable { status: Option<u16>, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Cache error: {message}")]
    Cache { message: String },
}

impl DomainError {
    pub fn invalid_amount(message: impl Into<String>) -> Self {
        Self::InvalidAmount {
            message: message.into(),
        }
    }

    pub fn currency_not_found(code: impl Into<String>) -> Self {
        Self::CurrencyNotFound {
            code: code.into(),
            available: Vec::new(),
        }
    }

    /// Currency not found, with a list of codes the caller may use instead
    pub fn currency_not_found_with_hint(code: impl Into<String>, available: Vec<String>) -> Self {
        Self::CurrencyNotFound {
            code: code.into(),
            available,
        }
    }

    pub fn upstream_unavailable(message: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            status: None,
            message: message.into(),
        }
    }

    pub fn upstream_status(status: u16, message: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn cache(message: impl Into<String>) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }
}
