use serde::Deserialize;

use crate::domain::DomainError;
use crate::infrastructure::cache::CacheType;
use crate::infrastructure::exchange::DEFAULT_EXCHANGE_API_URL;

const ALLOWED_LOG_LEVELS: [&str; 5] = ["debug", "info", "warn", "warning", "error"];

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppInfoConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub exchange: ExchangeConfig,
    pub cache: CacheSettings,
}

/// Identity reported by the health endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppInfoConfig {
    pub name: String,
    pub version: String,
    pub environment: String,
    pub debug: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Upstream exchange-rate API settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExchangeConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

/// Cache backend settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    pub backend: CacheType,
    pub host: String,
    pub port: u16,
    pub ttl_secs: u64,
    pub key_prefix: Option<String>,
    pub connect_timeout_secs: u64,
}

impl Default for AppInfoConfig {
    fn default() -> Self {
        Self {
            name: "Currency Converter App".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
            debug: false,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_EXCHANGE_API_URL.to_string(),
            api_key: None,
            timeout_secs: 10,
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            backend: CacheType::default(),
            host: "localhost".to_string(),
            port: 6379,
            ttl_secs: 3600,
            key_prefix: None,
            connect_timeout_secs: 5,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Log level to start with; `app.debug` forces `debug`
    pub fn log_level(&self) -> &str {
        if self.app.debug {
            "debug"
        } else {
            &self.logging.level
        }
    }

    /// Rejects settings the service cannot run with
    pub fn validate(&self) -> Result<(), DomainError> {
        let level = self.logging.level.to_lowercase();

        if !ALLOWED_LOG_LEVELS.contains(&level.as_str()) {
            return Err(DomainError::configuration(format!(
                "Log level must be one of debug, info, warning, error (got '{}')",
                self.logging.level
            )));
        }

        if self.exchange.api_url.trim().is_empty() {
            return Err(DomainError::configuration("Exchange API URL cannot be empty"));
        }

        if self.exchange.timeout_secs == 0 {
            return Err(DomainError::configuration(
                "Exchange API timeout must be greater than zero",
            ));
        }

        if self.cache.ttl_secs == 0 {
            return Err(DomainError::configuration("Cache TTL must be greater than zero"));
        }

        Ok(())
    }
}
