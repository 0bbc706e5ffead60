//! Application configuration loaded once at startup

mod app_config;

pub use app_config::{
    AppConfig, AppInfoConfig, CacheSettings, ExchangeConfig, LogFormat, LoggingConfig,
    ServerConfig,
};
