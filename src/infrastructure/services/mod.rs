//! Infrastructure services

mod exchange_service;

pub use exchange_service::ExchangeService;
