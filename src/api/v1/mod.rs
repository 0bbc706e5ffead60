//! Versioned currency API endpoints

pub mod currency;

use axum::{routing::get, Router};

use super::state::AppState;

/// Create the `/api/v1/currency` router
pub fn create_currency_router() -> Router<AppState> {
    Router::new()
        .route("/rates/{base_currency}", get(currency::get_exchange_rates))
        .route("/convert", get(currency::convert_currency))
        .route("/currencies", get(currency::get_available_currencies))
}
