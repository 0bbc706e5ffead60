//! Currency endpoint handlers

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Query};
use crate::domain::ConversionResult;

/// Query parameters for GET /api/v1/currency/convert
#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    pub amount: f64,
    pub from_currency: String,
    pub to_currency: String,
}

/// GET /api/v1/currency/rates/{base_currency}
pub async fn get_exchange_rates(
    State(state): State<AppState>,
    Path(base_currency): Path<String>,
) -> Result<Json<BTreeMap<String, f64>>, ApiError> {
    let base_currency = base_currency.to_uppercase();
    debug!(base_currency = %base_currency, "Getting exchange rates");

    let rates = state
        .exchange_service
        .get_exchange_rates(&base_currency)
        .await?;

    Ok(Json(rates))
}

/// GET /api/v1/currency/convert
pub async fn convert_currency(
    State(state): State<AppState>,
    Query(params): Query<ConvertQuery>,
) -> Result<Json<ConversionResult>, ApiError> {
    let from_currency = params.from_currency.to_uppercase();
    let to_currency = params.to_currency.to_uppercase();
    debug!(
        amount = params.amount,
        from = %from_currency,
        to = %to_currency,
        "Converting currency"
    );

    let result = state
        .exchange_service
        .convert_currency(params.amount, &from_currency, &to_currency)
        .await?;

    Ok(Json(result))
}

/// GET /api/v1/currency/currencies
pub async fn get_available_currencies(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    debug!("Listing available currencies");

    let currencies = state.exchange_service.get_available_currencies().await?;

    Ok(Json(currencies))
}
