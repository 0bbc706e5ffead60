use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::health;
use super::state::AppState;
use super::v1;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1/currency", v1::create_currency_router())
        .with_state(state)
        // Mirrors the request origin so credentialed browser calls work from anywhere
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::AppInfoConfig;
    use crate::domain::currency::MockRateProvider;
    use crate::domain::{DomainError, RateSnapshot};
    use crate::infrastructure::cache::NoopCacheClient;
    use crate::infrastructure::services::ExchangeService;

    fn usd_rates() -> RateSnapshot {
        RateSnapshot::new(BTreeMap::from([
            ("EUR".to_string(), 0.9),
            ("GBP".to_string(), 0.8),
        ]))
    }

    fn router_with(provider: MockRateProvider) -> Router {
        let service = ExchangeService::new(
            Arc::new(provider),
            Arc::new(NoopCacheClient::new()),
            Duration::from_secs(3600),
        );

        create_router(AppState::new(Arc::new(service), AppInfoConfig::default()))
    }

    fn router_with_usd_rates() -> Router {
        let mut provider = MockRateProvider::new();
        provider
            .expect_fetch_rates()
            .returning(|base| match base.as_str() {
                "USD" => Ok(usd_rates()),
                other => Err(DomainError::currency_not_found(other)),
            });

        router_with(provider)
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get(router_with(MockRateProvider::new()), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "response from the server");
        assert_eq!(body["name"], "Currency Converter App");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["environment"], "development");
    }

    #[tokio::test]
    async fn test_get_rates_uppercases_base() {
        let (status, body) = get(router_with_usd_rates(), "/api/v1/currency/rates/usd").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"EUR": 0.9, "GBP": 0.8}));
    }

    #[tokio::test]
    async fn test_get_rates_unknown_base() {
        let (status, body) = get(router_with_usd_rates(), "/api/v1/currency/rates/ZZZ").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "currency_not_found");
    }

    #[tokio::test]
    async fn test_convert() {
        let (status, body) = get(
            router_with_usd_rates(),
            "/api/v1/currency/convert?amount=100&from_currency=usd&to_currency=EUR",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["amount"], 100.0);
        assert_eq!(body["from"], "USD");
        assert_eq!(body["to"], "EUR");
        assert_eq!(body["rate"], 0.9);
        assert_eq!(body["converted_amount"], 90.0);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_convert_rejects_non_positive_amount() {
        let mut provider = MockRateProvider::new();
        provider.expect_fetch_rates().never();

        let (status, body) = get(
            router_with(provider),
            "/api/v1/currency/convert?amount=-5&from_currency=USD&to_currency=EUR",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "invalid_amount");
        assert_eq!(body["error"]["param"], "amount");
    }

    #[tokio::test]
    async fn test_convert_overflow_is_bad_request() {
        let mut provider = MockRateProvider::new();
        provider.expect_fetch_rates().returning(|_| {
            Ok(RateSnapshot::new(BTreeMap::from([("IDR".to_string(), 16000.0)])))
        });

        let (status, body) = get(
            router_with(provider),
            "/api/v1/currency/convert?amount=1e305&from_currency=USD&to_currency=IDR",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "invalid_amount");
    }

    #[tokio::test]
    async fn test_convert_missing_parameters() {
        let (status, body) = get(
            router_with(MockRateProvider::new()),
            "/api/v1/currency/convert?from_currency=USD",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["type"], "invalid_request_error");
        assert_eq!(body["error"]["code"], "invalid_query");
    }

    #[tokio::test]
    async fn test_convert_unknown_target_lists_alternatives() {
        let (status, body) = get(
            router_with_usd_rates(),
            "/api/v1/currency/convert?amount=1&from_currency=USD&to_currency=XYZ",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["available_currencies"], json!(["EUR", "GBP", "USD"]));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_service_unavailable() {
        let mut provider = MockRateProvider::new();
        provider
            .expect_fetch_rates()
            .returning(|_| Err(DomainError::upstream_status(500, "API returned status code 500")));

        let (status, body) = get(router_with(provider), "/api/v1/currency/currencies").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["type"], "service_unavailable_error");
    }

    #[tokio::test]
    async fn test_available_currencies() {
        let (status, body) = get(router_with_usd_rates(), "/api/v1/currency/currencies").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(["EUR", "GBP", "USD"]));
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let response = router_with(MockRateProvider::new())
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "https://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&header::HeaderValue::from_static("https://example.com"))
        );
    }
}
