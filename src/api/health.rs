//! Health check endpoint

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use super::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: String,
    pub name: String,
    pub version: String,
    pub environment: String,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        message: "response from the server".to_string(),
        name: state.app_info.name.clone(),
        version: state.app_info.version.clone(),
        environment: state.app_info.environment.clone(),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            message: "response from the server".to_string(),
            name: "Currency Converter App".to_string(),
            version: "0.1.0".to_string(),
            environment: "development".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "message": "response from the server",
                "name": "Currency Converter App",
                "version": "0.1.0",
                "environment": "development"
            })
        );
    }
}
