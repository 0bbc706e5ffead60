//! API error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Error categories reported to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    ServerError,
    ServiceUnavailableError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequestError => write!(f, "invalid_request_error"),
            Self::ServerError => write!(f, "server_error"),
            Self::ServiceUnavailableError => write!(f, "service_unavailable_error"),
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_currencies: Option<Vec<String>>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                    param: None,
                    code: None,
                    available_currencies: None,
                },
            },
        }
    }

    /// Name the offending request parameter
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.response.error.param = Some(param.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.response.error.code = Some(code.into());
        self
    }

    /// Attach currency codes the client could use instead
    pub fn with_available_currencies(mut self, currencies: Vec<String>) -> Self {
        if !currencies.is_empty() {
            self.response.error.available_currencies = Some(currencies);
        }
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorType::InvalidRequestError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ApiErrorType::ServerError, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            ApiErrorType::ServiceUnavailableError,
            message,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidAmount { message } => Self::bad_request(message)
                .with_param("amount")
                .with_code("invalid_amount"),
            DomainError::CurrencyNotFound { code, available } => Self::bad_request(format!(
                "Currency '{}' not found. Please provide a valid currency code",
                code
            ))
            .with_code("currency_not_found")
            .with_available_currencies(available),
            DomainError::UpstreamUnavailable { message, .. } => {
                Self::unavailable(message).with_code("exchange_api_error")
            }
            DomainError::Configuration { message } => Self::internal(message),
            DomainError::Cache { message } => Self::internal(message),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.error.error_type, self.response.error.message
        )
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::bad_request("Invalid currency");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.error.error_type, ApiErrorType::InvalidRequestError);
        assert_eq!(err.response.error.message, "Invalid currency");
    }

    #[test]
    fn test_invalid_amount_conversion() {
        let api_err: ApiError = DomainError::invalid_amount("Amount must be a positive number").into();

        assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_err.response.error.param, Some("amount".to_string()));
        assert_eq!(api_err.response.error.code, Some("invalid_amount".to_string()));
    }

    #[test]
    fn test_currency_not_found_conversion() {
        let api_err: ApiError = DomainError::currency_not_found_with_hint(
            "XYZ",
            vec!["EUR".to_string(), "USD".to_string()],
        )
        .into();

        assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
        assert!(api_err.response.error.message.contains("'XYZ'"));
        assert_eq!(
            api_err.response.error.available_currencies,
            Some(vec!["EUR".to_string(), "USD".to_string()])
        );
    }

    #[test]
    fn test_currency_not_found_without_hint_omits_list() {
        let api_err: ApiError = DomainError::currency_not_found("ZZZ").into();
        let json = serde_json::to_string(&api_err.response).unwrap();

        assert!(!json.contains("available_currencies"));
    }

    #[test]
    fn test_upstream_unavailable_conversion() {
        let api_err: ApiError = DomainError::upstream_status(502, "API returned status code 502").into();

        assert_eq!(api_err.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            api_err.response.error.error_type,
            ApiErrorType::ServiceUnavailableError
        );
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::unavailable("Exchange API down");
        let json = serde_json::to_string(&err.response).unwrap();

        assert!(json.contains("service_unavailable_error"));
        assert!(json.contains("Exchange API down"));
        assert!(!json.contains("param"));
    }
}
