//! API error types.
//!
//! Two kinds of failure reach a caller: invalid input (400, caller-visible
//! message) and internal failure (500, generic message). The engines
//! themselves are total; errors exist only at this boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// API error with HTTP status code.
#[derive(Debug, Clone, Serialize, Error)]
pub struct ApiError {
    /// HTTP status code.
    #[serde(skip)]
    pub status: StatusCode,

    /// Error message.
    pub message: String,

    /// Optional error code for client handling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: None,
        }
    }

    /// 400 Bad Request.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// 500 Internal Server Error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            code: Some("INTERNAL_ERROR".to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "[{:?}] [{}] {}", self.status, code, self.message),
            None => write!(f, "[{:?}] {}", self.status, self.message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = serde_json::json!({ "error": self.message });
        if let Some(code) = &self.code {
            body["code"] = serde_json::Value::String(code.clone());
        }

        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request() {
        let error = ApiError::bad_request("URL is required");
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert!(error.code.is_none());
        assert!(error.message.contains("URL"));
    }

    #[test]
    fn test_internal() {
        let error = ApiError::internal("something broke");
        assert_eq!(error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.code, Some("INTERNAL_ERROR".to_string()));
    }

    #[test]
    fn test_display_includes_code() {
        let display = format!("{}", ApiError::internal("boom"));
        assert!(display.contains("INTERNAL_ERROR"));
        assert!(display.contains("boom"));
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::bad_request("nope").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
