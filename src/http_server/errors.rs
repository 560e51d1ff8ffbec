//! # API Errors
//!
//! Every failure a handler can return, with its status code and JSON body.
//! Bodies always carry a single `detail` member: a message string, or a list
//! of field errors for validation failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::store::{ItemId, StoreError};

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// One rejected request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Where the value came from, e.g. `["body", "name"]`
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: &str) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }
}

/// API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Malformed or missing request fields
    #[error("Request validation failed ({} error(s))", .0.len())]
    Validation(Vec<FieldError>),

    /// Referenced item does not exist
    #[error("Item with ID {0} not found")]
    NotFound(ItemId),

    /// No route matched the request path
    #[error("Not Found")]
    RouteNotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(id),
            StoreError::Poisoned => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            ApiError::Validation(errors) => json!({ "detail": errors }),
            ApiError::Internal(msg) => {
                error!(error = %msg, "request failed");
                json!({ "detail": format!("Internal error: {}", msg) })
            }
            other => json!({ "detail": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation(vec![]).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::NotFound(1).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::RouteNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_mapping() {
        assert!(matches!(
            ApiError::from(StoreError::NotFound(7)),
            ApiError::NotFound(7)
        ));
        assert!(matches!(
            ApiError::from(StoreError::Poisoned),
            ApiError::Internal(_)
        ));
    }

    #[test]
    fn test_field_error_serialization() {
        let err = FieldError::new(&["body", "name"], "Field required", "missing");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            json!({"loc": ["body", "name"], "msg": "Field required", "type": "missing"})
        );
    }
}
