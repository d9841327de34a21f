//! Error handling module
//!
//! Defines error types and handling logic used in the project

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body is not syntactically valid JSON
    #[error("Invalid JSON in request body")]
    InvalidBody,

    /// Request validation failed (missing/empty required fields)
    #[error("{0}")]
    Validation(String),

    /// Unknown route
    #[error("Not Found")]
    NotFound,

    /// Wrong HTTP method on a known route
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// No Gemini API key was resolved at startup
    #[error("Gemini API key not configured. Please set the GEMINI_API_KEY environment variable.")]
    ApiKeyMissing,

    /// Gemini API call failed
    #[error("{0}")]
    Upstream(String),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Image payload is not a decodable data URI
    #[error("{0}")]
    ImagePayload(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body, `{"error": "..."}` as consumers expect
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error message
    pub error: String,
}

impl AppError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidBody | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            // Upstream-class errors are folded into 200 bodies by the
            // handlers; this mapping only applies if one escapes
            AppError::ApiKeyMissing
            | AppError::Upstream(_)
            | AppError::HttpClient(_)
            | AppError::Serialization(_)
            | AppError::ImagePayload(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether detailed error information should be logged
    pub fn should_log_details(&self) -> bool {
        !matches!(
            self,
            AppError::InvalidBody
                | AppError::Validation(_)
                | AppError::NotFound
                | AppError::MethodNotAllowed
        )
    }
}

/// Implement IntoResponse trait to allow errors to be returned directly as HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log error
        if self.should_log_details() {
            tracing::error!("Application error: {} - Status code: {}", self, status);
        } else {
            tracing::warn!("Client error: {} - Status code: {}", self, status);
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::InvalidBody.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Validation("'text' and 'url' are required.".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            AppError::ApiKeyMissing.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Upstream("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppError::InvalidBody.to_string(),
            "Invalid JSON in request body"
        );
        assert_eq!(AppError::MethodNotAllowed.to_string(), "Method Not Allowed");
        assert_eq!(AppError::NotFound.to_string(), "Not Found");
        assert!(AppError::ApiKeyMissing
            .to_string()
            .starts_with("Gemini API key not configured"));
    }

    #[test]
    fn test_validation_message_passthrough() {
        let err = AppError::Validation("'text' and 'url' are required.".to_string());
        assert_eq!(err.to_string(), "'text' and 'url' are required.");
    }

    #[test]
    fn test_should_log_details() {
        assert!(!AppError::InvalidBody.should_log_details());
        assert!(!AppError::NotFound.should_log_details());
        assert!(AppError::ApiKeyMissing.should_log_details());
        assert!(AppError::Upstream("x".to_string()).should_log_details());
    }
}
