// Error handling types for the API

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::error;

use super::validation::ValidationResult;

/// API error types
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    InternalServer(String),
    ValidationError(ValidationResult),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::InternalServer(msg) => write!(f, "Internal Server Error: {}", msg),
            ApiError::ValidationError(result) => {
                let messages: Vec<&str> = result.errors.values().map(String::as_str).collect();
                write!(f, "Validation Error: {}", messages.join(" "))
            }
        }
    }
}

/// JSON error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServer(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error_response = match self {
            ApiError::NotFound(msg) => ErrorResponse {
                error: msg,
                code: "NOT_FOUND".to_string(),
                errors: None,
            },
            ApiError::InternalServer(msg) => {
                error!(error = %msg, "Internal server error");
                ErrorResponse {
                    error: "Internal server error".to_string(),
                    code: "INTERNAL_SERVER_ERROR".to_string(),
                    errors: None,
                }
            }
            ApiError::ValidationError(result) => ErrorResponse {
                error: format!("{} field(s) failed validation", result.error_count()),
                code: "VALIDATION_ERROR".to_string(),
                errors: Some(result.errors),
            },
        };

        (status, Json(error_response)).into_response()
    }
}

/// Helper function to convert ValidationResult to ApiError
impl From<ValidationResult> for ApiError {
    fn from(result: ValidationResult) -> Self {
        if result.is_valid {
            ApiError::InternalServer(
                "Validation result was valid but converted to error".to_string(),
            )
        } else {
            ApiError::ValidationError(result)
        }
    }
}
