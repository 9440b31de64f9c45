// src/api/error.rs
// Centralized error handling for HTTP API responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use std::fmt;
use tracing::error;

use crate::error::GenerationError;

pub const NOT_CONFIGURED_ERROR: &str = "الخدمة غير متاحة حالياً. مفتاح الـ API غير مكوّن.";
pub const NOT_CONFIGURED_USER_MESSAGE: &str =
    "عذراً، الخدمة غير متاحة في الوقت الحالي. يرجى التواصل مع مدير الموقع.";
pub const VALIDATION_ERROR: &str = "بيانات غير صالحة";
pub const INTERNAL_ERROR: &str = "حدث خطأ في الخادم. يرجى المحاولة مرة أخرى.";
pub const INTERNAL_USER_MESSAGE: &str = "عذراً، حدث خطأ غير متوقع. يرجى المحاولة مرة أخرى لاحقاً.";

/// One problem found while validating a request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Dotted path to the field, e.g. `questionnaireData.age` or `messages[1].role`
    pub path: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// API error response: `{ error, userMessage?, details? }`
#[derive(Debug)]
pub struct ApiError {
    pub status_code: StatusCode,
    pub message: String,
    pub user_message: Option<String>,
    pub details: Vec<FieldIssue>,
}

impl ApiError {
    /// 503: generation credential missing
    pub fn not_configured() -> Self {
        Self {
            status_code: StatusCode::SERVICE_UNAVAILABLE,
            message: NOT_CONFIGURED_ERROR.to_string(),
            user_message: Some(NOT_CONFIGURED_USER_MESSAGE.to_string()),
            details: Vec::new(),
        }
    }

    /// 400 with per-field details
    pub fn validation(details: Vec<FieldIssue>) -> Self {
        Self {
            status_code: StatusCode::BAD_REQUEST,
            message: VALIDATION_ERROR.to_string(),
            user_message: None,
            details,
        }
    }

    /// 500 with the generic localized apology
    pub fn internal() -> Self {
        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            message: INTERNAL_ERROR.to_string(),
            user_message: Some(INTERNAL_USER_MESSAGE.to_string()),
            details: Vec::new(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<GenerationError> for ApiError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::NotConfigured => ApiError::not_configured(),
            GenerationError::ProviderFailure(detail) => {
                error!(detail = %detail, "Generation failed");
                ApiError::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response_json = json!({ "error": self.message });

        if let Some(user_message) = self.user_message {
            response_json["userMessage"] = json!(user_message);
        }
        if !self.details.is_empty() {
            response_json["details"] = json!(self.details);
        }

        (self.status_code, Json(response_json)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
