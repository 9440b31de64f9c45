// src/api/http/handlers.rs

use axum::{Json, extract::State};
use std::sync::Arc;
use tracing::debug;

use crate::api::types::{HealthResponse, HealthStatus};
use crate::state::AppState;

pub const HEALTH_OK_MESSAGE: &str = "الخدمة تعمل بشكل طبيعي";
pub const HEALTH_MISSING_KEY_MESSAGE: &str = "مفتاح GEMINI_API_KEY غير موجود. يرجى إضافته في متغيرات البيئة (مثلاً في ملف .env) أو في إعدادات الخادم.";

/// GET /api/health
///
/// `ok` when a credential is present or fallback mode is on.
pub async fn health_handler(State(app_state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let available = app_state.service_available();
    debug!(available, "Health check");

    Json(if available {
        HealthResponse {
            status: HealthStatus::Ok,
            message: HEALTH_OK_MESSAGE.to_string(),
        }
    } else {
        HealthResponse {
            status: HealthStatus::MissingApiKey,
            message: HEALTH_MISSING_KEY_MESSAGE.to_string(),
        }
    })
}
