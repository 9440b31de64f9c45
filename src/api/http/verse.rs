// src/api/http/verse.rs

use axum::{
    Json,
    body::Bytes,
    extract::State,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{error, info};

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::{VerseRequest, VerseResponse, parse_body};
use crate::prompt::fallback::FALLBACK_VERSE;
use crate::prompt::verse::verse_transcript;
use crate::state::AppState;

/// POST /api/ikhtiyarah
///
/// Body: `{ feeling }`. Returns one verse with citation and a short
/// explanation, as generated; the text is not checked against a mushaf.
pub async fn verse_handler(State(app_state): State<Arc<AppState>>, body: Bytes) -> impl IntoResponse {
    let result: ApiResult<_> = async {
        if !app_state.service_available() {
            return Err(ApiError::not_configured());
        }

        let request: VerseRequest = parse_body(&body)?;
        info!(feeling_len = request.feeling.len(), "Verse lookup");

        if app_state.use_fallback() {
            return Ok(Json(VerseResponse {
                verse: FALLBACK_VERSE.to_string(),
            }));
        }

        let verse = app_state
            .gateway
            .generate(&verse_transcript(&request.feeling))
            .await?;

        Ok(Json(VerseResponse { verse }))
    }
    .await;

    match result {
        Ok(response) => response.into_response(),
        Err(error) => {
            error!(status = %error.status_code, "Verse lookup failed: {}", error.message);
            error.into_response()
        }
    }
}
