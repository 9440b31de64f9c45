// src/api/http/chat.rs

use axum::{
    Json,
    body::Bytes,
    extract::State,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{error, info};

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::{ChatRequest, ChatResponse, parse_body};
use crate::llm::transcript;
use crate::prompt::{assemble, fallback::fallback_reply};
use crate::state::AppState;

/// POST /api/chat
///
/// Body: `{ messages, questionnaireData, personaId? }`, where the last
/// message is the new user turn.
pub async fn chat_handler(State(app_state): State<Arc<AppState>>, body: Bytes) -> impl IntoResponse {
    let result: ApiResult<_> = async {
        if !app_state.service_available() {
            return Err(ApiError::not_configured());
        }

        let request: ChatRequest = parse_body(&body)?;
        let (prior, new_user_text) = request.split_turns();
        let persona = request.persona();

        info!(
            persona = %persona,
            prior_turns = prior.len(),
            fallback = app_state.use_fallback(),
            "Chat request"
        );

        if app_state.use_fallback() {
            return Ok(Json(ChatResponse {
                message: fallback_reply(new_user_text),
            }));
        }

        let prompt = assemble(&request.questionnaire_data, persona);
        let transcript = transcript::build(
            prior,
            new_user_text,
            &prompt,
            app_state.config.transcript_strategy,
        );

        let message = app_state.gateway.generate(&transcript).await?;
        info!(reply_len = message.len(), "Chat reply ready");

        Ok(Json(ChatResponse { message }))
    }
    .await;

    match result {
        Ok(response) => response.into_response(),
        Err(error) => {
            error!(status = %error.status_code, "Chat request failed: {}", error.message);
            error.into_response()
        }
    }
}
