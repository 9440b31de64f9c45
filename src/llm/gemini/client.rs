// src/llm/gemini/client.rs
// Google Gemini API client (non-streaming, single attempt per call)

use crate::config::{DEFAULT_GEMINI_API_BASE, DEFAULT_GEMINI_MODEL};
use crate::http::create_shared_client;
use crate::llm::gemini::conversion::convert_transcript;
use crate::llm::gemini::extraction::extract_output;
use crate::llm::gemini::types::{GeminiRequest, GeminiResponse};
use crate::llm::logging::{log_completion, log_usage};
use crate::llm::provider::TextGenerator;
use crate::llm::{GenerationOutput, Transcript, Usage};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::time::Instant;
use tracing::{Span, debug, info, instrument, warn};
use uuid::Uuid;

/// Google Gemini API client
pub struct GeminiClient {
    api_key: String,
    model: String,
    api_base: String,
    http: reqwest::Client,
}

impl GeminiClient {
    /// Create a new Gemini client with default model
    pub fn new(api_key: String) -> Self {
        Self::with_model(api_key, DEFAULT_GEMINI_MODEL.to_string())
    }

    /// Create a new Gemini client with custom model
    pub fn with_model(api_key: String, model: String) -> Self {
        Self::with_http_client(api_key, model, create_shared_client())
    }

    /// Create a new Gemini client with a shared HTTP client
    pub fn with_http_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            api_key,
            model,
            api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            http: client,
        }
    }

    /// Point the client at a different endpoint prefix
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.api_base, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn model_name(&self) -> String {
        self.model.clone()
    }

    #[instrument(skip(self, transcript), fields(request_id, model = %self.model, turn_count = transcript.turns.len()))]
    async fn generate(&self, transcript: &Transcript) -> Result<GenerationOutput> {
        let request_id = Uuid::new_v4().to_string();
        let start_time = Instant::now();

        Span::current().record("request_id", &request_id);

        info!(
            request_id = %request_id,
            turn_count = transcript.turns.len(),
            system_instruction = transcript.system_instruction.is_some(),
            "Starting Gemini request"
        );

        let (system_instruction, contents) = convert_transcript(transcript);
        let request = GeminiRequest {
            contents,
            system_instruction,
        };

        let body = serde_json::to_string(&request)?;
        debug!(request_id = %request_id, body_len = body.len(), "Gemini request built");

        // Gemini authenticates via query-string key, not a Bearer header
        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| anyhow!("Gemini request failed: {}", e))?;

        let status = response.status();
        let response_body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(anyhow!("API error {}: {}", status, response_body));
        }

        let duration_ms = start_time.elapsed().as_millis() as u64;

        let data: GeminiResponse = serde_json::from_str(&response_body)
            .map_err(|e| anyhow!("Failed to parse Gemini response: {}", e))?;

        if let Some(reason) = data
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            warn!(request_id = %request_id, reason, "Gemini blocked the prompt");
        }

        if let Some(u) = data.usage_metadata.as_ref() {
            let usage = Usage {
                prompt_tokens: u.prompt_token_count,
                completion_tokens: u.candidates_token_count.unwrap_or(0),
                total_tokens: u.total_token_count,
            };
            log_usage(&request_id, "Gemini", &usage);
        }

        let output = extract_output(&data);
        let content_len = match &output {
            GenerationOutput::Text(text) => text.len(),
            GenerationOutput::NoText => 0,
        };
        log_completion(&request_id, "Gemini", duration_ms, content_len);

        Ok(output)
    }
}
