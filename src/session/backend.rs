// src/session/backend.rs
// Network transport from a chat session to the Sakina HTTP API

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::api::types::{ChatRequest, ChatResponse, HealthResponse, VerseRequest, VerseResponse};
use crate::http::create_shared_client;

pub const CONNECTION_ERROR_MESSAGE: &str = "عذراً، حدث خطأ في الاتصال. يرجى المحاولة مرة أخرى.";
pub const UNAVAILABLE_MESSAGE: &str =
    "الخدمة غير متاحة حالياً. مفتاح الـ API غير مكوّن. يرجى التواصل مع مدير الموقع.";

/// Why a backend call did not produce a reply
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Server answered 503: no generation credential configured
    #[error("service unavailable: {user_message}")]
    Unavailable { user_message: String },

    /// Any other failure; `status` is `None` for transport errors
    #[error("request failed ({status:?}): {user_message}")]
    Failed {
        status: Option<u16>,
        user_message: String,
    },
}

impl BackendError {
    /// Text to show the user
    pub fn user_message(&self) -> &str {
        match self {
            BackendError::Unavailable { user_message } | BackendError::Failed { user_message, .. } => {
                user_message
            }
        }
    }

    fn transport(err: reqwest::Error) -> Self {
        warn!(error = %err, "Request to chat service failed");
        BackendError::Failed {
            status: None,
            user_message: CONNECTION_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Transport used by [`super::ChatSession`]
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn health(&self) -> Result<HealthResponse, BackendError>;

    /// Send the full transcript; returns the assistant reply
    async fn chat(&self, request: &ChatRequest) -> Result<String, BackendError>;

    async fn verse(&self, feeling: &str) -> Result<String, BackendError>;
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    user_message: Option<String>,
}

/// [`ChatBackend`] over HTTP with reqwest
pub struct HttpChatBackend {
    base_url: String,
    http: reqwest::Client,
}

impl HttpChatBackend {
    /// `base_url` is the server root, e.g. `http://localhost:5000`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, create_shared_client())
    }

    pub fn with_http_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    /// Map a non-success response to an error, preferring the server's userMessage
    async fn error_from(response: reqwest::Response, prefer_error_field: bool) -> BackendError {
        let status = response.status();
        let envelope: ErrorEnvelope = response.json().await.unwrap_or_default();
        debug!(status = %status, ?envelope, "Chat service returned an error");

        if status == StatusCode::SERVICE_UNAVAILABLE {
            return BackendError::Unavailable {
                user_message: UNAVAILABLE_MESSAGE.to_string(),
            };
        }

        let user_message = if prefer_error_field {
            envelope.error.or(envelope.user_message)
        } else {
            envelope.user_message
        };

        BackendError::Failed {
            status: Some(status.as_u16()),
            user_message: user_message.unwrap_or_else(|| CONNECTION_ERROR_MESSAGE.to_string()),
        }
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn health(&self) -> Result<HealthResponse, BackendError> {
        let response = self
            .http
            .get(self.url("health"))
            .send()
            .await
            .map_err(BackendError::transport)?;
        response.json().await.map_err(BackendError::transport)
    }

    async fn chat(&self, request: &ChatRequest) -> Result<String, BackendError> {
        let response = self
            .http
            .post(self.url("chat"))
            .json(request)
            .send()
            .await
            .map_err(BackendError::transport)?;

        if !response.status().is_success() {
            return Err(Self::error_from(response, false).await);
        }

        let body: ChatResponse = response.json().await.map_err(BackendError::transport)?;
        Ok(body.message)
    }

    async fn verse(&self, feeling: &str) -> Result<String, BackendError> {
        let response = self
            .http
            .post(self.url("ikhtiyarah"))
            .json(&VerseRequest {
                feeling: feeling.to_string(),
            })
            .send()
            .await
            .map_err(BackendError::transport)?;

        if !response.status().is_success() {
            return Err(Self::error_from(response, true).await);
        }

        let body: VerseResponse = response.json().await.map_err(BackendError::transport)?;
        Ok(body.verse)
    }
}
