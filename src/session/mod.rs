// src/session/mod.rs
// Client-side chat session: in-memory transcript, send gating, error notices

pub mod backend;

use tracing::{debug, info, warn};

use crate::api::types::{ChatRequest, HealthStatus};
use crate::llm::{Message, Role};
use crate::persona::PersonaId;
use crate::questionnaire::QuestionnaireAnswers;

pub use backend::{BackendError, ChatBackend, HttpChatBackend};

pub const NOTICE_TITLE: &str = "خطأ";

/// Transient error shown to the user after a failed call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl From<&BackendError> for Notice {
    fn from(err: &BackendError) -> Self {
        Self {
            title: NOTICE_TITLE.to_string(),
            description: err.user_message().to_string(),
        }
    }
}

/// Why `send` did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendRejection {
    EmptyInput,
    ServiceUnavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Assistant reply appended
    Replied,
    /// Nothing was sent
    Rejected(SendRejection),
    /// Request went out and failed; see [`ChatSession::notice`]
    Failed(BackendError),
}

/// One user's conversation with a persona.
///
/// The transcript is append-only. `send` borrows the session mutably, so a
/// session never has more than one request in flight.
pub struct ChatSession<B> {
    backend: B,
    answers: QuestionnaireAnswers,
    persona: PersonaId,
    messages: Vec<Message>,
    input: String,
    service_available: bool,
    notice: Option<Notice>,
}

impl<B: ChatBackend> ChatSession<B> {
    pub fn new(backend: B, answers: QuestionnaireAnswers, persona: PersonaId) -> Self {
        Self {
            backend,
            answers,
            persona,
            messages: vec![Message::assistant(persona.greeting())],
            input: String::new(),
            service_available: true,
            notice: None,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn persona(&self) -> PersonaId {
        self.persona
    }

    pub fn answers(&self) -> &QuestionnaireAnswers {
        &self.answers
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn service_available(&self) -> bool {
        self.service_available
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn can_send(&self) -> bool {
        self.service_available && !self.input.trim().is_empty()
    }

    /// Ask the server whether generation is configured.
    ///
    /// A failed check leaves the flag as it was.
    pub async fn check_health(&mut self) -> bool {
        match self.backend.health().await {
            Ok(health) => {
                self.service_available = health.status == HealthStatus::Ok;
                if !self.service_available {
                    warn!(message = %health.message, "Chat service reports missing API key");
                }
            }
            Err(e) => warn!(error = %e, "Health check failed"),
        }
        self.service_available
    }

    /// Send the current input as a new user turn
    pub async fn send(&mut self) -> SendOutcome {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return SendOutcome::Rejected(SendRejection::EmptyInput);
        }
        if !self.service_available {
            return SendOutcome::Rejected(SendRejection::ServiceUnavailable);
        }

        // A retry after a failure re-sends the unanswered turn instead of repeating it
        let unanswered = self
            .messages
            .last()
            .is_some_and(|m| m.role == Role::User && m.content == text);
        if !unanswered {
            self.messages.push(Message::user(text));
        }

        let request = ChatRequest {
            messages: self.messages.clone(),
            questionnaire_data: self.answers.clone(),
            persona_id: Some(self.persona),
        };
        debug!(turns = request.messages.len(), persona = %self.persona, retry = unanswered, "Sending chat turn");

        match self.backend.chat(&request).await {
            Ok(reply) => {
                self.messages.push(Message::assistant(reply));
                self.input.clear();
                self.notice = None;
                info!(turns = self.messages.len(), "Chat turn completed");
                SendOutcome::Replied
            }
            Err(e) => {
                warn!(error = %e, "Chat turn failed");
                if matches!(e, BackendError::Unavailable { .. }) {
                    self.service_available = false;
                }
                self.notice = Some(Notice::from(&e));
                SendOutcome::Failed(e)
            }
        }
    }

    /// Single-shot verse lookup; independent of the transcript
    pub async fn lookup_verse(&mut self, feeling: &str) -> Option<String> {
        if feeling.trim().is_empty() {
            return None;
        }
        match self.backend.verse(feeling.trim()).await {
            Ok(verse) => {
                self.notice = None;
                Some(verse)
            }
            Err(e) => {
                warn!(error = %e, "Verse lookup failed");
                if matches!(e, BackendError::Unavailable { .. }) {
                    self.service_available = false;
                }
                self.notice = Some(Notice::from(&e));
                None
            }
        }
    }
}
