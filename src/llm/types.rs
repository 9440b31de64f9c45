// src/llm/types.rs
// Conversation and generation types shared by the transcript builder, the
// gateway and the HTTP layer

use serde::{Deserialize, Serialize};

/// Author of a chat message as seen by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Author of a turn as seen by the generation service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelRole {
    User,
    Model,
}

impl From<Role> for ModelRole {
    fn from(role: Role) -> Self {
        match role {
            Role::User => ModelRole::User,
            Role::Assistant => ModelRole::Model,
        }
    }
}

impl From<ModelRole> for Role {
    fn from(role: ModelRole) -> Self {
        match role {
            ModelRole::User => Role::User,
            ModelRole::Model => Role::Assistant,
        }
    }
}

/// One chat message. `timestamp` is milliseconds since the Unix epoch; any
/// JSON number is accepted, fractional values included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub timestamp: f64,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: chrono::Utc::now().timestamp_millis() as f64,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// A role-tagged turn handed to the generation service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleText {
    pub role: ModelRole,
    pub text: String,
}

impl RoleText {
    pub fn new(role: ModelRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

impl From<&Message> for RoleText {
    fn from(msg: &Message) -> Self {
        Self::new(msg.role.into(), msg.content.clone())
    }
}

/// Everything one generation call needs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transcript {
    /// Out-of-band instruction, set only by the system-instruction strategy
    pub system_instruction: Option<String>,
    pub turns: Vec<RoleText>,
}

impl Transcript {
    pub fn last_turn(&self) -> Option<&RoleText> {
        self.turns.last()
    }
}

/// Result of extracting text from a provider response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutput {
    Text(String),
    NoText,
}

impl GenerationOutput {
    /// Whitespace-only text counts as no text
    pub fn into_text(self) -> Option<String> {
        match self {
            GenerationOutput::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            GenerationOutput::NoText => None,
        }
    }
}

/// Token usage reported by the provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}
