// src/llm/mod.rs
// Transcript building and the text-generation gateway (Gemini)

pub mod gateway;
pub mod gemini;
mod logging;
pub mod provider;
pub mod transcript;
pub mod types;

pub use gateway::{EMPTY_REPLY_APOLOGY, GenerationGateway};
pub use gemini::GeminiClient;
pub use provider::{GeneratorFactory, TextGenerator};
pub use transcript::TranscriptStrategy;
pub use types::{GenerationOutput, Message, ModelRole, Role, RoleText, Transcript, Usage};
