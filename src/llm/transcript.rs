// src/llm/transcript.rs
// Turns a chat history plus the assembled prompt into a generation transcript

use crate::error::SakinaError;

use super::{Message, ModelRole, RoleText, Transcript};

/// Note appended to the prompt when it is sent as the first user turn
pub const CONTEXT_NOTE: &str =
    "ملاحظة: هذه هي معلومات المستخدم والسياق الذي تحتاج لأخذه بعين الاعتبار في كل رد.";

/// Synthetic model reply acknowledging the context turn
pub const CONTEXT_ACK: &str = "حسناً، فهمت معلومات المستخدم وسياقه بشكل واضح. سأأخذها في الاعتبار في كل رد أقدمه وسأكون داعماً وعاطفياً وإسلامياً في ردودي.";

/// How the assembled prompt reaches the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranscriptStrategy {
    /// Prompt sent as a synthetic user turn followed by a synthetic model acknowledgement
    #[default]
    LeadingExchange,
    /// Prompt sent as the provider's system instruction; only real turns in the transcript
    SystemInstruction,
}

impl TranscriptStrategy {
    /// Turns added on top of the real conversation
    pub fn synthetic_turns(self) -> usize {
        match self {
            TranscriptStrategy::LeadingExchange => 2,
            TranscriptStrategy::SystemInstruction => 0,
        }
    }
}

impl std::str::FromStr for TranscriptStrategy {
    type Err = SakinaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "leading" | "leading-exchange" => Ok(TranscriptStrategy::LeadingExchange),
            "system" | "system-instruction" => Ok(TranscriptStrategy::SystemInstruction),
            other => Err(SakinaError::Config(format!("unknown transcript strategy '{other}'"))),
        }
    }
}

/// Build the transcript for one generation call.
///
/// `new_user_text` must be non-empty after trimming; callers validate this
/// before getting here. Prior turns keep their order and the new user turn
/// is always last.
pub fn build(
    prior: &[Message],
    new_user_text: &str,
    assembled_prompt: &str,
    strategy: TranscriptStrategy,
) -> Transcript {
    debug_assert!(!new_user_text.trim().is_empty(), "empty user turn reached transcript builder");

    let mut turns = Vec::with_capacity(prior.len() + 1 + strategy.synthetic_turns());
    let system_instruction = match strategy {
        TranscriptStrategy::LeadingExchange => {
            turns.push(RoleText::new(
                ModelRole::User,
                format!("{assembled_prompt}\n\n---\n\n{CONTEXT_NOTE}"),
            ));
            turns.push(RoleText::new(ModelRole::Model, CONTEXT_ACK));
            None
        }
        TranscriptStrategy::SystemInstruction => Some(assembled_prompt.to_string()),
    };

    turns.extend(prior.iter().map(RoleText::from));
    turns.push(RoleText::new(ModelRole::User, new_user_text));

    Transcript {
        system_instruction,
        turns,
    }
}
