// src/llm/gemini/conversion.rs
// Transcript conversion to Gemini request contents

use crate::llm::gemini::types::GeminiContent;
use crate::llm::{ModelRole, RoleText, Transcript};

fn role_name(role: ModelRole) -> &'static str {
    match role {
        ModelRole::User => "user",
        ModelRole::Model => "model",
    }
}

/// Convert one turn to Gemini content
pub fn convert_turn(turn: &RoleText) -> GeminiContent {
    GeminiContent::text(Some(role_name(turn.role)), turn.text.clone())
}

/// Convert a transcript to (system_instruction, contents)
pub fn convert_transcript(transcript: &Transcript) -> (Option<GeminiContent>, Vec<GeminiContent>) {
    // system_instruction carries no role
    let system_instruction = transcript
        .system_instruction
        .as_ref()
        .map(|instruction| GeminiContent::text(None, instruction.clone()));
    let contents = transcript.turns.iter().map(convert_turn).collect();
    (system_instruction, contents)
}
