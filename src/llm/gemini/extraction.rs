// src/llm/gemini/extraction.rs
// Response extraction helpers for Gemini API responses

use crate::llm::GenerationOutput;
use crate::llm::gemini::types::{GeminiContent, GeminiResponse};

/// Extract text content from a content block (non-thought parts only)
pub fn extract_content(content: &GeminiContent) -> Option<String> {
    let text_parts: Vec<&str> = content
        .parts
        .iter()
        .filter(|part| !part.thought)
        .filter_map(|part| part.text.as_deref())
        .collect();

    if text_parts.is_empty() {
        None
    } else {
        Some(text_parts.join(""))
    }
}

/// Text of the first candidate, or `NoText` when the response carries none
/// (no candidates, blocked prompt, only thought or non-text parts).
pub fn extract_output(response: &GeminiResponse) -> GenerationOutput {
    response
        .candidates
        .as_ref()
        .and_then(|c| c.first())
        .and_then(|candidate| candidate.content.as_ref())
        .and_then(extract_content)
        .map(GenerationOutput::Text)
        .unwrap_or(GenerationOutput::NoText)
}
