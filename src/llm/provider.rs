// src/llm/provider.rs
// Text-generation capability abstraction

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use super::{GenerationOutput, Transcript};

/// Trait for text-generation clients.
///
/// Implementations send exactly one request per call and never retry.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, transcript: &Transcript) -> Result<GenerationOutput>;

    /// Model identifier, for logging
    fn model_name(&self) -> String;
}

/// Builds a generator from a credential. Called at most once per gateway.
pub type GeneratorFactory = Box<dyn Fn(String) -> Arc<dyn TextGenerator> + Send + Sync>;
