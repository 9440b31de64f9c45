// src/llm/gateway.rs
// Generation gateway: credential gate, lazily built generator, empty-output policy

use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::config::{CredentialSource, SakinaConfig};
use crate::error::GenerationError;

use super::gemini::GeminiClient;
use super::provider::{GeneratorFactory, TextGenerator};
use super::Transcript;

/// Returned in place of an empty model reply
pub const EMPTY_REPLY_APOLOGY: &str =
    "عذراً، حدث خطأ في الحصول على رد من الخدمة. يرجى المحاولة مرة أخرى.";

/// Wraps the text-generation capability.
///
/// The credential is read on every call. The generator is built by the
/// factory the first time a credential is available and reused afterwards.
pub struct GenerationGateway {
    credentials: Arc<dyn CredentialSource>,
    factory: GeneratorFactory,
    generator: OnceCell<Arc<dyn TextGenerator>>,
}

impl GenerationGateway {
    pub fn new(credentials: Arc<dyn CredentialSource>, factory: GeneratorFactory) -> Self {
        Self {
            credentials,
            factory,
            generator: OnceCell::new(),
        }
    }

    /// Gateway backed by Gemini using the configured model and endpoint
    pub fn gemini(credentials: Arc<dyn CredentialSource>, config: &SakinaConfig) -> Self {
        let model = config.gemini_model.clone();
        let api_base = config.gemini_api_base.clone();
        Self::new(
            credentials,
            Box::new(move |api_key| {
                Arc::new(GeminiClient::with_model(api_key, model.clone()).with_api_base(api_base.clone()))
                    as Arc<dyn TextGenerator>
            }),
        )
    }

    /// Whether a credential is currently available
    pub fn is_configured(&self) -> bool {
        self.credentials.has_gemini_key()
    }

    fn generator(&self) -> Result<&Arc<dyn TextGenerator>, GenerationError> {
        let api_key = self
            .credentials
            .gemini_api_key()
            .ok_or(GenerationError::NotConfigured)?;
        Ok(self.generator.get_or_init(|| {
            let generator = (self.factory)(api_key);
            info!(model = %generator.model_name(), "Generation client initialized");
            generator
        }))
    }

    /// Run one generation call.
    ///
    /// Empty or whitespace-only output is replaced by [`EMPTY_REPLY_APOLOGY`].
    pub async fn generate(&self, transcript: &Transcript) -> Result<String, GenerationError> {
        let generator = self.generator()?;

        let output = generator.generate(transcript).await.map_err(|e| {
            error!(error = ?e, "Generation call failed");
            GenerationError::ProviderFailure(e.to_string())
        })?;

        match output.into_text() {
            Some(text) => Ok(text),
            None => {
                warn!(turn_count = transcript.turns.len(), "Generation returned no text, substituting apology");
                Ok(EMPTY_REPLY_APOLOGY.to_string())
            }
        }
    }
}
