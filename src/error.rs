// src/error.rs
// Standardized error types for Sakina

use thiserror::Error;

/// Failure of a single generation call.
///
/// `NotConfigured` is kept apart from provider failures so the HTTP layer
/// can answer 503 instead of 500.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("generation service not configured: GEMINI_API_KEY is missing")]
    NotConfigured,

    #[error("provider failure: {0}")]
    ProviderFailure(String),
}

impl GenerationError {
    pub fn is_not_configured(&self) -> bool {
        matches!(self, GenerationError::NotConfigured)
    }
}

/// Main error type for the Sakina library
#[derive(Error, Debug)]
pub enum SakinaError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_configured_message() {
        let err = GenerationError::NotConfigured;
        assert!(err.is_not_configured());
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_provider_failure_carries_detail() {
        let err = GenerationError::ProviderFailure("API error 500".to_string());
        assert!(!err.is_not_configured());
        assert!(err.to_string().contains("API error 500"));
    }

    #[test]
    fn test_sakina_error_messages() {
        let err = SakinaError::InvalidInput("unknown persona 'x'".to_string());
        assert_eq!(err.to_string(), "invalid input: unknown persona 'x'");
        let err = SakinaError::Config("bad".to_string());
        assert_eq!(err.to_string(), "configuration error: bad");
    }
}
