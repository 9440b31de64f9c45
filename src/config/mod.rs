// src/config/mod.rs
// Process configuration loaded from the environment (and .env when present)

pub mod env;

use once_cell::sync::Lazy;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::llm::transcript::TranscriptStrategy;

pub use env::{CredentialSource, EnvCredentials, StaticCredentials};

/// Default Gemini model used for chat and verse lookups
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Gemini REST endpoint prefix (model name and method are appended)
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Clone)]
pub struct SakinaConfig {
    // ── Server
    pub host: String,
    pub port: u16,

    // ── Generation
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub transcript_strategy: TranscriptStrategy,

    /// Canned replies instead of failing when no credential is configured
    pub local_fallback: bool,

    // ── Logging
    pub log_level: String,
}

fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            // Tolerate trailing comments and whitespace from .env files
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => {
                    debug!(key, value = clean_val, "Config value from environment");
                    parsed
                }
                Err(_) => {
                    warn!(key, value = %val, "Config parse failed, using default");
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl SakinaConfig {
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            debug!(".env file not found, using process environment and defaults");
        }

        Self {
            host: env_var_or("SAKINA_HOST", "0.0.0.0".to_string()),
            port: env_var_or("SAKINA_PORT", 5000),
            gemini_model: env_var_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_base: env_var_or("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE.to_string()),
            transcript_strategy: env_var_or("SAKINA_TRANSCRIPT_STRATEGY", TranscriptStrategy::default()),
            local_fallback: env_var_or("LOCAL_FALLBACK", false),
            log_level: env_var_or("SAKINA_LOG_LEVEL", "info".to_string()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for SakinaConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            transcript_strategy: TranscriptStrategy::default(),
            local_fallback: false,
            log_level: "info".to_string(),
        }
    }
}

pub static CONFIG: Lazy<SakinaConfig> = Lazy::new(SakinaConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SakinaConfig::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.gemini_model, "gemini-2.5-flash");
        assert!(!config.local_fallback);
        assert_eq!(config.transcript_strategy, TranscriptStrategy::LeadingExchange);
    }

    #[test]
    fn test_bind_address() {
        let config = SakinaConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..SakinaConfig::default()
        };
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_env_var_or_missing_key_uses_default() {
        let value: u16 = env_var_or("SAKINA_TEST_SURELY_UNSET_KEY", 42);
        assert_eq!(value, 42);
    }
}
