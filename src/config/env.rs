// src/config/env.rs
// Credential lookup, performed per call rather than at startup

/// Environment variable holding the Gemini credential
pub const GEMINI_KEY_VAR: &str = "GEMINI_API_KEY";

/// Source of the generation-service credential.
///
/// Read on every call so a key added to the environment after startup is
/// picked up by the next request.
pub trait CredentialSource: Send + Sync {
    fn gemini_api_key(&self) -> Option<String>;

    fn has_gemini_key(&self) -> bool {
        self.gemini_api_key().is_some()
    }
}

/// Reads the credential from the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentials;

impl EnvCredentials {
    /// Resolve the key through `lookup`, filtering empty values
    fn key_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        lookup(GEMINI_KEY_VAR).filter(|k| !k.trim().is_empty())
    }
}

impl CredentialSource for EnvCredentials {
    fn gemini_api_key(&self) -> Option<String> {
        Self::key_from(|name| std::env::var(name).ok())
    }
}

/// Fixed credential, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials(pub Option<String>);

impl StaticCredentials {
    pub fn with_key(key: impl Into<String>) -> Self {
        Self(Some(key.into()))
    }

    pub fn missing() -> Self {
        Self(None)
    }
}

impl CredentialSource for StaticCredentials {
    fn gemini_api_key(&self) -> Option<String> {
        self.0.clone().filter(|k| !k.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_credentials_present() {
        let creds = StaticCredentials::with_key("abc");
        assert_eq!(creds.gemini_api_key().as_deref(), Some("abc"));
        assert!(creds.has_gemini_key());
    }

    #[test]
    fn test_static_credentials_blank_is_missing() {
        assert!(!StaticCredentials::with_key("   ").has_gemini_key());
        assert!(!StaticCredentials::missing().has_gemini_key());
    }

    #[test]
    fn test_only_gemini_key_is_read() {
        let env = |pairs: &'static [(&'static str, &'static str)]| {
            move |name: &str| {
                pairs
                    .iter()
                    .find(|(k, _)| *k == name)
                    .map(|(_, v)| v.to_string())
            }
        };

        assert_eq!(
            EnvCredentials::key_from(env(&[("GEMINI_API_KEY", "abc")])).as_deref(),
            Some("abc")
        );
        assert_eq!(EnvCredentials::key_from(env(&[("GOOGLE_API_KEY", "abc")])), None);
        assert_eq!(EnvCredentials::key_from(env(&[("GEMINI_API_KEY", "  ")])), None);
    }
}
