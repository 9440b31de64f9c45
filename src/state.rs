// src/state.rs
// Shared state for HTTP handlers

use std::sync::Arc;

use crate::config::{CredentialSource, EnvCredentials, SakinaConfig};
use crate::llm::GenerationGateway;

pub struct AppState {
    pub config: SakinaConfig,
    pub gateway: GenerationGateway,
}

impl AppState {
    pub fn new(config: SakinaConfig, gateway: GenerationGateway) -> Self {
        Self { config, gateway }
    }

    /// State backed by Gemini, with the credential read from the environment on each call
    pub fn from_config(config: SakinaConfig) -> Self {
        let credentials: Arc<dyn CredentialSource> = Arc::new(EnvCredentials);
        let gateway = GenerationGateway::gemini(credentials, &config);
        Self::new(config, gateway)
    }

    pub fn fallback_enabled(&self) -> bool {
        self.config.local_fallback
    }

    /// Chat can be served: live credential present, or fallback mode on
    pub fn service_available(&self) -> bool {
        self.gateway.is_configured() || self.fallback_enabled()
    }

    /// No credential, but fallback mode answers instead of the gateway
    pub fn use_fallback(&self) -> bool {
        !self.gateway.is_configured() && self.fallback_enabled()
    }
}
