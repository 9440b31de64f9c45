// tests/test_helpers.rs
// Shared fixtures: scripted generator and app construction

#![allow(dead_code)]

use anyhow::anyhow;
use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

use sakina::config::{CredentialSource, SakinaConfig, StaticCredentials};
use sakina::llm::{GenerationGateway, GenerationOutput, TextGenerator, Transcript};
use sakina::state::AppState;

/// What the scripted generator answers with
#[derive(Clone)]
pub enum Scripted {
    Text(String),
    Empty,
    Fail,
}

pub struct ScriptedGenerator {
    reply: Scripted,
    seen: Arc<Mutex<Vec<Transcript>>>,
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, transcript: &Transcript) -> anyhow::Result<GenerationOutput> {
        self.seen.lock().unwrap().push(transcript.clone());
        match &self.reply {
            Scripted::Text(text) => Ok(GenerationOutput::Text(text.clone())),
            Scripted::Empty => Ok(GenerationOutput::NoText),
            Scripted::Fail => Err(anyhow!("API error 500 Internal Server Error: upstream exploded")),
        }
    }

    fn model_name(&self) -> String {
        "scripted".to_string()
    }
}

pub struct TestApp {
    pub router: Router,
    /// Every transcript handed to the generator
    pub seen: Arc<Mutex<Vec<Transcript>>>,
}

pub fn build_app(api_key: Option<&str>, config: SakinaConfig, reply: Scripted) -> TestApp {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let credentials: Arc<dyn CredentialSource> = Arc::new(StaticCredentials(api_key.map(str::to_string)));

    let factory_seen = seen.clone();
    let gateway = GenerationGateway::new(
        credentials,
        Box::new(move |_api_key| {
            Arc::new(ScriptedGenerator {
                reply: reply.clone(),
                seen: factory_seen.clone(),
            }) as Arc<dyn TextGenerator>
        }),
    );

    let state = Arc::new(AppState::new(config, gateway));
    TestApp {
        router: sakina::api::create_router(state),
        seen,
    }
}

/// Configured with a key, replying with `text`
pub fn configured_app(text: &str) -> TestApp {
    build_app(Some("test-key"), SakinaConfig::default(), Scripted::Text(text.to_string()))
}

pub fn fallback_config() -> SakinaConfig {
    SakinaConfig {
        local_fallback: true,
        ..SakinaConfig::default()
    }
}

pub fn questionnaire() -> Value {
    json!({
        "age": "18-25",
        "maritalStatus": "single",
        "prayerCommitment": "always",
        "dhikrPractice": "always",
        "mentalState": "good"
    })
}

pub fn chat_body(text: &str, persona: &str) -> Value {
    json!({
        "messages": [
            { "role": "user", "content": text, "timestamp": 1_700_000_000_000_i64 }
        ],
        "questionnaireData": questionnaire(),
        "personaId": persona
    })
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
