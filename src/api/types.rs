// src/api/types.rs
// Request/response bodies and request validation

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::error::{ApiError, FieldIssue};
use crate::llm::{Message, Role};
use crate::persona::PersonaId;
use crate::questionnaire::{Dimension, QuestionnaireAnswers};

const REQUIRED: &str = "Required";

/// Accepted in place of `dhikrPractice`
const REMEMBRANCE_ALIAS: &str = "remembrancePractice";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// Full transcript; the last entry is the new user turn
    pub messages: Vec<Message>,
    pub questionnaire_data: QuestionnaireAnswers,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona_id: Option<PersonaId>,
}

impl ChatRequest {
    /// Split into (prior turns, new user text). Only valid after validation.
    pub fn split_turns(&self) -> (&[Message], &str) {
        match self.messages.split_last() {
            Some((last, prior)) => (prior, last.content.as_str()),
            None => (&[], ""),
        }
    }

    pub fn persona(&self) -> PersonaId {
        self.persona_id.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerseRequest {
    pub feeling: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerseResponse {
    pub verse: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Ok,
    MissingApiKey,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub message: String,
}

/// Structural checks on a raw JSON body, reported per field
pub trait ValidateBody {
    fn validate(value: &Value) -> Vec<FieldIssue>;
}

/// Parse and validate a request body. Any problem becomes a 400.
pub fn parse_body<T>(body: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + ValidateBody,
{
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::validation(vec![FieldIssue::new("", format!("Malformed JSON: {e}"))]))?;

    let issues = T::validate(&value);
    if !issues.is_empty() {
        return Err(ApiError::validation(issues));
    }

    serde_json::from_value(value).map_err(|e| ApiError::validation(vec![FieldIssue::new("", e.to_string())]))
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn as_object<'a>(value: &'a Value, path: &str, issues: &mut Vec<FieldIssue>) -> Option<&'a Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        Value::Null => {
            issues.push(FieldIssue::new(path, REQUIRED));
            None
        }
        _ => {
            issues.push(FieldIssue::new(path, "Expected object"));
            None
        }
    }
}

/// Present, a string, and non-blank
fn require_text<'a>(obj: &'a Map<String, Value>, prefix: &str, key: &str, issues: &mut Vec<FieldIssue>) -> Option<&'a str> {
    let path = join(prefix, key);
    match obj.get(key) {
        None | Some(Value::Null) => {
            issues.push(FieldIssue::new(path, REQUIRED));
            None
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            issues.push(FieldIssue::new(path, REQUIRED));
            None
        }
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            issues.push(FieldIssue::new(path, "Expected string"));
            None
        }
    }
}

/// Absent, null, or a string
fn optional_text(obj: &Map<String, Value>, prefix: &str, key: &str, issues: &mut Vec<FieldIssue>) {
    if let Some(v) = obj.get(key)
        && !matches!(v, Value::Null | Value::String(_))
    {
        issues.push(FieldIssue::new(join(prefix, key), "Expected string"));
    }
}

fn validate_message(value: &Value, path: &str, issues: &mut Vec<FieldIssue>) -> Option<(Role, String)> {
    let obj = as_object(value, path, issues)?;

    let role = match obj.get("role") {
        None | Some(Value::Null) => {
            issues.push(FieldIssue::new(join(path, "role"), REQUIRED));
            None
        }
        Some(v) => match serde_json::from_value::<Role>(v.clone()) {
            Ok(role) => Some(role),
            Err(_) => {
                issues.push(FieldIssue::new(join(path, "role"), "Expected 'user' | 'assistant'"));
                None
            }
        },
    };

    let content = match obj.get("content") {
        Some(Value::String(s)) => Some(s.clone()),
        None | Some(Value::Null) => {
            issues.push(FieldIssue::new(join(path, "content"), REQUIRED));
            None
        }
        Some(_) => {
            issues.push(FieldIssue::new(join(path, "content"), "Expected string"));
            None
        }
    };

    match obj.get("timestamp") {
        Some(Value::Number(_)) => {}
        None | Some(Value::Null) => issues.push(FieldIssue::new(join(path, "timestamp"), REQUIRED)),
        Some(_) => issues.push(FieldIssue::new(join(path, "timestamp"), "Expected number")),
    }

    Some((role?, content?))
}

fn validate_questionnaire(value: &Value, path: &str, issues: &mut Vec<FieldIssue>) {
    let Some(obj) = as_object(value, path, issues) else {
        return;
    };
    for dimension in Dimension::ALL {
        let key = dimension.field_name();
        if dimension == Dimension::RemembrancePractice && obj.contains_key(REMEMBRANCE_ALIAS) {
            if obj.contains_key(key) {
                issues.push(FieldIssue::new(
                    join(path, key),
                    format!("Give either '{key}' or '{REMEMBRANCE_ALIAS}', not both"),
                ));
            } else {
                require_text(obj, path, REMEMBRANCE_ALIAS, issues);
            }
            continue;
        }
        require_text(obj, path, key, issues);
    }
    optional_text(obj, path, "specificConcerns", issues);
}

impl ValidateBody for ChatRequest {
    fn validate(value: &Value) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        let Some(root) = as_object(value, "", &mut issues) else {
            return issues;
        };

        match root.get("messages") {
            None | Some(Value::Null) => issues.push(FieldIssue::new("messages", REQUIRED)),
            Some(Value::Array(items)) => {
                let checked: Vec<_> = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| validate_message(item, &format!("messages[{i}]"), &mut issues))
                    .collect();
                // The last entry is the turn being sent and must carry text
                match checked.last() {
                    None => issues.push(FieldIssue::new("messages", "At least one message is required")),
                    Some(Some((role, content))) if *role != Role::User || content.trim().is_empty() => {
                        issues.push(FieldIssue::new(
                            format!("messages[{}]", items.len() - 1),
                            "Last message must be a non-empty user message",
                        ));
                    }
                    _ => {}
                }
            }
            Some(_) => issues.push(FieldIssue::new("messages", "Expected array")),
        }

        match root.get("questionnaireData") {
            None => issues.push(FieldIssue::new("questionnaireData", REQUIRED)),
            Some(q) => validate_questionnaire(q, "questionnaireData", &mut issues),
        }

        if let Some(persona) = root.get("personaId")
            && !persona.is_null()
            && serde_json::from_value::<PersonaId>(persona.clone()).is_err()
        {
            issues.push(FieldIssue::new(
                "personaId",
                "Expected 'psychological' | 'family' | 'quranic'",
            ));
        }

        issues
    }
}

impl ValidateBody for VerseRequest {
    fn validate(value: &Value) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        if let Some(root) = as_object(value, "", &mut issues) {
            require_text(root, "", "feeling", &mut issues);
        }
        issues
    }
}
