// tests/http_api.rs

mod test_helpers;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use sakina::api::error::{INTERNAL_USER_MESSAGE, NOT_CONFIGURED_USER_MESSAGE};
use sakina::config::SakinaConfig;
use sakina::llm::{EMPTY_REPLY_APOLOGY, ModelRole, TranscriptStrategy};
use sakina::persona::PersonaId;
use sakina::prompt::assemble;
use sakina::prompt::fallback::FALLBACK_VERSE;
use sakina::questionnaire::QuestionnaireAnswers;
use test_helpers::*;

fn answers() -> QuestionnaireAnswers {
    serde_json::from_value(questionnaire()).unwrap()
}

#[tokio::test]
async fn test_chat_returns_reply() {
    let app = configured_app("وعليكم السلام ورحمة الله");

    let response = app
        .router
        .clone()
        .oneshot(post_json("/api/chat", &chat_body("السلام عليكم", "quranic")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["message"], "وعليكم السلام ورحمة الله");

    let seen = app.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let transcript = &seen[0];

    // Leading exchange: context turn, acknowledgement, then the real turn
    assert!(transcript.system_instruction.is_none());
    assert_eq!(transcript.turns.len(), 3);
    assert_eq!(transcript.turns[0].role, ModelRole::User);
    assert!(transcript.turns[0].text.contains(&assemble(&answers(), PersonaId::Quranic)));
    assert_eq!(transcript.turns[1].role, ModelRole::Model);
    let last = transcript.last_turn().unwrap();
    assert_eq!(last.role, ModelRole::User);
    assert_eq!(last.text, "السلام عليكم");
}

#[tokio::test]
async fn test_chat_system_instruction_strategy() {
    let config = SakinaConfig {
        transcript_strategy: TranscriptStrategy::SystemInstruction,
        ..SakinaConfig::default()
    };
    let app = build_app(Some("k"), config, Scripted::Text("أهلاً".into()));

    let body = json!({
        "messages": [
            { "role": "assistant", "content": "كيف حالك؟", "timestamp": 1 },
            { "role": "user", "content": "بخير", "timestamp": 2 },
            { "role": "assistant", "content": "الحمد لله", "timestamp": 3 },
            { "role": "user", "content": "لكني قلق", "timestamp": 4 }
        ],
        "questionnaireData": questionnaire()
    });

    let response = app.router.clone().oneshot(post_json("/api/chat", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let seen = app.seen.lock().unwrap();
    let transcript = &seen[0];
    assert_eq!(
        transcript.system_instruction.as_deref(),
        Some(assemble(&answers(), PersonaId::Psychological).as_str())
    );
    let roles: Vec<_> = transcript.turns.iter().map(|t| t.role).collect();
    assert_eq!(
        roles,
        vec![ModelRole::Model, ModelRole::User, ModelRole::Model, ModelRole::User]
    );
    assert_eq!(transcript.turns[3].text, "لكني قلق");
}

#[tokio::test]
async fn test_chat_without_credential_is_503() {
    let app = build_app(None, SakinaConfig::default(), Scripted::Text("unused".into()));

    let response = app
        .router
        .clone()
        .oneshot(post_json("/api/chat", &chat_body("السلام عليكم", "quranic")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = json_body(response).await;
    assert!(body["error"].is_string());
    assert!(body.get("status").is_none());
    assert_eq!(body["userMessage"], NOT_CONFIGURED_USER_MESSAGE);
    assert!(app.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_chat_validation_details() {
    let app = configured_app("unused");
    let mut body = chat_body("مرحبا", "family");
    body["questionnaireData"].as_object_mut().unwrap().remove("age");
    body["personaId"] = json!("astrologer");

    let response = app.router.clone().oneshot(post_json("/api/chat", &body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"].is_string());
    let paths: Vec<_> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["path"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(paths, vec!["questionnaireData.age", "personaId"]);
    assert!(app.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_chat_accepts_fractional_timestamp() {
    let app = configured_app("أهلاً");
    let mut body = chat_body("السلام عليكم", "quranic");
    body["messages"][0]["timestamp"] = json!(1_700_000_000_000.0);

    let response = app.router.clone().oneshot(post_json("/api/chat", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["message"], "أهلاً");
}

#[tokio::test]
async fn test_chat_remembrance_given_twice() {
    let app = configured_app("unused");
    let mut body = chat_body("مرحبا", "family");
    body["questionnaireData"]["remembrancePractice"] = json!("no");

    let response = app.router.clone().oneshot(post_json("/api/chat", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["details"][0]["path"], "questionnaireData.dhikrPractice");
}

#[tokio::test]
async fn test_chat_rejects_blank_user_turn() {
    let app = configured_app("unused");
    let response = app
        .router
        .clone()
        .oneshot(post_json("/api/chat", &chat_body("   ", "psychological")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_chat_provider_failure_is_500() {
    let app = build_app(Some("k"), SakinaConfig::default(), Scripted::Fail);

    let response = app
        .router
        .clone()
        .oneshot(post_json("/api/chat", &chat_body("مرحبا", "psychological")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["userMessage"], INTERNAL_USER_MESSAGE);
    // Provider detail stays in the server log
    assert!(!body.to_string().contains("upstream exploded"));
}

#[tokio::test]
async fn test_chat_empty_output_gets_apology() {
    let app = build_app(Some("k"), SakinaConfig::default(), Scripted::Empty);

    let response = app
        .router
        .clone()
        .oneshot(post_json("/api/chat", &chat_body("مرحبا", "psychological")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["message"], EMPTY_REPLY_APOLOGY);
}

#[tokio::test]
async fn test_chat_fallback_echoes() {
    let app = build_app(None, fallback_config(), Scripted::Fail);

    let response = app
        .router
        .clone()
        .oneshot(post_json("/api/chat", &chat_body("أشعر بالضيق", "family")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let message = json_body(response).await["message"].as_str().unwrap().to_string();
    assert!(message.contains("أشعر بالضيق"));
    assert!(app.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_health_reports_credential() {
    let app = configured_app("unused");
    let response = app.router.clone().oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "ok");

    let app = build_app(None, SakinaConfig::default(), Scripted::Empty);
    let response = app.router.clone().oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "missing_api_key");
    assert!(body["message"].as_str().unwrap().contains("GEMINI_API_KEY"));

    let response = app.router.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(json_body(response).await["status"], "missing_api_key");
}

#[tokio::test]
async fn test_health_ok_in_fallback_mode() {
    let app = build_app(None, fallback_config(), Scripted::Empty);
    let response = app.router.clone().oneshot(get("/api/health")).await.unwrap();
    assert_eq!(json_body(response).await["status"], "ok");
}

#[tokio::test]
async fn test_verse_lookup() {
    let app = configured_app("﴿ فَإِنَّ مَعَ الْعُسْرِ يُسْرًا ﴾\n**سورة الشرح، الآية 5**");

    let response = app
        .router
        .clone()
        .oneshot(post_json("/api/ikhtiyarah", &json!({ "feeling": "ضيق" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let verse = json_body(response).await["verse"].as_str().unwrap().to_string();
    assert!(verse.contains('﴿') || verse.contains("**"));

    let seen = app.seen.lock().unwrap();
    assert!(seen[0].system_instruction.is_some());
    assert_eq!(seen[0].turns.len(), 1);
    assert!(seen[0].turns[0].text.contains("ضيق"));
}

#[tokio::test]
async fn test_verse_requires_feeling() {
    let app = configured_app("unused");
    let response = app
        .router
        .clone()
        .oneshot(post_json("/api/ikhtiyarah", &json!({ "feeling": "  " })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_verse_without_credential() {
    let app = build_app(None, SakinaConfig::default(), Scripted::Empty);
    let response = app
        .router
        .clone()
        .oneshot(post_json("/api/ikhtiyarah", &json!({ "feeling": "حزن" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let app = build_app(None, fallback_config(), Scripted::Empty);
    let response = app
        .router
        .clone()
        .oneshot(post_json("/api/ikhtiyarah", &json!({ "feeling": "حزن" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["verse"], FALLBACK_VERSE);
}
