//! Router tests driven through `tower::ServiceExt::oneshot`.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use evision_ai::{
    AiClient, AiResponse, ChatPolicy, Conversation, RemoteError, Role, ScoreAnalyst,
    SessionRegistry, TokenUsage, Turn,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::{router, AppState};

const PERSONA: &str = "You are EVision AI.";

/// Replies `re: <last user text>` or fails with a fixed error.
struct FakeGemini {
    failure: Option<RemoteError>,
    prompts: Mutex<Vec<String>>,
}

impl FakeGemini {
    fn ok() -> Self {
        Self {
            failure: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn failing(err: RemoteError) -> Self {
        Self {
            failure: Some(err),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl AiClient for FakeGemini {
    async fn send_message(&self, turns: &[Turn]) -> Result<AiResponse, RemoteError> {
        let last_user = turns
            .iter()
            .rev()
            .find(|t| t.role == Role::User)
            .map(|t| t.text.clone())
            .unwrap_or_default();
        self.prompts.lock().unwrap().push(last_user.clone());

        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        Ok(AiResponse {
            text: format!("re: {last_user}"),
            usage: TokenUsage::default(),
        })
    }
}

struct Harness {
    app: Router,
    state: Arc<AppState>,
    client: Arc<FakeGemini>,
}

fn harness(client: FakeGemini) -> Harness {
    let client = Arc::new(client);
    let dyn_client: Arc<dyn AiClient> = client.clone();
    let state = Arc::new(AppState {
        registry: SessionRegistry::new(PERSONA, Some(200)),
        conversation: Conversation::new(dyn_client.clone(), ChatPolicy::default()),
        analyst: ScoreAnalyst::new(dyn_client, Duration::from_secs(5)),
    });
    Harness {
        app: router(state.clone()),
        state,
        client,
    }
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn new_session(app: &Router) -> String {
    let (status, body) = send(app, "POST", "/api/sessions", None).await;
    assert_eq!(status, StatusCode::CREATED);
    body["session_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_reports_version() {
    let h = harness(FakeGemini::ok());
    let (status, body) = send(&h.app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn index_serves_html() {
    let h = harness(FakeGemini::ok());
    let response = h
        .app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn pages_are_listed_and_fetched_by_slug() {
    let h = harness(FakeGemini::ok());

    let (status, body) = send(&h.app, "GET", "/api/pages", None).await;
    assert_eq!(status, StatusCode::OK);
    let slugs: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, ["home", "chat", "score", "about"]);

    let (status, body) = send(&h.app, "GET", "/api/pages/about", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "About EVision 🌟");

    let (status, body) = send(&h.app, "GET", "/api/pages/pricing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "page not found");
}

#[tokio::test]
async fn rubric_lists_weights_and_brands() {
    let h = harness(FakeGemini::ok());
    let (status, body) = send(&h.app, "GET", "/api/rubric", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["components"][0]["name"], "Technology");
    assert_eq!(body["components"][0]["weight"], 40);
    assert_eq!(body["suggested_brands"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn new_session_has_empty_visible_transcript() {
    let h = harness(FakeGemini::ok());
    let id = new_session(&h.app).await;

    let (status, body) = send(&h.app, "GET", &format!("/api/sessions/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["session_id"], id.as_str());
    assert_eq!(body["transcript"], json!([]));
    assert_eq!(body["busy"], false);
    assert_eq!(h.state.registry.count().await, 1);
}

#[tokio::test]
async fn message_round_trip() {
    let h = harness(FakeGemini::ok());
    let id = new_session(&h.app).await;

    let (status, body) = send(
        &h.app,
        "POST",
        &format!("/api/sessions/{id}/messages"),
        Some(json!({ "text": "hello" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "replied");
    assert_eq!(body["reply"], json!({ "role": "model", "text": "re: hello" }));
    assert_eq!(
        body["transcript"],
        json!([
            { "role": "user", "text": "hello" },
            { "role": "model", "text": "re: hello" }
        ])
    );
}

#[tokio::test]
async fn blank_message_is_ignored() {
    let h = harness(FakeGemini::ok());
    let id = new_session(&h.app).await;

    let (status, body) = send(
        &h.app,
        "POST",
        &format!("/api/sessions/{id}/messages"),
        Some(json!({ "text": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "ignored");
    assert!(body["reply"].is_null());
    assert_eq!(body["transcript"], json!([]));
    assert!(h.client.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn remote_failure_is_a_failed_outcome_not_an_http_error() {
    let h = harness(FakeGemini::failing(RemoteError::RateLimited(
        "quota exceeded".into(),
    )));
    let id = new_session(&h.app).await;

    let (status, body) = send(
        &h.app,
        "POST",
        &format!("/api/sessions/{id}/messages"),
        Some(json!({ "text": "hello" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "failed");
    let reply = body["reply"]["text"].as_str().unwrap();
    assert!(reply.starts_with("⚠️ Error: "));
    assert!(reply.contains("quota exceeded"));
    assert_eq!(body["transcript"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_or_malformed_session_is_404() {
    let h = harness(FakeGemini::ok());
    let missing = evision_common::SessionId::new();

    let (status, _) = send(&h.app, "GET", &format!("/api/sessions/{missing}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&h.app, "GET", "/api/sessions/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "session not found");

    let (status, _) = send(
        &h.app,
        "POST",
        &format!("/api/sessions/{missing}/messages"),
        Some(json!({ "text": "hello" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_ends_session() {
    let h = harness(FakeGemini::ok());
    let id = new_session(&h.app).await;
    let uri = format!("/api/sessions/{id}");

    let (status, _) = send(&h.app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&h.app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&h.app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(h.state.registry.count().await, 0);
}

#[tokio::test]
async fn innovation_score_returns_analysis() {
    let h = harness(FakeGemini::ok());
    let (status, body) = send(
        &h.app,
        "POST",
        "/api/innovation-score",
        Some(json!({ "brand": "Tesla", "model": "Model 3" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["brand"], "Tesla");
    assert_eq!(body["model"], "Model 3");
    let analysis = body["analysis"].as_str().unwrap();
    assert!(analysis.contains("Analyze the Tesla Model 3"));
    assert_eq!(h.state.registry.count().await, 0);
}

#[tokio::test]
async fn innovation_score_blank_model_is_400() {
    let h = harness(FakeGemini::ok());
    let (status, body) = send(
        &h.app,
        "POST",
        "/api/innovation-score",
        Some(json!({ "brand": "BYD", "model": "  " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please enter a model name");
    assert!(h.client.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn innovation_score_remote_failure_is_502() {
    let h = harness(FakeGemini::failing(RemoteError::Unauthorized(
        "API key not valid".into(),
    )));
    let (status, body) = send(
        &h.app,
        "POST",
        "/api/innovation-score",
        Some(json!({ "brand": "MG", "model": "ZS EV" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("API key not valid"));
}
