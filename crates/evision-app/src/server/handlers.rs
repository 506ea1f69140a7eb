use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use chrono::{DateTime, Utc};
use evision_ai::{ScoreComponent, Session, Turn, RUBRIC, SUGGESTED_BRANDS};
use evision_common::SessionId;
use serde::{Deserialize, Serialize};

use super::{ApiError, AppState};
use crate::pages::{self, Page};

const INDEX_HTML: &str = include_str!("../../assets/index.html");

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct RubricResponse {
    pub components: &'static [ScoreComponent],
    pub suggested_brands: &'static [&'static str],
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub session_id: SessionId,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    pub busy: bool,
    pub transcript: Vec<Turn>,
}

#[derive(Deserialize)]
pub struct MessageRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub outcome: &'static str,
    pub reply: Option<Turn>,
    pub transcript: Vec<Turn>,
}

#[derive(Deserialize)]
pub struct ScoreRequest {
    pub brand: String,
    pub model: String,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    pub brand: String,
    pub model: String,
    pub analysis: String,
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn list_pages() -> Json<Vec<Page>> {
    Json(pages::all())
}

pub async fn get_page(Path(slug): Path<String>) -> Result<Json<Page>, ApiError> {
    pages::find(&slug)
        .map(Json)
        .ok_or(ApiError::NotFound("page"))
}

pub async fn rubric() -> Json<RubricResponse> {
    Json(RubricResponse {
        components: &RUBRIC,
        suggested_brands: &SUGGESTED_BRANDS,
    })
}

async fn session_response(session: &Session) -> SessionResponse {
    SessionResponse {
        session_id: *session.id(),
        created_at: session.created_at(),
        last_active: session.last_active(),
        busy: session.is_busy(),
        transcript: session.current_transcript().await,
    }
}

async fn lookup(state: &AppState, raw_id: &str) -> Result<Arc<Session>, ApiError> {
    let id = SessionId::parse(raw_id).ok_or(ApiError::NotFound("session"))?;
    state
        .registry
        .get(&id)
        .await
        .ok_or(ApiError::NotFound("session"))
}

pub async fn create_session(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<SessionResponse>) {
    let session = state.registry.create().await;
    (StatusCode::CREATED, Json(session_response(&session).await))
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = lookup(&state, &id).await?;
    Ok(Json(session_response(&session).await))
}

pub async fn post_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<MessageRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let session = lookup(&state, &id).await?;

    // Run on its own task so a dropped connection cannot abandon the
    // submit between the user turn and the reply.
    let conversation = state.conversation.clone();
    let submit_session = session.clone();
    let outcome = tokio::spawn(async move {
        conversation.submit(&submit_session, &request.text).await
    })
    .await
    .map_err(|e| ApiError::Internal(format!("submit task failed: {e}")))?;

    Ok(Json(MessageResponse {
        outcome: outcome.label(),
        reply: outcome.turn().cloned(),
        transcript: session.current_transcript().await,
    }))
}

pub async fn end_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = SessionId::parse(&id).ok_or(ApiError::NotFound("session"))?;
    if state.registry.end(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("session"))
    }
}

pub async fn innovation_score(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, ApiError> {
    let analysis = state
        .analyst
        .analyze(&request.brand, &request.model)
        .await?;

    Ok(Json(ScoreResponse {
        brand: request.brand.trim().to_string(),
        model: request.model.trim().to_string(),
        analysis,
    }))
}
