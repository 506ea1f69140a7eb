//! HTTP surface: static pages, chat sessions and the one-shot score.

mod error;
mod handlers;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use evision_ai::{Conversation, ScoreAnalyst, SessionRegistry};
use evision_common::EvisionError;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Shared state handed to every handler.
pub struct AppState {
    pub registry: SessionRegistry,
    pub conversation: Conversation,
    pub analyst: ScoreAnalyst,
}

pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/pages", get(handlers::list_pages))
        .route("/pages/{slug}", get(handlers::get_page))
        .route("/rubric", get(handlers::rubric))
        .route("/sessions", post(handlers::create_session))
        .route(
            "/sessions/{id}",
            get(handlers::get_session).delete(handlers::end_session),
        )
        .route("/sessions/{id}/messages", post(handlers::post_message))
        .route("/innovation-score", post(handlers::innovation_score));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .nest("/api", api)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Bind `host:port` and serve until the process exits.
pub async fn serve(state: Arc<AppState>, host: &str, port: u16) -> Result<(), EvisionError> {
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| EvisionError::Server(format!("failed to bind {addr}: {e}")))?;

    tracing::info!(%addr, "EVision listening");

    axum::serve(listener, router(state))
        .await
        .map_err(|e| EvisionError::Server(format!("server error: {e}")))
}
