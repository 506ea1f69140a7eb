//! AiClient trait implementation for GeminiClient.

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::{AiClient, AiResponse, RemoteError, Turn};

use super::client::{error_detail, GeminiClient};

#[async_trait]
impl AiClient for GeminiClient {
    async fn send_message(&self, turns: &[Turn]) -> Result<AiResponse, RemoteError> {
        let body = self.build_request_body(turns);
        let url = self.api_url();

        debug!(model = %self.config.model, turns = turns.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let detail = error_detail(&text);
            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => RemoteError::RateLimited(detail),
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    RemoteError::Unauthorized(detail)
                }
                _ => RemoteError::Api {
                    status: status.as_u16(),
                    message: detail,
                },
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| RemoteError::Parse(e.to_string()))?;

        self.parse_response(json)
    }
}

impl GeminiClient {
    fn transport_error(&self, e: reqwest::Error) -> RemoteError {
        if e.is_timeout() {
            RemoteError::Timeout(self.config.timeout)
        } else {
            RemoteError::Network(e.to_string())
        }
    }
}
