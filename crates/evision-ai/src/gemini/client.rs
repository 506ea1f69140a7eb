//! Gemini API client struct, request building, and response parsing.

use crate::{AiResponse, RemoteError, Role, TokenUsage, Turn};

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| RemoteError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub(crate) fn api_url(&self) -> String {
        format!("{}/{}:generateContent", self.config.base_url, self.config.model)
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(&self, turns: &[Turn]) -> serde_json::Value {
        let mut contents = Vec::new();

        for turn in turns {
            let role = match turn.role {
                Role::User => "user",
                Role::Model => "model",
                Role::System => continue, // handled via systemInstruction
            };
            contents.push(serde_json::json!({
                "role": role,
                "parts": [{ "text": turn.text }]
            }));
        }

        let mut body = serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }
        });

        // System instruction
        if let Some(system) = turns.iter().find(|t| t.role == Role::System) {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": system.text }]
            });
        }

        body
    }

    /// Parse a Gemini response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, RemoteError> {
        if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
            return Err(RemoteError::Parse(format!("prompt blocked: {reason}")));
        }

        let candidates = json["candidates"]
            .as_array()
            .ok_or_else(|| RemoteError::Parse("no candidates in response".to_string()))?;

        let first = candidates
            .first()
            .ok_or_else(|| RemoteError::Parse("empty candidates".to_string()))?;

        let text: String = first["content"]["parts"]
            .as_array()
            .map(|parts| parts.iter().filter_map(|p| p["text"].as_str()).collect())
            .unwrap_or_default();

        if text.is_empty() {
            let reason = first["finishReason"].as_str().unwrap_or("UNKNOWN");
            return Err(RemoteError::Parse(format!(
                "response contained no text (finish reason: {reason})"
            )));
        }

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        Ok(AiResponse { text, usage })
    }
}

/// Pull the human-readable message out of a Gemini error body, falling back
/// to the raw body.
pub(crate) fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
