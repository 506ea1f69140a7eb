//! Validation for the gemini, chat, and server sections.

use crate::schema::EvisionConfig;

use super::helpers::{validate_not_blank, validate_range, validate_range_f64};

/// Validate remote inference settings.
pub(crate) fn validate_gemini(errors: &mut Vec<String>, config: &EvisionConfig) {
    let gemini = &config.gemini;
    validate_not_blank(errors, "gemini.model", &gemini.model);
    if let Some(key) = &gemini.api_key {
        validate_not_blank(errors, "gemini.api_key", key);
    }
    validate_range(errors, "gemini.max_tokens", u64::from(gemini.max_tokens), 1, 65536);
    validate_range_f64(errors, "gemini.temperature", gemini.temperature, 0.0, 2.0);
    validate_range(errors, "gemini.timeout_secs", gemini.timeout_secs, 1, 300);
    validate_range(
        errors,
        "gemini.connect_timeout_secs",
        gemini.connect_timeout_secs,
        1,
        60,
    );
}

/// Validate chat session behavior.
pub(crate) fn validate_chat(errors: &mut Vec<String>, config: &EvisionConfig) {
    let chat = &config.chat;
    validate_not_blank(errors, "chat.system_instruction", &chat.system_instruction);
    validate_range(errors, "chat.context_window", chat.context_window as u64, 1, 64);

    // The cap must leave room for the system turn plus one full window.
    if chat.max_transcript_turns != 0 && chat.max_transcript_turns <= chat.context_window {
        errors.push(format!(
            "chat.max_transcript_turns = {} must be 0 or greater than chat.context_window = {}",
            chat.max_transcript_turns, chat.context_window
        ));
    }
}

/// Validate HTTP server settings.
pub(crate) fn validate_server(errors: &mut Vec<String>, config: &EvisionConfig) {
    let server = &config.server;
    validate_not_blank(errors, "server.host", &server.host);
    validate_range(
        errors,
        "server.session_idle_ttl_secs",
        server.session_idle_ttl_secs,
        60,
        7 * 24 * 3600,
    );
    validate_range(
        errors,
        "server.reap_interval_secs",
        server.reap_interval_secs,
        1,
        3600,
    );
}
