//! evision: EV innovation analyzer.
//!
//! Serves the static pages, per-session chat with Gemini and the one-shot
//! innovation score over HTTP, or prints a single score from the command
//! line.

mod cli;
mod pages;
mod server;

use std::sync::Arc;
use std::time::Duration;

use evision_ai::{
    analyze_one_shot, AiClient, ChatPolicy, Conversation, GeminiClient, GeminiConfig,
    RemoteError, ScoreAnalyst, ScoreRequestError, SessionRegistry,
};
use evision_common::EvisionError;
use evision_config::schema::GeminiSection;
use evision_config::{EvisionConfig, LogLevel};
use tracing_subscriber::EnvFilter;

use crate::cli::Command;
use crate::server::AppState;

/// Load `KEY=VALUE` lines from a `.env` file without overriding variables
/// already set in the environment.
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Current directory
        std::path::PathBuf::from(".env"),
        // Workspace root, two levels up from crates/evision-app/
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                let line = line.strip_prefix("export ").unwrap_or(line);
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

/// Filter directive for `--log-level`: a bare level is scoped to the
/// evision crates, anything else is used as-is.
fn log_directive(cli_level: Option<&str>, config_level: LogLevel) -> String {
    let level = match cli_level.map(str::trim) {
        None | Some("") => config_level,
        Some(raw) => match raw.to_ascii_lowercase().as_str() {
            "trace" => LogLevel::Trace,
            "debug" => LogLevel::Debug,
            "info" => LogLevel::Info,
            "warn" => LogLevel::Warn,
            "error" => LogLevel::Error,
            _ => return raw.to_string(),
        },
    };
    level.directive().to_string()
}

fn init_logging(cli_level: Option<&str>, config_level: LogLevel) {
    let directive = log_directive(cli_level, config_level);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&directive))
        .unwrap_or_else(|_| EnvFilter::new(LogLevel::Info.directive()));

    // Logs go to stderr so `evision score` output stays clean on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Client settings from `[gemini]`. A key in the config wins over the
/// environment.
fn gemini_config(section: &GeminiSection) -> Result<GeminiConfig, RemoteError> {
    let config = match &section.api_key {
        Some(key) => GeminiConfig::new(key.clone()),
        None => GeminiConfig::from_env()?,
    };
    Ok(config
        .with_model(section.model.clone())
        .with_max_tokens(section.max_tokens)
        .with_temperature(section.temperature)
        .with_timeout(Duration::from_secs(section.timeout_secs))
        .with_connect_timeout(Duration::from_secs(section.connect_timeout_secs)))
}

fn chat_policy(config: &EvisionConfig) -> ChatPolicy {
    ChatPolicy {
        context_window: config.chat.context_window,
        pin_system_instruction: config.chat.pin_system_instruction,
        request_timeout: Duration::from_secs(config.gemini.timeout_secs),
    }
}

fn max_transcript_turns(config: &EvisionConfig) -> Option<usize> {
    match config.chat.max_transcript_turns {
        0 => None,
        n => Some(n),
    }
}

async fn run(command: Command, config: EvisionConfig) -> Result<(), EvisionError> {
    let gemini = gemini_config(&config.gemini).map_err(|e| EvisionError::Remote(e.to_string()))?;
    let client = GeminiClient::new(gemini).map_err(|e| EvisionError::Remote(e.to_string()))?;
    tracing::info!(model = client.model(), "Gemini client ready");
    let client: Arc<dyn AiClient> = Arc::new(client);
    let timeout = Duration::from_secs(config.gemini.timeout_secs);

    match command {
        Command::Score { brand, model } => {
            let analysis = analyze_one_shot(client.as_ref(), &brand, &model, timeout)
                .await
                .map_err(|e| match e {
                    ScoreRequestError::Remote(e) => EvisionError::Remote(e.to_string()),
                    other => EvisionError::Other(other.to_string()),
                })?;
            println!(
                "⚡ {} {} - Innovation Analysis\n\n{analysis}",
                brand.trim(),
                model.trim()
            );
            Ok(())
        }
        Command::Serve { host, port } => {
            let registry = SessionRegistry::new(
                config.chat.system_instruction.clone(),
                max_transcript_turns(&config),
            );

            let reaper = registry.clone();
            let ttl = Duration::from_secs(config.server.session_idle_ttl_secs);
            let interval = Duration::from_secs(config.server.reap_interval_secs);
            tokio::spawn(async move {
                loop {
                    tokio::time::sleep(interval).await;
                    let reaped = reaper.reap_idle(ttl).await;
                    let count = reaper.count().await;
                    tracing::debug!(reaped, sessions = count, "Reaper tick");
                }
            });

            let policy = chat_policy(&config);
            tracing::info!(
                window = policy.context_window,
                pinned = policy.pin_system_instruction,
                "Chat policy"
            );

            let state = Arc::new(AppState {
                registry,
                conversation: Conversation::new(client.clone(), policy),
                analyst: ScoreAnalyst::new(client, timeout),
            });

            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);
            server::serve(state, &host, port).await
        }
    }
}

#[tokio::main]
async fn main() {
    load_dotenv();

    let args = cli::parse();

    let config = evision_config::load_config(args.config.as_deref());
    let config_level = config
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();
    init_logging(args.log_level.as_deref(), config_level);

    tracing::info!("EVision v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load config");
            std::process::exit(1);
        }
    };
    tracing::debug!(
        schema = evision_config::CONFIG_SCHEMA_VERSION,
        config = %evision_config::config_to_json(&config),
        "Config loaded"
    );

    if let Err(e) = run(args.command_or_serve(), config).await {
        tracing::error!(error = %e, "EVision stopped");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_cli_level_is_scoped_to_evision() {
        assert_eq!(
            log_directive(Some("debug"), LogLevel::Info),
            LogLevel::Debug.directive()
        );
        assert_eq!(
            log_directive(Some("WARN"), LogLevel::Info),
            LogLevel::Warn.directive()
        );
    }

    #[test]
    fn raw_cli_directive_is_passed_through() {
        assert_eq!(
            log_directive(Some("evision=trace,tower_http=debug"), LogLevel::Info),
            "evision=trace,tower_http=debug"
        );
    }

    #[test]
    fn config_level_applies_without_cli_override() {
        assert_eq!(log_directive(None, LogLevel::Error), LogLevel::Error.directive());
        assert_eq!(log_directive(Some("  "), LogLevel::Debug), LogLevel::Debug.directive());
    }

    #[test]
    fn config_api_key_wins_and_settings_carry_over() {
        let section = GeminiSection {
            api_key: Some("from-config".into()),
            model: "gemini-test".into(),
            timeout_secs: 12,
            ..GeminiSection::default()
        };
        let config = gemini_config(&section).unwrap();
        let client = GeminiClient::new(config).unwrap();
        assert_eq!(client.model(), "gemini-test");
    }

    #[test]
    fn zero_transcript_cap_means_unbounded() {
        let mut config = EvisionConfig::default();
        assert_eq!(max_transcript_turns(&config), Some(200));
        config.chat.max_transcript_turns = 0;
        assert_eq!(max_transcript_turns(&config), None);
    }

    #[test]
    fn chat_policy_follows_config() {
        let mut config = EvisionConfig::default();
        config.chat.context_window = 12;
        config.chat.pin_system_instruction = true;
        config.gemini.timeout_secs = 45;

        let policy = chat_policy(&config);
        assert_eq!(policy.context_window, 12);
        assert!(policy.pin_system_instruction);
        assert_eq!(policy.request_timeout, Duration::from_secs(45));
    }
}
