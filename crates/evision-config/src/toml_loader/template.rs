//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# EVision Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# Set EVISION_CONFIG to read a different file.

[gemini]
# api_key = ""               # prefer the GEMINI_API_KEY environment variable
# model = "gemini-2.5-flash"
# max_tokens = 4096          # 1-65536
# temperature = 0.7          # 0.0-2.0
# timeout_secs = 30          # 1-300, bound on one remote call
# connect_timeout_secs = 10  # 1-60

[chat]
# context_window = 8             # most recent turns sent per request (1-64)
# pin_system_instruction = false # keep the persona in every request
# max_transcript_turns = 200     # 0 = unbounded; must exceed context_window
# system_instruction = """
# You are EVision AI, an expert electric vehicle analyst. ...
# """

[server]
# host = "127.0.0.1"
# port = 8501
# session_idle_ttl_secs = 3600   # 60-604800
# reap_interval_secs = 60        # 1-3600

[logging]
# level = "info"             # trace, debug, info, warn, error
"##
    .to_string()
}
