//! Configuration schema types for EVision.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod chat;
mod gemini;
mod server;
mod system;

pub use chat::*;
pub use gemini::*;
pub use server::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for EVision.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct EvisionConfig {
    pub gemini: GeminiSection,
    pub chat: ChatSection,
    pub server: ServerSection,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
