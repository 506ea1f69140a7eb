use serde::{Deserialize, Serialize};

/// Persona given to the model as the first turn of every chat session.
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are EVision AI, an expert electric vehicle analyst. You help users understand \
EV technology, compare vehicles using a composite Innovation Score that weighs:
- Technological Advancement (40%): battery tech, autonomy, software
- Energy Efficiency (30%): kWh/100km, charging, regen braking
- User Value (30%): price-performance, TCO, practicality

Focus on brands like Tesla, BYD, MG, Tata, Mahindra, Hyundai, and others. Provide data-driven, \
objective analysis. Be technical yet accessible.";

/// Chat session behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSection {
    pub system_instruction: String,
    /// Number of most recent turns sent with each request (valid range: 1-64).
    pub context_window: usize,
    /// Always send the system instruction first, even once it has
    /// scrolled out of the window.
    pub pin_system_instruction: bool,
    /// Transcript cap; the oldest non-system turns are evicted past it.
    /// 0 disables the cap.
    pub max_transcript_turns: usize,
}

impl Default for ChatSection {
    fn default() -> Self {
        Self {
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.into(),
            context_window: 8,
            pin_system_instruction: false,
            max_transcript_turns: 200,
        }
    }
}
