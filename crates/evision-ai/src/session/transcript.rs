//! Append-only transcript and context-window selection.

use crate::{Role, Turn};

/// Ordered turns of one conversation. The first turn is always the system
/// instruction and is never evicted.
#[derive(Debug, Clone)]
pub struct Transcript {
    turns: Vec<Turn>,
    max_turns: Option<usize>,
}

impl Transcript {
    pub fn init(system_instruction: impl Into<String>) -> Self {
        Self {
            turns: vec![Turn::system(system_instruction)],
            max_turns: None,
        }
    }

    /// Cap the transcript length. Past the cap the oldest turns after the
    /// system instruction are dropped. The cap never goes below 2.
    pub fn with_max_turns(mut self, max_turns: Option<usize>) -> Self {
        self.max_turns = max_turns.map(|max| max.max(2));
        self.evict();
        self
    }

    pub fn append(&mut self, role: Role, text: impl Into<String>) {
        self.push(Turn::new(role, text));
    }

    pub(crate) fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
        self.evict();
    }

    fn evict(&mut self) {
        if let Some(max) = self.max_turns {
            if self.turns.len() > max {
                let excess = self.turns.len() - max;
                self.turns.drain(1..1 + excess);
            }
        }
    }

    /// Every turn in insertion order, system instruction first.
    pub fn all_turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Turns shown to the user: everything after the system instruction.
    pub fn visible_turns(&self) -> &[Turn] {
        &self.turns[1..]
    }

    pub fn system_instruction(&self) -> &str {
        &self.turns[0].text
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// True when nothing but the system instruction has been recorded.
    pub fn is_empty(&self) -> bool {
        self.turns.len() <= 1
    }

    /// The turns sent to the model for the next request.
    ///
    /// Without pinning this is the plain suffix of the last `size` turns,
    /// which drops the system instruction once the transcript is longer than
    /// the window. With pinning the system instruction always leads and the
    /// most recent `size - 1` turns (at least one) follow it.
    pub fn window(&self, size: usize, pin_system_instruction: bool) -> Vec<Turn> {
        if self.turns.len() <= size {
            return self.turns.clone();
        }
        if !pin_system_instruction {
            return self.turns[self.turns.len() - size..].to_vec();
        }

        let tail = size.saturating_sub(1).max(1);
        let mut window = Vec::with_capacity(tail + 1);
        window.push(self.turns[0].clone());
        window.extend_from_slice(&self.turns[self.turns.len() - tail..]);
        window
    }
}
