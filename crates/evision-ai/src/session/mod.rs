//! Conversation session management.
//!
//! A `Transcript` is the append-only turn log, a `Session` wraps one with
//! its locks and timestamps, `Conversation` runs the submit flow, and
//! `SessionRegistry` owns session lifetimes.

mod chat;
mod manager;
mod registry;
mod transcript;
mod types;


pub use chat::Conversation;
pub use manager::Session;
pub use registry::SessionRegistry;
pub use transcript::Transcript;
pub use types::{ChatPolicy, SubmitOutcome, ERROR_PREFIX};
