//! Types shared by every EVision crate: the error taxonomy and id helpers.

pub mod errors;
pub mod id;

pub use errors::{ConfigError, EvisionError};
pub use id::{new_correlation_id, SessionId};

pub type Result<T> = std::result::Result<T, EvisionError>;
