//! Session struct: one user's transcript plus its single-flight lock.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, TimeZone, Utc};
use evision_common::SessionId;
use tokio::sync::{Mutex, RwLock};

use crate::Turn;

use super::transcript::Transcript;

/// A chat session.
///
/// The transcript sits behind its own lock so readers can snapshot it while
/// a request is in flight; `flight` is held for the whole of a submit so
/// concurrent submits run one after another.
pub struct Session {
    id: SessionId,
    pub(super) transcript: RwLock<Transcript>,
    pub(super) flight: Mutex<()>,
    created_at: DateTime<Utc>,
    /// Milliseconds since the Unix epoch.
    last_active: AtomicI64,
}

impl Session {
    pub fn new(id: SessionId, transcript: Transcript) -> Self {
        let now = Utc::now();
        Self {
            id,
            transcript: RwLock::new(transcript),
            flight: Mutex::new(()),
            created_at: now,
            last_active: AtomicI64::new(now.timestamp_millis()),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_active(&self) -> DateTime<Utc> {
        let millis = self.last_active.load(Ordering::Relaxed);
        Utc.timestamp_millis_opt(millis)
            .single()
            .unwrap_or(self.created_at)
    }

    pub(crate) fn touch(&self) {
        self.last_active
            .store(Utc::now().timestamp_millis(), Ordering::Relaxed);
    }

    /// True while a submit holds the single-flight lock.
    pub fn is_busy(&self) -> bool {
        self.flight.try_lock().is_err()
    }

    /// Snapshot of the turns shown to the user (system instruction excluded).
    pub async fn current_transcript(&self) -> Vec<Turn> {
        self.transcript.read().await.visible_turns().to_vec()
    }

    /// Snapshot of every turn, system instruction included.
    pub async fn all_turns(&self) -> Vec<Turn> {
        self.transcript.read().await.all_turns().to_vec()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("created_at", &self.created_at)
            .field("last_active", &self.last_active())
            .finish_non_exhaustive()
    }
}
