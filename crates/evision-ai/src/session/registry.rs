//! Session registry: maps session ids to live chat sessions.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use evision_common::SessionId;
use tokio::sync::RwLock;

use super::manager::Session;
use super::transcript::Transcript;

/// Thread-safe session registry.
#[derive(Clone)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<SessionId, Arc<Session>>>>,
    system_instruction: Arc<str>,
    max_turns: Option<usize>,
}

impl SessionRegistry {
    pub fn new(system_instruction: impl Into<String>, max_turns: Option<usize>) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            system_instruction: Arc::from(system_instruction.into()),
            max_turns,
        }
    }

    fn fresh_session(&self, id: SessionId) -> Arc<Session> {
        let transcript =
            Transcript::init(&*self.system_instruction).with_max_turns(self.max_turns);
        Arc::new(Session::new(id, transcript))
    }

    /// Create a session under a new id.
    pub async fn create(&self) -> Arc<Session> {
        self.init(&SessionId::new()).await
    }

    /// Return the session for `id`, creating it if it does not exist yet.
    /// Calling this again for the same id returns the same session.
    pub async fn init(&self, id: &SessionId) -> Arc<Session> {
        if let Some(session) = self.get(id).await {
            return session;
        }

        let mut map = self.sessions.write().await;
        map.entry(*id)
            .or_insert_with(|| {
                tracing::info!(session = %id, "Session created");
                self.fresh_session(*id)
            })
            .clone()
    }

    pub async fn get(&self, id: &SessionId) -> Option<Arc<Session>> {
        self.sessions.read().await.get(id).cloned()
    }

    /// End a session. Returns true if it existed. A request still in flight
    /// finishes against its own handle.
    pub async fn end(&self, id: &SessionId) -> bool {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            tracing::info!(session = %id, "Session ended");
        }
        removed
    }

    /// Drop sessions idle for longer than `max_idle`. Returns how many were removed.
    pub async fn reap_idle(&self, max_idle: Duration) -> usize {
        let cutoff = TimeDelta::from_std(max_idle)
            .ok()
            .and_then(|max_idle| Utc::now().checked_sub_signed(max_idle));
        match cutoff {
            Some(cutoff) => self.reap_idle_before(cutoff).await,
            None => 0,
        }
    }

    /// Drop sessions whose last activity is older than `cutoff`. Sessions
    /// with a request in flight are kept.
    pub async fn reap_idle_before(&self, cutoff: DateTime<Utc>) -> usize {
        let mut map = self.sessions.write().await;
        let before = map.len();
        map.retain(|id, session| {
            let stale = !session.is_busy() && session.last_active() < cutoff;
            if stale {
                tracing::info!(session = %id, "Reaping idle session");
            }
            !stale
        });
        before - map.len()
    }

    /// Check if a session exists.
    pub async fn exists(&self, id: &SessionId) -> bool {
        self.sessions.read().await.contains_key(id)
    }

    /// Number of live sessions.
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
