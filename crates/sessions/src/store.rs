//! In-memory session map for the HTTP host.
//!
//! Each named session is wrapped in a `tokio::sync::Mutex` so the host
//! runs at most one turn per session at a time — session state has exactly
//! one logical writer, and the lock is held across the (potentially slow)
//! model call. The map itself lives for the process; nothing is persisted.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::Mutex;

use crate::session::ConversationSession;

/// Shared handle to one session.
pub type SessionHandle = Arc<Mutex<ConversationSession>>;

/// Lazily-created named sessions.
pub struct SessionMap {
    sessions: RwLock<HashMap<String, SessionHandle>>,
}

impl Default for SessionMap {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionMap {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve or create the session for `name`. Returns `(handle, is_new)`.
    pub fn resolve_or_create(&self, name: &str) -> (SessionHandle, bool) {
        // Fast path: session already exists.
        {
            let sessions = self.sessions.read();
            if let Some(handle) = sessions.get(name) {
                return (Arc::clone(handle), false);
            }
        }

        // Slow path: create it lazily on first access.
        let mut sessions = self.sessions.write();
        if let Some(handle) = sessions.get(name) {
            return (Arc::clone(handle), false);
        }
        tracing::info!(session = name, "session created");
        let handle = Arc::new(Mutex::new(ConversationSession::new()));
        sessions.insert(name.to_owned(), Arc::clone(&handle));
        (handle, true)
    }

    /// Look up a session without creating it.
    pub fn get(&self, name: &str) -> Option<SessionHandle> {
        self.sessions.read().get(name).cloned()
    }

    /// Names of all live sessions.
    pub fn list(&self) -> Vec<String> {
        self.sessions.read().keys().cloned().collect()
    }
}
