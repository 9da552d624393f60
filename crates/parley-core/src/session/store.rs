//! Concurrent session store keyed by client-chosen session id.
//!
//! `SessionStore` is backed by `DashMap`, so lookups and lazy creation for
//! different ids never contend on a global lock. Handles are cloned out of
//! the map immediately; no `DashMap` guard is ever held across `.await`.
//!
//! Each [`Session`] carries two locks:
//! - a short `RwLock` around its turns, making every append atomic
//! - a `tokio::sync::Mutex` that the orchestrator holds for a whole turn, so
//!   concurrent requests on one session run one after the other

use std::sync::{Arc, PoisonError, RwLock};

use dashmap::DashMap;
use tokio::sync::{Mutex, MutexGuard};

use parley_types::conversation::Turn;

/// Shared handle to one session.
pub type SessionHandle = Arc<Session>;

/// One conversation: an append-only sequence of turns.
#[derive(Debug)]
pub struct Session {
    id: String,
    turns: RwLock<Vec<Turn>>,
    turn_lock: Mutex<()>,
}

impl Session {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            turns: RwLock::new(Vec::new()),
            turn_lock: Mutex::new(()),
        }
    }

    /// The session id this history belongs to.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Snapshot of the full history in append order.
    pub fn turns(&self) -> Vec<Turn> {
        self.turns
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of recorded turns.
    pub fn len(&self) -> usize {
        self.turns
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Wait for exclusive use of this session for one pipeline run.
    pub async fn lock_turn(&self) -> MutexGuard<'_, ()> {
        self.turn_lock.lock().await
    }

    // A push can only poison the lock by panicking mid-push, which leaves the
    // Vec intact, so recovering the guard is sound.
    fn push(&self, turn: Turn) {
        self.turns
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(turn);
    }
}

/// Process-wide mapping from session id to [`Session`].
///
/// Created once at server start and owned by the application state.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<String, SessionHandle>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the session for `session_id`, creating an empty one if this id
    /// has not been seen before.
    pub fn get_or_create(&self, session_id: &str) -> SessionHandle {
        if let Some(existing) = self.sessions.get(session_id) {
            return Arc::clone(existing.value());
        }

        let entry = self
            .sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                tracing::debug!(session_id, "created session");
                Arc::new(Session::new(session_id))
            });
        Arc::clone(entry.value())
    }

    /// Append a turn to the session's history, creating the session if needed.
    pub fn append(&self, session_id: &str, turn: Turn) {
        self.get_or_create(session_id).push(turn);
    }

    /// Whether a session with this id exists.
    pub fn contains(&self, session_id: &str) -> bool {
        self.sessions.contains_key(session_id)
    }

    /// Number of sessions created so far.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_types::conversation::Role;

    #[test]
    fn unseen_session_starts_empty() {
        let store = SessionStore::new();
        assert!(!store.contains("abc123"));

        let session = store.get_or_create("abc123");
        assert_eq!(session.id(), "abc123");
        assert!(session.is_empty());
        assert!(store.contains("abc123"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_or_create_returns_same_session() {
        let store = SessionStore::new();
        let first = store.get_or_create("s");
        let second = store.get_or_create("s");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn append_preserves_order() {
        let store = SessionStore::new();
        store.append("s", Turn::user("one"));
        store.append("s", Turn::assistant("two"));
        store.append("s", Turn::user("three"));

        let turns = store.get_or_create("s").turns();
        let contents: Vec<&str> = turns.iter().map(Turn::content).collect();
        assert_eq!(contents, ["one", "two", "three"]);
        assert_eq!(turns[1].role(), Role::Assistant);
    }

    #[test]
    fn append_creates_missing_session() {
        let store = SessionStore::new();
        store.append("fresh", Turn::user("hi"));
        assert_eq!(store.get_or_create("fresh").len(), 1);
    }

    #[test]
    fn sessions_are_isolated() {
        let store = SessionStore::new();
        store.append("a", Turn::user("for a"));
        store.append("a", Turn::assistant("reply a"));
        store.append("b", Turn::user("for b"));

        assert_eq!(store.get_or_create("a").len(), 2);
        let b = store.get_or_create("b").turns();
        assert_eq!(b, vec![Turn::user("for b")]);
    }

    #[tokio::test]
    async fn concurrent_appends_to_different_sessions() {
        let store = Arc::new(SessionStore::new());
        let mut handles = Vec::new();
        for i in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                let id = format!("session-{i}");
                for n in 0..50 {
                    store.append(&id, Turn::user(n.to_string()));
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.len(), 8);
        for i in 0..8 {
            let turns = store.get_or_create(&format!("session-{i}")).turns();
            assert_eq!(turns.len(), 50);
            assert_eq!(turns[49].content(), "49");
        }
    }

    #[tokio::test]
    async fn concurrent_appends_to_one_session_are_atomic() {
        let store = Arc::new(SessionStore::new());
        let mut handles = Vec::new();
        for _ in 0..4 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                for _ in 0..25 {
                    store.append("shared", Turn::user("x"));
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(store.get_or_create("shared").len(), 100);
    }
}
