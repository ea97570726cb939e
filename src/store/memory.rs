//! In-memory session storage

use super::{SessionId, SessionStore, StoreResult};
use crate::game::Session;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Default cap on stored sessions
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Default time a session may go unwritten before it is evicted
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60);

#[derive(Debug)]
struct StoredSession {
    session: Session,
    touched: Instant,
}

/// Process-local store; sessions are lost on restart
///
/// Holds at most `max_sessions` entries. Inserting a new session into a full store
/// evicts the one written least recently, and [`InMemoryStore::evict_idle`] drops
/// sessions not written for longer than the idle timeout.
#[derive(Debug)]
pub struct InMemoryStore {
    sessions: RwLock<HashMap<SessionId, StoredSession>>,
    max_sessions: usize,
    idle_timeout: Duration,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::with_limits(DEFAULT_MAX_SESSIONS, DEFAULT_IDLE_TIMEOUT)
    }
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store bounded by `max_sessions` (at least one) and `idle_timeout`
    #[must_use]
    pub fn with_limits(max_sessions: usize, idle_timeout: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions: max_sessions.max(1),
            idle_timeout,
        }
    }

    /// Number of stored sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Drop every session idle for at least the idle timeout, returning how many went
    pub async fn evict_idle(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, stored| now.duration_since(stored.touched) < self.idle_timeout);
        before - sessions.len()
    }
}

#[async_trait]
impl SessionStore for InMemoryStore {
    async fn get(&self, id: &SessionId) -> StoreResult<Option<Session>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).map(|stored| stored.session.clone()))
    }

    async fn put(&self, id: SessionId, session: Session) -> StoreResult<()> {
        let mut sessions = self.sessions.write().await;

        if !sessions.contains_key(&id) && sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, stored)| stored.touched)
                .map(|(oldest, _)| *oldest);
            if let Some(oldest) = oldest {
                sessions.remove(&oldest);
                tracing::debug!(session = %oldest, "session store full, evicted oldest session");
            }
        }

        sessions.insert(
            id,
            StoredSession {
                session,
                touched: Instant::now(),
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn session(secret: &str) -> Session {
        Session::start(Word::new(secret).unwrap())
    }

    #[tokio::test]
    async fn get_missing_session() {
        let store = InMemoryStore::new();
        assert!(store.get(&SessionId::generate()).await.unwrap().is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn put_then_get() {
        let store = InMemoryStore::new();
        let id = SessionId::generate();

        store.put(id, session("apple")).await.unwrap();

        assert_eq!(store.get(&id).await.unwrap(), Some(session("apple")));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn put_replaces_existing_session() {
        let store = InMemoryStore::new();
        let id = SessionId::generate();
        store.put(id, session("apple")).await.unwrap();
        store.put(id, session("lemon")).await.unwrap();

        let stored = store.get(&id).await.unwrap().unwrap();
        assert_eq!(stored.secret().text(), "lemon");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn full_store_evicts_least_recently_written() {
        let store = InMemoryStore::with_limits(2, DEFAULT_IDLE_TIMEOUT);
        let (first, second, third) = (
            SessionId::generate(),
            SessionId::generate(),
            SessionId::generate(),
        );

        store.put(first, session("apple")).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
        store.put(second, session("lemon")).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
        // Rewriting an existing session never evicts and refreshes it
        store.put(first, session("crane")).await.unwrap();
        assert_eq!(store.len().await, 2);

        store.put(third, session("slate")).await.unwrap();

        assert_eq!(store.len().await, 2);
        assert!(store.get(&second).await.unwrap().is_none());
        assert!(store.get(&first).await.unwrap().is_some());
        assert!(store.get(&third).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn evict_idle_drops_stale_sessions() {
        let store = InMemoryStore::with_limits(DEFAULT_MAX_SESSIONS, Duration::ZERO);
        store.put(SessionId::generate(), session("apple")).await.unwrap();
        store.put(SessionId::generate(), session("lemon")).await.unwrap();

        assert_eq!(store.evict_idle().await, 2);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn evict_idle_keeps_fresh_sessions() {
        let store = InMemoryStore::new();
        let id = SessionId::generate();
        store.put(id, session("apple")).await.unwrap();

        assert_eq!(store.evict_idle().await, 0);
        assert!(store.get(&id).await.unwrap().is_some());
    }
}
