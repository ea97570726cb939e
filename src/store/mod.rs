//! Session storage
//!
//! Game logic only sees the [`SessionStore`] trait, so the storage mechanism can be
//! swapped without touching the service or the handlers.

mod memory;

use crate::game::Session;
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

pub use memory::{DEFAULT_IDLE_TIMEOUT, DEFAULT_MAX_SESSIONS, InMemoryStore};

/// Opaque identifier for one player's session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a fresh random identifier
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// Storage-specific errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence for per-player sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Get the session stored under `id`
    async fn get(&self, id: &SessionId) -> StoreResult<Option<Session>>;

    /// Create or replace the session stored under `id`
    async fn put(&self, id: SessionId, session: Session) -> StoreResult<()>;
}
