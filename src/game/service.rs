//! Game service
//!
//! Ties the vocabulary, the session store, and the session state machine together.
//! Every read-modify-write of a session runs under that session's own lock, so
//! overlapping requests for one player are applied one at a time while different
//! players never wait on each other.

use super::session::{GameStatus, GuessError, Session};
use crate::core::{FeedbackPolicy, Word};
use crate::store::{SessionId, SessionStore, StoreError};
use crate::wordlists::{Vocabulary, choose_secret};
use dashmap::DashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Rules applied to every submitted guess
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameRules {
    pub policy: FeedbackPolicy,
    /// Reject guesses that are not in the vocabulary
    pub strict_dictionary: bool,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("no active game for this session")]
    NoActiveGame,

    #[error(transparent)]
    Guess(#[from] GuessError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

type LockMap = DashMap<SessionId, Arc<Mutex<()>>>;

/// Exclusive access to one session
///
/// On drop the lock entry is removed from the map unless another request is
/// holding or waiting for it, so idle sessions leave no lock behind.
struct SessionGuard<'a> {
    locks: &'a LockMap,
    id: SessionId,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for SessionGuard<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());
        self.locks.remove_if(&self.id, |_, lock| Arc::strong_count(lock) == 1);
    }
}

pub struct GameService {
    vocabulary: Arc<Vocabulary>,
    store: Arc<dyn SessionStore>,
    locks: LockMap,
    rules: GameRules,
}

impl GameService {
    #[must_use]
    pub fn new(vocabulary: Arc<Vocabulary>, store: Arc<dyn SessionStore>, rules: GameRules) -> Self {
        Self {
            vocabulary,
            store,
            locks: DashMap::new(),
            rules,
        }
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[must_use]
    pub const fn rules(&self) -> GameRules {
        self.rules
    }

    async fn lock_session(&self, id: SessionId) -> SessionGuard<'_> {
        let lock = self.locks.entry(id).or_default().clone();
        SessionGuard {
            locks: &self.locks,
            id,
            guard: Some(lock.lock_owned().await),
        }
    }

    /// Start a new game with a random secret, replacing any previous game
    ///
    /// # Errors
    /// Returns `ServiceError::Store` if the session cannot be saved.
    pub async fn start(&self, id: SessionId) -> ServiceResult<Session> {
        let secret = choose_secret(&self.vocabulary, &mut rand::rng()).clone();
        self.start_with(id, secret).await
    }

    /// Start a new game with a known secret
    ///
    /// # Errors
    /// Returns `ServiceError::Store` if the session cannot be saved.
    pub async fn start_with(&self, id: SessionId, secret: Word) -> ServiceResult<Session> {
        let _guard = self.lock_session(id).await;

        tracing::debug!(session = %id, secret = %secret, "secret chosen");
        let session = Session::start(secret);
        self.store.put(id, session.clone()).await?;

        tracing::info!(session = %id, "game started");
        Ok(session)
    }

    /// Read the current session without modifying it
    ///
    /// # Errors
    /// Returns `ServiceError::Store` if the store fails.
    pub async fn session(&self, id: &SessionId) -> ServiceResult<Option<Session>> {
        Ok(self.store.get(id).await?)
    }

    /// Current status, `NotStarted` when no game exists
    ///
    /// # Errors
    /// Returns `ServiceError::Store` if the store fails.
    pub async fn status(&self, id: &SessionId) -> ServiceResult<GameStatus> {
        Ok(self
            .session(id)
            .await?
            .map_or(GameStatus::NotStarted, |s| s.status()))
    }

    /// Validate, evaluate, and record one guess
    ///
    /// A rejected guess leaves the session unchanged. A finished game rejects every
    /// guess as `GameOver`, whatever its text.
    ///
    /// # Errors
    /// - `ServiceError::NoActiveGame` if the session has no game
    /// - `ServiceError::Guess` if the guess is malformed, not in the word list (strict
    ///   mode only), or the game is already over
    /// - `ServiceError::Store` if the store fails
    pub async fn submit_guess(&self, id: SessionId, guess: &str) -> ServiceResult<Session> {
        let _guard = self.lock_session(id).await;

        let mut session = self.store.get(&id).await?.ok_or(ServiceError::NoActiveGame)?;

        let status = session.status();
        if status.is_terminal() {
            return Err(GuessError::GameOver(status).into());
        }

        let guess = Word::new(guess).map_err(GuessError::from)?;
        if self.rules.strict_dictionary && !self.vocabulary.contains(&guess) {
            return Err(GuessError::UnknownWord(guess.text().to_string()).into());
        }

        let status = session.submit(guess, self.rules.policy)?;
        if let Some(attempt) = session.attempts().last() {
            tracing::info!(
                session = %id,
                attempt = session.attempts().len(),
                guess = %attempt.guess,
                feedback = %attempt.feedback,
                "guess evaluated"
            );
        }

        self.store.put(id, session.clone()).await?;

        match status {
            GameStatus::Won => {
                tracing::info!(session = %id, attempts = session.attempts().len(), "game won");
            }
            GameStatus::Lost => {
                tracing::info!(session = %id, "game lost");
                tracing::debug!(session = %id, secret = %session.secret(), "secret revealed");
            }
            GameStatus::InProgress | GameStatus::NotStarted => {}
        }

        Ok(session)
    }
}
