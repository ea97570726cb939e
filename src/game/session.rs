//! Per-player game session and its state machine
//!
//! ```text
//! NotStarted --start--> InProgress --guess--> InProgress
//!                           |                     |
//!                           +--> Won   <----------+  (guess equals secret)
//!                           +--> Lost  <----------+  (sixth miss)
//! ```
//!
//! `NotStarted` is represented by the absence of a session; a [`Session`] value
//! always holds a secret.

use crate::core::{Feedback, FeedbackPolicy, LetterKnowledge, Word, WordError};
use std::fmt;
use thiserror::Error;

/// Maximum number of guesses in one game
pub const MAX_ATTEMPTS: usize = 6;

/// Lifecycle of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// Reasons a guess is refused; none of them consume an attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("invalid guess: {0}")]
    Invalid(#[from] WordError),

    #[error("'{0}' is not in the word list")]
    UnknownWord(String),

    #[error("the game is already over, it was {0}")]
    GameOver(GameStatus),
}

/// One submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Mutable game state for one player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    secret: Word,
    attempts: Vec<Attempt>,
    knowledge: LetterKnowledge,
}

impl Session {
    /// Begin a fresh game with the given secret
    #[must_use]
    pub fn start(secret: Word) -> Self {
        Self {
            secret,
            attempts: Vec::with_capacity(MAX_ATTEMPTS),
            knowledge: LetterKnowledge::default(),
        }
    }

    /// Evaluate a guess, record it, and return the resulting status
    ///
    /// # Errors
    /// Returns `GuessError::GameOver` if the game already ended; the session is
    /// left untouched in that case.
    ///
    /// # Examples
    /// ```
    /// use wordle_web::core::{FeedbackPolicy, Word};
    /// use wordle_web::game::{GameStatus, Session};
    ///
    /// let mut session = Session::start(Word::new("apple").unwrap());
    /// let status = session
    ///     .submit(Word::new("apple").unwrap(), FeedbackPolicy::Budgeted)
    ///     .unwrap();
    /// assert_eq!(status, GameStatus::Won);
    /// ```
    pub fn submit(
        &mut self,
        guess: Word,
        policy: FeedbackPolicy,
    ) -> Result<GameStatus, GuessError> {
        let status = self.status();
        if status.is_terminal() {
            return Err(GuessError::GameOver(status));
        }

        let feedback = Feedback::evaluate_with(&guess, &self.secret, policy);
        self.knowledge.record(&guess, &self.secret);
        self.attempts.push(Attempt { guess, feedback });

        Ok(self.status())
    }

    /// Current position in the state machine
    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.attempts.last() {
            Some(last) if last.feedback.is_solved() => GameStatus::Won,
            _ if self.attempts.len() >= MAX_ATTEMPTS => GameStatus::Lost,
            _ => GameStatus::InProgress,
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub const fn knowledge(&self) -> &LetterKnowledge {
        &self.knowledge
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.attempts.len())
    }
}
