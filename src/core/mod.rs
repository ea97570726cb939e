//! Core domain types for the game
//!
//! Pure types with no I/O: words, per-guess feedback, and accumulated letter knowledge.

mod feedback;
mod knowledge;
mod word;

pub use feedback::{Feedback, FeedbackPolicy, Mark};
pub use knowledge::{LetterKnowledge, classify_letters};
pub use word::{WORD_LENGTH, Word, WordError};
