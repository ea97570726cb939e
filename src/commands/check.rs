//! Single-guess feedback command

use crate::core::{Feedback, FeedbackPolicy, Word};
use anyhow::{Context, Result};

/// Evaluate one guess against a given secret
///
/// # Errors
///
/// Returns an error if either word is not a valid 5-letter word.
pub fn check_guess(guess: &str, secret: &str, policy: FeedbackPolicy) -> Result<(Word, Word, Feedback)> {
    let guess = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;
    let secret = Word::new(secret).with_context(|| format!("Invalid secret '{secret}'"))?;
    let feedback = Feedback::evaluate_with(&guess, &secret, policy);
    Ok((guess, secret, feedback))
}
