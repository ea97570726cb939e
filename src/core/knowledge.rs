//! Letter knowledge accumulated across a game
//!
//! Used for keyboard hints only; win and loss never depend on it.

use super::word::Word;
use std::collections::BTreeSet;

/// Letters known to be absent from, or present in, the secret
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterKnowledge {
    absent: BTreeSet<char>,
    present: BTreeSet<char>,
}

/// Split the letters of `guess` into (absent, present) relative to `secret`
///
/// A letter is absent when it neither matches the secret at its position nor
/// occurs anywhere in the secret. Everything else is present.
#[must_use]
pub fn classify_letters(guess: &Word, secret: &Word) -> (BTreeSet<char>, BTreeSet<char>) {
    let mut absent = BTreeSet::new();
    let mut present = BTreeSet::new();

    for (i, &letter) in guess.letters().iter().enumerate() {
        if letter == secret.letter_at(i) || secret.has_letter(letter) {
            present.insert(char::from(letter));
        } else {
            absent.insert(char::from(letter));
        }
    }

    (absent, present)
}

impl LetterKnowledge {
    /// Fold one guess into the accumulated sets
    pub fn record(&mut self, guess: &Word, secret: &Word) {
        let (absent, present) = classify_letters(guess, secret);
        self.absent.extend(absent);
        self.present.extend(present);
    }

    #[must_use]
    pub const fn absent(&self) -> &BTreeSet<char> {
        &self.absent
    }

    #[must_use]
    pub const fn present(&self) -> &BTreeSet<char> {
        &self.present
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.absent.is_empty() && self.present.is_empty()
    }
}
