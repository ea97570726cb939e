//! Guess feedback calculation and representation
//!
//! Every position of a guess is classified as one of:
//! - Hit (letter in the correct position)
//! - Present (letter in the secret, wrong position)
//! - Miss (letter not in the secret)
//!
//! Two evaluation policies exist because they disagree on repeated letters.
//! See [`FeedbackPolicy`].

use super::word::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Miss,
    Present,
    Hit,
}

impl Mark {
    /// Emoji square for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Hit => '🟩',
            Self::Present => '🟨',
            Self::Miss => '⬜',
        }
    }

    /// CSS class used by the web views
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Present => "present",
            Self::Miss => "miss",
        }
    }
}

/// How repeated letters in a guess are scored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackPolicy {
    /// Standard Wordle rules: hits consume the secret's letter budget first,
    /// then present marks are handed out left to right while budget remains.
    #[default]
    Budgeted,
    /// Any letter found anywhere in the secret is Present, regardless of how
    /// many times it was already matched. Over-reports Present for repeated
    /// letters; kept for parity with the classic server behavior.
    Containment,
}

impl std::str::FromStr for FeedbackPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "budgeted" | "standard" => Ok(Self::Budgeted),
            "containment" | "classic" => Ok(Self::Containment),
            other => Err(format!(
                "Unknown feedback policy '{other}' (expected 'budgeted' or 'containment')"
            )),
        }
    }
}

/// Feedback for one guess, in guess order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All hits (the guess is the secret)
    pub const SOLVED: Self = Self([Mark::Hit; WORD_LENGTH]);

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Evaluate `guess` against `secret` with standard Wordle rules
    ///
    /// # Examples
    /// ```
    /// use wordle_web::core::{Feedback, Mark, Word};
    ///
    /// let secret = Word::new("apple").unwrap();
    /// let guess = Word::new("alpel").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &secret);
    ///
    /// assert_eq!(
    ///     feedback.marks(),
    ///     &[Mark::Hit, Mark::Present, Mark::Hit, Mark::Present, Mark::Miss]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        Self::evaluate_with(guess, secret, FeedbackPolicy::Budgeted)
    }

    /// Evaluate `guess` against `secret` under an explicit policy
    #[must_use]
    pub fn evaluate_with(guess: &Word, secret: &Word, policy: FeedbackPolicy) -> Self {
        match policy {
            FeedbackPolicy::Budgeted => Self::budgeted(guess, secret),
            FeedbackPolicy::Containment => Self::containment(guess, secret),
        }
    }

    fn budgeted(guess: &Word, secret: &Word) -> Self {
        let mut marks = [Mark::Miss; WORD_LENGTH];
        let mut available = secret.letter_counts();

        // First pass: hits consume budget before any present mark is assigned
        for (i, mark) in marks.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            if letter == secret.letter_at(i) {
                *mark = Mark::Hit;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present marks from what is left
        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark == Mark::Hit {
                continue;
            }
            if let Some(count) = available.get_mut(&guess.letter_at(i))
                && *count > 0
            {
                *mark = Mark::Present;
                *count -= 1;
            }
        }

        Self(marks)
    }

    fn containment(guess: &Word, secret: &Word) -> Self {
        let mut marks = [Mark::Miss; WORD_LENGTH];

        for (i, mark) in marks.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            *mark = if letter == secret.letter_at(i) {
                Mark::Hit
            } else if secret.has_letter(letter) {
                Mark::Present
            } else {
                Mark::Miss
            };
        }

        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is a hit
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&m| m == Mark::Hit)
    }

    #[must_use]
    pub fn count_hits(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Hit).count()
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for hit
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for miss
    ///
    /// # Examples
    /// ```
    /// use wordle_web::core::Feedback;
    ///
    /// let a = Feedback::parse("GY-GY").unwrap();
    /// let b = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut marks = [Mark::Miss; WORD_LENGTH];
        let mut chars = s.chars();

        for mark in &mut marks {
            *mark = match chars.next()? {
                'G' | 'g' | '🟩' => Mark::Hit,
                'Y' | 'y' | '🟨' => Mark::Present,
                '-' | '_' | '⬜' => Mark::Miss,
                _ => return None,
            };
        }

        if chars.next().is_some() {
            return None;
        }

        Some(Self(marks))
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
