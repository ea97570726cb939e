//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterKnowledge, Mark, Word};
use colored::Colorize;

/// Render a guess as uppercase letters on Wordle-colored tiles
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.marks())
        .map(|(letter, mark)| {
            let tile = format!(" {} ", letter.to_ascii_uppercase());
            match mark {
                Mark::Hit => tile.black().on_green().bold().to_string(),
                Mark::Present => tile.black().on_yellow().bold().to_string(),
                Mark::Miss => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// One-line summary of accumulated letter knowledge
#[must_use]
pub fn knowledge_line(knowledge: &LetterKnowledge) -> String {
    let join = |letters: &std::collections::BTreeSet<char>| -> String {
        letters.iter().map(|c| c.to_ascii_uppercase()).collect()
    };

    format!(
        "In word: {}   Not in word: {}",
        join(knowledge.present()),
        join(knowledge.absent())
    )
}
