//! Display functions for terminal play

use super::formatters::{colored_guess, knowledge_line};
use crate::core::{Feedback, Word};
use crate::game::{GameStatus, MAX_ATTEMPTS, Session};
use colored::Colorize;
use std::io::{self, Write};

/// Print the board so far plus the letter hints
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_board<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    writeln!(out)?;
    for (i, attempt) in session.attempts().iter().enumerate() {
        writeln!(
            out,
            "  {}. {} {}",
            (i + 1).to_string().bright_black(),
            colored_guess(&attempt.guess, &attempt.feedback),
            attempt.feedback
        )?;
    }
    writeln!(out, "\n  {}", knowledge_line(session.knowledge()).bright_black())?;
    writeln!(out)
}

/// Print the end-of-game summary
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_outcome<W: Write>(
    out: &mut W,
    session: &Session,
    definition: Option<&str>,
) -> io::Result<()> {
    let secret = session.secret().text().to_uppercase();

    writeln!(out, "{}", "═".repeat(50).bright_cyan())?;
    match session.status() {
        GameStatus::Won => {
            let turns = session.attempts().len();
            writeln!(
                out,
                "  {} Solved {} in {}/{MAX_ATTEMPTS}",
                "🎉".bold(),
                secret.bright_green().bold(),
                turns
            )?;
        }
        _ => {
            writeln!(
                out,
                "  {} The word was {}",
                "❌".bold(),
                secret.bright_yellow().bold()
            )?;
        }
    }
    if let Some(definition) = definition.filter(|d| !d.is_empty()) {
        writeln!(out, "  {}", definition.italic())?;
    }

    writeln!(out, "\n  Share:")?;
    for attempt in session.attempts() {
        writeln!(out, "    {}", attempt.feedback)?;
    }
    writeln!(out, "{}", "═".repeat(50).bright_cyan())
}

/// Print the feedback for a single guess
pub fn print_check_result(guess: &Word, secret: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        guess.text().to_uppercase().bright_white().bold(),
        secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}  {feedback}", colored_guess(guess, feedback));
    println!(
        "\n  Hits: {}   Present: {}",
        feedback.count_hits().to_string().green(),
        feedback.count_present().to_string().yellow()
    );
}
