//! Terminal play mode
//!
//! The same game as the web server, played on stdin/stdout.

use crate::core::Word;
use crate::game::{GameRules, GuessError, MAX_ATTEMPTS, Session};
use crate::output::{write_board, write_outcome};
use crate::wordlists::{Vocabulary, choose_secret};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Play on the process's stdin and stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play(vocabulary: &Vocabulary, rules: GameRules) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(
        &mut stdin.lock(),
        &mut stdout.lock(),
        vocabulary,
        rules,
        &mut rand::rng(),
    )
}

/// Game loop over arbitrary input and output
///
/// Commands: `quit` exits, `new` abandons the current game.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play<R, W, G>(
    input: &mut R,
    out: &mut W,
    vocabulary: &Vocabulary,
    rules: GameRules,
    rng: &mut G,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    writeln!(out, "\n{}", "Wordle - guess the 5-letter word".bright_cyan().bold())?;
    writeln!(out, "Commands: 'new' for a new game, 'quit' to exit\n")?;

    let mut session = Session::start(choose_secret(vocabulary, rng).clone());

    loop {
        let turn = session.attempts().len() + 1;
        let Some(line) = prompt(input, out, &format!("Guess {turn}/{MAX_ATTEMPTS}"))? else {
            writeln!(out, "\n👋 Thanks for playing!")?;
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!")?;
                return Ok(());
            }
            "new" | "n" => {
                session = Session::start(choose_secret(vocabulary, rng).clone());
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            _ => {}
        }

        let guess = match Word::new(&line) {
            Ok(guess) => guess,
            Err(err) => {
                writeln!(out, "❌ {}", GuessError::from(err))?;
                continue;
            }
        };
        if rules.strict_dictionary && !vocabulary.contains(&guess) {
            writeln!(out, "❌ {}", GuessError::UnknownWord(guess.text().to_string()))?;
            continue;
        }

        let status = session.submit(guess, rules.policy)?;
        write_board(out, &session)?;

        if status.is_terminal() {
            write_outcome(out, &session, vocabulary.definition(session.secret().text()))?;

            let again = prompt(input, out, "Play again? (yes/no)")?.unwrap_or_default();
            if !matches!(again.to_lowercase().as_str(), "yes" | "y") {
                writeln!(out, "\n👋 Thanks for playing!")?;
                return Ok(());
            }
            session = Session::start(choose_secret(vocabulary, rng).clone());
            writeln!(out, "\n🔄 New game started!\n")?;
        } else {
            writeln!(out, "{} guesses left\n", session.remaining_attempts())?;
        }
    }
}

/// Read one trimmed line after a prompt; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn run(script: &str, rules: GameRules) -> String {
        colored::control::set_override(false);
        let vocabulary = Vocabulary::from_json(r#"{"apple": "a fruit"}"#).unwrap();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(3);

        play(&mut input, &mut out, &vocabulary, rules, &mut rng).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn winning_game() {
        let text = run("crane\napple\nno\n", GameRules::default());
        assert!(text.contains("5 guesses left"));
        assert!(text.contains("Solved APPLE in 2/6"));
        assert!(text.contains("a fruit"));
        assert!(text.ends_with("Thanks for playing!\n"));
    }

    #[test]
    fn losing_game() {
        let script = "zzzzz\n".repeat(MAX_ATTEMPTS) + "no\n";
        let text = run(&script, GameRules::default());
        assert!(text.contains("The word was APPLE"));
    }

    #[test]
    fn invalid_guess_does_not_use_a_turn() {
        let text = run("abc\napple\nno\n", GameRules::default());
        assert!(text.contains("invalid guess"));
        assert!(text.contains("Solved APPLE in 1/6"));
    }

    #[test]
    fn strict_dictionary_rejects_unknown_words() {
        let rules = GameRules {
            strict_dictionary: true,
            ..GameRules::default()
        };
        let text = run("zzzzz\nquit\n", rules);
        assert!(text.contains("'zzzzz' is not in the word list"));
        assert!(!text.contains("guesses left"));
    }

    #[test]
    fn new_game_resets_turns() {
        let text = run("crane\nnew\napple\nno\n", GameRules::default());
        assert!(text.contains("New game started"));
        assert!(text.contains("Solved APPLE in 1/6"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let text = run("", GameRules::default());
        assert!(text.contains("Thanks for playing!"));
    }
}
