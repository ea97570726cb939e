//! HTML views
//!
//! Pages are rendered server-side from the session value; the only dynamic text that
//! does not come from validated words is the definition, which is escaped.

use crate::core::{Mark, WORD_LENGTH};
use crate::game::{MAX_ATTEMPTS, Session};
use std::fmt::Write;

/// Banner shown after a redirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NoActiveGame,
    InvalidGuess,
    UnknownWord,
    Unavailable,
}

impl Notice {
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::NoActiveGame => "no-active-game",
            Self::InvalidGuess => "invalid-guess",
            Self::UnknownWord => "unknown-word",
            Self::Unavailable => "unavailable",
        }
    }

    /// Unknown slugs are ignored rather than rejected
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        [
            Self::NoActiveGame,
            Self::InvalidGuess,
            Self::UnknownWord,
            Self::Unavailable,
        ]
        .into_iter()
        .find(|n| n.slug() == slug)
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoActiveGame => "There is no game in progress. Start a new one!",
            Self::InvalidGuess => "Please enter exactly 5 letters (a-z).",
            Self::UnknownWord => "Word not found in our dictionary.",
            Self::Unavailable => "The game is temporarily unavailable. Please try again.",
        }
    }
}

/// Which end-of-game view to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Fail,
}

impl Outcome {
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "success" => Some(Self::Success),
            "fail" => Some(Self::Fail),
            _ => None,
        }
    }
}

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

const STYLE: &str = r"
body { font-family: sans-serif; background: #121213; color: #fff; text-align: center; }
a, button { color: #fff; }
.board { display: inline-grid; gap: 6px; margin: 16px 0; }
.row { display: grid; grid-template-columns: repeat(5, 52px); gap: 6px; }
.tile { height: 52px; line-height: 52px; font-size: 1.8em; font-weight: bold;
        text-transform: uppercase; border: 2px solid #3a3a3c; }
.tile.hit, .key.hit { background: #538d4e; border-color: #538d4e; }
.tile.present, .key.present { background: #b59f3b; border-color: #b59f3b; }
.tile.miss, .key.miss { background: #3a3a3c; }
.keyboard { margin: 16px auto; }
.key { display: inline-block; min-width: 28px; padding: 10px 4px; margin: 2px;
       background: #818384; border-radius: 4px; text-transform: uppercase; }
.notice { color: #f5793a; margin: 12px; }
.definition { font-style: italic; }
";

/// Escape text for inclusion in HTML
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn layout(title: &str, notice: Option<Notice>, body: &str) -> String {
    let notice = notice
        .map(|n| format!("<p class=\"notice\">{}</p>", n.message()))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>Wordle</h1>\n{notice}\n{body}\n</body>\n</html>\n"
    )
}

/// Start screen
#[must_use]
pub fn home_page(notice: Option<Notice>) -> String {
    let body = format!(
        "<p>Guess the hidden {WORD_LENGTH}-letter word in {MAX_ATTEMPTS} tries.</p>\n\
         <p>🟩 right letter, right spot &nbsp; 🟨 right letter, wrong spot &nbsp; ⬜ not in the word</p>\n\
         <p><a href=\"/start\">Start game</a></p>"
    );
    layout("Wordle", notice, &body)
}

fn board(session: &Session) -> String {
    let mut html = String::from("<div class=\"board\">\n");

    for attempt in session.attempts() {
        html.push_str("<div class=\"row\">");
        for (letter, mark) in attempt.guess.text().chars().zip(attempt.feedback.marks()) {
            let _ = write!(
                html,
                "<div class=\"tile {}\" title=\"{mark:?}\">{letter}</div>",
                mark.css_class()
            );
        }
        html.push_str("</div>\n");
    }

    for _ in 0..session.remaining_attempts() {
        html.push_str("<div class=\"row\">");
        for _ in 0..WORD_LENGTH {
            html.push_str("<div class=\"tile\"></div>");
        }
        html.push_str("</div>\n");
    }

    html.push_str("</div>\n");
    html
}

fn key_class(session: &Session, letter: char) -> &'static str {
    let hit = session.attempts().iter().any(|attempt| {
        attempt
            .guess
            .text()
            .chars()
            .zip(attempt.feedback.marks())
            .any(|(c, &m)| c == letter && m == Mark::Hit)
    });

    if hit {
        Mark::Hit.css_class()
    } else if session.knowledge().present().contains(&letter) {
        Mark::Present.css_class()
    } else if session.knowledge().absent().contains(&letter) {
        Mark::Miss.css_class()
    } else {
        ""
    }
}

fn keyboard(session: &Session) -> String {
    let mut html = String::from("<div class=\"keyboard\">\n");
    for row in KEYBOARD_ROWS {
        html.push_str("<div>");
        for letter in row.chars() {
            let _ = write!(
                html,
                "<span class=\"key {}\">{letter}</span>",
                key_class(session, letter)
            );
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n");
    html
}

/// Game view: attempt history, guess form, and keyboard hints
#[must_use]
pub fn game_page(session: &Session, notice: Option<Notice>) -> String {
    let body = format!(
        "{board}<form method=\"post\" action=\"/game\">\n\
         <input name=\"guess\" maxlength=\"{WORD_LENGTH}\" pattern=\"[A-Za-z]{{{WORD_LENGTH}}}\" \
         autocomplete=\"off\" autofocus required>\n\
         <button type=\"submit\">Submit</button>\n</form>\n\
         <p>{remaining} of {MAX_ATTEMPTS} guesses left</p>\n{keyboard}\
         <p><a href=\"/start\">New game</a></p>",
        board = board(session),
        remaining = session.remaining_attempts(),
        keyboard = keyboard(session),
    );
    layout("Wordle", notice, &body)
}

/// End-of-game view revealing the secret
#[must_use]
pub fn result_page(session: &Session, outcome: Outcome, definition: Option<&str>) -> String {
    let secret = session.secret().text().to_uppercase();
    let headline = match outcome {
        Outcome::Success => format!(
            "Excellent! You guessed <strong>{secret}</strong> in {} {}.",
            session.attempts().len(),
            if session.attempts().len() == 1 { "guess" } else { "guesses" }
        ),
        Outcome::Fail => format!("Game over! The word was <strong>{secret}</strong>."),
    };

    let definition = definition
        .filter(|d| !d.is_empty())
        .map(|d| {
            format!(
                "<p class=\"definition\">{secret}: {}</p>\n",
                escape_html(d)
            )
        })
        .unwrap_or_default();

    let body = format!(
        "<p>{headline}</p>\n{definition}{board}<p><a href=\"/start\">Play again</a></p>",
        board = board(session),
    );
    layout("Wordle - Result", None, &body)
}
