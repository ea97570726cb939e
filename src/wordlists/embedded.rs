//! Embedded vocabulary
//!
//! The default word list compiled into the binary: a JSON object mapping each
//! word to a short definition.

/// Raw contents of `data/wordlist.json`
pub const WORDLIST_JSON: &str = include_str!("../../data/wordlist.json");
