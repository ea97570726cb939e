//! Vocabulary loading and secret selection
//!
//! A vocabulary is read from a JSON object mapping words to definitions, either the
//! embedded default or a file chosen at startup. It is read-only once loaded.

use super::embedded::WORDLIST_JSON;
use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures that prevent the game from starting
#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("failed to read word list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list is not a JSON object of word -> definition: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("word list contains no valid five-letter words")]
    Empty,
}

/// The set of words a secret can be drawn from
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<Word>,
    definitions: FxHashMap<String, String>,
}

impl Vocabulary {
    /// Build a vocabulary from JSON text
    ///
    /// Keys that are not valid five-letter words are skipped. Definitions that are
    /// not strings are kept in their JSON form.
    ///
    /// # Errors
    /// Returns `VocabularyError::Malformed` if the text is not a JSON object and
    /// `VocabularyError::Empty` if no usable word remains.
    ///
    /// # Examples
    /// ```
    /// use wordle_web::wordlists::Vocabulary;
    ///
    /// let vocab = Vocabulary::from_json(r#"{"apple": "a fruit", "fig": "too short"}"#).unwrap();
    /// assert_eq!(vocab.len(), 1);
    /// assert_eq!(vocab.definition("apple"), Some("a fruit"));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, VocabularyError> {
        let entries: Map<String, Value> = serde_json::from_str(json)?;

        let mut words = Vec::with_capacity(entries.len());
        let mut definitions = FxHashMap::default();

        for (key, value) in entries {
            let Ok(word) = Word::new(&key) else {
                continue;
            };
            if definitions.contains_key(word.text()) {
                continue;
            }
            let definition = match value {
                Value::String(text) => text,
                Value::Null => String::new(),
                other => other.to_string(),
            };
            definitions.insert(word.text().to_string(), definition);
            words.push(word);
        }

        if words.is_empty() {
            return Err(VocabularyError::Empty);
        }

        Ok(Self { words, definitions })
    }

    /// Read a vocabulary from a JSON file
    ///
    /// # Errors
    /// Returns `VocabularyError::Read` if the file cannot be read, otherwise as
    /// [`Vocabulary::from_json`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, VocabularyError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| VocabularyError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether a word is part of the vocabulary
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.definitions.contains_key(word.text())
    }

    /// Definition for a word, if the word is in the vocabulary
    #[must_use]
    pub fn definition(&self, word: &str) -> Option<&str> {
        self.definitions.get(word).map(String::as_str)
    }
}

/// Load the vocabulary used by the game
///
/// Reads `path` when given, otherwise the embedded word list.
///
/// # Errors
/// Any `VocabularyError` is fatal: the game cannot start without words.
pub fn load_vocabulary(path: Option<&Path>) -> Result<Vocabulary, VocabularyError> {
    match path {
        Some(path) => Vocabulary::from_file(path),
        None => Vocabulary::from_json(WORDLIST_JSON),
    }
}

/// Pick a secret uniformly at random
///
/// Repeats across games are possible.
pub fn choose_secret<'a, R: Rng + ?Sized>(vocabulary: &'a Vocabulary, rng: &mut R) -> &'a Word {
    // A constructed vocabulary is never empty
    vocabulary
        .words
        .choose(rng)
        .unwrap_or(&vocabulary.words[0])
}
