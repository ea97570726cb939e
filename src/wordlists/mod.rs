//! Word source for the game
//!
//! Provides the embedded word list and the loader that turns it into a [`Vocabulary`].

mod embedded;
pub mod loader;

pub use embedded::WORDLIST_JSON;
pub use loader::{Vocabulary, VocabularyError, choose_secret, load_vocabulary};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_list_is_json_object() {
        let value: serde_json::Value = serde_json::from_str(WORDLIST_JSON).unwrap();
        assert!(value.is_object());
    }

    #[test]
    fn embedded_words_are_lowercase_five_letters() {
        let vocab = load_vocabulary(None).unwrap();
        for word in vocab.words() {
            assert_eq!(word.text().len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.text().chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn every_embedded_word_has_a_definition() {
        let vocab = load_vocabulary(None).unwrap();
        for word in vocab.words() {
            let definition = vocab.definition(word.text()).unwrap();
            assert!(!definition.is_empty(), "Word '{word}' has no definition");
        }
    }
}
