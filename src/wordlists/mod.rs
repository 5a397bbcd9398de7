//! Word lists for Wordle
//!
//! Provides the embedded default dictionary compiled into the binary, plus a
//! loader for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_alphabetic()),
                "Word '{word}' contains non-letters"
            );
        }
    }

    #[test]
    fn expected_count() {
        assert_eq!(WORDS_COUNT, 711, "Expected 711 embedded words");
    }
}
