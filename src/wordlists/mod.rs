//! Word list for hangman
//!
//! Provides the secret word candidates compiled into the binary.

mod embedded;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretWord;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_lowercase_letters() {
        for &word in WORDS {
            assert!(!word.is_empty(), "Empty word in list");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_valid_secrets() {
        for &word in WORDS {
            let secret = SecretWord::new(word);
            assert!(!secret.is_empty());
            assert!(
                secret.letters().iter().all(|&c| secret.has_letter(c)),
                "'{word}' has characters that cannot be guessed"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn expected_count() {
        assert_eq!(WORDS_COUNT, 40, "Expected 40 secret words");
    }
}
