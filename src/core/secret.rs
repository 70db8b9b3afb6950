//! Secret word representation
//!
//! A `SecretWord` stores the lowercase word along with letter position indices
//! so a correct guess can reveal every occurrence at once.

use rustc_hash::FxHashMap;
use std::fmt;

/// The hidden word of a hangman session with letter position tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: Vec<char>,
    letter_positions: FxHashMap<char, Vec<usize>>,
}

impl SecretWord {
    /// Create a new secret word, normalized to lowercase
    ///
    /// Any alphabetic character counts as a letter, not just ASCII. Other
    /// characters (spaces, hyphens) are kept but never need guessing.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("Café");
    /// assert_eq!(word.text(), "café");
    /// assert_eq!(word.positions_of('é'), &[3]);
    /// ```
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text: String = text.into().to_lowercase();
        let letters: Vec<char> = text.chars().collect();

        // Build position map for fast reveal
        let mut letter_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in letters.iter().enumerate() {
            if ch.is_alphabetic() {
                letter_positions.entry(ch).or_default().push(i);
            }
        }

        Self {
            text,
            letters,
            letter_positions,
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of character positions in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Characters of the word in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letter_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_creation_valid() {
        let word = SecretWord::new("code");
        assert_eq!(word.text(), "code");
        assert_eq!(word.len(), 4);
        assert!(!word.is_empty());
    }

    #[test]
    fn secret_creation_uppercase_normalized() {
        let word = SecretWord::new("CODE");
        assert_eq!(word.text(), "code");

        let word2 = SecretWord::new("PoLyMorphism");
        assert_eq!(word2.text(), "polymorphism");
    }

    #[test]
    fn secret_creation_unicode_letters() {
        let word = SecretWord::new("CAFÉ");
        assert_eq!(word.text(), "café");
        assert!(word.has_letter('é'));
        assert_eq!(word.positions_of('é'), &[3]);
    }

    #[test]
    fn secret_non_letters_are_not_guessable() {
        let word = SecretWord::new("c0-de");
        assert_eq!(word.len(), 5);
        assert!(!word.has_letter('0'));
        assert!(!word.has_letter('-'));
        assert_eq!(word.positions_of('d'), &[3]);
    }

    #[test]
    fn secret_empty() {
        let word = SecretWord::new("");
        assert!(word.is_empty());
        assert!(word.letters().is_empty());
    }

    #[test]
    fn secret_letters_in_order() {
        let word = SecretWord::new("byte");
        assert_eq!(word.letters(), &['b', 'y', 't', 'e']);
    }

    #[test]
    fn secret_has_letter() {
        let word = SecretWord::new("byte");
        assert!(word.has_letter('b'));
        assert!(word.has_letter('e'));
        assert!(!word.has_letter('x'));
        assert!(!word.has_letter('B'));
    }

    #[test]
    fn secret_positions_of_duplicates() {
        let word = SecretWord::new("inheritance");
        assert_eq!(word.positions_of('i'), &[0, 5]);
        assert_eq!(word.positions_of('n'), &[1, 8]);
        assert_eq!(word.positions_of('e'), &[3, 10]);
        assert_eq!(word.positions_of('h'), &[2]);
        assert_eq!(word.positions_of('z'), &[]);
    }

    #[test]
    fn secret_display() {
        let word = SecretWord::new("syntax");
        assert_eq!(format!("{word}"), "syntax");
    }
}
