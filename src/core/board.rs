//! Rendered board snapshot

use std::fmt;

/// Symbol displayed for a position that has not been revealed yet
pub const PLACEHOLDER: char = '_';

/// Read-only snapshot of a session for display
///
/// Produced by `GameSession::board`. Holding a `Board` never borrows the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    mask: Vec<Option<char>>,
    remaining_guesses: usize,
    guessed: Vec<char>,
}

impl Board {
    pub(crate) fn new(mask: Vec<Option<char>>, remaining_guesses: usize, guessed: Vec<char>) -> Self {
        Self {
            mask,
            remaining_guesses,
            guessed,
        }
    }

    /// The reveal mask as space-joined letters and placeholders, e.g. `c _ d _`
    #[must_use]
    pub fn mask(&self) -> String {
        let mut out = String::with_capacity(self.mask.len() * 2);
        for (i, cell) in self.mask.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(cell.unwrap_or(PLACEHOLDER));
        }
        out
    }

    /// Individual mask cells, `None` for a placeholder
    #[must_use]
    pub fn cells(&self) -> &[Option<char>] {
        &self.mask
    }

    #[must_use]
    pub const fn remaining_guesses(&self) -> usize {
        self.remaining_guesses
    }

    /// Guessed letters in alphabetical order
    #[must_use]
    pub fn guessed(&self) -> &[char] {
        &self.guessed
    }

    /// Whether a guessed letter was found in the word
    #[must_use]
    pub fn is_revealed(&self, letter: char) -> bool {
        self.mask.contains(&Some(letter))
    }

    /// Guessed letters that were not in the word, in alphabetical order
    #[must_use]
    pub fn misses(&self) -> Vec<char> {
        self.guessed
            .iter()
            .copied()
            .filter(|&c| !self.is_revealed(c))
            .collect()
    }

    /// Guessed letters joined as `a, b, c`
    #[must_use]
    pub fn guessed_list(&self) -> String {
        self.guessed
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current word: {}", self.mask())?;
        writeln!(f, "Guesses left: {}", self.remaining_guesses)?;
        write!(f, "Guessed letters: {}", self.guessed_list())
    }
}
