//! Hangman game session
//!
//! `GameSession` is the whole game state machine: a secret word, the letters
//! guessed so far, the reveal mask and the wrong-guess budget.

use super::board::Board;
use super::secret::SecretWord;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, info};

/// Default number of wrong guesses allowed
pub const DEFAULT_MAX_GUESSES: usize = 7;

/// Error type for sessions that cannot be started
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyWordList,
    ZeroGuesses,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list must contain at least one word"),
            Self::ZeroGuesses => write!(f, "Maximum guesses must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result of submitting one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter is in the word; `revealed` positions were uncovered
    Hit { letter: char, revealed: usize },
    /// The letter is not in the word; one guess was consumed
    Miss { letter: char },
    /// The letter was submitted before; nothing changed
    AlreadyGuessed(char),
    /// Not exactly one letter; nothing changed
    InvalidInput,
    /// The session already reached a terminal status; nothing changed
    GameOver,
}

impl GuessOutcome {
    /// Whether the guess changed the session
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Hit { .. } | Self::Miss { .. })
    }
}

/// Overall state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// `Won` and `Lost` are terminal
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A single game of hangman
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: SecretWord,
    max_guesses: usize,
    remaining_guesses: usize,
    guessed: BTreeSet<char>,
    mask: Vec<Option<char>>,
}

impl GameSession {
    /// Start a session with a word picked uniformly at random from `words`
    ///
    /// The random source is injected so games can be replayed from a seed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `words` is empty or `max_guesses` is zero.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GameSession, GameStatus};
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let session = GameSession::new(&["code", "byte"], 7, &mut rng).unwrap();
    /// assert_eq!(session.status(), GameStatus::InProgress);
    /// assert!(["code", "byte"].contains(&session.secret_word()));
    /// ```
    pub fn new<S, R>(words: &[S], max_guesses: usize, rng: &mut R) -> Result<Self, ConfigError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        if words.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }
        if max_guesses == 0 {
            return Err(ConfigError::ZeroGuesses);
        }

        let chosen = words.choose(rng).ok_or(ConfigError::EmptyWordList)?;
        Self::with_secret(chosen.as_ref(), max_guesses)
    }

    /// Start a session around a known word
    ///
    /// Characters that are not letters (a space, a hyphen) start out revealed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `max_guesses` is zero.
    pub fn with_secret(word: &str, max_guesses: usize) -> Result<Self, ConfigError> {
        if max_guesses == 0 {
            return Err(ConfigError::ZeroGuesses);
        }

        let secret = SecretWord::new(word);
        debug!(length = secret.len(), max_guesses, "session created");

        Ok(Self {
            mask: secret
                .letters()
                .iter()
                .map(|&c| (!c.is_alphabetic()).then_some(c))
                .collect(),
            secret,
            max_guesses,
            remaining_guesses: max_guesses,
            guessed: BTreeSet::new(),
        })
    }

    /// Apply one guess
    ///
    /// Input must be exactly one alphabetic character in either case. Only a new valid
    /// letter changes the session: a hit reveals every occurrence, a miss
    /// costs one guess.
    pub fn guess(&mut self, input: &str) -> GuessOutcome {
        if self.is_game_over() {
            return GuessOutcome::GameOver;
        }

        let Some(letter) = parse_letter(input) else {
            debug!(input, "rejected guess");
            return GuessOutcome::InvalidInput;
        };

        if !self.guessed.insert(letter) {
            debug!(%letter, "repeated guess");
            return GuessOutcome::AlreadyGuessed(letter);
        }

        let positions = self.secret.positions_of(letter);
        let outcome = if positions.is_empty() {
            self.remaining_guesses -= 1;
            GuessOutcome::Miss { letter }
        } else {
            for &i in positions {
                self.mask[i] = Some(letter);
            }
            GuessOutcome::Hit {
                letter,
                revealed: positions.len(),
            }
        };
        debug!(?outcome, remaining = self.remaining_guesses, "guess applied");

        let status = self.status();
        if status.is_over() {
            info!(
                ?status,
                wrong_guesses = self.wrong_guesses(),
                "game finished"
            );
        }

        outcome
    }

    /// Snapshot of the mask, guesses left and guessed letters
    #[must_use]
    pub fn board(&self) -> Board {
        Board::new(
            self.mask.clone(),
            self.remaining_guesses,
            self.guessed.iter().copied().collect(),
        )
    }

    /// Current status; `Won` takes precedence over `Lost`
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.mask.iter().all(Option::is_some) {
            GameStatus::Won
        } else if self.remaining_guesses == 0 {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status().is_over()
    }

    /// The secret word, for disclosure once the game is lost
    #[must_use]
    pub fn secret_word(&self) -> &str {
        self.secret.text()
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub const fn remaining_guesses(&self) -> usize {
        self.remaining_guesses
    }

    /// Number of misses so far
    #[must_use]
    pub const fn wrong_guesses(&self) -> usize {
        self.max_guesses - self.remaining_guesses
    }

    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&lowercase(letter))
    }
}

/// Accept exactly one alphabetic character, lowercased
fn parse_letter(input: &str) -> Option<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Some(lowercase(c)),
        _ => None,
    }
}

/// Single-character lowercase mapping; letters without one are kept as is
fn lowercase(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
