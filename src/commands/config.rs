//! Game configuration
//!
//! Settings gathered from the command line and shared by every game mode.

use crate::core::DEFAULT_MAX_GUESSES;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for starting games
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayConfig {
    pub max_guesses: usize,
    pub seed: Option<u64>,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(max_guesses: usize, seed: Option<u64>) -> Self {
        Self { max_guesses, seed }
    }

    /// Random source for word selection
    ///
    /// Seeded runs pick the same sequence of words every time.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GUESSES, None)
    }
}
