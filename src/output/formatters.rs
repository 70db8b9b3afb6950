//! Formatting utilities for terminal output

use crate::core::{GameStatus, GuessOutcome};

/// Widest guesses bar drawn, regardless of the guess limit
const MAX_BAR_WIDTH: usize = 20;

/// Feedback line for a single guess
#[must_use]
pub fn outcome_message(outcome: GuessOutcome) -> String {
    match outcome {
        GuessOutcome::Hit { letter, .. } => format!("Good guess: '{letter}' is in the word!"),
        GuessOutcome::Miss { letter } => format!("Sorry, '{letter}' is not in the word."),
        GuessOutcome::AlreadyGuessed(letter) => {
            format!("You've already guessed '{letter}'. Try again.")
        }
        GuessOutcome::InvalidInput => "Invalid input. Please guess a single letter.".to_string(),
        GuessOutcome::GameOver => "The game is already over.".to_string(),
    }
}

/// Closing line for a finished game, or `None` while it is still running
///
/// The secret word is only disclosed on a loss.
#[must_use]
pub fn result_message(status: GameStatus, secret: &str) -> Option<String> {
    match status {
        GameStatus::Won => Some("Congratulations! You've won!".to_string()),
        GameStatus::Lost => Some(format!(
            "Sorry, you've run out of guesses. The word was '{secret}'."
        )),
        GameStatus::InProgress => None,
    }
}

/// Bar of guesses left, one cell per guess up to `MAX_BAR_WIDTH`
#[must_use]
pub fn guesses_bar(remaining: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let width = max.min(MAX_BAR_WIDTH);
    let filled = remaining.min(max) * width / max;

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_messages() {
        assert_eq!(
            outcome_message(GuessOutcome::Hit {
                letter: 'c',
                revealed: 1
            }),
            "Good guess: 'c' is in the word!"
        );
        assert_eq!(
            outcome_message(GuessOutcome::Miss { letter: 'x' }),
            "Sorry, 'x' is not in the word."
        );
        assert_eq!(
            outcome_message(GuessOutcome::AlreadyGuessed('x')),
            "You've already guessed 'x'. Try again."
        );
        assert_eq!(
            outcome_message(GuessOutcome::InvalidInput),
            "Invalid input. Please guess a single letter."
        );
    }

    #[test]
    fn result_message_discloses_only_on_loss() {
        assert_eq!(
            result_message(GameStatus::Lost, "byte").as_deref(),
            Some("Sorry, you've run out of guesses. The word was 'byte'.")
        );

        let won = result_message(GameStatus::Won, "byte").unwrap();
        assert_eq!(won, "Congratulations! You've won!");
        assert!(!won.contains("byte"));

        assert_eq!(result_message(GameStatus::InProgress, "byte"), None);
    }

    #[test]
    fn guesses_bar_one_cell_per_guess() {
        assert_eq!(guesses_bar(5, 7), "█████░░");
        assert_eq!(guesses_bar(0, 3), "░░░");
    }

    #[test]
    fn guesses_bar_capped_width() {
        let bar = guesses_bar(50, 100);
        assert_eq!(bar.chars().count(), MAX_BAR_WIDTH);
        assert_eq!(bar.chars().filter(|&c| c == '█').count(), 10);
    }
}
