//! TUI application state and logic

use crate::core::{ConfigError, GameSession, GameStatus, GuessOutcome};
use crate::output::formatters::{outcome_message, result_message};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::info;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub session: GameSession,
    pub words: &'a [&'a str],
    pub max_guesses: usize,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results across the games of one run
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Won games indexed by wrong guesses taken
    pub wrong_guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, status: GameStatus, wrong_guesses: usize) {
        self.total_games += 1;
        if status == GameStatus::Won {
            self.games_won += 1;
            if self.wrong_guess_distribution.len() <= wrong_guesses {
                self.wrong_guess_distribution.resize(wrong_guesses + 1, 0);
            }
            self.wrong_guess_distribution[wrong_guesses] += 1;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    /// Create the app and start its first game
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no session can be built from `words` and `max_guesses`.
    pub fn new(
        words: &'a [&'a str],
        max_guesses: usize,
        mut rng: StdRng,
    ) -> Result<Self, ConfigError> {
        let session = GameSession::new(words, max_guesses, &mut rng)?;

        let mut app = Self {
            session,
            words,
            max_guesses,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            rng,
        };
        app.add_message("Welcome! Type a letter to guess.", MessageStyle::Info);
        app.add_message(
            &format!("The word has {} letters.", app.session.secret_word().len()),
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Submit a guess and record its feedback
    pub fn handle_guess(&mut self, input: &str) {
        let outcome = self.session.guess(input);

        let style = match outcome {
            GuessOutcome::Hit { .. } => MessageStyle::Success,
            GuessOutcome::Miss { .. } | GuessOutcome::InvalidInput => MessageStyle::Error,
            GuessOutcome::AlreadyGuessed(_) | GuessOutcome::GameOver => MessageStyle::Info,
        };
        self.add_message(&outcome_message(outcome), style);

        let status = self.session.status();
        if outcome.is_accepted() && status.is_over() {
            self.stats.record(status, self.session.wrong_guesses());

            if let Some(text) = result_message(status, self.session.secret_word()) {
                let style = if status == GameStatus::Won {
                    MessageStyle::Success
                } else {
                    MessageStyle::Error
                };
                self.add_message(&text, style);
            }
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        }
    }

    pub fn new_game(&mut self) {
        match GameSession::new(self.words, self.max_guesses, &mut self.rng) {
            Ok(session) => {
                self.session = session;
                self.messages.clear();
                info!(games_played = self.stats.total_games, "new game started");
                self.add_message(
                    &format!(
                        "New game started! The word has {} letters.",
                        self.session.secret_word().len()
                    ),
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.session.is_game_over() {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {
                    // Ignore other keys until the player chooses
                }
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => self.handle_guess(&c.to_string()),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, F>(terminal: &mut Terminal<B>, mut app: App, mut next_event: F) -> Result<()>
where
    B: ratatui::backend::Backend,
    F: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
