//! Hangman - CLI
//!
//! Word-guessing game with a line-based text mode and a full-screen TUI mode.

use anyhow::{Context, Result};
use clap::builder::TypedValueParser as _;
use clap::{Parser, Subcommand};
use hangman::{
    commands::{PlayConfig, run_simple, write_words},
    core::{DEFAULT_MAX_GUESSES, GameSession},
    wordlists::WORDS,
};
use std::io;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word one letter at a time before the guesses run out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wrong guesses allowed before the game is lost
    #[arg(
        short = 'g',
        long,
        global = true,
        default_value_t = DEFAULT_MAX_GUESSES,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    max_guesses: usize,

    /// Seed for word selection, for reproducible games
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log to stderr (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-based text game (default)
    Simple,

    /// Full-screen interactive game
    Play,

    /// List the secret word candidates
    Words,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = PlayConfig::new(cli.max_guesses, cli.seed);

    // Default to the text game if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => run_simple_command(&config),
        Commands::Play => run_play_command(&config),
        Commands::Words => write_words(&mut io::stdout().lock(), WORDS)
            .context("Failed to write word list"),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_simple_command(config: &PlayConfig) -> Result<()> {
    let mut rng = config.rng();
    let mut session =
        GameSession::new(WORDS, config.max_guesses, &mut rng).context("Cannot start game")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple(&mut session, &mut stdin.lock(), &mut stdout.lock())
        .context("Terminal I/O failed")?;

    Ok(())
}

fn run_play_command(config: &PlayConfig) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(WORDS, config.max_guesses, config.rng()).context("Cannot start game")?;
    run_tui(app)
}
