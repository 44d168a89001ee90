//! Wordle - CLI
//!
//! Terminal Wordle with a TUI, a simple line mode and a one-off guess checker.

use anyhow::Result;
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::{check_guess, run_simple},
    config::{DEFAULT_WORDLIST, GameConfig},
    core::{GUESS_LIMIT, MAX_GUESSES},
    output::print_check_result,
    wordlists::load_or_fallback,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Newline-delimited list of accepted words (built-in list if unreadable)
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDLIST)]
    wordlist: PathBuf,

    /// Separate list to draw targets from (defaults to the word list)
    #[arg(short, long, global = true)]
    targets: Option<PathBuf>,

    /// Number of attempts per game
    #[arg(
        short = 'g',
        long,
        global = true,
        default_value_t = MAX_GUESSES,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=GUESS_LIMIT as u64)
    )]
    max_guesses: usize,

    /// Seed for reproducible target selection
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log file for the TUI (logs go to stderr in other modes)
    #[arg(long, global = true, default_value = "wordle_game.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Show the feedback a guess would get against a target
    Check {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            wordlist: self.wordlist.clone(),
            targets: self.targets.clone(),
            max_guesses: self.max_guesses,
            seed: self.seed,
        }
    }
}

/// Logs to a file so they do not interfere with the TUI
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.game_config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            init_file_logging(&cli.log_file)?;
            run_play_command(config)
        }
        Commands::Simple => {
            init_stderr_logging();
            run_simple_command(&config)
        }
        Commands::Check { guess, target } => {
            init_stderr_logging();
            run_check_command(&config, &guess, &target)
        }
    }
}

fn run_play_command(config: GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    info!(?config, "starting TUI");
    run_tui(App::new(config))
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut game = config.start_game(config.load_words());
    run_simple(&mut game)
}

fn run_check_command(config: &GameConfig, guess: &str, target: &str) -> Result<()> {
    let dictionary = load_or_fallback(&config.wordlist);
    let checked = check_guess(guess, target, &dictionary)?;

    print_check_result(&checked.result, checked.target.text());
    if !checked.accepted {
        println!("Note: {} is not in the word list", checked.result.word());
    }
    Ok(())
}
