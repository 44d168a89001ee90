//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: each line is a guess or a command.

use crate::core::{GuessResult, Outcome, SubmitError, WORD_LENGTH};
use crate::game::{Command, Game};
use crate::output::{print_guess_result, print_keyboard, print_statistics};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What a line of input asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// A guess was evaluated
    Guessed(GuessResult),
    /// The guess was rejected; the game is unchanged
    Rejected(SubmitError),
    /// More letters than fit in a row; nothing was typed
    TooManyLetters,
    NewGame,
    Quit,
    /// Blank line or a guess after the game ended
    Ignored,
}

/// Apply one line of input to the game
///
/// `quit`/`exit` and `new` are commands; anything else is typed as letters and
/// submitted. The input row is cleared first so a rejected line never leaks
/// into the next one. A line longer than a word is rejected whole rather than
/// truncated.
pub fn handle_line(game: &mut Game, line: &str) -> LineOutcome {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "" => return LineOutcome::Ignored,
        "quit" | "exit" | ":q" => return LineOutcome::Quit,
        "new" | ":n" => {
            // NewGame never fails
            let _ = game.apply(Command::NewGame);
            return LineOutcome::NewGame;
        }
        _ => {}
    }

    if line.chars().count() > WORD_LENGTH {
        return if game.session().outcome().is_over() {
            LineOutcome::Ignored
        } else {
            LineOutcome::TooManyLetters
        };
    }

    while !game.session().current_input().is_empty() {
        let _ = game.apply(Command::Backspace);
    }

    let mut outcome = LineOutcome::Ignored;
    for command in Command::typed(line) {
        outcome = match game.apply(command) {
            Ok(Some(result)) => LineOutcome::Guessed(result),
            Ok(None) => LineOutcome::Ignored,
            Err(SubmitError::GameOver) => LineOutcome::Ignored,
            Err(err) => LineOutcome::Rejected(err),
        };
    }
    outcome
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple(game: &mut Game) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      Wordle - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the 5-letter word in {} tries.", game.session().max_guesses());
    println!("Commands: 'new' for a new game, 'quit' to exit\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let session = game.session();
        let prompt = if session.outcome().is_over() {
            "Type 'new' to play again or 'quit'".to_string()
        } else {
            format!("Guess ({} left)", session.remaining_guesses())
        };
        print!("{prompt}: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };

        match handle_line(game, &line?) {
            LineOutcome::Quit => break,
            LineOutcome::NewGame => println!("\n🔄 New game started!\n"),
            LineOutcome::Ignored => {}
            LineOutcome::Rejected(err) => println!("❌ {}", err.to_string().red()),
            LineOutcome::TooManyLetters => println!("❌ {}", "Too many letters".red()),
            LineOutcome::Guessed(_) => print_board(game),
        }
    }

    print_statistics(game.stats(), game.session().max_guesses());
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn print_board(game: &Game) {
    let session = game.session();
    println!();
    for (i, result) in session.history().iter().enumerate() {
        print_guess_result(i + 1, session.max_guesses(), result);
    }

    match session.outcome() {
        Outcome::InProgress => print_keyboard(game.hints()),
        Outcome::Won => {
            if let Some(message) = session.message() {
                println!("\n🎉 {}", message.bright_green().bold());
            }
            println!("\n{}\n", session.share_grid());
        }
        Outcome::Lost => {
            if let Some(message) = session.message() {
                println!("\n{}", message.red().bold());
            }
            println!("\n{}\n", session.share_grid());
        }
    }
}
