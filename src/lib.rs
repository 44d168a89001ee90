//! Wordle Game
//!
//! A terminal Wordle: guess evaluation with exact duplicate-letter rules, the game
//! state machine, word-list loading and two front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use wordle_game::core::{GameSession, Outcome, Word};
//! use wordle_game::wordlists::WordList;
//!
//! let words = Arc::new(WordList::from_words(&["crane", "slate"]).unwrap());
//! let mut session = GameSession::new(Word::new("crane").unwrap(), words);
//!
//! for c in "slate".chars() {
//!     session.append_letter(c);
//! }
//! let result = session.submit_guess().unwrap();
//! println!("{}", result.to_emoji());
//! assert_eq!(session.outcome(), Outcome::InProgress);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Game controller: commands, notices, statistics
pub mod game;

// Settings resolved from the command line
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
