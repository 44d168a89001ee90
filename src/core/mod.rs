//! Core game engine
//!
//! Pure domain types: words, guess evaluation, keyboard hints and the session
//! state machine. Nothing here performs I/O or rendering.

mod evaluation;
mod hints;
mod session;
mod word;

pub use evaluation::{GuessResult, LetterStatus, Tile};
pub use hints::KeyboardHints;
pub use session::{GUESS_LIMIT, GameSession, MAX_GUESSES, Outcome, SubmitError};
pub use word::{WORD_LENGTH, Word, WordError};
