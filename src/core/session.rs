//! Game session state machine
//!
//! A session starts `InProgress` with empty input and history. Letters are
//! accumulated with [`GameSession::append_letter`] and [`GameSession::delete_letter`];
//! [`GameSession::submit_guess`] validates the input, evaluates it and moves the
//! session to `Won`, `Lost` or keeps it `InProgress`. `Won` and `Lost` are absorbing.

use super::evaluation::GuessResult;
use super::word::{WORD_LENGTH, Word};
use crate::wordlists::WordList;
use derive_more::{Display, Error};
use std::sync::Arc;
use tracing::{debug, info};

/// Default number of attempts per game
pub const MAX_GUESSES: usize = 6;

/// Most attempts a session can be configured with
pub const GUESS_LIMIT: usize = 20;

/// Progress of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a submission was rejected
///
/// The session is left unchanged, including the current input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SubmitError {
    #[display("Not enough letters")]
    IncompleteGuess,
    #[display("Not in word list")]
    NotInWordList,
    #[display("Game is already over")]
    GameOver,
}

/// One game: a target, the letters typed so far, and the evaluated guesses
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Word,
    dictionary: Arc<WordList>,
    max_guesses: usize,
    current_input: String,
    history: Vec<GuessResult>,
    outcome: Outcome,
}

impl GameSession {
    /// Start a session with the default number of attempts
    ///
    /// `dictionary` is the set of accepted guesses; it need not contain `target`.
    #[must_use]
    pub fn new(target: Word, dictionary: Arc<WordList>) -> Self {
        Self::with_max_guesses(target, dictionary, MAX_GUESSES)
    }

    /// Start a session allowing `max_guesses` attempts, clamped to `1..=GUESS_LIMIT`
    #[must_use]
    pub fn with_max_guesses(target: Word, dictionary: Arc<WordList>, max_guesses: usize) -> Self {
        let max_guesses = max_guesses.clamp(1, GUESS_LIMIT);
        debug!(max_guesses, "starting session");
        Self {
            target,
            dictionary,
            max_guesses,
            current_input: String::with_capacity(WORD_LENGTH),
            history: Vec::with_capacity(max_guesses),
            outcome: Outcome::InProgress,
        }
    }

    /// Append a letter to the current input
    ///
    /// Ignored when the game is over, the input is already full, or `c` is not an
    /// ASCII letter.
    pub fn append_letter(&mut self, c: char) {
        if self.outcome.is_over()
            || self.current_input.len() >= WORD_LENGTH
            || !c.is_ascii_alphabetic()
        {
            return;
        }
        self.current_input.push(c.to_ascii_uppercase());
    }

    /// Remove the last letter of the current input, if any
    pub fn delete_letter(&mut self) {
        if self.outcome.is_over() {
            return;
        }
        self.current_input.pop();
    }

    /// Submit the current input as a guess
    ///
    /// On success the result is recorded in the history, the input is cleared and
    /// the outcome recomputed.
    ///
    /// # Errors
    /// - `GameOver` if the session already ended
    /// - `IncompleteGuess` if fewer than 5 letters were typed
    /// - `NotInWordList` if the word is not an accepted guess
    pub fn submit_guess(&mut self) -> Result<GuessResult, SubmitError> {
        if self.outcome.is_over() {
            return Err(SubmitError::GameOver);
        }
        if self.current_input.len() != WORD_LENGTH {
            return Err(SubmitError::IncompleteGuess);
        }
        let guess = Word::new(&self.current_input).map_err(|_| SubmitError::NotInWordList)?;
        if !self.dictionary.contains_word(&guess) {
            debug!(guess = %guess, "rejected guess");
            return Err(SubmitError::NotInWordList);
        }

        let result = GuessResult::evaluate(&guess, &self.target);
        self.history.push(result.clone());
        self.current_input.clear();

        self.outcome = if result.is_win() {
            Outcome::Won
        } else if self.history.len() >= self.max_guesses {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };

        debug!(guess = %result, attempt = self.history.len(), "guess evaluated");
        if self.outcome.is_over() {
            info!(outcome = ?self.outcome, guesses = self.history.len(), "session finished");
        }

        Ok(result)
    }

    /// Letters typed for the guess in progress
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// Evaluated guesses, oldest first
    #[must_use]
    pub fn history(&self) -> &[GuessResult] {
        &self.history
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Attempts left before the session is lost
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses - self.history.len()
    }

    /// The hidden word
    ///
    /// Front ends should only reveal it once the session is over.
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Terminal message, `None` while the game is in progress
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self.outcome {
            Outcome::InProgress => None,
            Outcome::Won => Some("Congratulations! You won!".to_string()),
            Outcome::Lost => Some(format!("Game over! The word was: {}", self.target)),
        }
    }

    /// Share grid: one emoji row per guess
    #[must_use]
    pub fn share_grid(&self) -> String {
        let score = match self.outcome {
            Outcome::Won => self.history.len().to_string(),
            _ => "X".to_string(),
        };
        let mut grid = format!("Wordle {score}/{}", self.max_guesses);
        for result in &self.history {
            grid.push('\n');
            grid.push_str(&result.to_emoji());
        }
        grid
    }
}
