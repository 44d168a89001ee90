//! Keyboard hints
//!
//! Best-known status of every letter seen so far in a session.

use super::evaluation::{GuessResult, LetterStatus};
use rustc_hash::FxHashMap;

/// Cumulative per-letter status, never downgraded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHints {
    best: FxHashMap<char, LetterStatus>,
}

impl KeyboardHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold an evaluated guess into the hints
    ///
    /// A letter's stored status only changes when the new status outranks it
    /// (`Correct > Present > Absent`). A repeated letter can be Correct in one
    /// slot and Absent in another; the letter keeps Correct.
    pub fn merge(&mut self, result: &GuessResult) {
        for tile in result.tiles() {
            self.best
                .entry(tile.letter)
                .and_modify(|known| *known = (*known).max(tile.status))
                .or_insert(tile.status);
        }
    }

    /// Best-known status of `letter`, if it has been guessed
    #[must_use]
    pub fn status(&self, letter: char) -> Option<LetterStatus> {
        self.best.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Number of distinct letters guessed so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.best.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    pub fn clear(&mut self) {
        self.best.clear();
    }
}
