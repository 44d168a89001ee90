//! Guess evaluation
//!
//! Compares a guess against the target and produces one status per position:
//! - Absent (letter not in word, or no copies left for it)
//! - Present (letter in word, wrong position)
//! - Correct (letter in correct position)
//!
//! Repeated letters are handled with multiset semantics: a guess letter is only
//! marked Present while the target still has unmatched copies of it.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter
///
/// Ordered by precedence: `Absent < Present < Correct`. Keyboard hints rely on
/// this ordering to never downgrade a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Emoji square used in share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// One evaluated position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub letter: char,
    pub status: LetterStatus,
}

/// Evaluated guess: one tile per position, in guess order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessResult {
    tiles: [Tile; WORD_LENGTH],
}

impl GuessResult {
    /// Evaluate `guess` against `target`
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. Count every letter of the target
    /// 2. First pass: mark exact matches Correct and remove them from the pool
    /// 3. Second pass, left to right: Present while the pool still holds the
    ///    letter, Absent otherwise
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{GuessResult, LetterStatus, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let result = GuessResult::evaluate(&guess, &target);
    ///
    /// assert_eq!(result.to_emoji(), "⬜⬜🟩⬜🟩");
    /// assert_eq!(result.count(LetterStatus::Correct), 2);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        let mut remaining = target.letter_counts();
        let guess_chars = guess.chars();
        let target_chars = target.chars();

        // First pass: exact position matches
        for (i, status) in statuses.iter_mut().enumerate() {
            if guess_chars[i] == target_chars[i] {
                *status = LetterStatus::Correct;
                if let Some(count) = remaining.get_mut(&guess_chars[i]) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, earliest occurrence first
        for (i, status) in statuses.iter_mut().enumerate() {
            if *status == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess_chars[i])
                && *count > 0
            {
                *status = LetterStatus::Present;
                *count -= 1;
            }
        }

        let tiles = std::array::from_fn(|i| Tile {
            letter: char::from(guess_chars[i]),
            status: statuses[i],
        });

        Self { tiles }
    }

    /// Tiles in guess order
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LENGTH] {
        &self.tiles
    }

    /// Statuses in guess order
    pub fn statuses(&self) -> impl Iterator<Item = LetterStatus> + '_ {
        self.tiles.iter().map(|tile| tile.status)
    }

    /// The guessed word, uppercase
    #[must_use]
    pub fn word(&self) -> String {
        self.tiles.iter().map(|tile| tile.letter).collect()
    }

    /// Check if every position is Correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.statuses().all(|s| s == LetterStatus::Correct)
    }

    /// Count positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.statuses().filter(|&s| s == status).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.statuses().map(LetterStatus::emoji).collect()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word(), self.to_emoji())
    }
}
