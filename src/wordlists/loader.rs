//! Word list loading utilities
//!
//! Parses newline-delimited word sources and falls back to the built-in list
//! when a source is unusable.

use super::{WordList, WordListError};
use crate::core::{WORD_LENGTH, Word};
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Parse a newline-delimited word source
///
/// Each line is trimmed and uppercased; only lines of exactly 5 letters are kept.
///
/// # Errors
///
/// Returns `WordListError::Empty` if no line is a valid word.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::parse;
///
/// let list = parse("crane\n  slate \nabc\nheart\n").unwrap();
/// assert_eq!(list.len(), 3);
/// assert!(list.contains("SLATE"));
/// ```
pub fn parse(source: &str) -> Result<WordList, WordListError> {
    let mut skipped = 0usize;
    let words: Vec<Word> = source
        .lines()
        .map(str::trim)
        .filter(|line| line.chars().count() == WORD_LENGTH)
        .filter_map(|line| {
            let word = Word::new(line).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();

    if skipped > 0 {
        debug!(skipped, "dropped non-alphabetic entries");
    }

    WordList::new(words)
}

/// Load a word list from a file
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read, or
/// `WordListError::Empty` if it holds no valid words.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let content = fs::read_to_string(path)?;
    let list = parse(&content)?;
    info!(words = list.len(), "word list loaded");
    Ok(list)
}

/// Load a word list, substituting the built-in list on any failure
///
/// The failure is logged and never surfaced; the returned list is never empty.
pub fn load_or_fallback<P: AsRef<Path>>(path: P) -> WordList {
    let path = path.as_ref();
    load_from_file(path).unwrap_or_else(|err| {
        warn!(path = %path.display(), error = %err, "using built-in word list");
        WordList::fallback()
    })
}
