//! Word lists
//!
//! A [`WordList`] is a non-empty, de-duplicated set of five-letter words. It is
//! used both as the dictionary of accepted guesses and as the pool targets are
//! drawn from; the two may be different lists.

mod fallback;
pub mod loader;

pub use fallback::{FALLBACK_COUNT, FALLBACK_WORDS};
pub use loader::{load_from_file, load_or_fallback, parse};

use crate::core::Word;
use derive_more::{Display, Error, From};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::io;

/// Error produced while building a word list
#[derive(Debug, Display, Error, From)]
pub enum WordListError {
    #[display("failed to read word list: {_0}")]
    #[from]
    Io(#[error(source)] io::Error),
    #[display("word list contains no valid 5-letter words")]
    Empty,
}

/// Non-empty set of words, keeping first-seen order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordList {
    /// Build a list from validated words, dropping duplicates
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `words` yields nothing.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, WordListError> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| index.insert(word.clone()))
            .collect();

        if words.is_empty() {
            return Err(WordListError::Empty);
        }

        Ok(Self { words, index })
    }

    /// Build a list from string slices, skipping anything that is not a valid word
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if no entry is a valid word.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::WordList;
    ///
    /// let list = WordList::from_words(&["crane", "slate", "toolong"]).unwrap();
    /// assert_eq!(list.len(), 2);
    /// assert!(list.contains("Crane"));
    /// ```
    pub fn from_words(slice: &[&str]) -> Result<Self, WordListError> {
        Self::new(slice.iter().filter_map(|&s| Word::new(s).ok()))
    }

    /// The built-in fallback list
    ///
    /// # Panics
    /// Will not panic - the fallback list is a non-empty constant of valid words.
    #[must_use]
    pub fn fallback() -> Self {
        Self::from_words(FALLBACK_WORDS).expect("fallback word list is never empty")
    }

    /// Pick a target uniformly at random
    ///
    /// # Panics
    /// Will not panic - a `WordList` is never empty.
    pub fn pick_target<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        self.words
            .choose(rng)
            .expect("word list is non-empty by construction")
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        Word::new(candidate.trim()).is_ok_and(|word| self.index.contains(&word))
    }

    /// Membership test for an already validated word
    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn fallback_count_matches_const() {
        assert_eq!(FALLBACK_WORDS.len(), FALLBACK_COUNT);
    }

    #[test]
    fn fallback_words_are_valid() {
        for &word in FALLBACK_WORDS {
            assert!(Word::new(word).is_ok(), "Word '{word}' is not valid");
        }
        assert_eq!(WordList::fallback().len(), FALLBACK_COUNT);
    }

    #[test]
    fn new_rejects_empty() {
        assert!(matches!(WordList::new(Vec::new()), Err(WordListError::Empty)));
        assert!(matches!(
            WordList::from_words(&["toolong", "abc"]),
            Err(WordListError::Empty)
        ));
    }

    #[test]
    fn duplicates_collapse_in_first_seen_order() {
        let list = WordList::from_words(&["slate", "CRANE", "Slate", "crane"]).unwrap();
        let texts: Vec<&str> = list.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["SLATE", "CRANE"]);
    }

    #[test]
    fn contains_is_case_normalized() {
        let list = WordList::from_words(&["crane"]).unwrap();
        assert!(list.contains("crane"));
        assert!(list.contains("CRANE"));
        assert!(list.contains(" CrAnE "));
        assert!(!list.contains("slate"));
        assert!(!list.contains("cran"));
        assert!(list.contains_word(&Word::new("crane").unwrap()));
    }

    #[test]
    fn pick_target_draws_from_list() {
        let list = WordList::from_words(&["crane", "slate", "mango"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(list.contains_word(list.pick_target(&mut rng)));
        }
    }

    #[test]
    fn pick_target_reaches_every_word() {
        let list = WordList::from_words(&["crane", "slate", "mango"]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let seen: FxHashSet<&Word> = (0..200).map(|_| list.pick_target(&mut rng)).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn pick_target_is_deterministic_for_a_seed() {
        let list = WordList::fallback();
        let a: Vec<Word> = {
            let mut rng = StdRng::seed_from_u64(1);
            (0..10).map(|_| list.pick_target(&mut rng).clone()).collect()
        };
        let b: Vec<Word> = {
            let mut rng = StdRng::seed_from_u64(1);
            (0..10).map(|_| list.pick_target(&mut rng).clone()).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn io_error_has_source() {
        let err = WordListError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("failed to read word list"));
    }
}
