//! Single evaluation command
//!
//! Evaluates one guess against one target without starting a game.

use crate::core::{GuessResult, Word, WordError};
use crate::wordlists::WordList;

/// Result of checking a guess against a target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub result: GuessResult,
    pub target: Word,
    /// Whether the guess would be accepted by the dictionary
    pub accepted: bool,
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns `WordError` if either word is not a valid five-letter word.
pub fn check_guess(
    guess: &str,
    target: &str,
    dictionary: &WordList,
) -> Result<CheckResult, WordError> {
    let guess = Word::new(guess.trim())?;
    let target = Word::new(target.trim())?;

    Ok(CheckResult {
        result: GuessResult::evaluate(&guess, &target),
        accepted: dictionary.contains_word(&guess),
        target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct, Present};

    #[test]
    fn check_valid_words() {
        let dictionary = WordList::from_words(&["label", "alloy"]).unwrap();
        let checked = check_guess("label", "ALLOY", &dictionary).unwrap();

        assert!(checked.accepted);
        assert_eq!(checked.target.text(), "ALLOY");
        assert_eq!(
            checked.result.statuses().collect::<Vec<_>>(),
            vec![Present, Present, Absent, Absent, Present]
        );
    }

    #[test]
    fn check_reports_unknown_guess() {
        let dictionary = WordList::from_words(&["crane"]).unwrap();
        let checked = check_guess("xyzzy", "crane", &dictionary).unwrap();
        assert!(!checked.accepted);
        assert_eq!(checked.result.count(Correct), 0);
    }

    #[test]
    fn check_invalid_word() {
        let dictionary = WordList::fallback();
        assert_eq!(
            check_guess("cran", "crane", &dictionary),
            Err(WordError::InvalidLength(4))
        );
        assert_eq!(
            check_guess("crane", "cr4ne", &dictionary),
            Err(WordError::InvalidCharacters)
        );
    }
}
