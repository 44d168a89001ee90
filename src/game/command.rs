//! Input commands
//!
//! Every input device (terminal keys, typed lines) normalizes to one of these
//! before reaching the game.

use std::fmt;

/// A single player action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Letter(char),
    Backspace,
    Submit,
    NewGame,
}

impl Command {
    /// Commands that replay a typed word followed by a submission
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::Command;
    ///
    /// let commands: Vec<Command> = Command::typed("ab").collect();
    /// assert_eq!(
    ///     commands,
    ///     vec![Command::Letter('a'), Command::Letter('b'), Command::Submit]
    /// );
    /// ```
    pub fn typed(word: &str) -> impl Iterator<Item = Self> + '_ {
        word.chars()
            .map(Self::Letter)
            .chain(std::iter::once(Self::Submit))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(c) => write!(f, "letter({c})"),
            Self::Backspace => write!(f, "backspace"),
            Self::Submit => write!(f, "submit"),
            Self::NewGame => write!(f, "new game"),
        }
    }
}
