//! Game configuration
//!
//! Resolved from the command line in `main`; turns paths and options into word
//! lists, a random source and finally a [`Game`].

use crate::core::MAX_GUESSES;
use crate::game::Game;
use crate::wordlists::{WordList, load_or_fallback};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Default word source, looked up relative to the working directory
pub const DEFAULT_WORDLIST: &str = "words.txt";

/// Everything needed to start a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Accepted guesses
    pub wordlist: PathBuf,
    /// Target pool; the dictionary is used when absent
    pub targets: Option<PathBuf>,
    pub max_guesses: usize,
    /// Fixed seed for reproducible target selection
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            wordlist: PathBuf::from(DEFAULT_WORDLIST),
            targets: None,
            max_guesses: MAX_GUESSES,
            seed: None,
        }
    }
}

/// Dictionary and target pool, ready to share between sessions
#[derive(Debug, Clone)]
pub struct LoadedWords {
    pub dictionary: Arc<WordList>,
    pub targets: Arc<WordList>,
}

impl LoadedWords {
    /// The built-in list used for both roles
    #[must_use]
    pub fn fallback() -> Self {
        let list = Arc::new(WordList::fallback());
        Self {
            dictionary: Arc::clone(&list),
            targets: list,
        }
    }
}

impl GameConfig {
    /// Load the configured word lists, falling back to the built-in list
    #[must_use]
    pub fn load_words(&self) -> LoadedWords {
        let dictionary = Arc::new(load_or_fallback(&self.wordlist));
        let targets = match &self.targets {
            Some(path) => Arc::new(load_or_fallback(path)),
            None => Arc::clone(&dictionary),
        };
        info!(
            dictionary = dictionary.len(),
            targets = targets.len(),
            "word lists ready"
        );
        LoadedWords {
            dictionary,
            targets,
        }
    }

    /// Random source for target selection
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Start a game over already loaded word lists
    #[must_use]
    pub fn start_game(&self, words: LoadedWords) -> Game {
        Game::new(words.dictionary, words.targets, self.max_guesses, self.rng())
    }
}
