//! Built-in fallback word list
//!
//! Substituted whenever the configured word source cannot be read or yields no
//! valid words, so a game can always start offline.

/// Words used when the word source is unavailable
pub const FALLBACK_WORDS: &[&str] = &[
    "REACT", "WORLD", "ABOUT", "HEART", "WATER", "HAPPY", "LIGHT", "MUSIC", "PEACE", "SMILE",
    "DREAM", "POWER", "VOICE", "FOCUS", "MAGIC", "BRAVE", "QUIET", "STORY", "DANCE", "GRACE",
];

/// Number of words in `FALLBACK_WORDS`
pub const FALLBACK_COUNT: usize = 20;
