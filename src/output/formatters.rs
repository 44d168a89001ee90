//! Formatting utilities for terminal output

use crate::core::{GuessResult, LetterStatus};

/// On-screen keyboard layout, one string per row
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Plain-text marker for a status: G (correct), Y (present), - (absent)
#[must_use]
pub const fn status_marker(status: LetterStatus) -> char {
    match status {
        LetterStatus::Correct => 'G',
        LetterStatus::Present => 'Y',
        LetterStatus::Absent => '-',
    }
}

/// Format a result as plain markers, e.g. "--G-G"
#[must_use]
pub fn result_markers(result: &GuessResult) -> String {
    result.statuses().map(status_marker).collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
