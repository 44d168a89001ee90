//! Colored terminal output for the line-based front ends

use super::formatters::{KEYBOARD_ROWS, create_progress_bar, result_markers};
use crate::core::{GuessResult, KeyboardHints, LetterStatus};
use crate::game::Statistics;
use colored::{ColoredString, Colorize};

fn paint(label: &str, status: Option<LetterStatus>) -> ColoredString {
    match status {
        Some(LetterStatus::Correct) => label.black().on_green().bold(),
        Some(LetterStatus::Present) => label.black().on_yellow().bold(),
        Some(LetterStatus::Absent) => label.white().on_bright_black(),
        None => label.normal(),
    }
}

/// Render a guess as a row of colored tiles
#[must_use]
pub fn format_guess_result(result: &GuessResult) -> String {
    result
        .tiles()
        .iter()
        .map(|tile| paint(&format!(" {} ", tile.letter), Some(tile.status)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print a guess as a row of colored tiles
pub fn print_guess_result(turn: usize, max_guesses: usize, result: &GuessResult) {
    println!("  {turn}/{max_guesses}  {}", format_guess_result(result));
}

/// Print the keyboard colored by hints
pub fn print_keyboard(hints: &KeyboardHints) {
    println!();
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .map(|c| paint(&c.to_string(), hints.status(c)).to_string())
            .collect();
        println!("  {}{}", " ".repeat(indent), keys.join(" "));
    }
    println!();
}

/// Print the evaluation of a single guess against a target
pub fn print_check_result(result: &GuessResult, target: &str) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.word().bright_yellow().bold(),
        target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!(
        "\n  {}   {}   {}\n",
        format_guess_result(result),
        result.to_emoji(),
        result_markers(result).bright_black()
    );
}

/// Print the statistics of the games played so far
pub fn print_statistics(stats: &Statistics, max_guesses: usize) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());
    println!("   Played:       {}", stats.total_games);
    println!(
        "   Win rate:     {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Streak:       {} (max {})", stats.current_streak, stats.max_streak);

    if stats.games_won == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guesses in 1..=max_guesses {
        let count = stats.wins_in(guesses);
        let bar = create_progress_bar(count as f64, stats.games_won as f64, 20);
        println!("   {guesses}: {} {count}", bar.green());
    }
}
