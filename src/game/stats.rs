//! Per-process game statistics

use crate::core::Outcome;
use rustc_hash::FxHashMap;

/// Results of the games finished since the program started
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Number of wins keyed by guesses used
    pub guess_distribution: FxHashMap<usize, usize>,
}

impl Statistics {
    /// Record a finished game
    pub fn record(&mut self, outcome: Outcome, guesses: usize) {
        match outcome {
            Outcome::InProgress => return,
            Outcome::Won => {
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                *self.guess_distribution.entry(guesses).or_insert(0) += 1;
            }
            Outcome::Lost => self.current_streak = 0,
        }
        self.total_games += 1;
    }

    /// Percentage of games won, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    /// Wins that took exactly `guesses` attempts
    #[must_use]
    pub fn wins_in(&self, guesses: usize) -> usize {
        self.guess_distribution.get(&guesses).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_tracks_wins_losses_and_streaks() {
        let mut stats = Statistics::default();
        stats.record(Outcome::Won, 3);
        stats.record(Outcome::Won, 4);
        stats.record(Outcome::Lost, 6);
        stats.record(Outcome::Won, 3);

        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.wins_in(3), 2);
        assert_eq!(stats.wins_in(4), 1);
        assert_eq!(stats.wins_in(6), 0);
        assert!((stats.win_rate() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn in_progress_is_not_recorded() {
        let mut stats = Statistics::default();
        stats.record(Outcome::InProgress, 2);
        assert_eq!(stats, Statistics::default());
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }
}
