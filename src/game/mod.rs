//! Game controller
//!
//! Owns the live [`GameSession`] together with everything that outlives a
//! single guess: the word lists, the random source, keyboard hints, the notice
//! line and statistics. Front ends feed it [`Command`]s and render its state.

mod command;
mod notice;
mod stats;

pub use command::Command;
pub use notice::{NOTICE_TTL, Notice, NoticeKind};
pub use stats::Statistics;

use crate::core::{GameSession, GuessResult, KeyboardHints, Outcome, SubmitError};
use crate::wordlists::WordList;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// A running game plus the state carried between games
#[derive(Debug)]
pub struct Game {
    dictionary: Arc<WordList>,
    targets: Arc<WordList>,
    max_guesses: usize,
    rng: StdRng,
    session: GameSession,
    hints: KeyboardHints,
    notice: Option<Notice>,
    stats: Statistics,
}

impl Game {
    /// Create a game and start its first session
    ///
    /// Guesses are validated against `dictionary`; targets are drawn from
    /// `targets`. Both may be the same list.
    #[must_use]
    pub fn new(
        dictionary: Arc<WordList>,
        targets: Arc<WordList>,
        max_guesses: usize,
        mut rng: StdRng,
    ) -> Self {
        let session = Self::draw_session(&dictionary, &targets, max_guesses, &mut rng);
        Self {
            dictionary,
            targets,
            max_guesses,
            rng,
            session,
            hints: KeyboardHints::new(),
            notice: None,
            stats: Statistics::default(),
        }
    }

    fn draw_session(
        dictionary: &Arc<WordList>,
        targets: &WordList,
        max_guesses: usize,
        rng: &mut StdRng,
    ) -> GameSession {
        let target = targets.pick_target(rng).clone();
        GameSession::with_max_guesses(target, Arc::clone(dictionary), max_guesses)
    }

    /// Dispatch one command
    ///
    /// Returns the evaluated guess when a submission succeeds.
    ///
    /// # Errors
    /// Returns the `SubmitError` of a rejected submission. The rejection is also
    /// raised as a transient notice.
    #[instrument(skip(self))]
    pub fn apply(&mut self, command: Command) -> Result<Option<GuessResult>, SubmitError> {
        match command {
            Command::Letter(c) => self.session.append_letter(c),
            Command::Backspace => self.session.delete_letter(),
            Command::NewGame => self.new_game(),
            Command::Submit => return self.submit().map(Some),
        }
        Ok(None)
    }

    fn submit(&mut self) -> Result<GuessResult, SubmitError> {
        let result = match self.session.submit_guess() {
            Ok(result) => result,
            Err(err) => {
                debug!(error = %err, "submission rejected");
                if err != SubmitError::GameOver {
                    self.notice = Some(Notice::new(err.to_string(), NoticeKind::Error));
                }
                return Err(err);
            }
        };

        self.hints.merge(&result);

        let outcome = self.session.outcome();
        if outcome.is_over() {
            self.stats.record(outcome, self.session.history().len());
            let kind = if outcome == Outcome::Won {
                NoticeKind::Success
            } else {
                NoticeKind::Error
            };
            // Terminal messages stay until the next game
            self.notice = self.session.message().map(|message| Notice::new(message, kind));
        } else {
            self.notice = None;
        }

        Ok(result)
    }

    /// Draw a new target and clear the session, hints and notice
    pub fn new_game(&mut self) {
        self.session =
            Self::draw_session(&self.dictionary, &self.targets, self.max_guesses, &mut self.rng);
        self.hints.clear();
        self.notice = None;
        info!("new game started");
    }

    /// Drop the current notice if it is transient and has expired
    pub fn expire_notice(&mut self, now: Instant) {
        if self.session.outcome().is_over() {
            return;
        }
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn hints(&self) -> &KeyboardHints {
        &self.hints
    }

    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub fn dictionary(&self) -> &WordList {
        &self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterStatus, MAX_GUESSES};
    use rand::SeedableRng;

    fn game_with(targets: &[&str], dictionary: &[&str]) -> Game {
        Game::new(
            Arc::new(WordList::from_words(dictionary).unwrap()),
            Arc::new(WordList::from_words(targets).unwrap()),
            MAX_GUESSES,
            StdRng::seed_from_u64(3),
        )
    }

    fn play(game: &mut Game, word: &str) -> Result<Option<GuessResult>, SubmitError> {
        let mut last = Ok(None);
        for command in Command::typed(word) {
            last = game.apply(command);
        }
        last
    }

    #[test]
    fn letters_and_backspace_reach_the_session() {
        let mut game = game_with(&["crane"], &["crane"]);
        game.apply(Command::Letter('c')).unwrap();
        game.apply(Command::Letter('r')).unwrap();
        game.apply(Command::Backspace).unwrap();
        assert_eq!(game.session().current_input(), "C");
    }

    #[test]
    fn winning_game_updates_hints_notice_and_stats() {
        let mut game = game_with(&["crane"], &["crane", "slate"]);

        let first = play(&mut game, "slate").unwrap().unwrap();
        assert!(!first.is_win());
        assert_eq!(game.hints().status('A'), Some(LetterStatus::Correct));
        assert_eq!(game.hints().status('S'), Some(LetterStatus::Absent));
        assert!(game.notice().is_none());

        play(&mut game, "crane").unwrap();
        assert_eq!(game.session().outcome(), Outcome::Won);
        let notice = game.notice().unwrap();
        assert_eq!(notice.text, "Congratulations! You won!");
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(game.stats().games_won, 1);
        assert_eq!(game.stats().wins_in(2), 1);
    }

    #[test]
    fn losing_game_reveals_target() {
        let words = ["mango", "crane", "slate", "about", "heart", "water", "light"];
        let mut game = game_with(&["mango"], &words);
        for word in &words[1..] {
            play(&mut game, word).unwrap();
        }

        assert_eq!(game.session().outcome(), Outcome::Lost);
        let notice = game.notice().unwrap();
        assert!(notice.text.contains("MANGO"));
        assert_eq!(game.stats().total_games, 1);
        assert_eq!(game.stats().games_won, 0);

        // End-of-game notices outlive the transient timeout
        game.expire_notice(Instant::now() + NOTICE_TTL * 2);
        assert!(game.notice().is_some());
    }

    #[test]
    fn rejected_submission_raises_transient_notice() {
        let mut game = game_with(&["crane"], &["crane"]);
        assert_eq!(play(&mut game, "cra"), Err(SubmitError::IncompleteGuess));
        assert_eq!(game.notice().unwrap().text, "Not enough letters");
        assert_eq!(game.session().current_input(), "CRA");

        game.expire_notice(Instant::now() + NOTICE_TTL);
        assert!(game.notice().is_none());

        for _ in 0..3 {
            game.apply(Command::Backspace).unwrap();
        }
        assert_eq!(play(&mut game, "xyzzy"), Err(SubmitError::NotInWordList));
        assert_eq!(game.notice().unwrap().text, "Not in word list");
        assert_eq!(game.notice().unwrap().kind, NoticeKind::Error);
    }

    #[test]
    fn commands_after_game_over_change_nothing() {
        let mut game = game_with(&["crane"], &["crane", "slate"]);
        play(&mut game, "crane").unwrap();
        let history = game.session().history().to_vec();

        game.apply(Command::Letter('s')).unwrap();
        game.apply(Command::Backspace).unwrap();
        assert_eq!(game.apply(Command::Submit), Err(SubmitError::GameOver));

        assert_eq!(game.session().current_input(), "");
        assert_eq!(game.session().history(), history.as_slice());
        assert_eq!(game.session().outcome(), Outcome::Won);
        assert_eq!(game.stats().total_games, 1);
    }

    #[test]
    fn new_game_resets_session_hints_and_notice() {
        let mut game = game_with(&["crane", "slate"], &["crane", "slate"]);
        for word in ["crane", "slate"] {
            let _ = play(&mut game, word);
        }
        assert!(!game.hints().is_empty());

        game.apply(Command::NewGame).unwrap();
        assert_eq!(game.session().outcome(), Outcome::InProgress);
        assert!(game.session().history().is_empty());
        assert_eq!(game.session().current_input(), "");
        assert!(game.hints().is_empty());
        assert!(game.notice().is_none());
        assert!(game.dictionary().contains_word(game.session().target()));
    }

    #[test]
    fn targets_come_from_target_pool() {
        let mut game = game_with(&["mango"], &["crane", "slate"]);
        for _ in 0..5 {
            assert_eq!(game.session().target().text(), "MANGO");
            game.new_game();
        }
    }
}
