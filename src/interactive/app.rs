//! TUI application state and logic

use super::input::{KeyAction, map_key};
use crate::config::{GameConfig, LoadedWords};
use crate::game::Game;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// How often the UI wakes up without input, to pick up the loaded word list
/// and expire notices
const TICK_RATE: Duration = Duration::from_millis(200);

/// Where the application is in its lifecycle
pub enum Phase {
    /// Word lists are loading in the background; input is dropped
    Loading(Receiver<LoadedWords>),
    Playing(Box<Game>),
}

/// Application state
pub struct App {
    pub config: GameConfig,
    pub phase: Phase,
    pub should_quit: bool,
}

impl App {
    /// Create the app and start loading the word lists on a background thread
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let (tx, rx) = mpsc::channel();
        let loader_config = config.clone();
        thread::spawn(move || {
            // The receiver may be gone if the user quit while loading
            let _ = tx.send(loader_config.load_words());
        });
        Self::with_loader(config, rx)
    }

    /// Create the app waiting on an existing loader channel
    #[must_use]
    pub fn with_loader(config: GameConfig, loader: Receiver<LoadedWords>) -> Self {
        Self {
            config,
            phase: Phase::Loading(loader),
            should_quit: false,
        }
    }

    /// Start playing once the word lists have arrived
    pub fn poll_loader(&mut self) {
        let Phase::Loading(rx) = &self.phase else {
            return;
        };

        let words = match rx.try_recv() {
            Ok(words) => words,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                warn!("word list loader stopped without a result");
                LoadedWords::fallback()
            }
        };

        info!("word lists loaded, starting game");
        self.phase = Phase::Playing(Box::new(self.config.start_game(words)));
    }

    /// The running game, `None` while loading
    #[must_use]
    pub fn game(&self) -> Option<&Game> {
        match &self.phase {
            Phase::Playing(game) => Some(game.as_ref()),
            Phase::Loading(_) => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let game_over = self
            .game()
            .is_some_and(|game| game.session().outcome().is_over());

        match map_key(key, game_over) {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Ignore => {}
            KeyAction::Game(command) => match &mut self.phase {
                Phase::Playing(game) => {
                    // Rejections are already shown as notices
                    let _ = game.apply(command);
                }
                Phase::Loading(_) => debug!(%command, "input dropped while loading"),
            },
        }
    }

    /// Periodic housekeeping between key presses
    pub fn tick(&mut self, now: Instant) {
        self.poll_loader();
        if let Phase::Playing(game) = &mut self.phase {
            game.expire_notice(now);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    if let Some(game) = app.game() {
        info!(
            played = game.stats().total_games,
            won = game.stats().games_won,
            "leaving TUI"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;
    use crate::wordlists::WordList;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::Arc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn config() -> GameConfig {
        GameConfig {
            seed: Some(5),
            ..GameConfig::default()
        }
    }

    fn crane_words() -> LoadedWords {
        let list = Arc::new(WordList::from_words(&["crane"]).unwrap());
        LoadedWords {
            dictionary: Arc::clone(&list),
            targets: list,
        }
    }

    fn type_keys(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn input_is_dropped_while_loading() {
        let (tx, rx) = mpsc::channel();
        let mut app = App::with_loader(config(), rx);

        type_keys(&mut app, "cr");
        app.handle_key(key(KeyCode::Enter));
        app.poll_loader();
        assert!(app.game().is_none());

        tx.send(crane_words()).unwrap();
        app.poll_loader();
        let game = app.game().unwrap();
        assert_eq!(game.session().current_input(), "");
        assert!(game.session().history().is_empty());
    }

    #[test]
    fn disconnected_loader_falls_back() {
        let (tx, rx) = mpsc::channel::<LoadedWords>();
        drop(tx);
        let mut app = App::with_loader(config(), rx);
        app.tick(Instant::now());
        assert!(app.game().unwrap().dictionary().contains("REACT"));
    }

    #[test]
    fn keys_play_a_game() {
        let (tx, rx) = mpsc::channel();
        tx.send(crane_words()).unwrap();
        let mut app = App::with_loader(config(), rx);
        app.poll_loader();

        type_keys(&mut app, "cranx");
        app.handle_key(key(KeyCode::Backspace));
        type_keys(&mut app, "e");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.game().unwrap().session().outcome(), Outcome::Won);

        // 'n' starts a new game once the game is over
        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.game().unwrap().session().outcome(), Outcome::InProgress);

        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }
}
