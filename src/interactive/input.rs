//! Key mapping for the TUI

use crate::game::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Game(Command),
    Quit,
    Ignore,
}

/// Map a key press to an action
///
/// Letters are game input, so new game and quit live on Ctrl+N and Esc/Ctrl+C.
/// Once the game is over a plain `n` also starts a new one.
#[must_use]
pub fn map_key(key: KeyEvent, game_over: bool) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c' | 'C') if ctrl => KeyAction::Quit,
        KeyCode::Char('n' | 'N') if ctrl || game_over => KeyAction::Game(Command::NewGame),
        KeyCode::Char(c) if !ctrl && c.is_ascii_alphabetic() => {
            KeyAction::Game(Command::Letter(c))
        }
        KeyCode::Backspace => KeyAction::Game(Command::Backspace),
        KeyCode::Enter => KeyAction::Game(Command::Submit),
        _ => KeyAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn letters_backspace_and_enter() {
        assert_eq!(
            map_key(key(KeyCode::Char('a')), false),
            KeyAction::Game(Command::Letter('a'))
        );
        assert_eq!(
            map_key(key(KeyCode::Backspace), false),
            KeyAction::Game(Command::Backspace)
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), false),
            KeyAction::Game(Command::Submit)
        );
    }

    #[test]
    fn n_is_a_letter_until_game_over() {
        assert_eq!(
            map_key(key(KeyCode::Char('n')), false),
            KeyAction::Game(Command::Letter('n'))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('n')), true),
            KeyAction::Game(Command::NewGame)
        );
        assert_eq!(map_key(ctrl('n'), false), KeyAction::Game(Command::NewGame));
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key(key(KeyCode::Esc), false), KeyAction::Quit);
        assert_eq!(map_key(ctrl('c'), false), KeyAction::Quit);
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(map_key(key(KeyCode::Char('1')), false), KeyAction::Ignore);
        assert_eq!(map_key(key(KeyCode::Tab), false), KeyAction::Ignore);
        assert_eq!(map_key(ctrl('x'), false), KeyAction::Ignore);
    }
}
