//! Key mapping from terminal events to game keys.

use crate::types::{Direction, Key};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a game key.
///
/// Letters are uppercased; keys the game has no use for map to `None`.
pub fn handle_key_event(key: KeyEvent) -> Option<Key> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Up => Some(Key::Arrow(Direction::Up)),
        KeyCode::Down => Some(Key::Arrow(Direction::Down)),
        KeyCode::Left => Some(Key::Arrow(Direction::Left)),
        KeyCode::Right => Some(Key::Arrow(Direction::Right)),

        // Word editing
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Key::Letter(c.to_ascii_uppercase())),

        // Restart
        KeyCode::Char(' ') => Some(Key::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(Key::Arrow(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(Key::Arrow(Direction::Right))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(Key::Arrow(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(Key::Arrow(Direction::Down))
        );
    }

    #[test]
    fn test_letter_keys_are_uppercased() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(Key::Letter('A'))
        );
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            Some(Key::Letter('Q'))
        );
    }

    #[test]
    fn test_editing_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Backspace)),
            Some(Key::Backspace)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(Key::Enter)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(Key::Restart)
        );
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('1'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Tab)), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('é'))), None);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q'))));
    }
}
