//! Key handler that resolves time-dependent input into game actions.
//!
//! The only clock-sensitive key is Backspace: a second press within
//! [`DOUBLE_BACKSPACE_MS`] of the previous one clears the whole word instead
//! of deleting one letter. The caller passes the current time in, so the
//! handler is a pure transition and can be driven by a fake clock.

use crate::types::{GameAction, Key, DOUBLE_BACKSPACE_MS};

/// Tracks input state between key presses.
#[derive(Debug, Clone)]
pub struct InputHandler {
    last_backspace_ms: Option<u64>,
    double_backspace_ms: u64,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_double_backspace_ms(DOUBLE_BACKSPACE_MS)
    }

    pub fn with_double_backspace_ms(window_ms: u64) -> Self {
        Self {
            last_backspace_ms: None,
            double_backspace_ms: window_ms,
        }
    }

    pub fn double_backspace_ms(&self) -> u64 {
        self.double_backspace_ms
    }

    /// Translate a key pressed at `now_ms` into the action it stands for.
    pub fn handle_key(&mut self, key: Key, now_ms: u64) -> GameAction {
        match key {
            Key::Arrow(dir) => GameAction::Turn(dir),
            Key::Letter(c) => GameAction::TypeLetter(c.to_ascii_uppercase()),
            Key::Enter => GameAction::SubmitWord,
            Key::Restart => GameAction::Restart,
            Key::Backspace => {
                let double_tap = self
                    .last_backspace_ms
                    .is_some_and(|last| now_ms.saturating_sub(last) <= self.double_backspace_ms);
                self.last_backspace_ms = Some(now_ms);
                if double_tap {
                    GameAction::ClearWord
                } else {
                    GameAction::DeleteLetter
                }
            }
        }
    }

    pub fn reset(&mut self) {
        self.last_backspace_ms = None;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    #[test]
    fn test_first_backspace_deletes_one_letter() {
        let mut ih = InputHandler::new();
        assert_eq!(ih.handle_key(Key::Backspace, 1_000), GameAction::DeleteLetter);
    }

    #[test]
    fn test_double_backspace_within_window_clears() {
        let mut ih = InputHandler::new();
        ih.handle_key(Key::Backspace, 1_000);
        assert_eq!(ih.handle_key(Key::Backspace, 1_300), GameAction::ClearWord);
    }

    #[test]
    fn test_backspace_just_outside_window_deletes() {
        let mut ih = InputHandler::new();
        ih.handle_key(Key::Backspace, 1_000);
        assert_eq!(ih.handle_key(Key::Backspace, 1_301), GameAction::DeleteLetter);
    }

    #[test]
    fn test_window_measured_from_latest_press() {
        let mut ih = InputHandler::new();
        ih.handle_key(Key::Backspace, 0);
        ih.handle_key(Key::Backspace, 1_000);
        assert_eq!(ih.handle_key(Key::Backspace, 1_200), GameAction::ClearWord);
    }

    #[test]
    fn test_other_keys_map_directly() {
        let mut ih = InputHandler::new();
        assert_eq!(
            ih.handle_key(Key::Arrow(Direction::Up), 0),
            GameAction::Turn(Direction::Up)
        );
        assert_eq!(ih.handle_key(Key::Letter('x'), 0), GameAction::TypeLetter('X'));
        assert_eq!(ih.handle_key(Key::Enter, 0), GameAction::SubmitWord);
        assert_eq!(ih.handle_key(Key::Restart, 0), GameAction::Restart);
    }

    #[test]
    fn test_reset_forgets_last_backspace() {
        let mut ih = InputHandler::with_double_backspace_ms(300);
        ih.handle_key(Key::Backspace, 100);
        ih.reset();
        assert_eq!(ih.handle_key(Key::Backspace, 150), GameAction::DeleteLetter);
    }
}
