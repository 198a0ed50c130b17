//! Turn input buffering.
//!
//! Arrow presses never change the direction of travel directly. They queue
//! the direction for the next tick, and a second quick press lands in a
//! one-slot buffer that is promoted one tick later. Two turns can therefore
//! be registered between ticks (a fast double-tap U-turn) while a press can
//! never reverse the snake onto itself.

use crate::types::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading {
    current: Direction,
    next: Direction,
    buffered: Option<Direction>,
}

impl Heading {
    pub fn new(dir: Direction) -> Self {
        Self {
            current: dir,
            next: dir,
            buffered: None,
        }
    }

    /// Direction of the last completed move.
    pub fn current(&self) -> Direction {
        self.current
    }

    /// Direction the next tick will move in.
    pub fn next(&self) -> Direction {
        self.next
    }

    pub fn buffered(&self) -> Option<Direction> {
        self.buffered
    }

    /// Whether a turn is waiting for the next tick.
    pub fn turn_queued(&self) -> bool {
        self.next != self.current
    }

    /// Register an arrow press. Returns whether it was accepted.
    ///
    /// With no turn queued the press must leave the current axis. With a turn
    /// queued it must leave the queued axis, and it overwrites the buffer.
    pub fn queue_turn(&mut self, dir: Direction) -> bool {
        if !self.turn_queued() {
            if dir.is_orthogonal_to(self.current) {
                self.next = dir;
                return true;
            }
            return false;
        }

        if dir.is_orthogonal_to(self.next) {
            self.buffered = Some(dir);
            return true;
        }
        false
    }

    /// Start-of-tick commit: the queued direction becomes current and a
    /// buffered turn, if it leaves the new axis, is queued in its place.
    pub fn commit(&mut self) -> Direction {
        self.current = self.next;
        if let Some(dir) = self.buffered.take() {
            if dir.is_orthogonal_to(self.current) {
                self.next = dir;
            }
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversal_is_rejected() {
        let mut h = Heading::new(Direction::Right);
        assert!(!h.queue_turn(Direction::Left));
        assert!(!h.queue_turn(Direction::Right));
        assert_eq!(h.next(), Direction::Right);
    }

    #[test]
    fn test_orthogonal_turn_applies_on_commit() {
        let mut h = Heading::new(Direction::Right);
        assert!(h.queue_turn(Direction::Up));
        assert_eq!(h.current(), Direction::Right);
        assert_eq!(h.commit(), Direction::Up);
        assert!(!h.turn_queued());
    }

    #[test]
    fn test_double_tap_u_turn_takes_two_ticks() {
        let mut h = Heading::new(Direction::Right);
        assert!(h.queue_turn(Direction::Up));
        assert!(h.queue_turn(Direction::Left));
        assert_eq!(h.buffered(), Some(Direction::Left));

        assert_eq!(h.commit(), Direction::Up);
        assert_eq!(h.next(), Direction::Left);
        assert_eq!(h.buffered(), None);

        assert_eq!(h.commit(), Direction::Left);
        assert_eq!(h.current(), Direction::Right.opposite());
    }

    #[test]
    fn test_second_press_on_queued_axis_is_rejected() {
        let mut h = Heading::new(Direction::Right);
        assert!(h.queue_turn(Direction::Up));
        assert!(!h.queue_turn(Direction::Down));
        assert_eq!(h.buffered(), None);
        assert_eq!(h.next(), Direction::Up);
    }

    #[test]
    fn test_last_buffered_press_wins() {
        let mut h = Heading::new(Direction::Up);
        assert!(h.queue_turn(Direction::Left));
        assert!(h.queue_turn(Direction::Up));
        assert!(h.queue_turn(Direction::Down));
        assert_eq!(h.buffered(), Some(Direction::Down));
    }
}
