//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behaviour beyond small helpers, making them
//! usable in any context (simulation, terminal rendering, persistence).
//!
//! # Grid
//!
//! The playfield is a fixed-size grid of square cells. Its extent is derived
//! from a canvas size and a cell size, both integers:
//!
//! - **Canvas**: 400 x 400 units
//! - **Cell**: 20 units
//! - **Grid**: 20 columns x 20 rows (indexed 0-19)
//! - **Start cell**: (10, 10), moving right
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 150 | Interval between simulation steps |
//! | `DOUBLE_BACKSPACE_MS` | 300 | Two backspaces this close clear the word |
//!
//! # Examples
//!
//! ```
//! use word_snake_types::{Cell, Direction, GridConfig};
//!
//! let grid = GridConfig::default();
//! assert_eq!((grid.columns, grid.rows), (20, 20));
//!
//! let next = Cell::new(10, 10).step(Direction::Right);
//! assert_eq!(next, Cell::new(11, 10));
//! assert!(grid.contains(next));
//! assert!(!grid.contains(Cell::new(-1, 10)));
//!
//! assert!(Direction::Up.is_orthogonal_to(Direction::Left));
//! assert!(!Direction::Up.is_orthogonal_to(Direction::Down));
//! ```

use serde::{Deserialize, Serialize};

/// Canvas edge length in drawing units.
pub const CANVAS_SIZE: u16 = 400;

/// Edge length of one grid cell in drawing units.
pub const CELL_SIZE: u16 = 20;

/// Interval between simulation steps in milliseconds.
pub const TICK_MS: u32 = 150;

/// Two backspaces at most this far apart clear the whole word.
pub const DOUBLE_BACKSPACE_MS: u64 = 300;

/// Shortest word that may be submitted.
pub const MIN_WORD_LEN: usize = 3;

/// Number of entries kept in the word history.
pub const MAX_HISTORY: usize = 10;

/// Number of entries kept in the high-score table.
pub const MAX_HIGH_SCORES: usize = 10;

/// Number of letter tiles on the board at once.
pub const TILE_COUNT: usize = 2;

/// Where the snake's head starts every session.
pub const START_CELL: Cell = Cell { x: 10, y: 10 };

/// Direction the snake travels at the start of every session.
pub const START_DIRECTION: Direction = Direction::Right;

/// Letters that satisfy the vowel-availability rule.
pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Letter frequencies for one full letter bag (100 letters).
///
/// Weighted toward common English letters.
pub const LETTER_FREQUENCIES: [(char, u8); 26] = [
    ('E', 12),
    ('A', 9),
    ('I', 9),
    ('O', 8),
    ('N', 6),
    ('R', 6),
    ('T', 6),
    ('S', 6),
    ('L', 4),
    ('U', 4),
    ('D', 4),
    ('G', 3),
    ('B', 2),
    ('C', 2),
    ('M', 2),
    ('P', 2),
    ('F', 2),
    ('H', 2),
    ('V', 2),
    ('W', 2),
    ('Y', 2),
    ('K', 1),
    ('J', 1),
    ('X', 1),
    ('Q', 1),
    ('Z', 1),
];

/// Check whether a letter is one of [`VOWELS`].
pub fn is_vowel(letter: char) -> bool {
    VOWELS.contains(&letter.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_bag_holds_one_hundred_letters() {
        let total: u32 = LETTER_FREQUENCIES.iter().map(|&(_, n)| n as u32).sum();
        assert_eq!(total, 100);
        assert!(LETTER_FREQUENCIES.iter().all(|&(_, n)| (1..=12).contains(&n)));
    }

    #[test]
    fn default_grid_matches_canvas() {
        let grid = GridConfig::default();
        assert_eq!(grid.columns, CANVAS_SIZE / CELL_SIZE);
        assert_eq!(grid.rows, CANVAS_SIZE / CELL_SIZE);
        assert!(grid.contains(START_CELL));
    }

    #[test]
    fn vowels_are_case_insensitive() {
        assert!(is_vowel('a'));
        assert!(is_vowel('U'));
        assert!(!is_vowel('Y'));
    }
}

/// Integer coordinate on the grid.
///
/// Signed so that a step off the left or top edge is representable and can be
/// detected as a wall collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Grid (Manhattan) distance between two cells.
    pub fn distance(self, other: Cell) -> u16 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Unit movement on the grid.
///
/// Exactly one axis is non-zero for every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// `(dx, dy)` unit vector; y grows downward.
    pub fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True when the two directions lie on different axes.
    pub fn is_orthogonal_to(self, other: Direction) -> bool {
        self.is_horizontal() != other.is_horizontal()
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Grid extent in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub columns: u16,
    pub rows: u16,
}

impl GridConfig {
    pub const fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    /// Derive the grid from a canvas and a cell size (integer division).
    pub fn from_canvas(width: u16, height: u16, cell_size: u16) -> Self {
        let cell_size = cell_size.max(1);
        Self {
            columns: width / cell_size,
            rows: height / cell_size,
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u16) < self.columns && (cell.y as u16) < self.rows
    }

    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::from_canvas(CANVAS_SIZE, CANVAS_SIZE, CELL_SIZE)
    }
}

/// A lettered collectible occupying one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub cell: Cell,
    pub letter: char,
}

/// Discrete key input understood by the game.
///
/// Everything else a keyboard can produce is dropped before it gets here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Arrow(Direction),
    Backspace,
    Enter,
    /// A single letter, always uppercase.
    Letter(char),
    Restart,
}

/// Game actions that can be applied to modify game state
///
/// Produced from [`Key`]s by the input handler, which resolves the
/// time-dependent backspace behaviour before the simulation sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Queue a turn
    Turn(Direction),
    /// Append a letter to the current word
    TypeLetter(char),
    /// Remove the last letter of the current word
    DeleteLetter,
    /// Clear the current word
    ClearWord,
    /// Submit the current word for validation and scoring
    SubmitWord,
    /// Throw the session away and start a new one
    Restart,
}

/// An accepted word and what it scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordHistoryEntry {
    pub word: String,
    pub points: u32,
}

/// One row of the persisted high-score table.
///
/// `date` is a display string and is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u32,
    pub date: String,
}
