use arrayvec::ArrayVec;

use crate::types::{Cell, GridConfig, Tile, WordHistoryEntry, TILE_COUNT};

/// Read-only view of a session, refilled in place every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub grid: GridConfig,
    /// Head first.
    pub snake: Vec<Cell>,
    /// `snake_letters[i]` rides on `snake[i + 1]`.
    pub snake_letters: Vec<char>,
    pub tiles: ArrayVec<Tile, TILE_COUNT>,
    pub score: u32,
    pub current_word: String,
    /// Newest first.
    pub history: Vec<WordHistoryEntry>,
    pub game_over: bool,
    pub removal_pending: bool,
    pub episode_id: u32,
    pub ticks: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = GridConfig::default();
        self.snake.clear();
        self.snake_letters.clear();
        self.tiles.clear();
        self.score = 0;
        self.current_word.clear();
        self.history.clear();
        self.game_over = false;
        self.removal_pending = false;
        self.episode_id = 0;
        self.ticks = 0;
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Letter riding on segment `index`, if any (the head never has one).
    pub fn letter_on_segment(&self, index: usize) -> Option<char> {
        index
            .checked_sub(1)
            .and_then(|i| self.snake_letters.get(i).copied())
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            snake: Vec::new(),
            snake_letters: Vec::new(),
            tiles: ArrayVec::new(),
            score: 0,
            current_word: String::new(),
            history: Vec::new(),
            game_over: false,
            removal_pending: false,
            episode_id: 0,
            ticks: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_on_segment_skips_head() {
        let snap = GameSnapshot {
            snake: vec![Cell::new(2, 0), Cell::new(1, 0), Cell::new(0, 0)],
            snake_letters: vec!['X'],
            ..GameSnapshot::default()
        };
        assert_eq!(snap.letter_on_segment(0), None);
        assert_eq!(snap.letter_on_segment(1), Some('X'));
        assert_eq!(snap.letter_on_segment(2), None);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut snap = GameSnapshot {
            score: 10,
            game_over: true,
            current_word: "AB".into(),
            ..GameSnapshot::default()
        };
        snap.clear();
        assert_eq!(snap, GameSnapshot::default());
    }
}
