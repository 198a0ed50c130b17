//! Game state module - the snake simulation
//!
//! This module ties together the board, the letter bag, word validation and
//! scoring. It owns every piece of mutable gameplay state and changes it only
//! through [`GameState::tick`] and [`GameState::apply_action`], which callers
//! run one at a time.
//!
//! # Tick order
//!
//! 1. Apply the removal queued by the last accepted word, if any
//! 2. Commit the queued turn
//! 3. Compute the new head
//! 4. Wall collision ends the game
//! 5. Self collision ends the game
//! 6. Prepend the head
//! 7. Pick up a tile (grow) or drop the tail
//!
//! Word submission never touches the snake itself; it records which
//! segments to cut and step 1 of the following tick cuts them, so a
//! keystroke can never change the body between a collision check and the
//! move it guards.

use std::collections::VecDeque;

use log::{debug, info};

use crate::board::Board;
use crate::heading::Heading;
use crate::scoring::word_score;
use crate::snapshot::GameSnapshot;
use crate::types::*;
use crate::validator::{claim_letters, Dictionary, WordValidator};

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// What ended the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Snake,
}

/// Result of one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game is already over; nothing changed.
    Idle,
    /// Moved one cell without growing.
    Moved,
    /// Moved onto a tile and picked up its letter.
    Grew(char),
    /// Collided on this tick; the phase is now [`Phase::GameOver`].
    GameOver(Collision),
}

/// Letters and segments queued for removal on the next tick.
///
/// Both index lists are sorted descending so they can be removed back to
/// front. `segment_indices[i] == letter_indices[i] + 1` (the head carries no
/// letter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalRecord {
    pub letter_indices: Vec<usize>,
    pub segment_indices: Vec<usize>,
}

impl RemovalRecord {
    fn new(mut letter_indices: Vec<usize>) -> Self {
        letter_indices.sort_unstable_by(|a, b| b.cmp(a));
        let segment_indices = letter_indices.iter().map(|i| i + 1).collect();
        Self {
            letter_indices,
            segment_indices,
        }
    }
}

/// A starting position other than the default one-cell snake.
///
/// Used to resume or stage a specific situation; tiles beyond
/// [`TILE_COUNT`] are ignored, and an empty tile list spawns the usual
/// initial pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub snake: Vec<Cell>,
    pub snake_letters: Vec<char>,
    pub direction: Direction,
    pub tiles: Vec<Tile>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: GridConfig,
    board: Board,
    /// Head first.
    snake: VecDeque<Cell>,
    /// `snake_letters[i]` rides on `snake[i + 1]`.
    snake_letters: Vec<char>,
    heading: Heading,
    current_word: String,
    /// Newest first.
    history: VecDeque<WordHistoryEntry>,
    score: u32,
    pending_removal: Option<RemovalRecord>,
    phase: Phase,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Completed simulation steps in this episode.
    ticks: u64,
}

impl GameState {
    /// Set up a running session: one-cell snake at the start cell, full
    /// letter bag, initial tile pair.
    pub fn new(grid: GridConfig, seed: u32) -> Self {
        let mut state = Self::empty(grid, seed);
        state.snake.push_back(start_cell(grid));
        state.spawn_initial_tiles();
        info!("session started (seed {seed})");
        state
    }

    /// Set up a running session from an explicit layout.
    pub fn with_layout(grid: GridConfig, seed: u32, layout: Layout) -> Self {
        let mut state = Self::empty(grid, seed);
        state.heading = Heading::new(layout.direction);
        state.snake = layout.snake.into_iter().collect();
        if state.snake.is_empty() {
            state.snake.push_back(start_cell(grid));
        }
        state.snake_letters = layout.snake_letters;
        state.snake_letters.truncate(state.snake.len() - 1);

        if layout.tiles.is_empty() {
            state.spawn_initial_tiles();
        } else {
            state.board = Board::with_tiles(grid, seed, &layout.tiles);
        }
        state
    }

    fn empty(grid: GridConfig, seed: u32) -> Self {
        Self {
            grid,
            board: Board::new(grid, seed),
            snake: VecDeque::new(),
            snake_letters: Vec::new(),
            heading: Heading::new(START_DIRECTION),
            current_word: String::new(),
            history: VecDeque::with_capacity(MAX_HISTORY + 1),
            score: 0,
            pending_removal: None,
            phase: Phase::Running,
            episode_id: 0,
            ticks: 0,
        }
    }

    fn spawn_initial_tiles(&mut self) {
        let snake = &self.snake;
        self.board.spawn_initial_pair(|c| snake.contains(&c));
    }

    /// Throw the session away and start a fresh one.
    ///
    /// The new board is seeded from the old one's RNG, so consecutive
    /// sessions differ while a fixed starting seed still replays exactly.
    pub fn restart(&mut self) {
        let seed = self.board.next_seed();
        let next_episode = self.episode_id.wrapping_add(1);
        *self = Self::new(self.grid, seed);
        self.episode_id = next_episode;
    }

    pub fn grid(&self) -> GridConfig {
        self.grid
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn snake(&self) -> &VecDeque<Cell> {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn snake_letters(&self) -> &[char] {
        &self.snake_letters
    }

    pub fn tiles(&self) -> &[Tile] {
        self.board.tiles()
    }

    pub fn heading(&self) -> &Heading {
        &self.heading
    }

    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    pub fn history(&self) -> &VecDeque<WordHistoryEntry> {
        &self.history
    }

    pub fn pending_removal(&self) -> Option<&RemovalRecord> {
        self.pending_removal.as_ref()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = self.grid;
        out.snake.clear();
        out.snake.extend(self.snake.iter().copied());
        out.snake_letters.clear();
        out.snake_letters.extend_from_slice(&self.snake_letters);
        out.tiles.clear();
        out.tiles.extend(self.board.tiles().iter().copied());
        out.score = self.score;
        out.current_word.clear();
        out.current_word.push_str(&self.current_word);
        out.history.clear();
        out.history.extend(self.history.iter().cloned());
        out.game_over = self.game_over();
        out.removal_pending = self.pending_removal.is_some();
        out.episode_id = self.episode_id;
        out.ticks = self.ticks;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance the simulation one step.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over() {
            return TickOutcome::Idle;
        }

        self.apply_pending_removal();

        let dir = self.heading.commit();
        let head = self.head().step(dir);

        if !self.grid.contains(head) {
            return self.end(Collision::Wall);
        }
        if self.snake.contains(&head) {
            return self.end(Collision::Snake);
        }

        self.snake.push_front(head);
        self.ticks += 1;

        if let Some(tile) = self.board.take_tile_at(head) {
            self.snake_letters.push(tile.letter);
            let snake = &self.snake;
            self.board.replenish(|c| snake.contains(&c));
            debug!("picked up {} at ({}, {})", tile.letter, head.x, head.y);
            return TickOutcome::Grew(tile.letter);
        }

        self.snake.pop_back();
        if self.snake_letters.len() > self.snake.len() - 1 {
            self.snake_letters.remove(0);
        }
        TickOutcome::Moved
    }

    fn end(&mut self, collision: Collision) -> TickOutcome {
        self.phase = Phase::GameOver;
        info!(
            "game over ({collision:?}) with score {} after {} ticks",
            self.score, self.ticks
        );
        TickOutcome::GameOver(collision)
    }

    /// Cut the letters and segments recorded by the last accepted word.
    ///
    /// After each segment is cut, the segments behind it step one cell
    /// toward their new predecessor, x axis first, so the gap closes over
    /// the following ticks instead of teleporting the tail.
    fn apply_pending_removal(&mut self) -> bool {
        let Some(record) = self.pending_removal.take() else {
            return false;
        };

        for &idx in &record.letter_indices {
            if idx < self.snake_letters.len() {
                self.snake_letters.remove(idx);
            }
        }

        for &seg in &record.segment_indices {
            if seg == 0 || seg >= self.snake.len() {
                continue;
            }
            self.snake.remove(seg);
            close_gap(&mut self.snake, seg);
        }

        debug!(
            "removed {} segments, {} remain",
            record.segment_indices.len(),
            self.snake.len()
        );
        true
    }

    /// Apply a game action
    ///
    /// Only [`GameAction::Restart`] is honoured once the game is over.
    pub fn apply_action<D: Dictionary>(
        &mut self,
        action: GameAction,
        validator: &WordValidator<D>,
    ) -> bool {
        if self.game_over() && action != GameAction::Restart {
            return false;
        }

        match action {
            GameAction::Turn(dir) => self.heading.queue_turn(dir),
            GameAction::TypeLetter(letter) => self.type_letter(letter),
            GameAction::DeleteLetter => self.current_word.pop().is_some(),
            GameAction::ClearWord => {
                let had_word = !self.current_word.is_empty();
                self.current_word.clear();
                had_word
            }
            GameAction::SubmitWord => self.submit_word(validator).is_some(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Append a letter if the snake carries at least one of it.
    pub fn type_letter(&mut self, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        if !self.snake_letters.contains(&letter) {
            return false;
        }
        self.current_word.push(letter);
        true
    }

    /// Validate the current word and, if accepted, score it and queue its
    /// letters for removal on the next tick.
    ///
    /// Returns the points awarded. A rejected word leaves everything,
    /// including the current word, untouched. Letters already queued for
    /// removal cannot be spelled again; a second accepted word before the
    /// next tick adds its letters to the queued removal.
    pub fn submit_word<D: Dictionary>(&mut self, validator: &WordValidator<D>) -> Option<u32> {
        let len = self.current_word.chars().count();
        if len < MIN_WORD_LEN {
            return None;
        }

        let queued: &[usize] = self
            .pending_removal
            .as_ref()
            .map(|r| r.letter_indices.as_slice())
            .unwrap_or_default();
        let (free_idx, free_letters): (Vec<usize>, Vec<char>) = self
            .snake_letters
            .iter()
            .enumerate()
            .filter(|(i, _)| !queued.contains(i))
            .map(|(i, &c)| (i, c))
            .unzip();

        if !validator.is_valid(&self.current_word, &free_letters) {
            return None;
        }
        let mut indices: Vec<usize> = claim_letters(&self.current_word, &free_letters)?
            .into_iter()
            .map(|i| free_idx[i])
            .collect();
        indices.extend_from_slice(queued);

        let points = word_score(len);
        self.score = self.score.saturating_add(points);

        let word = std::mem::take(&mut self.current_word);
        debug!("accepted {word} for {points} points");
        self.history.push_front(WordHistoryEntry { word, points });
        self.history.truncate(MAX_HISTORY);

        self.pending_removal = Some(RemovalRecord::new(indices));
        Some(points)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

/// Pull every segment from `from` onward one step toward its predecessor.
///
/// A step that would land on another segment is skipped, so the body never
/// overlaps itself.
fn close_gap(snake: &mut VecDeque<Cell>, from: usize) {
    for i in from.max(1)..snake.len() {
        let prev = snake[i - 1];
        let seg = snake[i];
        if seg.distance(prev) <= 1 {
            continue;
        }
        let target = if seg.x != prev.x {
            Cell::new(seg.x + (prev.x - seg.x).signum(), seg.y)
        } else {
            Cell::new(seg.x, seg.y + (prev.y - seg.y).signum())
        };
        if !snake.contains(&target) {
            snake[i] = target;
        }
    }
}

/// The standard start cell, or the grid centre on grids too small for it.
fn start_cell(grid: GridConfig) -> Cell {
    if grid.contains(START_CELL) {
        START_CELL
    } else {
        Cell::new((grid.columns / 2) as i16, (grid.rows / 2) as i16)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GridConfig::default(), 1)
    }
}
