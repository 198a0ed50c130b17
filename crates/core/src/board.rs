//! Board module - letter tiles and where they spawn
//!
//! The board owns the tiles currently lying on the grid, the letter bag they
//! are drawn from, and the RNG used to pick free cells. Cells are picked by
//! rejection sampling over uniformly random coordinates; after a bounded
//! number of misses the free cells are enumerated instead, so a crowded grid
//! never spins and a full grid simply yields no tile.

use arrayvec::ArrayVec;
use log::debug;

use crate::bag::LetterBag;
use crate::rng::SimpleRng;
use crate::types::{is_vowel, Cell, GridConfig, Tile, TILE_COUNT};

/// Random draws before falling back to enumerating free cells.
const MAX_SPAWN_ATTEMPTS: u32 = 256;

#[derive(Debug, Clone)]
pub struct Board {
    grid: GridConfig,
    tiles: ArrayVec<Tile, TILE_COUNT>,
    bag: LetterBag,
    rng: SimpleRng,
}

impl Board {
    pub fn new(grid: GridConfig, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let bag = LetterBag::new(rng.next_u32());
        Self {
            grid,
            tiles: ArrayVec::new(),
            bag,
            rng,
        }
    }

    /// A board holding the given tiles (at most [`TILE_COUNT`]).
    pub fn with_tiles(grid: GridConfig, seed: u32, tiles: &[Tile]) -> Self {
        let mut board = Self::new(grid, seed);
        board
            .tiles
            .extend(tiles.iter().copied().take(TILE_COUNT));
        board
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn bag(&self) -> &LetterBag {
        &self.bag
    }

    pub fn tile_at(&self, cell: Cell) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.cell == cell)
    }

    /// Seed for a follow-up board, so a restart does not replay the same game.
    pub fn next_seed(&self) -> u32 {
        self.rng.state() ^ self.bag.seed()
    }

    /// Pick a free cell: not blocked by the caller and not under a tile.
    pub fn free_cell(&mut self, blocked: impl Fn(Cell) -> bool) -> Option<Cell> {
        let is_free = |board: &Self, cell: Cell| !blocked(cell) && board.tile_at(cell).is_none();

        for _ in 0..MAX_SPAWN_ATTEMPTS {
            let cell = Cell::new(
                self.rng.next_range(self.grid.columns as u32) as i16,
                self.rng.next_range(self.grid.rows as u32) as i16,
            );
            if is_free(self, cell) {
                return Some(cell);
            }
        }

        let free: Vec<Cell> = (0..self.grid.rows as i16)
            .flat_map(|y| (0..self.grid.columns as i16).map(move |x| Cell::new(x, y)))
            .filter(|&cell| is_free(self, cell))
            .collect();
        if free.is_empty() {
            return None;
        }
        Some(free[self.rng.next_range(free.len() as u32) as usize])
    }

    /// Spawn one tile with a freshly drawn letter.
    ///
    /// Returns `None` when the grid has no free cell or the board already
    /// holds [`TILE_COUNT`] tiles.
    pub fn spawn_tile(&mut self, blocked: impl Fn(Cell) -> bool) -> Option<Tile> {
        if self.tiles.is_full() {
            return None;
        }
        let cell = self.free_cell(blocked)?;
        let tile = Tile {
            cell,
            letter: self.bag.draw(),
        };
        self.tiles.push(tile);
        debug!("spawned tile {} at ({}, {})", tile.letter, cell.x, cell.y);
        Some(tile)
    }

    /// Replace all tiles with a fresh pair, at least one of them a vowel.
    ///
    /// The first tile is drawn freely. When it is a consonant the second
    /// letter is taken straight out of the vowels left in the bag.
    pub fn spawn_initial_pair(&mut self, blocked: impl Fn(Cell) -> bool) {
        self.tiles.clear();

        let first_is_vowel = match self.spawn_tile(&blocked) {
            Some(tile) => is_vowel(tile.letter),
            None => return,
        };

        if first_is_vowel {
            self.spawn_tile(&blocked);
            return;
        }

        if let Some(cell) = self.free_cell(&blocked) {
            let tile = Tile {
                cell,
                letter: self.bag.draw_vowel(),
            };
            self.tiles.push(tile);
            debug!("spawned vowel tile {} at ({}, {})", tile.letter, cell.x, cell.y);
        }
    }

    /// Remove and return the tile lying on `cell`.
    pub fn take_tile_at(&mut self, cell: Cell) -> Option<Tile> {
        let idx = self.tiles.iter().position(|t| t.cell == cell)?;
        Some(self.tiles.remove(idx))
    }

    /// Refresh the board after a pickup.
    ///
    /// Tiles still on the board keep their cell but get a new letter; then
    /// one replacement tile is spawned. No vowel guarantee here.
    pub fn replenish(&mut self, blocked: impl Fn(Cell) -> bool) {
        for tile in self.tiles.iter_mut() {
            tile.letter = self.bag.draw();
        }
        self.spawn_tile(blocked);
    }

    #[cfg(test)]
    pub(crate) fn tiles_mut(&mut self) -> &mut ArrayVec<Tile, TILE_COUNT> {
        &mut self.tiles
    }
}
