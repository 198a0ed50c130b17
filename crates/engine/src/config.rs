use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::{GridConfig, DOUBLE_BACKSPACE_MS, TICK_MS};

/// Timing and board settings for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub tick: Duration,
    pub grid: GridConfig,
    pub seed: u32,
    pub double_backspace_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(TICK_MS as u64),
            grid: GridConfig::default(),
            seed: clock_seed(),
            double_backspace_ms: DOUBLE_BACKSPACE_MS,
        }
    }
}

impl EngineConfig {
    /// Create from environment variables.
    ///
    /// `WORD_SNAKE_TICK_MS`, `WORD_SNAKE_COLUMNS`, `WORD_SNAKE_ROWS` and
    /// `WORD_SNAKE_SEED` override the defaults. Unparsable or zero values
    /// are ignored, as are board sides above [`MAX_GRID_EXTENT`].
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parse = |name: &str| -> Option<u64> {
            lookup(name)
                .and_then(|s| s.trim().parse().ok())
                .filter(|&v| v > 0)
        };

        let defaults = Self::default();
        let tick = parse("WORD_SNAKE_TICK_MS")
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick);
        let columns = parse("WORD_SNAKE_COLUMNS")
            .and_then(grid_extent)
            .unwrap_or(defaults.grid.columns);
        let rows = parse("WORD_SNAKE_ROWS")
            .and_then(grid_extent)
            .unwrap_or(defaults.grid.rows);
        let seed = lookup("WORD_SNAKE_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        Self {
            tick,
            grid: GridConfig::new(columns, rows),
            seed,
            double_backspace_ms: defaults.double_backspace_ms,
        }
    }
}

/// Largest accepted board side, in cells.
pub const MAX_GRID_EXTENT: u16 = 255;

fn grid_extent(v: u64) -> Option<u16> {
    u16::try_from(v).ok().filter(|&v| v <= MAX_GRID_EXTENT)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
