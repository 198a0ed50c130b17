//! Word snake (workspace facade crate).
//!
//! Steer a snake over a grid, pick up letter tiles and spell words from the
//! letters you carry. The implementation lives in dedicated crates under
//! `crates/`; this package re-exports them as `word_snake::{core, engine,
//! input, store, term, types}`.

pub use word_snake_core as core;
pub use word_snake_engine as engine;
pub use word_snake_input as input;
pub use word_snake_store as store;
pub use word_snake_term as term;
pub use word_snake_types as types;
