//! Session engine: runs a game against a display and a high-score store.
//!
//! - [`session`]: lifecycle of one player's games, the `Display` and
//!   `HighScoreStore` seams
//! - [`driver`]: tokio loop that ticks on a fixed interval and applies keys
//!   in between
//! - [`config`]: settings read from the environment

pub mod config;
pub mod driver;
pub mod session;

pub use word_snake_core as core;
pub use word_snake_input as input;
pub use word_snake_types as types;

pub use config::EngineConfig;
pub use driver::{run, Control};
pub use session::{Display, HighScoreStore, Session};
