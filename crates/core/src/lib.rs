//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation
//! logic of the word snake. It has **no dependencies** on terminals, files or
//! clocks, making it:
//!
//! - **Deterministic**: the same seed produces identical games
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: runs behind any display (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`bag`]: weighted letter bag, drawn without replacement and refilled when empty
//! - [`board`]: letter tiles on the grid and the spawner that places them
//! - [`validator`]: dictionary and letter-availability checks for words
//! - [`scoring`]: points for accepted words
//! - [`heading`]: turn queue with a one-slot buffer for fast double taps
//! - [`game_state`]: the tick state machine tying it all together
//! - [`snapshot`]: read-only view consumed by displays
//!
//! # Game Rules
//!
//! - The snake moves one cell per tick; running into a wall or itself ends the game
//! - Moving onto a tile appends its letter to the snake and grows it by one segment
//! - The two starting tiles always include a vowel
//! - Words of three or more letters carried by the snake can be submitted;
//!   accepted words score `100 * (len - 3)^2` and their letters (with the
//!   segments carrying them) are cut from the snake on the following tick
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//! use word_snake_core::{GameState, TickOutcome, WordValidator};
//! use word_snake_types::{Direction, GameAction, GridConfig};
//!
//! let validator = WordValidator::new(HashSet::from(["cat".to_string()]));
//! let mut game = GameState::new(GridConfig::default(), 12345);
//!
//! game.apply_action(GameAction::Turn(Direction::Down), &validator);
//! assert_ne!(game.tick(), TickOutcome::Idle);
//! assert_eq!(game.head().y, 11);
//! ```
//!
//! # Timing
//!
//! The core has no notion of wall-clock time. Callers invoke
//! [`GameState::tick`](game_state::GameState::tick) once per interval
//! (150ms by default) and feed input through
//! [`GameState::apply_action`](game_state::GameState::apply_action) in between.

pub mod bag;
pub mod board;
pub mod game_state;
pub mod heading;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod validator;

pub use word_snake_types as types;

// Re-export commonly used types for convenience
pub use bag::LetterBag;
pub use board::Board;
pub use game_state::{Collision, GameState, Layout, Phase, RemovalRecord, TickOutcome};
pub use heading::Heading;
pub use rng::SimpleRng;
pub use scoring::word_score;
pub use snapshot::GameSnapshot;
pub use validator::{claim_letters, Dictionary, WordValidator};
