//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Key`] values and provides the
//! [`InputHandler`] that turns keys into game actions, resolving the
//! double-tap backspace against a caller-supplied clock.

pub mod handler;
pub mod map;

pub use word_snake_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit};
