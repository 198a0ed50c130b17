//! Terminal rendering for the word snake.
//!
//! The game is drawn into a plain framebuffer of styled glyphs (no widget
//! toolkit) and flushed to the terminal with crossterm, diffing against the
//! previous frame.
//!
//! - [`fb`]: framebuffer and styles
//! - [`game_view`]: snapshot to framebuffer, pure and unit-tested
//! - [`screen`]: framebuffer to terminal

pub mod fb;
pub mod game_view;
pub mod screen;

pub use word_snake_core as core;
pub use word_snake_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{AnchorY, GameView, Viewport};
pub use screen::{encode_frame, Screen};
