//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s and frontend
//! commands, and provides a hold-to-repeat handler so a held arrow key keeps
//! the piece moving the way a held on-screen button would.

pub mod handler;
pub mod map;

pub use kid_tetris_types as types;

pub use handler::{Held, InputHandler};
pub use map::{handle_key_event, is_guide_key, settings_toggle, should_quit, Toggle};
