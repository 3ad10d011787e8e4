//! Terminal frontend for the kid-friendly game.
//!
//! Everything the engine leaves to external collaborators lives here:
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: pure mapping from a [`core::GameSnapshot`] to a framebuffer
//! - [`renderer`]: flushes framebuffers to the terminal, diffing frames
//! - [`dispatch`]: carries out effect intents (border flash, hint line, bell)
//!
//! Only [`renderer::TerminalRenderer`] touches the terminal; the rest is
//! unit-testable.

pub mod dispatch;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use kid_tetris_core as core;
pub use kid_tetris_types as types;

pub use dispatch::{notice_text, EffectDispatcher};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, HudView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
