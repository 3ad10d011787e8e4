//! Kid-friendly falling-block puzzle (workspace facade crate).
//!
//! The engine and frontend live in dedicated crates under `crates/`; this
//! package re-exports them as `kid_tetris::{core,input,term,types}` and owns
//! the pieces that touch the host: persisted [`settings`] and startup
//! [`config`].

pub mod config;
pub mod settings;

pub use kid_tetris_core as core;
pub use kid_tetris_input as input;
pub use kid_tetris_term as term;
pub use kid_tetris_types as types;
