//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole falling-block engine for the kid-friendly
//! game: board, pieces, collision, locking and line clears, the rescue policy
//! and the piece sequencer. It has **zero dependencies** on UI, audio or I/O:
//!
//! - **Deterministic**: same seed, same inputs, same game
//! - **Side-effect free**: operations return effect *intents* (haptic pulses,
//!   notices) for a dispatcher to carry out
//! - **Never ends**: a blocked spawn triggers a rescue instead of game over
//!
//! # Module Structure
//!
//! - [`board`]: 10x18 grid, collision test, merge, line clearing
//! - [`pieces`]: shape templates, matrix rotation, the 3-probe kick
//! - [`rescue`]: clears the top half of the board when a spawn is blocked
//! - [`rng`]: seeded LCG and the biased kid-friendly draw list
//! - [`scoring`]: flat line-clear points, rescue bonus, milestones
//! - [`game_state`]: the session controller exposing every operation
//! - [`snapshot`]: read-only copy of the session for renderers
//!
//! # Rules at a glance
//!
//! - **Pieces**: drawn uniformly from `O I T O I L J`; S and Z never appear
//! - **Rotation**: clockwise only; on collision try one column right, then
//!   one column left, otherwise stay put
//! - **Gravity**: one row every 1300 ms, no levels
//! - **Scoring**: 100 per line, 30 per rescue
//!
//! # Example
//!
//! ```
//! use kid_tetris_core::GameState;
//! use kid_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // a fresh piece is always waiting
//! assert!(game.current().is_some());
//! assert!(game.next().is_some());
//! ```
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed time to drive gravity.

pub mod board;
pub mod effects;
pub mod game_state;
pub mod pieces;
pub mod rescue;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use kid_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use effects::Effects;
pub use game_state::GameState;
pub use pieces::{try_rotate, Piece, Shape};
pub use rng::{PieceBag, SimpleRng, KID_FRIENDLY_BAG};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
