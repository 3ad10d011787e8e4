//! Rescue policy - keeps the session playable when a spawn is blocked.
//!
//! A freshly spawned piece that already overlaps the stack would end a
//! standard game. Here the top half of the board is wiped instead and play
//! carries on. There is deliberately no game-over state.

use crate::board::Board;
use crate::effects::{haptic_pattern, notify, push, Effects};
use crate::pieces::Piece;
use crate::types::{NoticeKey, RESCUE_PULSE_PATTERN, ROWS};

/// Rows wiped from the spawn edge when the rescue fires.
pub const RESCUE_ROWS: usize = ROWS as usize / 2;

/// A spawn needs rescuing exactly when it collides before any input.
pub fn needs_rescue(board: &Board, spawned: &Piece) -> bool {
    board.collides(spawned)
}

/// Wipe the top half of the board, whatever it holds, and queue feedback.
pub fn rescue(board: &mut Board, effects: &mut Effects) {
    board.clear_top_rows(RESCUE_ROWS);
    push(effects, haptic_pattern(&RESCUE_PULSE_PATTERN));
    push(effects, notify(NoticeKey::RescueTriggered));
}
