use crate::pieces::{Piece, Shape};
use crate::types::{PieceKind, COLS, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

impl ActiveSnapshot {
    /// Absolute grid cells covered by the piece (may include rows above 0).
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Read-only copy of everything collaborators may look at between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; COLS as usize]; ROWS as usize],
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub next: Option<PieceKind>,
    pub paused: bool,
    pub score: u32,
    pub lines: u32,
}

impl GameSnapshot {
    /// Kind at (x, y) on the locked board, if any.
    pub fn cell(&self, x: usize, y: usize) -> Option<PieceKind> {
        self.board
            .get(y)
            .and_then(|row| row.get(x))
            .and_then(|&code| PieceKind::from_code(code))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; COLS as usize]; ROWS as usize],
            active: None,
            ghost_y: None,
            next: None,
            paused: false,
            score: 0,
            lines: 0,
        }
    }
}
