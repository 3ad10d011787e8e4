//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the engine, the terminal frontend, and tests alike.
//!
//! # Board Dimensions
//!
//! The kid-sized playfield is smaller than the standard 10x20:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 18 rows (indexed 0-17, row 0 is the spawn edge)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frontend frame interval (~60 FPS) |
//! | `DROP_INTERVAL_MS` | 1300 | Gravity: one row per 1.3 s, no levels |
//! | `HOLD_REPEAT_MS` | 130 | Auto-repeat while a move key is held |
//!
//! # Examples
//!
//! ```
//! use kid_tetris_types::{PieceKind, GameAction, COLS, ROWS};
//!
//! let parsed = PieceKind::from_str("o").unwrap();
//! assert_eq!(parsed, PieceKind::O);
//!
//! let action = GameAction::from_str("hardDrop").unwrap();
//! assert_eq!(action, GameAction::HardDrop);
//!
//! assert_eq!(COLS, 10);
//! assert_eq!(ROWS, 18);
//! ```

/// Board width in cells (10 columns)
pub const COLS: u8 = 10;

/// Board height in cells (18 rows)
pub const ROWS: u8 = 18;

/// Frontend frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval. A soft drop is forced once the accumulator exceeds this.
pub const DROP_INTERVAL_MS: u32 = 1300;

/// Repeat interval for held movement / soft-drop keys.
pub const HOLD_REPEAT_MS: u32 = 130;

/// Points per cleared line.
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Flat bonus awarded when the rescue policy fires.
pub const RESCUE_BONUS: u32 = 30;

/// A milestone notice fires whenever the line total lands on a multiple of this.
pub const LINE_MILESTONE_EVERY: u32 = 5;

/// Haptic pulse after a successful sideways move.
pub const MOVE_PULSE_MS: u16 = 10;

/// Haptic pulse after a successful rotation.
pub const ROTATE_PULSE_MS: u16 = 12;

/// Haptic pulse after clearing one or more lines.
pub const LINE_CLEAR_PULSE_MS: u16 = 18;

/// Haptic pulse when the player leaves the start guide.
pub const GUIDE_START_PULSE_MS: u16 = 25;

/// Vibrate / pause / vibrate pattern played on rescue.
pub const RESCUE_PULSE_PATTERN: [u16; 3] = [20, 40, 20];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rescue_pattern_is_longer_than_line_clear_pulse() {
        let total: u16 = RESCUE_PULSE_PATTERN.iter().sum();
        assert!(total > LINE_CLEAR_PULSE_MS);
    }

    #[test]
    fn board_is_kid_sized() {
        assert_eq!(COLS, 10);
        assert_eq!(ROWS, 18);
        assert_eq!(DROP_INTERVAL_MS, 1300);
    }
}

/// The seven piece kinds
///
/// Each piece has a fixed shape template and a display color:
/// - **I**: sky blue, 1x4 bar
/// - **O**: sunflower, 2x2 square
/// - **T**: lilac, T-shaped
/// - **L**: apricot, 3 tall with a foot to the right
/// - **J**: periwinkle, 3 tall with a foot to the left
/// - **S**: mint, S-shaped
/// - **Z**: coral, Z-shaped
///
/// S and Z never come out of the kid-friendly bag, but the grid can still
/// hold them (e.g. boards built by tools or tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use kid_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("J"), Some(PieceKind::J));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Uppercase letter, as shown in the side panel.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }

    /// Compact grid code used by snapshots (0 is reserved for empty).
    pub fn code(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::L => 4,
            PieceKind::J => 5,
            PieceKind::S => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::code`]. Returns `None` for 0 and unknown codes.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::T),
            4 => Some(PieceKind::L),
            5 => Some(PieceKind::J),
            6 => Some(PieceKind::S),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

/// Game actions that can be applied to the engine
///
/// Input collaborators (keyboard, on-screen buttons, scripted players) only
/// ever talk to the engine through these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Step the piece one row down, locking it if it cannot move
    SoftDrop,
    /// Drop to the lowest legal row and lock
    HardDrop,
    /// Rotate 90° clockwise with the 3-probe kick
    Rotate,
    /// Toggle pause state
    Pause,
    /// Start a fresh round
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use kid_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotate" => Some(GameAction::Rotate),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// Haptic feedback request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Haptic {
    /// One pulse of the given length in milliseconds.
    Pulse(u16),
    /// Alternating on/off durations in milliseconds, starting with "on".
    Pattern(&'static [u16]),
}

impl Haptic {
    /// Total duration of the request in milliseconds.
    pub fn total_ms(&self) -> u32 {
        match self {
            Haptic::Pulse(ms) => *ms as u32,
            Haptic::Pattern(steps) => steps.iter().map(|&ms| ms as u32).sum(),
        }
    }
}

/// Semantic key of a notice; collaborators pick the wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKey {
    LineMilestone,
    RescueTriggered,
    Paused,
    Resumed,
    Restarted,
}

impl NoticeKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKey::LineMilestone => "line-milestone",
            NoticeKey::RescueTriggered => "rescue-triggered",
            NoticeKey::Paused => "paused",
            NoticeKey::Resumed => "resumed",
            NoticeKey::Restarted => "restarted",
        }
    }
}

/// A notification request, with the line total where relevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub key: NoticeKey,
    pub lines: Option<u32>,
}

impl Notice {
    pub fn new(key: NoticeKey) -> Self {
        Self { key, lines: None }
    }

    pub fn with_lines(key: NoticeKey, lines: u32) -> Self {
        Self {
            key,
            lines: Some(lines),
        }
    }
}

/// Effect intent emitted by the engine and executed by a dispatcher.
///
/// The engine never persists these; whoever applies an action owns the
/// returned intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Haptic(Haptic),
    Notify(Notice),
}

/// Engine-side record of the most recent lock, consumed by observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    /// Rows removed by this lock.
    pub lines_cleared: u32,
    /// Points awarded for those rows.
    pub line_clear_score: u32,
    /// Whether the spawn that followed the lock needed a rescue.
    pub rescued: bool,
}
