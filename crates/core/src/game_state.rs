//! Game state module - the session controller
//!
//! Owns the board, the current and next piece, the sequencer and the
//! counters. Every mutating operation returns the effect intents it produced;
//! nothing here touches a screen, a speaker or a vibration motor.
//!
//! Piece lifecycle: spawned, then any number of moves/rotations (each checked
//! against the board and dropped if illegal), then locked by a hard drop or a
//! failed downward step. Locking merges, clears lines and spawns again right
//! away. The only way to stop the cycle is to pause it.

use crate::board::Board;
use crate::effects::{haptic_pulse, notify, notify_lines, push, Effects};
use crate::pieces::{try_rotate, Piece};
use crate::rescue;
use crate::rng::PieceBag;
use crate::scoring::{is_line_milestone, line_clear_points, rescue_bonus};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{
    GameAction, LockEvent, NoticeKey, DROP_INTERVAL_MS, LINE_CLEAR_PULSE_MS, MOVE_PULSE_MS,
    ROTATE_PULSE_MS, ROWS,
};

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Option<Piece>,
    next: Option<Piece>,
    bag: PieceBag,
    /// Seed the session was created with.
    seed: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Monotonic id for spawned pieces.
    piece_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    score: u32,
    lines: u32,
    /// Gravity accumulator.
    drop_counter_ms: u32,
    paused: bool,
    started: bool,
}

impl GameState {
    /// Create a new, not yet started session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_board(seed, Board::new())
    }

    /// Create a session over an existing board.
    pub fn with_board(seed: u32, board: Board) -> Self {
        Self {
            board,
            current: None,
            next: None,
            bag: PieceBag::new(seed),
            seed,
            episode_id: 0,
            piece_id: 0,
            last_event: None,
            score: 0,
            lines: 0,
            drop_counter_ms: 0,
            paused: false,
            started: false,
        }
    }

    /// Pre-generate the next piece and spawn the first one.
    ///
    /// Works while paused so a frontend can show the board behind a start
    /// screen.
    pub fn start(&mut self) -> Effects {
        let mut effects = Effects::new();
        if self.started {
            return effects;
        }
        self.started = true;
        self.next = Some(Piece::new(self.bag.draw()));
        self.spawn_piece(&mut effects);
        effects
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    /// Seed passed to [`GameState::new`]; unaffected by draws.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    pub fn next(&self) -> Option<Piece> {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = self.current.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.next = self.next.map(|p| p.kind);
        out.paused = self.paused;
        out.score = self.score;
        out.lines = self.lines;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn the next piece. No-op while paused.
    pub fn spawn(&mut self) -> Effects {
        let mut effects = Effects::new();
        if self.paused {
            return effects;
        }
        self.started = true;
        self.spawn_piece(&mut effects);
        effects
    }

    /// Promote `next` to current, draw a new `next`, and rescue the board if
    /// the new piece is already stuck.
    fn spawn_piece(&mut self, effects: &mut Effects) -> bool {
        let mut piece = match self.next.take() {
            Some(piece) => piece,
            None => Piece::new(self.bag.draw()),
        };
        self.next = Some(Piece::new(self.bag.draw()));

        piece.reset_to_spawn();
        self.current = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);

        if rescue::needs_rescue(&self.board, &piece) {
            rescue::rescue(&mut self.board, effects);
            self.score += rescue_bonus();
            return true;
        }
        false
    }

    /// Move the current piece one column; `dx` is reduced to its sign.
    pub fn move_by(&mut self, dx: i8) -> Effects {
        let mut effects = Effects::new();
        if self.paused {
            return effects;
        }
        if self.try_move(dx.signum(), 0) {
            push(&mut effects, haptic_pulse(MOVE_PULSE_MS));
        }
        effects
    }

    /// Move the current piece if the target is free.
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(current) = self.current else {
            return false;
        };
        if dx == 0 && dy == 0 {
            return false;
        }

        let moved = current.shifted(dx, dy);
        if self.board.collides(&moved) {
            return false;
        }
        self.current = Some(moved);
        true
    }

    /// Step down one row, locking the piece if it cannot go further.
    ///
    /// Also resets the gravity accumulator.
    pub fn soft_drop(&mut self) -> Effects {
        let mut effects = Effects::new();
        if self.paused || self.current.is_none() {
            return effects;
        }
        if !self.try_move(0, 1) {
            self.lock_piece(&mut effects);
        }
        self.drop_counter_ms = 0;
        effects
    }

    /// Drop to the lowest free row and lock.
    pub fn hard_drop(&mut self) -> Effects {
        let mut effects = Effects::new();
        if self.paused {
            return effects;
        }
        let Some(ghost_y) = self.ghost_y() else {
            return effects;
        };
        if let Some(current) = self.current.as_mut() {
            current.y = ghost_y;
        }
        self.lock_piece(&mut effects);
        effects
    }

    /// Rotate clockwise, trying the current column, then one right, then one
    /// left of the original. If all three collide nothing changes.
    pub fn rotate(&mut self) -> Effects {
        let mut effects = Effects::new();
        if self.paused {
            return effects;
        }
        let Some(current) = self.current else {
            return effects;
        };

        if let Some(rotated) = try_rotate(&current, |p| self.board.collides(p)) {
            self.current = Some(rotated);
            push(&mut effects, haptic_pulse(ROTATE_PULSE_MS));
        }
        effects
    }

    /// Pause or resume. Emits a notice only when the flag actually changes.
    pub fn set_paused(&mut self, paused: bool) -> Effects {
        let mut effects = Effects::new();
        if self.paused == paused {
            return effects;
        }
        self.paused = paused;
        let key = if paused {
            NoticeKey::Paused
        } else {
            NoticeKey::Resumed
        };
        push(&mut effects, notify(key));
        effects
    }

    /// Start a fresh round: empty board, zero counters, unpaused.
    ///
    /// The already generated next piece carries over and becomes current.
    pub fn restart(&mut self) -> Effects {
        let mut effects = Effects::new();
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.paused = false;
        self.drop_counter_ms = 0;
        self.last_event = None;
        self.current = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.started = true;

        self.spawn_piece(&mut effects);
        push(&mut effects, notify(NoticeKey::Restarted));
        effects
    }

    /// Merge the current piece, clear lines and spawn the next piece.
    fn lock_piece(&mut self, effects: &mut Effects) {
        let Some(current) = self.current.take() else {
            return;
        };

        self.board.merge(&current);

        let cleared = self.board.clear_lines();
        let mut line_clear_score = 0;
        if cleared > 0 {
            line_clear_score = line_clear_points(cleared);
            self.lines += cleared;
            self.score += line_clear_score;
            push(effects, haptic_pulse(LINE_CLEAR_PULSE_MS));
            if is_line_milestone(self.lines) {
                push(effects, notify_lines(NoticeKey::LineMilestone, self.lines));
            }
        }

        let rescued = self.spawn_piece(effects);

        self.last_event = Some(LockEvent {
            lines_cleared: cleared,
            line_clear_score,
            rescued,
        });
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Row the current piece would land on with a hard drop.
    pub fn ghost_y(&self) -> Option<i8> {
        let current = self.current?;

        let mut drop_distance: i8 = 0;
        while current.y + drop_distance < ROWS as i8
            && !self.board.collides(&current.shifted(0, drop_distance + 1))
        {
            drop_distance += 1;
        }

        Some(current.y + drop_distance)
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// Once the accumulator is past the drop interval a soft drop is forced,
    /// which also resets it. While paused nothing changes.
    pub fn tick(&mut self, elapsed_ms: u32) -> Effects {
        if self.paused || !self.started {
            return Effects::new();
        }

        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        if self.drop_counter_ms > DROP_INTERVAL_MS {
            return self.soft_drop();
        }
        Effects::new()
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> Effects {
        match action {
            GameAction::MoveLeft => self.move_by(-1),
            GameAction::MoveRight => self.move_by(1),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => self.set_paused(!self.paused),
            GameAction::Restart => self.restart(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
