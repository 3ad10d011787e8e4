//! Hold-to-repeat input handler for terminal environments.
//!
//! A held left/right/down key fires once on press and then every
//! [`HOLD_REPEAT_MS`] until released. Terminals that do not emit key release
//! events are supported by an auto-release timeout.

use std::time::Instant;

use arrayvec::ArrayVec;

use crate::types::{GameAction, HOLD_REPEAT_MS};

/// Max repeats reported by a single [`InputHandler::update`] call.
pub const MAX_REPEATS: usize = 16;

/// Which repeatable action is currently held, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Held {
    Left,
    Right,
    Down,
    None,
}

impl Held {
    fn from_action(action: GameAction) -> Self {
        match action {
            GameAction::MoveLeft => Held::Left,
            GameAction::MoveRight => Held::Right,
            GameAction::SoftDrop => Held::Down,
            _ => Held::None,
        }
    }

    fn action(self) -> Option<GameAction> {
        match self {
            Held::Left => Some(GameAction::MoveLeft),
            Held::Right => Some(GameAction::MoveRight),
            Held::Down => Some(GameAction::SoftDrop),
            Held::None => None,
        }
    }
}

// Without release events, a tap must not turn into a sustained hold. The
// timeout covers the gap between the first press and the terminal's own
// auto-repeat kicking in.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 550;

/// Tracks the held key and its repeat timer.
#[derive(Debug, Clone)]
pub struct InputHandler {
    held: Held,
    last_key_time: Instant,
    repeat_accumulator: u32,
    repeat_ms: u32,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_repeat_ms(HOLD_REPEAT_MS)
    }

    pub fn with_repeat_ms(repeat_ms: u32) -> Self {
        Self {
            held: Held::None,
            last_key_time: Instant::now(),
            repeat_accumulator: 0,
            repeat_ms: repeat_ms.max(1),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn held(&self) -> Held {
        self.held
    }

    /// Feed a mapped press. Returns the action to apply now, if any.
    ///
    /// Non-repeatable actions pass straight through. A repeatable action
    /// that is already held only refreshes the release timer, so the
    /// terminal's own key repeat does not double the rate.
    pub fn handle_press(&mut self, action: GameAction) -> Option<GameAction> {
        let held = Held::from_action(action);
        if held == Held::None {
            return Some(action);
        }
        self.last_key_time = Instant::now();
        if self.held == held {
            return None;
        }
        self.held = held;
        self.repeat_accumulator = 0;
        Some(action)
    }

    /// Feed a mapped release.
    pub fn handle_release(&mut self, action: GameAction) {
        if Held::from_action(action) == self.held {
            self.release();
        }
    }

    /// Advance the repeat timer and collect due repeats.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, MAX_REPEATS> {
        let mut actions = ArrayVec::new();

        if self.held != Held::None && self.since_last_key_ms() > self.key_release_timeout_ms {
            self.release();
        }

        let Some(action) = self.held.action() else {
            return actions;
        };

        self.repeat_accumulator += elapsed_ms;
        while self.repeat_accumulator >= self.repeat_ms {
            if actions.try_push(action).is_err() {
                self.repeat_accumulator = 0;
                break;
            }
            self.repeat_accumulator -= self.repeat_ms;
        }
        actions
    }

    pub fn reset(&mut self) {
        self.release();
        self.last_key_time = Instant::now();
    }

    fn release(&mut self) {
        self.held = Held::None;
        self.repeat_accumulator = 0;
    }

    fn since_last_key_ms(&self) -> u32 {
        let elapsed = self.last_key_time.elapsed();
        u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX)
    }

    #[cfg(test)]
    fn age_last_key(&mut self, ms: u64) {
        self.last_key_time = Instant::now() - std::time::Duration::from_millis(ms);
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_hold() -> InputHandler {
        InputHandler::new().with_key_release_timeout_ms(10_000)
    }

    #[test]
    fn test_press_fires_immediately_then_every_130ms() {
        let mut ih = long_hold();

        assert_eq!(
            ih.handle_press(GameAction::MoveLeft),
            Some(GameAction::MoveLeft)
        );
        assert!(ih.update(129).is_empty());
        assert_eq!(ih.update(1).as_slice(), &[GameAction::MoveLeft]);
        assert_eq!(
            ih.update(260).as_slice(),
            &[GameAction::MoveLeft, GameAction::MoveLeft]
        );
    }

    #[test]
    fn test_terminal_repeat_does_not_double_rate() {
        let mut ih = long_hold();

        assert!(ih.handle_press(GameAction::SoftDrop).is_some());
        assert_eq!(ih.handle_press(GameAction::SoftDrop), None);
        assert_eq!(ih.update(130).as_slice(), &[GameAction::SoftDrop]);
    }

    #[test]
    fn test_switching_direction_restarts_timer() {
        let mut ih = long_hold();

        ih.handle_press(GameAction::MoveLeft);
        assert!(ih.update(100).is_empty());
        assert_eq!(
            ih.handle_press(GameAction::MoveRight),
            Some(GameAction::MoveRight)
        );
        assert!(ih.update(100).is_empty());
        assert_eq!(ih.update(30).as_slice(), &[GameAction::MoveRight]);
    }

    #[test]
    fn test_non_repeatable_actions_pass_through() {
        let mut ih = long_hold();

        ih.handle_press(GameAction::MoveLeft);
        assert_eq!(ih.handle_press(GameAction::Rotate), Some(GameAction::Rotate));
        assert_eq!(
            ih.handle_press(GameAction::HardDrop),
            Some(GameAction::HardDrop)
        );
        assert_eq!(ih.held(), Held::Left);
    }

    #[test]
    fn test_release_stops_repeats() {
        let mut ih = long_hold();

        ih.handle_press(GameAction::MoveRight);
        ih.handle_release(GameAction::MoveLeft);
        assert_eq!(ih.held(), Held::Right);

        ih.handle_release(GameAction::MoveRight);
        assert!(ih.update(1000).is_empty());
    }

    #[test]
    fn test_auto_release_without_release_events() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);

        ih.handle_press(GameAction::MoveLeft);
        ih.age_last_key(51);

        assert!(ih.update(200).is_empty());
        assert_eq!(ih.held(), Held::None);
    }

    #[test]
    fn test_non_repeatable_key_does_not_extend_timeout() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);

        ih.handle_press(GameAction::MoveLeft);
        ih.age_last_key(51);
        ih.handle_press(GameAction::Rotate);

        assert!(ih.update(0).is_empty());
        assert_eq!(ih.held(), Held::None);
    }

    #[test]
    fn test_long_stall_is_capped() {
        let mut ih = long_hold();

        ih.handle_press(GameAction::SoftDrop);
        let actions = ih.update(130 * 100);
        assert_eq!(actions.len(), MAX_REPEATS);
        assert!(ih.update(0).is_empty());
    }

    #[test]
    fn test_reset_clears_held_state() {
        let mut ih = long_hold();

        ih.handle_press(GameAction::MoveLeft);
        ih.reset();
        assert!(ih.update(500).is_empty());
        assert_eq!(ih.key_release_timeout_ms(), 10_000);
    }
}
