//! Effect intents returned by engine operations.
//!
//! Stack-only: one operation emits at most a handful of intents.

use arrayvec::ArrayVec;

use crate::types::{Effect, Haptic, Notice, NoticeKey};

/// Upper bound on intents produced by a single operation.
pub const MAX_EFFECTS: usize = 8;

/// Intents produced by one engine operation, in emission order.
pub type Effects = ArrayVec<Effect, MAX_EFFECTS>;

/// Append an intent, dropping it if the list is full.
pub fn push(effects: &mut Effects, effect: Effect) {
    let _ = effects.try_push(effect);
}

pub fn haptic_pulse(ms: u16) -> Effect {
    Effect::Haptic(Haptic::Pulse(ms))
}

pub fn haptic_pattern(steps: &'static [u16]) -> Effect {
    Effect::Haptic(Haptic::Pattern(steps))
}

pub fn notify(key: NoticeKey) -> Effect {
    Effect::Notify(Notice::new(key))
}

pub fn notify_lines(key: NoticeKey, lines: u32) -> Effect {
    Effect::Notify(Notice::with_lines(key, lines))
}
