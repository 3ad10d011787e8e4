//! Executes the engine's effect intents in a terminal.
//!
//! A terminal cannot vibrate, so haptic requests flash the board border for
//! roughly the requested duration. Notices replace the hint line and, when
//! voice is on, ring the bell.

use crate::types::{Effect, Haptic, Notice, NoticeKey, GUIDE_START_PULSE_MS, TICK_MS};

/// Shortest flash, so a 10 ms pulse still lasts a few frames.
pub const MIN_FLASH_MS: u32 = 3 * TICK_MS;

pub const DEFAULT_HINT: &str = "Arrows move, Up turns, Space drops. Take your time!";

pub const START_HINT: &str = "Here we go! Take it slow.";

/// Player-facing wording for a notice.
pub fn notice_text(notice: &Notice) -> String {
    match notice.key {
        NoticeKey::LineMilestone => {
            format!("Great job! You've cleared {} lines!", notice.lines.unwrap_or(0))
        }
        NoticeKey::RescueTriggered => {
            "Auto-rescue engaged: the danger zone is cleared, keep playing.".to_string()
        }
        NoticeKey::Paused => "Paused. Press P to keep playing.".to_string(),
        NoticeKey::Resumed => "Back to the game, take it slow.".to_string(),
        NoticeKey::Restarted => "A new round begins, have fun!".to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct EffectDispatcher {
    hint: String,
    flash_ms: u32,
    voice_enabled: bool,
    bell_pending: bool,
}

impl EffectDispatcher {
    pub fn new(voice_enabled: bool) -> Self {
        Self {
            hint: DEFAULT_HINT.to_string(),
            flash_ms: 0,
            voice_enabled,
            bell_pending: false,
        }
    }

    pub fn dispatch(&mut self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::Haptic(haptic) => self.vibrate(*haptic),
                Effect::Notify(notice) => self.set_hint(notice_text(notice), true),
            }
        }
    }

    /// Replace the hint line. `speak` rings the bell when voice is on.
    pub fn set_hint(&mut self, text: impl Into<String>, speak: bool) {
        self.hint = text.into();
        if speak && self.voice_enabled {
            self.bell_pending = true;
        }
    }

    pub fn set_voice_enabled(&mut self, enabled: bool) {
        self.voice_enabled = enabled;
    }

    /// Count down the border flash.
    pub fn advance(&mut self, elapsed_ms: u32) {
        self.flash_ms = self.flash_ms.saturating_sub(elapsed_ms);
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn flash_active(&self) -> bool {
        self.flash_ms > 0
    }

    /// Feedback for leaving the start guide: a short flash and the start hint.
    pub fn round_started(&mut self) {
        self.vibrate(Haptic::Pulse(GUIDE_START_PULSE_MS));
        self.set_hint(START_HINT, true);
    }

    /// Returns whether a bell is due, clearing the request.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }

    fn vibrate(&mut self, haptic: Haptic) {
        let ms = haptic.total_ms().max(MIN_FLASH_MS);
        self.flash_ms = self.flash_ms.max(ms);
    }
}

impl Default for EffectDispatcher {
    fn default() -> Self {
        Self::new(true)
    }
}
