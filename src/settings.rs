//! Persisted player switches.
//!
//! Stored as JSON with the keys `touchLockEnabled`, `voiceEnabled` and
//! `kidModeEnabled`. Loading never fails: a missing or unreadable file gives
//! the defaults, and a field of the wrong type falls back on its own.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

use crate::input::Toggle;

const APP_DIR: &str = "kid-tetris";
const FILENAME: &str = "settings.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Ignore auto-repeated key events.
    pub touch_lock_enabled: bool,
    /// Ring the bell on notices.
    pub voice_enabled: bool,
    /// Big blocks.
    pub kid_mode_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            touch_lock_enabled: true,
            voice_enabled: true,
            kid_mode_enabled: true,
        }
    }
}

impl Settings {
    /// Parse settings JSON, keeping defaults for anything missing or mistyped.
    pub fn from_json(text: &str) -> Self {
        let mut settings = Self::default();
        let Ok(Value::Object(map)) = serde_json::from_str::<Value>(text) else {
            return settings;
        };
        let flag = |key: &str, default: bool| {
            map.get(key)
                .and_then(Value::as_bool)
                .unwrap_or(default)
        };
        settings.touch_lock_enabled = flag("touchLockEnabled", settings.touch_lock_enabled);
        settings.voice_enabled = flag("voiceEnabled", settings.voice_enabled);
        settings.kid_mode_enabled = flag("kidModeEnabled", settings.kid_mode_enabled);
        settings
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_json(&text),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(path, self.to_json()?).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Flip one switch and return its new value.
    pub fn toggle(&mut self, toggle: Toggle) -> bool {
        let flag = match toggle {
            Toggle::TouchLock => &mut self.touch_lock_enabled,
            Toggle::Voice => &mut self.voice_enabled,
            Toggle::KidMode => &mut self.kid_mode_enabled,
        };
        *flag = !*flag;
        *flag
    }
}

/// Hint shown after a switch is flipped.
pub fn toggle_hint(toggle: Toggle, on: bool) -> &'static str {
    match (toggle, on) {
        (Toggle::TouchLock, true) => "Touch lock on: held keys will not flood the board.",
        (Toggle::TouchLock, false) => "Touch lock off.",
        (Toggle::Voice, true) => "Voice hints on.",
        (Toggle::Voice, false) => "Voice hints off.",
        (Toggle::KidMode, true) => "Big blocks on.",
        (Toggle::KidMode, false) => "Big blocks off.",
    }
}

/// `explicit`, else `$XDG_CONFIG_HOME/kid-tetris/settings.json`, else
/// `$HOME/.config/kid-tetris/settings.json`.
pub fn settings_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => std::env::var("HOME")
            .map(|h| PathBuf::from(h).join(".config"))
            .unwrap_or_else(|_| PathBuf::from(".")),
    };
    base.join(APP_DIR).join(FILENAME)
}
