//! Startup configuration read from the environment.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Values the binary reads once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// RNG seed; `None` means derive one from the clock.
    pub seed: Option<u32>,
    /// Explicit settings file, overriding the XDG location.
    pub settings_path: Option<PathBuf>,
    /// Open with the how-to-play overlay.
    pub show_guide: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            settings_path: None,
            show_guide: true,
        }
    }
}

impl RunConfig {
    /// Create from `KID_TETRIS_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`RunConfig::from_env`] with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("KID_TETRIS_SEED").and_then(|s| s.trim().parse().ok());

        let settings_path = lookup("KID_TETRIS_SETTINGS")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let show_guide = !lookup("KID_TETRIS_NO_GUIDE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            seed,
            settings_path,
            show_guide,
        }
    }

    /// The configured seed, or one derived from the system clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_without_env() {
        assert_eq!(RunConfig::from_lookup(lookup(&[])), RunConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let cfg = RunConfig::from_lookup(lookup(&[
            ("KID_TETRIS_SEED", " 42 "),
            ("KID_TETRIS_SETTINGS", "/tmp/kid.json"),
            ("KID_TETRIS_NO_GUIDE", "TRUE"),
        ]));
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.seed_or_clock(), 42);
        assert_eq!(cfg.settings_path, Some(PathBuf::from("/tmp/kid.json")));
        assert!(!cfg.show_guide);
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = RunConfig::from_lookup(lookup(&[
            ("KID_TETRIS_SEED", "banana"),
            ("KID_TETRIS_SETTINGS", "  "),
            ("KID_TETRIS_NO_GUIDE", "0"),
        ]));
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.settings_path, None);
        assert!(cfg.show_guide);
    }
}
