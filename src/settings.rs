//! Game settings and preferences
//!
//! Persisted as JSON next to the binary. Gameplay numbers are fixed in
//! `consts`; only presentation and audio preferences live here.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default settings file name
pub const SETTINGS_FILE: &str = "rally_pong_settings.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute all audio
    pub muted: bool,
    /// Fixed match seed; `None` seeds from the clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Effective cue volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Load settings from `path`, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings file: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to `path`; failures are logged, not fatal
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    log::warn!("Failed to save settings: {}", e);
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(e) => log::warn!("Failed to serialize settings: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_effective_volume_respects_mute() {
        let mut settings = Settings::default();
        assert!(settings.effective_volume() > 0.0);

        settings.muted = true;
        assert_eq!(settings.effective_volume(), 0.0);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let settings = Settings::load(Path::new("definitely/not/a/settings/file.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let path = env::temp_dir().join(format!("rally_pong_settings_{}.json", std::process::id()));

        let settings = Settings {
            master_volume: 0.5,
            sfx_volume: 0.25,
            muted: true,
            seed: Some(1234),
        };
        settings.save(&path);

        let loaded = Settings::load(&path);
        assert_eq!(loaded, settings);

        let _ = fs::remove_file(&path);
    }
}
