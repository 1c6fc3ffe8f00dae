//! Game settings and preferences
//!
//! Persisted as a small JSON file next to the executable. Any load or
//! save failure is logged and falls back to defaults; settings problems
//! never stop the game from starting.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute all audio
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Settings file location
    const FILE_PATH: &'static str = "brick_breaker_settings.json";

    /// Load settings from disk, defaulting on any failure
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE_PATH))
    }

    fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to disk, best effort
    pub fn save(&self) {
        self.save_to(Path::new(Self::FILE_PATH));
    }

    fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("Failed to save settings to {}: {err}", path.display());
                }
            }
            Err(err) => log::warn!("Failed to serialize settings: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let settings = Settings::load_from(Path::new("does_not_exist.json"));
        assert_eq!(settings.master_volume, 0.8);
        assert_eq!(settings.sfx_volume, 1.0);
        assert!(!settings.muted);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = std::env::temp_dir().join("brick_breaker_settings_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");

        let settings = Settings {
            master_volume: 0.25,
            sfx_volume: 0.5,
            muted: true,
        };
        settings.save_to(&path);

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.master_volume, 0.25);
        assert_eq!(loaded.sfx_volume, 0.5);
        assert!(loaded.muted);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let dir = std::env::temp_dir().join("brick_breaker_settings_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("malformed.json");
        fs::write(&path, "{not json").unwrap();

        let settings = Settings::load_from(&path);
        assert!(!settings.muted);
        assert_eq!(settings.master_volume, 0.8);

        let _ = fs::remove_file(&path);
    }
}
