//! Game settings and preferences
//!
//! Persisted as JSON in the user's home directory, separately from any
//! session state. Gameplay tuning lives in [`crate::consts`]; nothing
//! here may change simulation outcomes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// User preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute all audio
    pub muted: bool,
    /// Log a HUD line once a second in headless runs
    pub show_hud: bool,
    /// Fixed session seed; `None` picks one from the wall clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            show_hud: true,
            seed: None,
        }
    }
}

impl Settings {
    const FILE_NAME: &'static str = ".astro-drift.json";

    fn default_path() -> PathBuf {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_default()
            .join(Self::FILE_NAME)
    }

    /// Load settings from the default path, falling back to defaults on
    /// any failure.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!(
                        "Ignoring malformed settings file {}: {}",
                        path.display(),
                        err
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Best-effort save; failures are logged, never fatal.
    pub fn save(&self) {
        self.save_to(&Self::default_path());
    }

    pub fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("Failed to save settings to {}: {}", path.display(), err);
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(err) => log::warn!("Failed to encode settings: {}", err),
        }
    }
}
