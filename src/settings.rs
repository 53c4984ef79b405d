//! User settings stored as settings.json in the app data directory

use crate::constants::API_KEY_ENV;
use crate::types::Units;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window position (size is fixed)
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,

    // Search
    pub last_city: String,
    pub units: Units,

    // Fallback when OPENWEATHER_API_KEY is unset
    pub api_key: Option<String>,

    // Paths
    pub assets_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            last_city: String::new(),
            units: Units::Metric,
            api_key: None,
            assets_path: None,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// API key from the environment, else from settings.json
    pub fn resolve_api_key(&self) -> Option<String> {
        let from_env = std::env::var(API_KEY_ENV).ok();
        pick_api_key(from_env, self.api_key.clone())
    }
}

fn pick_api_key(from_env: Option<String>, from_settings: Option<String>) -> Option<String> {
    from_env
        .filter(|k| !k.trim().is_empty())
        .or(from_settings.filter(|k| !k.trim().is_empty()))
        .map(|k| k.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("glass-weather-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = scratch_dir("missing");
        let _ = std::fs::remove_file(dir.join("settings.json"));
        assert_eq!(Settings::load(&dir), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = scratch_dir("partial");
        std::fs::write(dir.join("settings.json"), r#"{"last_city":"Oslo","units":"imperial"}"#).unwrap();
        let settings = Settings::load(&dir);
        assert_eq!(settings.last_city, "Oslo");
        assert_eq!(settings.units, Units::Imperial);
        assert_eq!(settings.window_x, None);
        assert_eq!(settings.api_key, None);
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = scratch_dir("corrupt");
        std::fs::write(dir.join("settings.json"), "{ not json").unwrap();
        assert_eq!(Settings::load(&dir), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = scratch_dir("save");
        let settings = Settings {
            window_x: Some(120.0),
            window_y: Some(80.0),
            last_city: "Lisbon".into(),
            ..Settings::default()
        };
        settings.save(&dir);
        assert_eq!(Settings::load(&dir), settings);
    }

    #[test]
    fn test_api_key_precedence() {
        assert_eq!(pick_api_key(Some("env".into()), Some("file".into())), Some("env".into()));
        assert_eq!(pick_api_key(Some("  ".into()), Some("file".into())), Some("file".into()));
        assert_eq!(pick_api_key(None, Some(" file \n".into())), Some("file".into()));
        assert_eq!(pick_api_key(None, None), None);
    }
}
