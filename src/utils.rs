//! Utility functions

use crate::constants::{ASSETS_ENV, DATA_DIR_NAME};
use std::path::{Path, PathBuf};

/// Get the app data directory (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

/// Locate the assets directory.
///
/// Order: explicit setting, `GLASS_WEATHER_ASSETS`, `assets/` beside the
/// executable, then `./assets`.
pub fn resolve_assets_dir(configured: Option<&str>) -> PathBuf {
    if let Some(path) = configured.filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    if let Ok(path) = std::env::var(ASSETS_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("assets")));
    match beside_exe {
        Some(dir) if dir.is_dir() => dir,
        _ => PathBuf::from("assets"),
    }
}

pub fn background_path(assets_dir: &Path, file_name: &str) -> PathBuf {
    assets_dir.join("backgrounds").join(file_name)
}

pub fn icon_path(assets_dir: &Path, icon_code: &str) -> PathBuf {
    assets_dir.join("icons").join(format!("{}.png", icon_code))
}

/// Uppercase the first letter of every word, lowercase the rest.
/// A word starts after any non-alphabetic character.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("overcast clouds"), "Overcast Clouds");
        assert_eq!(title_case("LIGHT RAIN"), "Light Rain");
        assert_eq!(title_case("thunderstorm with heavy drizzle"), "Thunderstorm With Heavy Drizzle");
        assert_eq!(title_case("smoke/haze"), "Smoke/Haze");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_configured_assets_dir_wins() {
        assert_eq!(resolve_assets_dir(Some("/opt/glass/assets")), PathBuf::from("/opt/glass/assets"));
    }

    #[test]
    fn test_asset_paths() {
        let root = Path::new("assets");
        assert_eq!(
            background_path(root, "clear_day.png"),
            Path::new("assets").join("backgrounds").join("clear_day.png")
        );
        assert_eq!(icon_path(root, "01d"), Path::new("assets").join("icons").join("01d.png"));
    }
}
