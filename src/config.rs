use std::{env, fs, path::Path, path::PathBuf, time::Duration};

use directories::ProjectDirs;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::{BACKEND_URL, DEFAULT_DEBOUNCE_MS};

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase().to_string();
    pub static ref DATA_FOLDER: Option<PathBuf> =
        env::var(format!("{}_DATA", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
}

pub fn get_data_dir() -> PathBuf {
    if let Some(s) = DATA_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "lyrilingual", env!("CARGO_PKG_NAME"))
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Quiet interval between the last keystroke and the search request.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Overrides `LYRILINGUAL_BACKEND_URL` when set.
    #[serde(default)]
    pub backend_url: Option<String>,
    #[serde(default = "default_true")]
    pub open_links_in_browser: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            backend_url: None,
            open_links_in_browser: true,
        }
    }
}

impl AppSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn backend_url(&self) -> String {
        self.backend_url
            .clone()
            .unwrap_or_else(|| BACKEND_URL.clone())
    }
}

pub fn get_settings_path() -> PathBuf {
    get_data_dir().join("app.toml")
}

pub fn load_settings() -> AppSettings {
    load_settings_from(&get_settings_path())
}

pub fn load_settings_from(settings_path: &Path) -> AppSettings {
    if settings_path.exists() {
        match fs::read_to_string(settings_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("Failed to parse settings file: {}. Using defaults.", e);
                    AppSettings::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}. Using defaults.", e);
                AppSettings::default()
            }
        }
    } else {
        debug!("No settings at {}, writing defaults", settings_path.display());
        let settings = AppSettings::default();
        if let Err(e) = save_settings_to(settings_path, &settings) {
            warn!("Failed to write default settings: {}", e);
        }
        settings
    }
}

pub fn save_settings_to(
    settings_path: &Path,
    settings: &AppSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    // Ensure the data directory exists
    if let Some(parent) = settings_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let toml_string = toml::to_string_pretty(settings)?;
    fs::write(settings_path, toml_string)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{AppSettings, load_settings_from, save_settings_to};
    use std::fs;
    use std::time::Duration;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("app.toml");

        let settings = load_settings_from(&path);
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.debounce(), Duration::from_millis(500));
        assert!(path.exists());
    }

    #[test]
    fn test_saved_settings_load_back() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("app.toml");
        let settings = AppSettings {
            debounce_ms: 250,
            backend_url: Some("http://lyrics.local:8080".to_string()),
            open_links_in_browser: false,
        };

        save_settings_to(&path, &settings).expect("save settings");
        assert_eq!(load_settings_from(&path), settings);
        assert_eq!(settings.backend_url(), "http://lyrics.local:8080");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("app.toml");
        fs::write(&path, "debounce_ms = 300\n").expect("write settings");

        let settings = load_settings_from(&path);
        assert_eq!(settings.debounce_ms, 300);
        assert_eq!(settings.backend_url, None);
        assert!(settings.open_links_in_browser);
    }

    #[test]
    fn test_unparsable_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("app.toml");
        fs::write(&path, "debounce_ms = \"soon\"").expect("write settings");

        assert_eq!(load_settings_from(&path), AppSettings::default());
    }
}
