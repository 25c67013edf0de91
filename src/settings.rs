//! User settings stored as settings.json in the app data directory

use crate::constants::{ENV_BACKEND_KEY, ENV_BACKEND_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Backend
    pub backend_url: Option<String>,
    pub backend_key: Option<String>,

    // Paths
    pub photos_dir: Option<String>,

    // Drop pulse/quote timers left over from an earlier click
    pub supersede_stale_timers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            backend_url: None,
            backend_key: None,
            photos_dir: None,
            supersede_stale_timers: false,
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

    /// Backend (url, key), with environment variables taking precedence over
    /// the file. Not written back on save.
    pub fn backend(&self) -> (Option<String>, Option<String>) {
        self.backend_with(|key| std::env::var(key).ok())
    }

    fn backend_with(&self, var: impl Fn(&str) -> Option<String>) -> (Option<String>, Option<String>) {
        let pick = |name: &str, file: &Option<String>| match var(name).filter(|v| !v.is_empty()) {
            Some(value) => {
                debug!(var = name, "Backend setting from environment");
                Some(value)
            }
            None => file.clone(),
        };
        (
            pick(ENV_BACKEND_URL, &self.backend_url),
            pick(ENV_BACKEND_KEY, &self.backend_key),
        )
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

    pub fn photos_dir_or_default(&self, data_dir: &Path) -> PathBuf {
        self.photos_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("photos"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fresh per-test directory; each test removes it when done
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("vibecoding-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = scratch_dir("missing");
        let _ = std::fs::remove_file(dir.join("settings.json"));
        assert_eq!(Settings::load(&dir), Settings::default());
        std::fs::remove_dir_all(&dir).unwrap();
        assert!(!dir.exists());
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = scratch_dir("roundtrip");
        let settings = Settings {
            window_w: Some(900.0),
            window_h: Some(700.0),
            photos_dir: Some("/srv/photos".to_string()),
            supersede_stale_timers: true,
            ..Settings::default()
        };
        settings.save(&dir);

        let loaded = Settings::load(&dir);
        assert_eq!(loaded.window_w, Some(900.0));
        assert_eq!(loaded.photos_dir.as_deref(), Some("/srv/photos"));
        assert!(loaded.supersede_stale_timers);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn partial_and_broken_files() {
        let dir = scratch_dir("partial");
        std::fs::write(dir.join("settings.json"), r#"{"supersede_stale_timers": true}"#).unwrap();
        let loaded = Settings::load(&dir);
        assert!(loaded.supersede_stale_timers);
        assert_eq!(loaded.window_x, None);

        std::fs::write(dir.join("settings.json"), "{not json").unwrap();
        assert!(!Settings::load(&dir).supersede_stale_timers);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn env_overrides_backend() {
        let settings = Settings {
            backend_url: Some("https://file.example".to_string()),
            backend_key: Some("file-key".to_string()),
            ..Settings::default()
        };
        let (url, key) = settings.backend_with(|key| match key {
            ENV_BACKEND_URL => Some("https://env.example".to_string()),
            ENV_BACKEND_KEY => Some(String::new()),
            _ => None,
        });
        assert_eq!(url.as_deref(), Some("https://env.example"));
        assert_eq!(key.as_deref(), Some("file-key"));
        // File values are untouched
        assert_eq!(settings.backend_url.as_deref(), Some("https://file.example"));

        let (url, key) = Settings::default().backend_with(|_| None);
        assert_eq!((url, key), (None, None));
    }

    #[test]
    fn photos_dir_defaults_under_data_dir() {
        let data = Path::new("/data/Vibecoding");
        assert_eq!(
            Settings::default().photos_dir_or_default(data),
            data.join("photos")
        );
    }
}
