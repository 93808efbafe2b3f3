//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_BASE_URL;
use crate::i18n::Language;

/// Which view the main window shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Animation gallery
    #[default]
    Animation,
    /// Music-reactive visuals, configured on the device itself
    Music,
}

impl DisplayMode {
    pub fn all() -> &'static [DisplayMode] {
        &[DisplayMode::Animation, DisplayMode::Music]
    }
}

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Connection to the matrix
    pub api: ApiSettings,
    /// Display and interface settings
    pub display: DisplaySettings,
    /// Mode selected when the window was last used
    pub last_mode: DisplayMode,
}

/// Matrix API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base address every API path is appended to
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

/// Display and interface settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
    /// Application language
    pub language: Language,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            language: Language::English,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "matrix-panel", "MatrixPanel")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| match Self::load_from_file(&path) {
                Ok(settings) => Some(settings),
                Err(SettingsError::Io(_)) => None,
                Err(e) => {
                    tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("matrix-panel-test-{}-{}", name, std::process::id()))
            .join("settings.json")
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, "http://matrix/api");
        assert_eq!(settings.api.timeout_secs, 30);
        assert!(!settings.display.dark_mode);
        assert_eq!(settings.display.language, Language::English);
        assert_eq!(settings.last_mode, DisplayMode::Animation);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"api":{"base_url":"http://10.0.0.7/api"},"last_mode":"music"}"#)
                .unwrap();
        assert_eq!(settings.api.base_url, "http://10.0.0.7/api");
        assert_eq!(settings.api.timeout_secs, 30);
        assert_eq!(settings.display, DisplaySettings::default());
        assert_eq!(settings.last_mode, DisplayMode::Music);
    }

    #[test]
    fn test_language_codes() {
        let display: DisplaySettings =
            serde_json::from_str(r#"{"dark_mode":true,"language":"de"}"#).unwrap();
        assert!(display.dark_mode);
        assert_eq!(display.language, Language::German);

        let json = serde_json::to_string(&DisplaySettings::default()).unwrap();
        assert!(json.contains(r#""language":"en""#));
    }

    #[test]
    fn test_save_and_load_file() {
        let path = temp_settings_path("roundtrip");
        let mut settings = Settings::default();
        settings.display.language = Language::German;
        settings.last_mode = DisplayMode::Music;

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_errors() {
        let missing = temp_settings_path("missing");
        assert!(matches!(
            Settings::load_from_file(&missing),
            Err(SettingsError::Io(_))
        ));

        let broken = temp_settings_path("broken");
        std::fs::create_dir_all(broken.parent().unwrap()).unwrap();
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(
            Settings::load_from_file(&broken),
            Err(SettingsError::Parse(_))
        ));
        let _ = std::fs::remove_dir_all(broken.parent().unwrap());
    }
}
