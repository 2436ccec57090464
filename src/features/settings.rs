//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Which drag direction moves the deck backwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    /// Dragging down returns to the previous recipe, dragging up advances
    #[default]
    Natural,
    /// Dragging up returns to the previous recipe, dragging down advances
    Inverted,
}

impl std::fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwipeDirection::Natural => write!(f, "natural"),
            SwipeDirection::Inverted => write!(f, "inverted"),
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Swipe gesture tuning
    #[serde(default)]
    pub swipe: SwipeSettings,
    /// Where recipe content and images come from
    #[serde(default)]
    pub content: ContentSettings,
    /// Initial window geometry
    #[serde(default)]
    pub window: WindowSettings,
}

/// Display and interface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Dark chrome (dialogs, scrollbars)
    pub dark_mode: bool,
    /// Application language
    pub language: String,
    /// Power saving mode - cards snap instead of animating
    pub power_saving_mode: bool,
}

/// Swipe gesture tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeSettings {
    /// Raw drag distance is divided by this before it becomes the card offset
    #[serde(default = "default_damping")]
    pub damping: f32,
    /// Damped offset a release must exceed to change recipe
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    /// Offset applied right after a recipe change (degrees of wheel rotation)
    #[serde(default = "default_sentinel_offset")]
    pub sentinel_offset: f32,
    /// Delay before the wheel settles back after a recipe change
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    /// Pointer travel before a press turns into a drag
    #[serde(default = "default_min_drag_distance")]
    pub min_drag_distance: f32,
    /// Sign convention for swipes
    #[serde(default)]
    pub direction: SwipeDirection,
}

fn default_damping() -> f32 {
    3.0
}

fn default_threshold() -> f32 {
    20.0
}

fn default_sentinel_offset() -> f32 {
    360.0
}

fn default_settle_delay_ms() -> u64 {
    700
}

fn default_min_drag_distance() -> f32 {
    10.0
}

impl SwipeSettings {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

/// Content source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSettings {
    /// Optional recipes file replacing the bundled deck
    #[serde(default)]
    pub recipes_path: Option<String>,
    /// Directory holding `images/<name>.png`
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
}

fn default_assets_dir() -> String {
    "assets".to_string()
}

/// Window settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            language: "en".to_string(),
            power_saving_mode: false,
        }
    }
}

impl Default for SwipeSettings {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            threshold: default_threshold(),
            sentinel_offset: default_sentinel_offset(),
            settle_delay_ms: default_settle_delay_ms(),
            min_drag_distance: default_min_drag_distance(),
            direction: SwipeDirection::Natural,
        }
    }
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            recipes_path: None,
            assets_dir: default_assets_dir(),
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        // Phone-like portrait window
        Self {
            width: 430.0,
            height: 860.0,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "cooking-quest", "CookingQuest")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from the default file, or return defaults
    pub fn load() -> Self {
        Self::file_path()
            .map(|path| Self::load_or_init(&path))
            .unwrap_or_default()
    }

    /// Load settings from `path`. A missing file is created with the
    /// defaults; an unreadable one is left untouched and defaults are used.
    pub fn load_or_init(path: &Path) -> Self {
        if !path.exists() {
            let settings = Self::default();
            match settings.save_to_file(path) {
                Ok(()) => tracing::info!("Wrote default settings to {:?}", path),
                Err(e) => tracing::warn!("Could not write default settings: {}", e),
            }
            return settings;
        }

        match Self::load_from_file(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring settings at {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
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
            .join(format!("cooking-quest-{}-{}", name, std::process::id()))
            .join("settings.json")
    }

    #[test]
    fn test_default_swipe_tuning() {
        let swipe = SwipeSettings::default();
        assert_eq!(swipe.damping, 3.0);
        assert_eq!(swipe.threshold, 20.0);
        assert_eq!(swipe.sentinel_offset, 360.0);
        assert_eq!(swipe.settle_delay(), Duration::from_millis(700));
        assert_eq!(swipe.direction, SwipeDirection::Natural);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_settings_path("roundtrip");
        let mut settings = Settings::default();
        settings.swipe.direction = SwipeDirection::Inverted;
        settings.display.language = "zh".to_string();

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();

        assert_eq!(loaded.swipe.direction, SwipeDirection::Inverted);
        assert_eq!(loaded.display.language, "zh");
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "swipe": { "threshold": 30.0 } }"#).unwrap();
        assert_eq!(settings.swipe.threshold, 30.0);
        assert_eq!(settings.swipe.damping, 3.0);
        assert_eq!(settings.content.assets_dir, "assets");
        assert_eq!(settings.window.width, 430.0);

        let settings: Settings = serde_json::from_str(
            r#"{ "display": { "power_saving_mode": true }, "swipe": { "threshold": 30.0 } }"#,
        )
        .unwrap();
        assert!(settings.display.power_saving_mode);
        assert!(settings.display.dark_mode);
        assert_eq!(settings.display.language, "en");
        assert_eq!(settings.swipe.threshold, 30.0);

        let settings: Settings =
            serde_json::from_str(r#"{ "window": { "width": 500.0 } }"#).unwrap();
        assert_eq!(settings.window.width, 500.0);
        assert_eq!(settings.window.height, 860.0);

        let settings: Settings =
            serde_json::from_str(r#"{ "content": { "recipes_path": "mine.json" } }"#).unwrap();
        assert_eq!(settings.content.recipes_path.as_deref(), Some("mine.json"));
        assert_eq!(settings.content.assets_dir, "assets");
    }

    #[test]
    fn test_load_or_init_creates_missing_file() {
        let path = temp_settings_path("init");
        let settings = Settings::load_or_init(&path);
        assert_eq!(settings.swipe.threshold, 20.0);

        let written = Settings::load_from_file(&path).unwrap();
        assert_eq!(written.window.width, settings.window.width);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_or_init_keeps_unreadable_file() {
        let path = temp_settings_path("broken");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        let broken = r#"{ "swipe": { "threshold": "steep" } }"#;
        std::fs::write(&path, broken).unwrap();

        let settings = Settings::load_or_init(&path);
        assert_eq!(settings.swipe.threshold, 20.0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), broken);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = temp_settings_path("missing");
        match Settings::load_from_file(&path) {
            Err(SettingsError::Io(_)) => {}
            other => panic!("expected io error, got {:?}", other),
        }
    }
}
