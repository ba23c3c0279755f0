// SPDX-License-Identifier: MPL-2.0
//! This module reads user preferences from a `settings.toml` file. The
//! application never writes the file; users edit it by hand.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[browser]` - Thumbnail and preview sizes
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. `--config-dir` or the `ICED_CAPTION_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_caption::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//!
//! if warning.is_none() {
//!     println!("language: {:?}", config.general.language);
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning shown when `settings.toml` cannot be parsed.
pub const CONFIG_LOAD_WARNING: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Image browser settings: thumbnail carousel and preview.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BrowserConfig {
    /// Width of the box thumbnails are fitted into.
    #[serde(default = "default_thumbnail_width")]
    pub thumbnail_width: u32,

    /// Height of the box thumbnails are fitted into.
    #[serde(default = "default_thumbnail_height")]
    pub thumbnail_height: u32,

    /// Height of the preview area.
    #[serde(default = "default_preview_height")]
    pub preview_height: u32,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            thumbnail_width: DEFAULT_THUMBNAIL_WIDTH,
            thumbnail_height: DEFAULT_THUMBNAIL_HEIGHT,
            preview_height: DEFAULT_PREVIEW_HEIGHT,
        }
    }
}

impl BrowserConfig {
    /// Returns a copy with every size clamped into its accepted range.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            thumbnail_width: self
                .thumbnail_width
                .clamp(MIN_THUMBNAIL_SIDE, MAX_THUMBNAIL_SIDE),
            thumbnail_height: self
                .thumbnail_height
                .clamp(MIN_THUMBNAIL_SIDE, MAX_THUMBNAIL_SIDE),
            preview_height: self
                .preview_height
                .clamp(MIN_PREVIEW_HEIGHT, MAX_PREVIEW_HEIGHT),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub browser: BrowserConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_thumbnail_width() -> u32 {
    DEFAULT_THUMBNAIL_WIDTH
}

fn default_thumbnail_height() -> u32 {
    DEFAULT_THUMBNAIL_HEIGHT
}

fn default_preview_height() -> u32 {
    DEFAULT_PREVIEW_HEIGHT
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

// =============================================================================
// Load
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). A missing file is not a
/// warning; an unreadable one yields defaults plus [`CONFIG_LOAD_WARNING`].
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
            (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()))
        }
    }
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`] if
/// it is not valid TOML for [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    const SAMPLE_TOML: &str = r#"
[general]
language = "fr"
theme_mode = "light"

[browser]
thumbnail_width = 120
thumbnail_height = 160
preview_height = 600
"#;

    fn sample_config() -> Config {
        Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            browser: BrowserConfig {
                thumbnail_width: 120,
                thumbnail_height: 160,
                preview_height: 600,
            },
        }
    }

    #[test]
    fn load_from_path_reads_every_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, SAMPLE_TOML).expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, sample_config());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[browser]\npreview_height = 500\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("partial config should load");
        assert_eq!(loaded.browser.preview_height, 500);
        assert_eq!(loaded.browser.thumbnail_width, DEFAULT_THUMBNAIL_WIDTH);
        assert_eq!(loaded.general, GeneralConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"Dark\"\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("config should load");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unknown_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"\n").expect("write file");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.browser.thumbnail_width, 90);
        assert_eq!(config.browser.thumbnail_height, 120);
        assert_eq!(config.browser.preview_height, 400);
    }

    #[test]
    fn clamped_keeps_sizes_in_range() {
        let browser = BrowserConfig {
            thumbnail_width: 0,
            thumbnail_height: 10_000,
            preview_height: 5,
        }
        .clamped();
        assert_eq!(browser.thumbnail_width, MIN_THUMBNAIL_SIDE);
        assert_eq!(browser.thumbnail_height, MAX_THUMBNAIL_SIDE);
        assert_eq!(browser.preview_height, MIN_PREVIEW_HEIGHT);
    }

    #[test]
    fn load_with_override_reads_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), SAMPLE_TOML).expect("write file");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, sample_config());
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING));
        assert_eq!(config, Config::default());
    }
}
