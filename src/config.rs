//! Configuration file support for scrollchrome.
//!
//! A [`ChromeConfig`] describes one scrollable control: theme, size, which
//! chrome parts show, the scroll models and the click-repeat timings.

use std::path::Path;
use std::time::Duration;

use scrollchrome_ui::constants::{
    DEFAULT_BORDER_WIDTH, DEFAULT_MIN_REPEAT_INTERVAL, DEFAULT_REPEAT_INTERVAL,
};
use scrollchrome_ui::{
    KnownTheme, ScrollActivityConfig, ScrollMethodKind, ScrollPosition, ThemeError,
};
use serde::{Deserialize, Serialize};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get the display name for this log level.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Scroll models of both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollConfig {
    #[serde(default = "default_scroll_position")]
    pub vertical: ScrollPosition,
    #[serde(default = "default_scroll_position")]
    pub horizontal: ScrollPosition,
}

fn default_scroll_position() -> ScrollPosition {
    ScrollPosition::new(100, 25, 0)
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            vertical: default_scroll_position(),
            horizontal: default_scroll_position(),
        }
    }
}

/// Configuration of one scrollable control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChromeConfig {
    /// Version of the configuration file format
    pub version: u32,

    #[serde(default)]
    pub theme: KnownTheme,

    /// Resolves the `*Auto` themes
    #[serde(default = "default_true")]
    pub dark: bool,

    #[serde(default = "default_scale_factor")]
    pub scale_factor: f32,

    /// Control width in dips
    #[serde(default = "default_width")]
    pub width: f32,

    /// Control height in dips
    #[serde(default = "default_height")]
    pub height: f32,

    #[serde(default = "default_border_width")]
    pub border_width: f32,

    #[serde(default = "default_true")]
    pub show_vertical: bool,

    #[serde(default = "default_true")]
    pub show_horizontal: bool,

    #[serde(default = "default_true")]
    pub show_corner: bool,

    #[serde(default)]
    pub scroll: ScrollConfig,

    /// Repeat clock period
    #[serde(default = "default_repeat_interval_ms")]
    pub repeat_interval_ms: u64,

    /// Shortest gap between two executed repeat commands
    #[serde(default = "default_min_repeat_interval_ms")]
    pub min_repeat_interval_ms: u64,

    #[serde(default = "default_true")]
    pub send_scroll_to_control: bool,

    /// Unset follows the process-wide default method
    #[serde(default)]
    pub scroll_method: Option<ScrollMethodKind>,

    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_true() -> bool {
    true
}

fn default_scale_factor() -> f32 {
    1.0
}

fn default_width() -> f32 {
    200.0
}

fn default_height() -> f32 {
    150.0
}

fn default_border_width() -> f32 {
    DEFAULT_BORDER_WIDTH
}

fn default_repeat_interval_ms() -> u64 {
    DEFAULT_REPEAT_INTERVAL.as_millis() as u64
}

fn default_min_repeat_interval_ms() -> u64 {
    DEFAULT_MIN_REPEAT_INTERVAL.as_millis() as u64
}

impl ChromeConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            theme: KnownTheme::default(),
            dark: default_true(),
            scale_factor: default_scale_factor(),
            width: default_width(),
            height: default_height(),
            border_width: default_border_width(),
            show_vertical: true,
            show_horizontal: true,
            show_corner: true,
            scroll: ScrollConfig::default(),
            repeat_interval_ms: default_repeat_interval_ms(),
            min_repeat_interval_ms: default_min_repeat_interval_ms(),
            send_scroll_to_control: true,
            scroll_method: None,
            log_level: LogLevel::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: config.version,
                expected: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Replace the theme with one named in text.
    pub fn set_theme_name(&mut self, name: &str) -> Result<(), ConfigError> {
        self.theme = name.parse()?;
        Ok(())
    }

    pub fn repeat_interval(&self) -> Duration {
        Duration::from_millis(self.repeat_interval_ms)
    }

    /// Controller settings derived from this configuration.
    pub fn activity_config(&self) -> ScrollActivityConfig {
        ScrollActivityConfig {
            min_repeat_interval: Duration::from_millis(self.min_repeat_interval_ms),
            send_scroll_to_control: self.send_scroll_to_control,
            scroll_method: self.scroll_method,
            ..ScrollActivityConfig::default()
        }
    }

    /// Surface size in whole pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        let scale = scrollchrome_ui::sanitize_scale(self.scale_factor);
        let px = |dips: f32| (dips.max(0.0) * scale).round() as u32;
        (px(self.width), px(self.height))
    }
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration or writing snapshots.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error("Configuration file version {found} is newer than supported version {expected}")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Invalid theme: {0}")]
    Theme(#[from] ThemeError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips() {
        let config = ChromeConfig::default();
        let json = config.to_json().unwrap();
        let parsed = ChromeConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed = ChromeConfig::from_json(r#"{"version": 1, "theme": "WindowsDark"}"#).unwrap();
        assert_eq!(parsed.theme, KnownTheme::WindowsDark);
        assert!(parsed.show_corner);
        assert_eq!(parsed.repeat_interval_ms, 50);
        assert_eq!(parsed.scroll.vertical.small_change, 1);
        assert_eq!(parsed.log_level, LogLevel::Info);
    }

    #[test]
    fn test_newer_version_rejected() {
        let result = ChromeConfig::from_json(r#"{"version": 99}"#);
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedVersion {
                found: 99,
                expected: CONFIG_VERSION
            })
        ));
    }

    #[test]
    fn test_log_level_lowercase() {
        let parsed = ChromeConfig::from_json(r#"{"version": 1, "log_level": "trace"}"#).unwrap();
        assert_eq!(parsed.log_level.to_level_filter(), log::LevelFilter::Trace);
    }

    #[test]
    fn test_scroll_method_reaches_activity() {
        let parsed = ChromeConfig::from_json(
            r#"{"version": 1, "scroll_method": "delta_while_pressed"}"#,
        )
        .unwrap();
        assert_eq!(
            parsed.activity_config().scroll_method,
            Some(ScrollMethodKind::DeltaWhilePressed)
        );
        assert_eq!(ChromeConfig::default().activity_config().scroll_method, None);
    }

    #[test]
    fn test_theme_name() {
        let mut config = ChromeConfig::default();
        config.set_theme_name("visualstudiolight").unwrap();
        assert_eq!(config.theme, KnownTheme::VisualStudioLight);
        assert!(matches!(
            config.set_theme_name("neon"),
            Err(ConfigError::Theme(ThemeError::UnknownTheme(_)))
        ));
    }

    #[test]
    fn test_pixel_size_scaled() {
        let config = ChromeConfig {
            scale_factor: 1.5,
            width: 100.0,
            height: 50.0,
            ..ChromeConfig::default()
        };
        assert_eq!(config.pixel_size(), (150, 75));
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "scrollchrome-config-test-{}.json",
            std::process::id()
        ));
        let config = ChromeConfig {
            theme: KnownTheme::MauiLight,
            dark: false,
            ..ChromeConfig::default()
        };
        config.save_to_file(&path).unwrap();
        let loaded = ChromeConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }
}
