use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub font: FontConfig,
    pub navigation: NavigationConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Font and text rendering configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct FontConfig {
    /// Size of the main interface font (in points)
    pub font_size: f32,
}

/// Pane navigation behavior
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct NavigationConfig {
    /// Directory both panes open in; the home directory when unset
    pub start_dir: Option<PathBuf>,
    /// Show hidden files by default
    pub show_hidden: bool,
    /// Idle time after which type-ahead starts a new query (milliseconds)
    pub type_ahead_timeout_ms: u64,
    /// Reload a pane when its directory changes on disk
    pub watch_directories: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: "dark".to_string(),
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self { font_size: 14.0 }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            start_dir: None,
            show_hidden: false,
            type_ahead_timeout_ms: 1000,
            watch_directories: true,
        }
    }
}

impl NavigationConfig {
    pub fn type_ahead_window(&self) -> Duration {
        Duration::from_millis(self.type_ahead_timeout_ms)
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "twinpane")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or return defaults if it is missing or
    /// invalid
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), "{e}; using default configuration");
                Config::default()
            }
        }
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<(), ConfigError> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                Config::default().save()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.font.font_size, 14.0);
        assert!(!config.navigation.show_hidden);
        assert_eq!(
            config.navigation.type_ahead_window(),
            Duration::from_millis(1000)
        );
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.navigation.start_dir = Some(PathBuf::from("/srv"));
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config.theme.mode, deserialized.theme.mode);
        assert_eq!(deserialized.navigation.start_dir, Some(PathBuf::from("/srv")));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[navigation]\nshow_hidden = true\n")
            .expect("Failed to parse");
        assert!(config.navigation.show_hidden);
        assert_eq!(config.navigation.type_ahead_timeout_ms, 1000);
        assert_eq!(config.theme.mode, "dark");
    }
}
