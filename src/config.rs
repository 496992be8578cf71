//! Configuration management for crimicam
//!
//! Handles loading, saving, and default configuration values.
//! Config file location: ~/.config/crimicam/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeName,
    pub navigation: NavigationOptions,
    pub logging: LoggingOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeName::Dark,
            navigation: NavigationOptions::default(),
            logging: LoggingOptions::default(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("crimicam");
        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, or create default if not exists
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid config TOML")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Fade duration for screen changes, `None` when transitions are off
    pub fn transition_ms(&self) -> Option<u64> {
        if self.navigation.transitions && self.navigation.transition_ms > 0 {
            Some(self.navigation.transition_ms)
        } else {
            None
        }
    }
}

/// Available theme names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
    Transparent,
}

impl ThemeName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Dark => "Dark",
            ThemeName::Light => "Light",
            ThemeName::Transparent => "Transparent",
        }
    }

    /// Parse a theme name given on the command line
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg.to_ascii_lowercase().as_str() {
            "dark" => Some(ThemeName::Dark),
            "light" => Some(ThemeName::Light),
            "transparent" => Some(ThemeName::Transparent),
            _ => None,
        }
    }
}

/// Screen transition settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationOptions {
    pub transitions: bool,
    pub transition_ms: u64,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            transitions: true,
            transition_ms: 200,
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingOptions {
    /// Filter directive, e.g. "info" or "crimicam=debug"
    pub level: String,
    /// Log file; defaults to the platform data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, ThemeName::Dark);
        assert!(config.navigation.transitions);
        assert_eq!(config.transition_ms(), Some(200));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config =
            Config::parse("theme = \"light\"\n[navigation]\ntransitions = false\n").unwrap();
        assert_eq!(config.theme, ThemeName::Light);
        assert_eq!(config.transition_ms(), None);
        assert_eq!(config.navigation.transition_ms, 200);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let mut config = Config::default();
        config.theme = ThemeName::Transparent;
        config.navigation.transition_ms = 350;

        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::parse(&text).unwrap(), config);
    }

    #[test]
    fn test_unknown_sections_ignored() {
        let config = Config::parse("[home]\nactivity_count = 30000\n").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_theme_rejected() {
        assert!(Config::parse("theme = \"neon\"").is_err());
    }

    #[test]
    fn test_theme_from_arg() {
        assert_eq!(ThemeName::from_arg("LIGHT"), Some(ThemeName::Light));
        assert_eq!(ThemeName::from_arg("neon"), None);
    }
}
