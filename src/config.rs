//! TOML configuration file support for the dashboard.
//!
//! A config file is never required; every setting has a working default and
//! CLI flags take precedence over file values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::Tab;

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading the file
    Io(std::io::Error),
    /// TOML parsing error
    Parse(toml::de::Error),
    /// Unknown tab name in `ui.start_tab`
    UnknownTab(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "TOML parse error: {}", e),
            Self::UnknownTab(s) => write!(f, "Unknown tab: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

/// Root configuration structure for TOML files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// UI settings
    pub ui: UiConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// UI settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tab shown on startup (palette, elements, cultural, typography)
    pub start_tab: Option<String>,
}

/// Logging settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file path
    pub file: Option<PathBuf>,
    /// Log level filter (error, warn, info, debug, trace)
    pub level: Option<String>,
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve `ui.start_tab` to a [`Tab`], if set.
    pub fn start_tab(&self) -> Result<Option<Tab>, ConfigError> {
        let Some(ref name) = self.ui.start_tab else {
            return Ok(None);
        };
        match name.to_ascii_lowercase().as_str() {
            "palette" | "paleta" => Ok(Some(Tab::Palette)),
            "elements" | "elementos" => Ok(Some(Tab::Elements)),
            "cultural" => Ok(Some(Tab::Cultural)),
            "typography" | "tipografia" => Ok(Some(Tab::Typography)),
            other => Err(ConfigError::UnknownTab(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: DashboardConfig = toml::from_str("").unwrap();
        assert!(config.ui.start_tab.is_none());
        assert!(config.logging.file.is_none());
        assert!(config.start_tab().unwrap().is_none());
    }

    #[test]
    fn full_config_parses() {
        let config: DashboardConfig = toml::from_str(
            r#"
            [ui]
            start_tab = "cultural"

            [logging]
            file = "dash.log"
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.start_tab().unwrap(), Some(Tab::Cultural));
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
    }

    #[test]
    fn start_tab_accepts_spanish_names() {
        let config: DashboardConfig = toml::from_str("ui.start_tab = \"tipografia\"").unwrap();
        assert_eq!(config.start_tab().unwrap(), Some(Tab::Typography));
    }

    #[test]
    fn unknown_start_tab_is_an_error() {
        let config: DashboardConfig = toml::from_str("ui.start_tab = \"summary\"").unwrap();
        assert!(matches!(
            config.start_tab(),
            Err(ConfigError::UnknownTab(_))
        ));
    }
}
