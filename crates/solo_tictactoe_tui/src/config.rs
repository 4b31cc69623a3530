//! Client configuration loaded from TOML.

use crate::Locale;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Configuration for the terminal client.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Seed for the opponent; `None` draws one from the OS.
    #[serde(default)]
    seed: Option<u64>,

    /// Language of the on-screen text.
    #[serde(default)]
    locale: Locale,

    /// File receiving the trace output (the terminal belongs to the UI).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            locale: Locale::default(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(seed = ?config.seed, locale = %config.locale, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads the given file, or the default file when it exists, or defaults.
    ///
    /// An explicitly requested file must exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces settings with the ones given on the command line.
    pub fn with_overrides(
        mut self,
        seed: Option<u64>,
        locale: Option<Locale>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(locale) = locale {
            self.locale = locale;
        }
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
    }

    #[test]
    fn test_full_toml() {
        let config = AppConfig::from_toml(
            r#"
            seed = 42
            locale = "ru"
            log_file = "game.log"
            "#,
        )
        .unwrap();
        assert_eq!(config.seed(), &Some(42));
        assert_eq!(config.locale(), &Locale::Ru);
        assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    }

    #[test]
    fn test_unknown_locale_rejected() {
        let err = AppConfig::from_toml(r#"locale = "de""#).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(AppConfig::from_toml("difficulty = 3").is_err());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_toml("seed = 1").unwrap().with_overrides(
            None,
            Some(Locale::Ru),
            Some(PathBuf::from("other.log")),
        );
        assert_eq!(config.seed(), &Some(1));
        assert_eq!(config.locale(), &Locale::Ru);
        assert_eq!(config.log_file(), &PathBuf::from("other.log"));

        let config = config.with_overrides(Some(7), None, None);
        assert_eq!(config.seed(), &Some(7));
    }
}
