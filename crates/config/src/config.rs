//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the tasklane application.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::BoardConfig;
use crate::error::Result;
use crate::persistence::{find_config_file, read_config_file};
use crate::source::SourceConfig;

/// The main configuration struct for the tasklane application.
///
/// # Examples
///
/// ```
/// use tasklane_config::{BoardConfig, Config, DropPolicy, SourceConfig};
///
/// // Create a default config
/// let config = Config::default();
/// assert_eq!(config.board.drop_policy, DropPolicy::WriteThrough);
///
/// // Create a custom config
/// let config = Config {
///     source: SourceConfig::file("tasks.json"),
///     board: BoardConfig {
///         drop_policy: DropPolicy::MirrorOnly,
///     },
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where tasks are loaded from.
    #[serde(default)]
    pub source: SourceConfig,

    /// Board behaviour.
    #[serde(default)]
    pub board: BoardConfig,
}

impl Config {
    /// Creates a new default configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./tasklane.json5` or `./tasklane.json`
    /// 2. User: `~/.config/tasklane/config.json5` or `~/.config/tasklane/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tasklane_config::Config;
    ///
    /// # fn example() -> tasklane_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("Loading from {:?}", config.source.kind);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: Config = read_config_file(path)?;
        config.validate()?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the source settings are invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use tasklane_config::{Config, SourceConfig};
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.source = SourceConfig::mock().with_timeout_secs(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.source.validate()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use super::*;
    use crate::board::DropPolicy;
    use crate::source::SourceKind;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.source.kind, SourceKind::Mock);
        assert_eq!(config.board.drop_policy, DropPolicy::WriteThrough);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn new_config() {
        assert_eq!(Config::new(), Config::default());
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn deserialize_partial() {
        let json = r#"{"board": {"drop_policy": "mirror_only"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.board.drop_policy, DropPolicy::MirrorOnly);
        assert_eq!(config.source, SourceConfig::default());
    }

    #[test]
    fn load_from_json5_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(
            &path,
            r#"
            {
                // Read tasks from disk
                source: { kind: "file", path: "board.json", delay_ms: 250 },
                board: { drop_policy: "mirror_only" },
            }
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.source.kind, SourceKind::File);
        assert_eq!(config.source.path, Some(PathBuf::from("board.json")));
        assert_eq!(config.source.delay(), Duration::from_millis(250));
        assert_eq!(config.board.drop_policy, DropPolicy::MirrorOnly);
    }

    #[test]
    fn load_from_rejects_invalid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(&path, r#"{ source: { kind: "file" } }"#).unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
