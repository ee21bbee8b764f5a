//! Task source configuration.
//!
//! This module provides the [`SourceConfig`] type which selects where tasks
//! are loaded from and how long a load may take.
//!
//! # Delays
//!
//! The mock source simulates a slow backend; its delay defaults to
//! [`DEFAULT_MOCK_DELAY_MS`]. File sources answer immediately unless a delay
//! is configured.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default mock source delay (1 second).
pub const DEFAULT_MOCK_DELAY_MS: u64 = 1000;

/// Default load timeout (10 seconds).
pub const DEFAULT_TIMEOUT_SECS: u32 = 10;

/// Maximum allowed source delay (1 minute).
pub const MAX_DELAY_MS: u64 = 60_000;

/// Minimum allowed load timeout (1 second).
pub const MIN_TIMEOUT_SECS: u32 = 1;

/// Maximum allowed load timeout (5 minutes).
pub const MAX_TIMEOUT_SECS: u32 = 300;

/// Which kind of task source to load from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// The built-in mock backend.
    #[default]
    Mock,
    /// A JSON file containing `{ "tasks": [...] }`.
    File,
}

/// Configuration for the task source.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tasklane_config::{SourceConfig, SourceKind};
///
/// // Default configuration
/// let config = SourceConfig::default();
/// assert_eq!(config.kind, SourceKind::Mock);
/// assert_eq!(config.delay(), Duration::from_millis(1000));
///
/// // File source
/// let config = SourceConfig::file("tasks.json");
/// assert_eq!(config.delay(), Duration::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// The kind of source.
    #[serde(default)]
    pub kind: SourceKind,

    /// Path of the task file. Required when `kind` is `file`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Delay before the source answers, in milliseconds.
    ///
    /// Defaults to 1000 for the mock source and 0 for files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,

    /// How long a load may take before it is abandoned, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u32>,
}

impl SourceConfig {
    /// Creates a mock source configuration with the default delay.
    #[must_use]
    pub fn mock() -> Self {
        Self::default()
    }

    /// Creates a file source configuration.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: SourceKind::File,
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Sets the delay in milliseconds.
    #[must_use]
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = Some(delay_ms);
        self
    }

    /// Sets the load timeout in seconds.
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u32) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Returns the effective delay for this source kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use tasklane_config::SourceConfig;
    ///
    /// let config = SourceConfig::mock().with_delay_ms(250);
    /// assert_eq!(config.delay(), Duration::from_millis(250));
    /// ```
    #[must_use]
    pub fn delay(&self) -> Duration {
        let default = match self.kind {
            SourceKind::Mock => DEFAULT_MOCK_DELAY_MS,
            SourceKind::File => 0,
        };
        Duration::from_millis(self.delay_ms.unwrap_or(default))
    }

    /// Returns the effective load timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(
            self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        ))
    }

    /// Validates the source configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the delay or timeout is out of range, or if a
    /// file source has no path.
    pub fn validate(&self) -> Result<()> {
        if let Some(delay_ms) = self.delay_ms.filter(|d| *d > MAX_DELAY_MS) {
            return Err(ConfigError::InvalidSource {
                reason: format!("delay {delay_ms} ms exceeds maximum of {MAX_DELAY_MS} ms"),
            });
        }

        if let Some(timeout) = self.timeout_secs
            && !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&timeout)
        {
            return Err(ConfigError::InvalidSource {
                reason: format!(
                    "timeout {timeout} is outside {MIN_TIMEOUT_SECS}..={MAX_TIMEOUT_SECS} seconds"
                ),
            });
        }

        if self.kind == SourceKind::File
            && self
                .path
                .as_ref()
                .is_none_or(|p| p.as_os_str().is_empty())
        {
            return Err(ConfigError::InvalidSource {
                reason: "file source requires a non-empty path".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SourceConfig::default();
        assert_eq!(config.kind, SourceKind::Mock);
        assert_eq!(config.delay(), Duration::from_millis(DEFAULT_MOCK_DELAY_MS));
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn file_source_defaults_to_no_delay() {
        let config = SourceConfig::file("tasks.json");
        assert_eq!(config.delay(), Duration::ZERO);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn explicit_delay_wins() {
        let config = SourceConfig::file("tasks.json").with_delay_ms(300);
        assert_eq!(config.delay(), Duration::from_millis(300));
    }

    #[test]
    fn validate_delay_above_maximum() {
        let config = SourceConfig::mock().with_delay_ms(MAX_DELAY_MS + 1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_timeout_bounds() {
        assert!(SourceConfig::mock().with_timeout_secs(0).validate().is_err());
        assert!(SourceConfig::mock().with_timeout_secs(301).validate().is_err());
        assert!(
            SourceConfig::mock()
                .with_timeout_secs(MIN_TIMEOUT_SECS)
                .validate()
                .is_ok()
        );
        assert!(
            SourceConfig::mock()
                .with_timeout_secs(MAX_TIMEOUT_SECS)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn validate_file_without_path() {
        let config = SourceConfig {
            kind: SourceKind::File,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SourceConfig::file("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: SourceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SourceConfig::default());
    }

    #[test]
    fn deserialize_file_source() {
        let json = r#"{"kind": "file", "path": "tasks.json", "timeout_secs": 3}"#;
        let config: SourceConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.kind, SourceKind::File);
        assert_eq!(config.path, Some(PathBuf::from("tasks.json")));
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn unset_fields_not_serialized() {
        let json = serde_json::to_string(&SourceConfig::default()).unwrap();
        assert_eq!(json, r#"{"kind":"mock"}"#);
    }
}
