//! Configuration file discovery and reading.
//!
//! # File Formats
//!
//! The module supports both JSON5 and JSON formats:
//!
//! - JSON5 (`.json5`): Preferred format with comments and trailing commas
//! - JSON (`.json`): Standard JSON format
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Local: `./tasklane.json5` or `./tasklane.json`
//! 2. User: `~/.config/tasklane/config.json5` or `~/.config/tasklane/config.json`
//!
//! The log file lives in the user data directory
//! (`~/.local/share/tasklane/tasklane.log` on Linux).

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, Result};

/// Configuration file names to search for, in priority order.
const CONFIG_FILE_NAMES: &[&str] = &["tasklane.json5", "tasklane.json"];

/// Per-user directory name, under both the config and data directories.
const APP_DIR: &str = "tasklane";

/// User config file names to search for, in priority order.
const USER_CONFIG_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Log file name inside the user data directory.
const LOG_FILE_NAME: &str = "tasklane.log";

/// Finds the configuration file path.
///
/// Searches in the following order:
///
/// 1. Local directory: `./tasklane.json5`, `./tasklane.json`
/// 2. User config directory: `~/.config/tasklane/config.json5`, `~/.config/tasklane/config.json`
///
/// # Returns
///
/// Returns `Some(path)` if a config file is found, `None` otherwise.
///
/// # Examples
///
/// ```no_run
/// use tasklane_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    find_config_file_in(Path::new("."), dirs::config_dir().as_deref())
}

/// Searches `local_dir`, then `<user_config_dir>/tasklane`, for a config file.
#[must_use]
pub fn find_config_file_in(local_dir: &Path, user_config_dir: Option<&Path>) -> Option<PathBuf> {
    let local = CONFIG_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_config_dir
        .map(|dir| dir.join(APP_DIR))
        .into_iter()
        .flat_map(|dir| USER_CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)));

    let found = local.chain(user).find(|path| path.exists());
    if let Some(path) = &found {
        debug!(path = %path.display(), "found config file");
    }
    found
}

/// Returns the default log file path.
///
/// This is typically `~/.local/share/tasklane/tasklane.log` on Linux.
///
/// # Errors
///
/// Returns an error if the user data directory cannot be determined.
pub fn default_log_path() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR).join(LOG_FILE_NAME))
        .ok_or(ConfigError::NoUserDirectory("data"))
}

/// Reads and parses a configuration file.
///
/// Supports both JSON5 and JSON formats.
///
/// # Arguments
///
/// * `path` - The path to the configuration file
///
/// # Type Parameters
///
/// * `T` - The type to deserialize into (must implement `serde::Deserialize`)
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file content cannot be parsed
///
/// # Examples
///
/// ```no_run
/// use tasklane_config::persistence::read_config_file;
/// use tasklane_config::Config;
///
/// # fn main() -> tasklane_config::Result<()> {
/// let config: Config = read_config_file("tasklane.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    // JSON5 parser handles both JSON5 and JSON
    serde_json5::from_str(&content).map_err(ConfigError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Deserialize)]
    struct TestConfig {
        name: String,
        value: i32,
    }

    #[test]
    fn read_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.json");
        std::fs::write(&path, r#"{"name": "test", "value": 42}"#).unwrap();

        let config: TestConfig = read_config_file(&path).unwrap();
        assert_eq!(config.name, "test");
        assert_eq!(config.value, 42);
    }

    #[test]
    fn read_json5_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.json5");
        std::fs::write(
            &path,
            r#"
            {
                // This is a comment
                name: "test",
                value: 42,  // trailing comma
            }
            "#,
        )
        .unwrap();

        let config: TestConfig = read_config_file(&path).unwrap();
        assert_eq!(config.name, "test");
        assert_eq!(config.value, 42);
    }

    #[test]
    fn read_nonexistent_file() {
        let result: Result<TestConfig> = read_config_file("/nonexistent/path.json");
        assert!(result.is_err());
    }

    #[test]
    fn read_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("invalid.json");
        std::fs::write(&path, "not valid json").unwrap();

        let result: Result<TestConfig> = read_config_file(&path);
        assert!(result.is_err());
    }

    #[test]
    fn find_prefers_local_json5() {
        let local = TempDir::new().unwrap();
        std::fs::write(local.path().join("tasklane.json"), "{}").unwrap();
        std::fs::write(local.path().join("tasklane.json5"), "{}").unwrap();

        let found = find_config_file_in(local.path(), None).unwrap();
        assert!(found.ends_with("tasklane.json5"));
    }

    #[test]
    fn find_falls_back_to_user_dir() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        let user_dir = user.path().join(APP_DIR);
        std::fs::create_dir_all(&user_dir).unwrap();
        std::fs::write(user_dir.join("config.json"), "{}").unwrap();

        let found = find_config_file_in(local.path(), Some(user.path())).unwrap();
        assert_eq!(found, user_dir.join("config.json"));
    }

    #[test]
    fn find_nothing() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();

        assert!(find_config_file_in(local.path(), Some(user.path())).is_none());
    }

    #[test]
    fn default_log_path_ends_with_log_file() {
        if dirs::data_dir().is_some() {
            let path = default_log_path().unwrap();
            assert!(path.ends_with(Path::new(APP_DIR).join(LOG_FILE_NAME)));
        }
    }
}
