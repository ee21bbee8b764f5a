//! Error types for task sources and loads.

use std::path::PathBuf;
use std::time::Duration;

/// Errors reported by a [`TaskSource`](crate::source::TaskSource).
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Failed to read a task file.
    #[error("failed to read task file at {path}: {source}")]
    Read {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A task file did not contain a valid task document.
    #[error("failed to parse task file at {path}: {source}")]
    Parse {
        /// The path that could not be parsed.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The source could not produce tasks for another reason.
    #[error("task source unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can end a load.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source did not answer within the configured timeout.
    #[error("loading tasks timed out after {} ms", .0.as_millis())]
    TimedOut(Duration),

    /// The source failed.
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// A specialized Result type for load operations.
pub type Result<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_timed_out() {
        let err = LoadError::TimedOut(Duration::from_millis(1500));
        assert_eq!(err.to_string(), "loading tasks timed out after 1500 ms");
    }

    #[test]
    fn error_display_source_is_transparent() {
        let err = LoadError::from(SourceError::Unavailable("backend down".to_string()));
        assert_eq!(err.to_string(), "task source unavailable: backend down");
    }

    #[test]
    fn error_display_read() {
        let err = SourceError::Read {
            path: PathBuf::from("/tmp/tasks.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/tmp/tasks.json"));
    }
}
