//! Task sources.
//!
//! A [`TaskSource`] produces raw task records asynchronously. Keys are not
//! part of the source's answer; they are assigned by
//! [`prepare_tasks`](crate::loader::prepare_tasks).

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tasklane_protocol::RawTask;
use tasklane_protocol::dummy::sample_tasks;
use tracing::debug;

use crate::error::SourceError;

/// Default delay applied by the mock source before answering.
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(1000);

/// Something that can fetch the raw task collection.
pub trait TaskSource: Send + Sync {
    /// Fetches all tasks, in source order.
    fn fetch(&self) -> impl Future<Output = Result<Vec<RawTask>, SourceError>> + Send;
}

/// The document shape shared by the mock answer and task files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDocument {
    /// The task records.
    pub tasks: Vec<RawTask>,
}

/// A source that answers with a fixed collection after a delay. Never fails.
#[derive(Debug, Clone)]
pub struct MockTaskSource {
    delay: Duration,
    tasks: Vec<RawTask>,
}

impl Default for MockTaskSource {
    fn default() -> Self {
        Self {
            delay: DEFAULT_MOCK_DELAY,
            tasks: sample_tasks(),
        }
    }
}

impl MockTaskSource {
    /// Creates a mock source serving the sample tasks with the default delay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the delay.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Replaces the served collection.
    #[must_use]
    pub fn with_tasks(mut self, tasks: Vec<RawTask>) -> Self {
        self.tasks = tasks;
        self
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl TaskSource for MockTaskSource {
    async fn fetch(&self) -> Result<Vec<RawTask>, SourceError> {
        tokio::time::sleep(self.delay).await;
        debug!(count = self.tasks.len(), "mock source answered");
        Ok(self.tasks.clone())
    }
}

/// A source that reads a `{ "tasks": [...] }` JSON document from disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    delay: Duration,
}

impl JsonFileSource {
    /// Creates a file source with no delay.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delay: Duration::ZERO,
        }
    }

    /// Waits `delay` before each read.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskSource for JsonFileSource {
    async fn fetch(&self) -> Result<Vec<RawTask>, SourceError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let contents =
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|source| SourceError::Read {
                    path: self.path.clone(),
                    source,
                })?;

        let document: TaskDocument =
            serde_json::from_str(&contents).map_err(|source| SourceError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), count = document.tasks.len(), "read task file");
        Ok(document.tasks)
    }
}

/// A source chosen at runtime from configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    /// The built-in mock.
    Mock(MockTaskSource),
    /// A JSON task file.
    File(JsonFileSource),
}

impl TaskSource for ConfiguredSource {
    async fn fetch(&self) -> Result<Vec<RawTask>, SourceError> {
        match self {
            Self::Mock(source) => source.fetch().await,
            Self::File(source) => source.fetch().await,
        }
    }
}

impl From<MockTaskSource> for ConfiguredSource {
    fn from(source: MockTaskSource) -> Self {
        Self::Mock(source)
    }
}

impl From<JsonFileSource> for ConfiguredSource {
    fn from(source: JsonFileSource) -> Self {
        Self::File(source)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tasklane_protocol::TaskStatus;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn mock_source_waits_for_its_delay() {
        let source = MockTaskSource::new();
        let started = tokio::time::Instant::now();

        let tasks = source.fetch().await.expect("mock never fails");

        assert!(started.elapsed() >= DEFAULT_MOCK_DELAY);
        assert_eq!(tasks, sample_tasks());
    }

    #[tokio::test(start_paused = true)]
    async fn mock_source_serves_custom_tasks() {
        let source = MockTaskSource::new()
            .with_delay(Duration::from_millis(5))
            .with_tasks(vec![RawTask::new("A", TaskStatus::Done)]);

        let tasks = source.fetch().await.expect("mock never fails");

        assert_eq!(tasks, vec![RawTask::new("A", TaskStatus::Done)]);
    }

    #[tokio::test]
    async fn file_source_reads_document() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"tasks":[{{"title":"A","status":"todo"}},{{"title":"B","status":"done"}}]}}"#
        )
        .expect("write");

        let tasks = JsonFileSource::new(file.path())
            .fetch()
            .await
            .expect("valid document");

        assert_eq!(
            tasks,
            vec![
                RawTask::new("A", TaskStatus::Todo),
                RawTask::new("B", TaskStatus::Done),
            ]
        );
    }

    #[tokio::test]
    async fn file_source_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing.json");

        let err = JsonFileSource::new(&path).fetch().await.unwrap_err();

        assert!(matches!(err, SourceError::Read { .. }));
    }

    #[tokio::test]
    async fn file_source_invalid_document() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"tasks":[{{"title":"A","status":"later"}}]}}"#).expect("write");

        let err = JsonFileSource::new(file.path()).fetch().await.unwrap_err();

        assert!(matches!(err, SourceError::Parse { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn configured_source_dispatches() {
        let source = ConfiguredSource::from(MockTaskSource::new().with_delay(Duration::ZERO));

        let tasks = source.fetch().await.expect("mock never fails");

        assert_eq!(tasks.len(), sample_tasks().len());
    }
}
