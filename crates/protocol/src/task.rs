//! Task-related types for the board.
//!
//! This module defines the task record, its key and status, and the raw
//! record shape delivered by task sources before keys are assigned.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a task.
///
/// Keys are assigned at load time from the task's position in the fetched
/// collection (`task0`, `task1`, ...), so they are unique within one load but
/// not stable across reloads.
///
/// # Examples
///
/// ```
/// use tasklane_protocol::TaskKey;
///
/// let key = TaskKey::from_index(3);
/// assert_eq!(key.as_str(), "task3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskKey(String);

impl TaskKey {
    /// Creates a key from an arbitrary string.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Creates the positional key `task<index>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tasklane_protocol::TaskKey;
    ///
    /// assert_eq!(TaskKey::from_index(0), TaskKey::new("task0"));
    /// ```
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self(format!("task{index}"))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Whether a task still needs doing.
///
/// # Examples
///
/// ```
/// use tasklane_protocol::TaskStatus;
///
/// assert_eq!(TaskStatus::Todo.toggled(), TaskStatus::Done);
/// assert!(TaskStatus::Done.is_done());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// The task is still open.
    #[default]
    Todo,
    /// The task is finished.
    Done,
}

impl TaskStatus {
    /// Returns `true` for [`TaskStatus::Done`].
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }

    /// Returns the other status.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Todo => Self::Done,
            Self::Done => Self::Todo,
        }
    }
}

/// A task record as delivered by a task source, before a key is assigned.
///
/// # Examples
///
/// ```
/// use tasklane_protocol::{RawTask, TaskStatus};
///
/// let raw: RawTask = serde_json::from_str(r#"{"title": "A", "status": "done"}"#).unwrap();
/// assert_eq!(raw.status, TaskStatus::Done);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTask {
    /// Display text.
    pub title: String,
    /// Current status.
    pub status: TaskStatus,
}

impl RawTask {
    /// Creates a raw record.
    #[must_use]
    pub fn new(title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            title: title.into(),
            status,
        }
    }

    /// Attaches a key, producing a board [`Task`].
    #[must_use]
    pub fn into_task(self, key: TaskKey) -> Task {
        Task {
            key,
            title: self.title,
            status: self.status,
        }
    }
}

/// A task on the board.
///
/// # Examples
///
/// ```
/// use tasklane_protocol::{Task, TaskStatus};
///
/// let task = Task::new("task0", "Buy milk", TaskStatus::Todo);
/// assert_eq!(task.key.as_str(), "task0");
/// assert!(!task.status.is_done());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    /// Unique key within the current load.
    pub key: TaskKey,
    /// Display text.
    pub title: String,
    /// Which column the task belongs to.
    pub status: TaskStatus,
}

impl Task {
    /// Creates a task.
    #[must_use]
    pub fn new(key: impl Into<TaskKey>, title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            status,
        }
    }

    /// Returns a copy of this task with its status replaced.
    #[must_use]
    pub fn with_status(&self, status: TaskStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_status_default_is_todo() {
        assert_eq!(TaskStatus::default(), TaskStatus::Todo);
    }

    #[test]
    fn task_status_json_format() {
        let json = serde_json::to_string(&TaskStatus::Todo).expect("serialize");
        assert_eq!(json, r#""todo""#);

        let json = serde_json::to_string(&TaskStatus::Done).expect("serialize");
        assert_eq!(json, r#""done""#);
    }

    #[test]
    fn task_status_toggle() {
        assert_eq!(TaskStatus::Todo.toggled(), TaskStatus::Done);
        assert_eq!(TaskStatus::Done.toggled(), TaskStatus::Todo);
    }

    #[test]
    fn task_key_from_index() {
        assert_eq!(TaskKey::from_index(0).as_str(), "task0");
        assert_eq!(TaskKey::from_index(12).to_string(), "task12");
    }

    #[test]
    fn task_key_serializes_as_plain_string() {
        let json = serde_json::to_string(&TaskKey::from_index(1)).expect("serialize");
        assert_eq!(json, r#""task1""#);
    }

    #[test]
    fn raw_task_rejects_unknown_status() {
        let result: Result<RawTask, _> =
            serde_json::from_str(r#"{"title": "A", "status": "doing"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn raw_task_into_task_keeps_fields() {
        let task = RawTask::new("Write docs", TaskStatus::Done).into_task(TaskKey::from_index(2));

        assert_eq!(task.key.as_str(), "task2");
        assert_eq!(task.title, "Write docs");
        assert_eq!(task.status, TaskStatus::Done);
    }

    #[test]
    fn with_status_leaves_original_untouched() {
        let task = Task::new("task0", "A", TaskStatus::Todo);
        let done = task.with_status(TaskStatus::Done);

        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(done.status, TaskStatus::Done);
        assert_eq!(done.key, task.key);
    }
}
