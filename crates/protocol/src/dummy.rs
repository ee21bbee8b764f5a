//! Sample data for the mock task source and for demonstrations.
//!
//! # Examples
//!
//! ```
//! use tasklane_protocol::dummy::sample_tasks;
//!
//! let tasks = sample_tasks();
//! assert_eq!(tasks.len(), 8);
//! ```

use crate::task::{RawTask, TaskStatus};

const SAMPLE: &[(&str, TaskStatus)] = &[
    ("Set up the project skeleton", TaskStatus::Done),
    ("Sketch the board layout", TaskStatus::Done),
    ("Fetch tasks on startup", TaskStatus::Todo),
    ("Split tasks into two columns", TaskStatus::Todo),
    ("Reorder cards within a column", TaskStatus::Todo),
    ("Move cards between columns", TaskStatus::Todo),
    ("Show a loading indicator", TaskStatus::Done),
    ("Report load failures", TaskStatus::Todo),
];

/// Returns the static task collection served by the mock task source.
///
/// The records have no keys; keys are assigned by the loader.
///
/// # Examples
///
/// ```
/// use tasklane_protocol::dummy::sample_tasks;
/// use tasklane_protocol::TaskStatus;
///
/// let tasks = sample_tasks();
/// let done = tasks.iter().filter(|t| t.status == TaskStatus::Done).count();
/// assert_eq!(done, 3);
/// ```
#[must_use]
pub fn sample_tasks() -> Vec<RawTask> {
    SAMPLE
        .iter()
        .map(|(title, status)| RawTask::new(*title, *status))
        .collect()
}
