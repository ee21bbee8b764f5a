//! Task list state and its reducer.
//!
//! [`TaskListState`] is an immutable value: every change goes through
//! [`TaskListState::reduce`], which returns a new state. Selectors return
//! fresh copies so no caller ever holds a reference into a live list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tasklane_protocol::{Columns, Task, TaskKey, TaskStatus};

/// Where the task list is in its load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    /// No load in flight.
    #[default]
    Idle,
    /// A load has started and not yet finished.
    Loading,
    /// The last load failed; the list holds the previous contents.
    Failed,
}

impl LoadStatus {
    /// Returns a short human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Loading => "Loading",
            Self::Failed => "Failed",
        }
    }
}

/// A state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A load was started.
    LoadStarted,
    /// A load finished with tasks; the list is replaced wholesale.
    LoadSucceeded {
        /// The loaded tasks, with keys assigned.
        tasks: Vec<Task>,
        /// When the load finished.
        at: DateTime<Utc>,
    },
    /// A load failed; the list is left unchanged.
    LoadFailed {
        /// Human-readable failure description.
        message: String,
    },
    /// Set the status of the task with `key`. Unknown keys are ignored.
    SetStatus {
        /// The task to update.
        key: TaskKey,
        /// The new status.
        status: TaskStatus,
    },
    /// Replace the list with a column arrangement (to do first, then done).
    ReplaceColumns(Columns),
}

/// The authoritative task list and its load status.
///
/// `revision` increases by one every time the state actually changes, so
/// observers can detect a change by comparing revisions.
///
/// # Examples
///
/// ```
/// use tasklane_store::{Action, LoadStatus, TaskListState};
///
/// let state = TaskListState::default();
/// assert_eq!(state.status, LoadStatus::Idle);
///
/// let state = state.reduce(Action::LoadStarted);
/// assert_eq!(state.status, LoadStatus::Loading);
/// assert_eq!(state.revision, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListState {
    /// Tasks in load order, as later rearranged by committed drags.
    pub list: Vec<Task>,
    /// Load lifecycle status.
    pub status: LoadStatus,
    /// Message of the most recent failed load, cleared by the next success.
    pub error: Option<String>,
    /// When the last successful load finished.
    pub loaded_at: Option<DateTime<Utc>>,
    /// Change counter.
    pub revision: u64,
}

impl TaskListState {
    /// Applies `action`, returning the next state.
    ///
    /// The revision is bumped only when the resulting state differs.
    #[must_use]
    pub fn reduce(&self, action: Action) -> Self {
        let mut next = self.clone();
        match action {
            Action::LoadStarted => {
                next.status = LoadStatus::Loading;
            }
            Action::LoadSucceeded { tasks, at } => {
                next.list = tasks;
                next.status = LoadStatus::Idle;
                next.error = None;
                next.loaded_at = Some(at);
            }
            Action::LoadFailed { message } => {
                next.status = LoadStatus::Failed;
                next.error = Some(message);
            }
            Action::SetStatus { key, status } => {
                next.list = self
                    .list
                    .iter()
                    .map(|t| {
                        if t.key == key {
                            t.with_status(status)
                        } else {
                            t.clone()
                        }
                    })
                    .collect();
            }
            Action::ReplaceColumns(columns) => {
                next.list = columns.into_list();
            }
        }

        if next != *self {
            next.revision = self.revision + 1;
        }
        next
    }

    /// Returns `true` if a task with `key` is in the list.
    #[must_use]
    pub fn contains(&self, key: &TaskKey) -> bool {
        self.list.iter().any(|t| &t.key == key)
    }
}

/// Returns the tasks whose status is "to do", in list order.
#[must_use]
pub fn select_todo_tasks(state: &TaskListState) -> Vec<Task> {
    select_by_status(state, TaskStatus::Todo)
}

/// Returns the tasks whose status is "done", in list order.
#[must_use]
pub fn select_done_tasks(state: &TaskListState) -> Vec<Task> {
    select_by_status(state, TaskStatus::Done)
}

fn select_by_status(state: &TaskListState, status: TaskStatus) -> Vec<Task> {
    state
        .list
        .iter()
        .filter(|t| t.status == status)
        .cloned()
        .collect()
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
        prop::collection::vec(any::<bool>(), 0..30).prop_map(|flags| {
            flags
                .into_iter()
                .enumerate()
                .map(|(i, done)| {
                    let status = if done { TaskStatus::Done } else { TaskStatus::Todo };
                    Task::new(TaskKey::from_index(i), format!("Task {i}"), status)
                })
                .collect()
        })
    }

    proptest! {
        /// Every task lands in exactly one view, and the views keep list order.
        #[test]
        fn views_partition_the_list(tasks in arb_tasks()) {
            let state = TaskListState::default().reduce(Action::LoadSucceeded {
                tasks: tasks.clone(),
                at: Utc::now(),
            });
            let todo = select_todo_tasks(&state);
            let done = select_done_tasks(&state);

            prop_assert_eq!(todo.len() + done.len(), tasks.len());
            prop_assert!(todo.iter().all(|t| t.status == TaskStatus::Todo));
            prop_assert!(done.iter().all(|t| t.status == TaskStatus::Done));

            let expected_todo: Vec<_> =
                tasks.iter().filter(|t| t.status == TaskStatus::Todo).cloned().collect();
            prop_assert_eq!(todo, expected_todo);
        }
    }
}
