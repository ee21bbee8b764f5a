//! The task store: owner of the authoritative [`TaskListState`].

use chrono::Utc;
use tasklane_protocol::{Columns, Task, TaskKey, TaskStatus};
use tracing::{debug, warn};

use crate::error::LoadError;
use crate::state::{Action, LoadStatus, TaskListState, select_done_tasks, select_todo_tasks};

/// Holds the authoritative task list and its load status.
///
/// Every mutation is expressed as an [`Action`] and applied through the pure
/// reducer; the store swaps in the resulting state wholesale.
///
/// # Examples
///
/// ```
/// use tasklane_protocol::{Task, TaskKey, TaskStatus};
/// use tasklane_store::TaskStore;
///
/// let mut store = TaskStore::new();
/// store.begin_load();
/// store.finish_load(Ok(vec![Task::new("task0", "A", TaskStatus::Todo)]));
///
/// assert!(store.mark_done(&TaskKey::new("task0")));
/// assert_eq!(store.done_tasks().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    state: TaskListState,
}

impl TaskStore {
    /// Creates an empty, idle store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `tasks`, as if they had just been loaded.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let mut store = Self::new();
        store.dispatch(Action::LoadSucceeded {
            tasks,
            at: Utc::now(),
        });
        store
    }

    /// Applies `action`. Returns `true` if the state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let next = self.state.reduce(action);
        let changed = next.revision != self.state.revision;
        self.state = next;
        changed
    }

    /// Tasks with status "to do", in list order.
    #[must_use]
    pub fn todo_tasks(&self) -> Vec<Task> {
        select_todo_tasks(&self.state)
    }

    /// Tasks with status "done", in list order.
    #[must_use]
    pub fn done_tasks(&self) -> Vec<Task> {
        select_done_tasks(&self.state)
    }

    /// Both derived views as a column mirror.
    #[must_use]
    pub fn columns(&self) -> Columns {
        Columns::new(self.todo_tasks(), self.done_tasks())
    }

    #[must_use]
    pub fn status(&self) -> LoadStatus {
        self.state.status
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.state.revision
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    #[must_use]
    pub fn loaded_at(&self) -> Option<chrono::DateTime<Utc>> {
        self.state.loaded_at
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.list.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.list.is_empty()
    }

    /// Returns a copy of the whole state.
    #[must_use]
    pub fn snapshot(&self) -> TaskListState {
        self.state.clone()
    }

    /// Marks the store as loading.
    pub fn begin_load(&mut self) {
        self.dispatch(Action::LoadStarted);
    }

    /// Reconciles the outcome of a load into the store.
    ///
    /// On success the list is replaced wholesale and the status returns to
    /// idle. On failure the list is kept and the status becomes failed.
    pub fn finish_load(&mut self, result: Result<Vec<Task>, LoadError>) {
        match result {
            Ok(tasks) => {
                debug!(count = tasks.len(), "committing loaded tasks");
                self.dispatch(Action::LoadSucceeded {
                    tasks,
                    at: Utc::now(),
                });
            }
            Err(e) => {
                warn!(error = %e, "task load failed");
                self.dispatch(Action::LoadFailed {
                    message: e.to_string(),
                });
            }
        }
    }

    /// The stored status of the task with `key`, if it is in the list.
    #[must_use]
    pub fn status_of(&self, key: &TaskKey) -> Option<TaskStatus> {
        self.state.list.iter().find(|t| &t.key == key).map(|t| t.status)
    }

    /// Sets the task with `key` to "done".
    ///
    /// Returns `false` for unknown keys and for tasks that are already done.
    pub fn mark_done(&mut self, key: &TaskKey) -> bool {
        self.set_status(key, TaskStatus::Done)
    }

    /// Sets the task with `key` to "to do".
    ///
    /// Returns `false` for unknown keys and for tasks that are already to do.
    pub fn mark_todo(&mut self, key: &TaskKey) -> bool {
        self.set_status(key, TaskStatus::Todo)
    }

    fn set_status(&mut self, key: &TaskKey, status: TaskStatus) -> bool {
        if !self.state.contains(key) {
            debug!(%key, "ignoring status change for unknown task");
            return false;
        }
        self.dispatch(Action::SetStatus {
            key: key.clone(),
            status,
        })
    }

    /// Commits a column arrangement back into the list.
    pub fn replace_columns(&mut self, columns: Columns) -> bool {
        self.dispatch(Action::ReplaceColumns(columns))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn scenario() -> Vec<Task> {
        vec![
            Task::new("task0", "A", TaskStatus::Todo),
            Task::new("task1", "B", TaskStatus::Done),
            Task::new("task2", "C", TaskStatus::Todo),
        ]
    }

    fn keys(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.key.as_str()).collect()
    }

    #[test]
    fn new_store_is_idle_and_empty() {
        let store = TaskStore::new();

        assert_eq!(store.status(), LoadStatus::Idle);
        assert!(store.is_empty());
        assert!(store.todo_tasks().is_empty());
        assert!(store.done_tasks().is_empty());
        assert!(store.loaded_at().is_none());
    }

    #[test]
    fn load_success_flow() {
        let mut store = TaskStore::new();
        store.begin_load();
        assert_eq!(store.status(), LoadStatus::Loading);

        store.finish_load(Ok(scenario()));

        assert_eq!(store.status(), LoadStatus::Idle);
        assert_eq!(keys(&store.todo_tasks()), ["task0", "task2"]);
        assert_eq!(keys(&store.done_tasks()), ["task1"]);
        assert!(store.loaded_at().is_some());
    }

    #[test]
    fn load_failure_keeps_previous_list() {
        let mut store = TaskStore::with_tasks(scenario());
        store.begin_load();
        store.finish_load(Err(LoadError::TimedOut(Duration::from_secs(10))));

        assert_eq!(store.status(), LoadStatus::Failed);
        assert_eq!(store.len(), 3);
        assert_eq!(
            store.error(),
            Some("loading tasks timed out after 10000 ms")
        );
    }

    #[test]
    fn mark_done_moves_task_between_views() {
        let mut store = TaskStore::with_tasks(scenario());

        assert!(store.mark_done(&TaskKey::new("task0")));

        assert_eq!(keys(&store.todo_tasks()), ["task2"]);
        assert_eq!(keys(&store.done_tasks()), ["task0", "task1"]);
    }

    #[test]
    fn mark_todo_moves_task_back() {
        let mut store = TaskStore::with_tasks(scenario());

        assert!(store.mark_todo(&TaskKey::new("task1")));

        assert_eq!(keys(&store.todo_tasks()), ["task0", "task1", "task2"]);
        assert!(store.done_tasks().is_empty());
    }

    #[test]
    fn mark_unknown_key_is_noop() {
        let mut store = TaskStore::with_tasks(scenario());
        let revision = store.revision();

        assert!(!store.mark_done(&TaskKey::new("task9")));
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn mark_with_current_status_reports_no_change() {
        let mut store = TaskStore::with_tasks(scenario());
        let revision = store.revision();

        assert!(!store.mark_todo(&TaskKey::new("task0")));
        assert_eq!(store.revision(), revision);
        assert_eq!(store.status_of(&TaskKey::new("task0")), Some(TaskStatus::Todo));
        assert_eq!(store.status_of(&TaskKey::new("task9")), None);
    }

    #[test]
    fn selectors_return_fresh_copies() {
        let store = TaskStore::with_tasks(scenario());

        let mut todo = store.todo_tasks();
        todo.clear();

        assert_eq!(store.todo_tasks().len(), 2);
    }

    #[test]
    fn replace_columns_updates_views() {
        let mut store = TaskStore::with_tasks(scenario());
        let mut columns = store.columns();
        columns.todo.swap(0, 1);

        assert!(store.replace_columns(columns));
        assert_eq!(keys(&store.todo_tasks()), ["task2", "task0"]);
    }

    #[test]
    fn replace_columns_with_same_arrangement_is_unchanged() {
        let mut store = TaskStore::with_tasks(vec![
            Task::new("task0", "A", TaskStatus::Todo),
            Task::new("task1", "B", TaskStatus::Done),
        ]);
        let columns = store.columns();

        assert!(!store.replace_columns(columns));
    }
}
