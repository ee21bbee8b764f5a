//! Board columns and the column mirror.
//!
//! A column groups the tasks that share one status. [`Columns`] is the
//! transient two-column copy of the store's derived views that drag
//! operations edit in place.

use serde::{Deserialize, Serialize};

use crate::drag::DragEvent;
use crate::error::Result;
use crate::reorder::{move_task, reorder};
use crate::task::{Task, TaskStatus};

/// Identifies one of the two board columns.
///
/// # Examples
///
/// ```
/// use tasklane_protocol::{ColumnId, TaskStatus};
///
/// assert_eq!(ColumnId::Done.status(), TaskStatus::Done);
/// assert_eq!(ColumnId::for_status(TaskStatus::Todo), ColumnId::Todo);
/// assert_eq!(ColumnId::Todo.display_name(), "To do");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColumnId {
    /// Open tasks.
    #[default]
    Todo,
    /// Finished tasks.
    Done,
}

impl ColumnId {
    /// Returns both columns in display order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Todo, Self::Done]
    }

    /// Returns the status shown by this column.
    #[must_use]
    pub const fn status(self) -> TaskStatus {
        match self {
            Self::Todo => TaskStatus::Todo,
            Self::Done => TaskStatus::Done,
        }
    }

    /// Returns the column that shows `status`.
    #[must_use]
    pub const fn for_status(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Todo => Self::Todo,
            TaskStatus::Done => Self::Done,
        }
    }

    /// Returns a human-readable column title.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Todo => "To do",
            Self::Done => "Done",
        }
    }

    /// Returns the position of this column on the board (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Todo => 0,
            Self::Done => 1,
        }
    }

    /// Returns the other column.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Todo => Self::Done,
            Self::Done => Self::Todo,
        }
    }
}

/// The two-column mirror of the task list.
///
/// # Examples
///
/// ```
/// use tasklane_protocol::{ColumnId, Columns, DragEvent, DragLocation, Task, TaskStatus};
///
/// let tasks = [
///     Task::new("task0", "A", TaskStatus::Todo),
///     Task::new("task1", "B", TaskStatus::Done),
/// ];
/// let mut columns = Columns::from_tasks(&tasks);
///
/// let event = DragEvent::dropped(
///     DragLocation::new(ColumnId::Done, 0),
///     DragLocation::new(ColumnId::Todo, 0),
/// );
/// assert!(columns.apply_drag(&event).unwrap());
/// assert_eq!(columns.todo.len(), 2);
/// assert!(columns.done.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Columns {
    /// Tasks shown in the "to do" column, top to bottom.
    pub todo: Vec<Task>,
    /// Tasks shown in the "done" column, top to bottom.
    pub done: Vec<Task>,
}

impl Columns {
    /// Creates a mirror from pre-split columns.
    #[must_use]
    pub fn new(todo: Vec<Task>, done: Vec<Task>) -> Self {
        Self { todo, done }
    }

    /// Splits a task list by status, preserving list order within each column.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let (done, todo) = tasks.iter().cloned().partition(|t| t.status.is_done());
        Self { todo, done }
    }

    /// Returns the tasks of one column.
    #[must_use]
    pub fn column(&self, id: ColumnId) -> &[Task] {
        match id {
            ColumnId::Todo => &self.todo,
            ColumnId::Done => &self.done,
        }
    }

    /// Returns the task at `index` in column `id`, if any.
    #[must_use]
    pub fn get(&self, id: ColumnId, index: usize) -> Option<&Task> {
        self.column(id).get(index)
    }

    /// Returns the total number of tasks in both columns.
    #[must_use]
    pub fn total(&self) -> usize {
        self.todo.len() + self.done.len()
    }

    /// Returns `true` if both columns are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todo.is_empty() && self.done.is_empty()
    }

    fn column_mut(&mut self, id: ColumnId) -> &mut Vec<Task> {
        match id {
            ColumnId::Todo => &mut self.todo,
            ColumnId::Done => &mut self.done,
        }
    }

    /// Applies a completed drag to the mirror.
    ///
    /// A drag without a destination leaves the mirror untouched. A drag
    /// within one column reorders it; a drag across columns moves the task
    /// and sets its status to the destination column's status.
    ///
    /// Returns `true` if the mirror was changed.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidIndex`](crate::ProtocolError::InvalidIndex)
    /// if the event's indices are out of range. The mirror is unchanged on
    /// error.
    pub fn apply_drag(&mut self, event: &DragEvent) -> Result<bool> {
        let Some(destination) = event.destination else {
            return Ok(false);
        };
        let source = event.source;

        if !event.crosses_columns() {
            let items = reorder(self.column(source.column), source.index, destination.index)?;
            let changed = items.as_slice() != self.column(source.column);
            *self.column_mut(source.column) = items;
            return Ok(changed);
        }

        let (from, to) = move_task(
            self.column(source.column),
            self.column(destination.column),
            source.index,
            destination.index,
            destination.column.status(),
        )?;
        *self.column_mut(source.column) = from;
        *self.column_mut(destination.column) = to;
        Ok(true)
    }

    /// Flattens the mirror into one list: all "to do" tasks, then all "done"
    /// tasks, with each task's status forced to its column's status.
    #[must_use]
    pub fn into_list(self) -> Vec<Task> {
        let todo = self.todo.into_iter().map(|mut t| {
            t.status = TaskStatus::Todo;
            t
        });
        let done = self.done.into_iter().map(|mut t| {
            t.status = TaskStatus::Done;
            t
        });
        todo.chain(done).collect()
    }
}
