//! The view binding between the task store and the on-screen columns.
//!
//! The binding keeps a mirror of the store's two derived views. The mirror
//! is replaced wholesale whenever the store's revision changes, and drag
//! gestures are applied to it through the reorder/move engine. Depending on
//! the [`DropPolicy`], a completed drag is also committed to the store.

use tasklane_config::DropPolicy;
use tasklane_protocol::{ColumnId, Columns, DragEvent, ProtocolError, Task};
use tasklane_store::TaskStore;
use tracing::{debug, trace};

/// Mirrors the store's "to do" and "done" views for display and dragging.
///
/// # Examples
///
/// ```
/// use tasklane_config::DropPolicy;
/// use tasklane_protocol::{ColumnId, DragEvent, DragLocation, Task, TaskStatus};
/// use tasklane_store::TaskStore;
/// use tasklane_tui::ViewBinding;
///
/// let mut store = TaskStore::with_tasks(vec![
///     Task::new("task0", "A", TaskStatus::Todo),
///     Task::new("task1", "B", TaskStatus::Todo),
/// ]);
/// let mut binding = ViewBinding::new(DropPolicy::WriteThrough);
/// binding.sync(&store);
///
/// let event = DragEvent::dropped(
///     DragLocation::new(ColumnId::Todo, 0),
///     DragLocation::new(ColumnId::Done, 0),
/// );
/// assert!(binding.on_drag_end(&event, &mut store)?);
/// assert_eq!(store.done_tasks()[0].title, "A");
/// # Ok::<(), tasklane_protocol::ProtocolError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ViewBinding {
    columns: Columns,
    seen_revision: Option<u64>,
    policy: DropPolicy,
}

impl ViewBinding {
    /// Creates an empty binding that has not yet seen the store.
    #[must_use]
    pub fn new(policy: DropPolicy) -> Self {
        Self {
            columns: Columns::default(),
            seen_revision: None,
            policy,
        }
    }

    /// The current mirror.
    #[must_use]
    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    /// The tasks of one column of the mirror.
    #[must_use]
    pub fn column(&self, id: ColumnId) -> &[Task] {
        self.columns.column(id)
    }

    #[must_use]
    pub fn policy(&self) -> DropPolicy {
        self.policy
    }

    /// Replaces the mirror if the store changed since the last sync.
    ///
    /// Returns `true` if the mirror was replaced.
    pub fn sync(&mut self, store: &TaskStore) -> bool {
        let revision = store.revision();
        if self.seen_revision == Some(revision) {
            return false;
        }

        self.columns = store.columns();
        trace!(revision, tasks = self.columns.total(), "refreshed column mirror");
        self.seen_revision = Some(revision);
        true
    }

    /// Forgets the last seen revision so the next [`sync`](Self::sync)
    /// replaces the mirror even if the store is unchanged.
    pub fn invalidate(&mut self) {
        self.seen_revision = None;
    }

    /// Applies a completed drag to the mirror.
    ///
    /// Under [`DropPolicy::WriteThrough`] a change is also committed to the
    /// store. A drag without a destination changes nothing.
    ///
    /// Returns `true` if the mirror changed.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidIndex`] if the event's indices do not
    /// fit the mirror. Neither the mirror nor the store is changed then.
    pub fn on_drag_end(
        &mut self,
        event: &DragEvent,
        store: &mut TaskStore,
    ) -> Result<bool, ProtocolError> {
        let changed = self.columns.apply_drag(event)?;
        if !changed {
            return Ok(false);
        }

        debug!(
            from = ?event.source,
            to = ?event.destination,
            policy = ?self.policy,
            "applied drag"
        );
        if self.policy.commits_to_store() {
            store.replace_columns(self.columns.clone());
            self.seen_revision = Some(store.revision());
        }
        Ok(true)
    }
}
