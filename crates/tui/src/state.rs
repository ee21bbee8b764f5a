//! Application state management.
//!
//! This module defines the core state structures for the TUI application:
//! the column mirror (through the [`ViewBinding`]), selection tracking, and
//! an in-progress drag.

use tasklane_config::DropPolicy;
use tasklane_protocol::{ColumnId, DragEvent, DragLocation, Task};

use crate::binding::ViewBinding;

/// How a drag was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOrigin {
    /// Picked up with the grab key; the drop target follows the arrow keys.
    Keyboard,
    /// Picked up with a mouse press; dropped where the button is released.
    Pointer,
}

/// A card that has been picked up but not yet dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    /// Where the card was picked up.
    pub source: DragLocation,
    /// Where the card would land if dropped now.
    pub target: DragLocation,
    /// How the drag was started.
    pub origin: DragOrigin,
}

impl DragState {
    /// The event for dropping at the current target.
    #[must_use]
    pub const fn drop_event(&self) -> DragEvent {
        DragEvent::dropped(self.source, self.target)
    }

    /// The event for abandoning the drag.
    #[must_use]
    pub const fn cancel_event(&self) -> DragEvent {
        DragEvent::cancelled(self.source)
    }
}

/// The application state.
///
/// Contains all mutable UI state: the column mirror, selection, the drag in
/// progress and overlay visibility.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The mirror of the task store's two views.
    pub binding: ViewBinding,
    /// The currently selected column.
    pub selected_column: ColumnId,
    /// Index of the selected task within the current column, if any.
    pub selected_task: Option<usize>,
    /// The drag in progress, if any.
    pub drag: Option<DragState>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
}

impl AppState {
    /// Creates a new application state with an empty mirror.
    ///
    /// # Examples
    ///
    /// ```
    /// use tasklane_config::DropPolicy;
    /// use tasklane_protocol::ColumnId;
    /// use tasklane_tui::AppState;
    ///
    /// let state = AppState::new(DropPolicy::default());
    /// assert_eq!(state.selected_column, ColumnId::Todo);
    /// assert!(state.selected_task.is_none());
    /// ```
    #[must_use]
    pub fn new(policy: DropPolicy) -> Self {
        Self {
            binding: ViewBinding::new(policy),
            selected_column: ColumnId::Todo,
            selected_task: None,
            drag: None,
            help_visible: false,
        }
    }

    /// The tasks of one column of the mirror.
    #[must_use]
    pub fn column(&self, id: ColumnId) -> &[Task] {
        self.binding.column(id)
    }

    /// Returns the selected task, if any.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.selected_task
            .and_then(|idx| self.column(self.selected_column).get(idx))
    }

    /// Returns `true` while a card is picked up.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::take(&mut self.help_visible)
    }

    /// Moves the column selection (or the drop target) to the left.
    pub fn navigate_left(&mut self) {
        self.switch_column();
    }

    /// Moves the column selection (or the drop target) to the right.
    pub fn navigate_right(&mut self) {
        self.switch_column();
    }

    fn switch_column(&mut self) {
        if let Some(target) = self.drag.as_ref().map(|d| d.target) {
            let column = target.column.other();
            let index = target.index.min(self.max_drop_index(column));
            self.set_drop_target(DragLocation::new(column, index));
            return;
        }

        self.selected_column = self.selected_column.other();
        self.clamp_task_selection();
    }

    /// Moves the task selection (or the drop target) up.
    ///
    /// Selection wraps to the bottom; the drop target stops at the top.
    pub fn navigate_up(&mut self) {
        if let Some(target) = self.drag.as_ref().map(|d| d.target) {
            let index = target.index.saturating_sub(1);
            self.set_drop_target(DragLocation::new(target.column, index));
            return;
        }

        let len = self.column(self.selected_column).len();
        if len == 0 {
            self.selected_task = None;
            return;
        }

        self.selected_task = match self.selected_task {
            Some(idx) if idx > 0 => Some(idx - 1),
            Some(_) => Some(len - 1),
            None => Some(0),
        };
    }

    /// Moves the task selection (or the drop target) down.
    ///
    /// Selection wraps to the top; the drop target stops at the column end.
    pub fn navigate_down(&mut self) {
        if let Some(target) = self.drag.as_ref().map(|d| d.target) {
            let index = (target.index + 1).min(self.max_drop_index(target.column));
            self.set_drop_target(DragLocation::new(target.column, index));
            return;
        }

        let len = self.column(self.selected_column).len();
        if len == 0 {
            self.selected_task = None;
            return;
        }

        self.selected_task = match self.selected_task {
            Some(idx) if idx + 1 < len => Some(idx + 1),
            Some(_) => Some(0),
            None => Some(0),
        };
    }

    /// Clears the task selection.
    pub fn clear_selection(&mut self) {
        self.selected_task = None;
    }

    /// Selects a card.
    pub fn select(&mut self, location: DragLocation) {
        self.selected_column = location.column;
        self.selected_task = Some(location.index);
        self.clamp_task_selection();
    }

    /// Keeps the selection within the bounds of the selected column.
    pub fn clamp_task_selection(&mut self) {
        let len = self.column(self.selected_column).len();
        self.selected_task = match self.selected_task {
            _ if len == 0 => None,
            Some(idx) => Some(idx.min(len - 1)),
            None => None,
        };
    }

    /// Picks up the card at `source`.
    ///
    /// Returns `false` (and starts nothing) if there is no card there.
    pub fn begin_drag(&mut self, source: DragLocation, origin: DragOrigin) -> bool {
        if source.index >= self.column(source.column).len() {
            return false;
        }

        self.drag = Some(DragState {
            source,
            target: source,
            origin,
        });
        true
    }

    /// Ends the drag in progress, returning it.
    pub fn take_drag(&mut self) -> Option<DragState> {
        self.drag.take()
    }

    /// The highest index a card can be dropped at in `column`.
    ///
    /// Within the card's own column the last slot is the end of the column;
    /// in the other column a card may also be appended.
    #[must_use]
    pub fn max_drop_index(&self, column: ColumnId) -> usize {
        let len = self.column(column).len();
        match &self.drag {
            Some(drag) if drag.source.column == column => len.saturating_sub(1),
            _ => len,
        }
    }

    fn set_drop_target(&mut self, target: DragLocation) {
        if let Some(drag) = self.drag.as_mut() {
            drag.target = target;
        }
    }

    /// The highlighted position in `column`: the drop target while dragging,
    /// otherwise the selection.
    #[must_use]
    pub fn cursor_in(&self, column: ColumnId) -> Option<usize> {
        match &self.drag {
            Some(drag) if drag.target.column == column => Some(drag.target.index),
            Some(_) => None,
            None if self.selected_column == column => self.selected_task,
            None => None,
        }
    }

    /// The number of card slots shown in `column`, including an empty slot
    /// at the end when a card is about to be appended there.
    #[must_use]
    pub fn slots_in(&self, column: ColumnId) -> usize {
        let len = self.column(column).len();
        match &self.drag {
            Some(drag) if drag.target.column == column && drag.target.index >= len => len + 1,
            _ => len,
        }
    }
}
