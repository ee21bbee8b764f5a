//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the UI.
///
/// # Examples
///
/// ```
/// use tasklane_protocol::Message;
///
/// let msg = Message::NavigateRight;
/// assert!(matches!(msg, Message::NavigateRight));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move selection (or the drop target while dragging) to the left column.
    NavigateLeft,
    /// Move selection (or the drop target while dragging) to the right column.
    NavigateRight,
    /// Move selection (or the drop target while dragging) up.
    NavigateUp,
    /// Move selection (or the drop target while dragging) down.
    NavigateDown,
    /// Pick up the selected card, or drop the card being dragged.
    Grab,
    /// Toggle the selected task between "to do" and "done".
    ToggleStatus,
    /// Escape: cancel a drag or clear the selection (contextual).
    Escape,
    /// Quit the application.
    Quit,
    /// Reload tasks from the task source.
    Refresh,
    /// Toggle help overlay.
    ToggleHelp,
    /// Left mouse button pressed at coordinates.
    PressAt {
        /// Column (x coordinate) of the press.
        column: u16,
        /// Row (y coordinate) of the press.
        row: u16,
    },
    /// Left mouse button released at coordinates.
    ReleaseAt {
        /// Column (x coordinate) of the release.
        column: u16,
        /// Row (y coordinate) of the release.
        row: u16,
    },
}

impl Message {
    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use tasklane_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Escape.is_terminating());
    /// ```
    #[must_use]
    pub const fn is_terminating(self) -> bool {
        matches!(self, Self::Quit)
    }
}
