//! Drag-and-drop events.
//!
//! A drag gesture provider reports each completed drag as a [`DragEvent`]:
//! where the card was picked up, and where it was dropped (if anywhere).

use serde::{Deserialize, Serialize};

use crate::column::ColumnId;

/// A position on the board: a column and an index within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DragLocation {
    /// The column.
    pub column: ColumnId,
    /// The index within the column.
    pub index: usize,
}

impl DragLocation {
    /// Creates a location.
    #[must_use]
    pub const fn new(column: ColumnId, index: usize) -> Self {
        Self { column, index }
    }
}

/// A completed drag gesture.
///
/// `destination` is `None` when the card was dropped outside any column or
/// the drag was cancelled.
///
/// # Examples
///
/// ```
/// use tasklane_protocol::{ColumnId, DragEvent, DragLocation};
///
/// let start = DragLocation::new(ColumnId::Todo, 0);
/// assert!(!DragEvent::cancelled(start).is_drop());
///
/// let event = DragEvent::dropped(start, DragLocation::new(ColumnId::Done, 0));
/// assert!(event.is_drop());
/// assert!(event.crosses_columns());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEvent {
    /// Where the drag started.
    pub source: DragLocation,
    /// Where the drag ended, if on a column.
    pub destination: Option<DragLocation>,
}

impl DragEvent {
    /// A drag that ended on a column.
    #[must_use]
    pub const fn dropped(source: DragLocation, destination: DragLocation) -> Self {
        Self {
            source,
            destination: Some(destination),
        }
    }

    /// A drag that ended without a target.
    #[must_use]
    pub const fn cancelled(source: DragLocation) -> Self {
        Self {
            source,
            destination: None,
        }
    }

    /// Returns `true` if the drag ended on a column.
    #[must_use]
    pub const fn is_drop(&self) -> bool {
        self.destination.is_some()
    }

    /// Returns `true` if the drag ended on a different column than it started.
    #[must_use]
    pub fn crosses_columns(&self) -> bool {
        self.destination
            .is_some_and(|d| d.column != self.source.column)
    }
}
