//! Shared protocol types for the tasklane application.
//!
//! This crate defines the core types used across all tasklane components:
//! tasks, the two board columns, drag events, the pure reorder/move engine,
//! TUI messages, and error types.
//!
//! # Overview
//!
//! - [`task`]: Task keys, statuses, raw source records and the `Task` struct
//! - [`column`]: Column identifiers and the two-column mirror
//! - [`drag`]: Drag locations and completed drag events
//! - [`reorder`]: Reorder and move functions over ordered lists
//! - [`message`]: TUI event messages
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! ```
//! use tasklane_protocol::{ColumnId, Columns, DragEvent, DragLocation, Task, TaskStatus};
//!
//! let tasks = vec![
//!     Task::new("task0", "A", TaskStatus::Todo),
//!     Task::new("task1", "B", TaskStatus::Done),
//!     Task::new("task2", "C", TaskStatus::Todo),
//! ];
//! let mut columns = Columns::from_tasks(&tasks);
//!
//! // Drag the first "to do" card below the second one.
//! columns.apply_drag(&DragEvent::dropped(
//!     DragLocation::new(ColumnId::Todo, 0),
//!     DragLocation::new(ColumnId::Todo, 1),
//! ))?;
//!
//! assert_eq!(columns.todo[0].key.as_str(), "task2");
//! # Ok::<(), tasklane_protocol::ProtocolError>(())
//! ```

pub mod column;
pub mod drag;
pub mod dummy;
pub mod error;
pub mod message;
pub mod reorder;
pub mod task;

// Re-export primary types at crate root for convenience
pub use column::{ColumnId, Columns};
pub use drag::{DragEvent, DragLocation};
pub use error::{ProtocolError, Result};
pub use message::Message;
pub use task::{RawTask, Task, TaskKey, TaskStatus};
