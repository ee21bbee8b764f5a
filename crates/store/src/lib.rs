//! Task state and asynchronous loading for tasklane.
//!
//! - [`state`]: the immutable [`TaskListState`], its [`Action`]s and the pure reducer
//! - [`store`]: the [`TaskStore`] owning the authoritative state
//! - [`source`]: the [`TaskSource`] trait and its mock and file implementations
//! - [`loader`]: key assignment, single loads and the background [`Loader`]
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//!
//! use tasklane_store::{MockTaskSource, TaskStore, load_tasks};
//!
//! # tokio_test();
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn tokio_test() {
//! let source = MockTaskSource::new().with_delay(Duration::from_millis(10));
//! let mut store = TaskStore::new();
//!
//! store.begin_load();
//! store.finish_load(load_tasks(&source, Duration::from_secs(10)).await);
//!
//! assert!(!store.is_empty());
//! # }
//! ```

pub mod error;
pub mod loader;
pub mod source;
pub mod state;
pub mod store;

pub use error::{LoadError, SourceError};
pub use loader::{DEFAULT_LOAD_TIMEOUT, LoadId, LoadOutcome, Loader, load_tasks, prepare_tasks};
pub use source::{ConfiguredSource, JsonFileSource, MockTaskSource, TaskDocument, TaskSource};
pub use state::{Action, LoadStatus, TaskListState, select_done_tasks, select_todo_tasks};
pub use store::TaskStore;
