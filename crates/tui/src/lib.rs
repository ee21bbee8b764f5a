//! Terminal UI for the tasklane task board.
//!
//! This crate provides a Ratatui-based front-end showing the "To do" and
//! "Done" columns, with keyboard and mouse drag and drop.
//!
//! # Overview
//!
//! - [`app`]: Main application struct, load lifecycle and run loop
//! - [`binding`]: The column mirror and drag-end handling
//! - [`state`]: Selection, drag and overlay state
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`widgets`]: Rendering functions
//!
//! # Example
//!
//! ```no_run
//! use tasklane_config::Config;
//! use tasklane_tui::{App, build_source, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let source = build_source(&config.source)?;
//!
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::with_config(source, &config);
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod binding;
pub mod event;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

pub use app::{App, build_source};
pub use binding::ViewBinding;
pub use state::{AppState, DragOrigin, DragState};
