//! Widget components for the tasklane TUI.
//!
//! Each widget is a plain function that renders state to a buffer, which
//! keeps them easy to test and compose.
//!
//! # Modules
//!
//! - [`board`]: The two columns side by side, plus column hit-testing
//! - [`column`]: One column with its title, cards and placeholders
//! - [`task_card`]: A single task card, colored by status
//! - [`status_bar`]: Load status, errors and keybinding hints
//! - [`help`]: The keybinding overlay
//!
//! # Color Coding
//!
//! | Status | Color |
//! |--------|-------|
//! | `Todo` | Blue (`Color::Blue`) |
//! | `Done` | Green (`Color::Green`), title crossed out |

pub mod board;
pub mod column;
pub mod help;
pub mod status_bar;
pub mod task_card;

pub use board::{column_areas, column_at, render_board};
pub use column::{ColumnView, render_column, scroll_offset, visible_cards};
pub use help::render_help_overlay;
pub use status_bar::{StatusInfo, render_status_bar};
pub use task_card::{CardStyle, render_drop_slot, render_task_card, status_color};
