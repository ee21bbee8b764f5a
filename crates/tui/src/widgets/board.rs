//! Board rendering widget.
//!
//! The board splits its area into the "To do" and "Done" columns with equal
//! widths.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
};
use tasklane_protocol::ColumnId;

use super::column::{ColumnView, render_column};
use crate::state::AppState;

/// Splits the board area into one rectangle per column, indexed by
/// [`ColumnId::index`].
#[must_use]
pub fn column_areas(area: Rect) -> [Rect; 2] {
    Layout::horizontal([Constraint::Percentage(50); 2]).areas(area)
}

/// Finds the column drawn under a terminal cell.
#[must_use]
pub fn column_at(area: Rect, x: u16, y: u16) -> Option<(ColumnId, Rect)> {
    ColumnId::all()
        .into_iter()
        .zip(column_areas(area))
        .find(|(_, rect)| rect.contains((x, y).into()))
}

/// Renders the board to the buffer.
///
/// # Layout
///
/// ```text
/// ╭ To do (2) ──────────┬ Done (1) ───────────╮
/// │┌──────────────────┐ │┌──────────────────┐ │
/// ││ Buy milk         │ ││ Walk the dog     │ │
/// │└──────────────────┘ │└──────────────────┘ │
/// ╰─────────────────────┴─────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tasklane_config::DropPolicy;
/// use tasklane_tui::AppState;
/// use tasklane_tui::widgets::render_board;
///
/// let state = AppState::new(DropPolicy::default());
/// let area = Rect::new(0, 0, 80, 20);
/// let mut buf = Buffer::empty(area);
///
/// render_board(&state, true, area, &mut buf);
/// ```
pub fn render_board(state: &AppState, loading: bool, area: Rect, buf: &mut Buffer) {
    let areas = column_areas(area);
    for id in ColumnId::all() {
        render_column(&ColumnView::from_state(state, id, loading), areas[id.index()], buf);
    }
}
