//! Column rendering widget.
//!
//! This module renders one board column: a bordered block titled with the
//! column name and card count, holding a vertical stack of task cards. The
//! same geometry is used to map mouse rows back to card slots.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tasklane_protocol::{ColumnId, Task};

use super::task_card::{CardStyle, render_drop_slot, render_task_card};
use crate::layout::TASK_CARD_HEIGHT;
use crate::state::AppState;

/// Border set for the left column: rounded corners on the left, no right
/// border.
const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─",
    bottom_left: "╰",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for the right column: T-connectors on the shared left edge,
/// rounded corners on the right.
const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",
    top_right: "╮",
    bottom_left: "┴",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Everything needed to draw one column.
#[derive(Debug, Clone, Copy)]
pub struct ColumnView<'a> {
    pub id: ColumnId,
    pub tasks: &'a [Task],
    /// Whether the selection or the drop target is in this column.
    pub focused: bool,
    /// Whether the column to the left is focused, for the shared border.
    pub prev_focused: bool,
    /// The highlighted slot.
    pub cursor: Option<usize>,
    /// The card being dragged, if it comes from this column.
    pub grabbed: Option<usize>,
    /// Whether a card is being dragged anywhere on the board.
    pub dragging: bool,
    /// Whether an empty slot is shown after the last card.
    pub drop_slot: bool,
    /// Whether a load is in flight.
    pub loading: bool,
}

impl<'a> ColumnView<'a> {
    /// Builds the view of column `id` from the application state.
    #[must_use]
    pub fn from_state(state: &'a AppState, id: ColumnId, loading: bool) -> Self {
        let tasks = state.column(id);
        let focus = state
            .drag
            .map_or(state.selected_column, |drag| drag.target.column);

        Self {
            id,
            tasks,
            focused: focus == id,
            prev_focused: id == ColumnId::Done && focus == ColumnId::Todo,
            cursor: state.cursor_in(id),
            grabbed: state
                .drag
                .filter(|drag| drag.source.column == id)
                .map(|drag| drag.source.index),
            dragging: state.is_dragging(),
            drop_slot: state.slots_in(id) > tasks.len(),
            loading,
        }
    }

    /// The number of card slots, including the trailing drop slot.
    #[must_use]
    pub fn slots(&self) -> usize {
        self.tasks.len() + usize::from(self.drop_slot)
    }

    /// The first slot shown when the column is drawn into `area`.
    #[must_use]
    pub fn first_visible(&self, area: Rect) -> usize {
        let inner = self.block().inner(area);
        scroll_offset(self.cursor, self.slots(), visible_cards(inner))
    }

    /// Maps a terminal row inside the column drawn at `area` to a slot.
    ///
    /// Rows above the first card map to the first visible slot. The result
    /// may lie past the last card; callers clamp it. Returns `None` if `row`
    /// is outside `area`.
    #[must_use]
    pub fn slot_at(&self, area: Rect, row: u16) -> Option<usize> {
        if row < area.y || row >= area.bottom() {
            return None;
        }

        let inner = self.block().inner(area);
        let offset = row.saturating_sub(inner.y) / TASK_CARD_HEIGHT;
        Some(self.first_visible(area) + usize::from(offset))
    }

    fn block(&self) -> Block<'static> {
        let (borders, border_set) = match self.id {
            ColumnId::Todo => (Borders::TOP | Borders::BOTTOM | Borders::LEFT, BORDER_SET_FIRST),
            ColumnId::Done => (Borders::ALL, BORDER_SET_LAST),
        };

        let (border_style, title_style) = if self.focused {
            (
                Style::default().fg(Color::Cyan),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::White),
            )
        };

        let title = format!("{} ({})", self.id.display_name(), self.tasks.len());
        Block::default()
            .title(Span::styled(title, title_style))
            .borders(borders)
            .border_set(border_set)
            .border_style(border_style)
    }

    fn card_style(&self, index: usize) -> CardStyle {
        if self.grabbed == Some(index) {
            CardStyle::Grabbed
        } else if self.cursor == Some(index) {
            if self.dragging {
                CardStyle::DropTarget
            } else {
                CardStyle::Selected
            }
        } else {
            CardStyle::Normal
        }
    }
}

/// Renders a column to the buffer.
///
/// # Layout
///
/// ```text
/// ╭ To do (2) ─────────
/// │┌────────────────┐
/// ││ Buy milk       │
/// │└────────────────┘
/// │┌────────────────┐
/// ││ Walk the dog   │
/// │└────────────────┘
/// ╰────────────────────
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tasklane_config::DropPolicy;
/// use tasklane_protocol::ColumnId;
/// use tasklane_tui::AppState;
/// use tasklane_tui::widgets::{ColumnView, render_column};
///
/// let state = AppState::new(DropPolicy::default());
/// let area = Rect::new(0, 0, 30, 12);
/// let mut buf = Buffer::empty(area);
///
/// render_column(&ColumnView::from_state(&state, ColumnId::Todo, false), area, &mut buf);
/// ```
pub fn render_column(view: &ColumnView<'_>, area: Rect, buf: &mut Buffer) {
    let block = view.block();
    let inner = block.inner(area);
    block.render(area, buf);

    if view.prev_focused && !view.focused && area.width > 0 {
        let highlight = Style::default().fg(Color::Cyan);
        for y in area.y..area.bottom() {
            if let Some(cell) = buf.cell_mut((area.x, y)) {
                cell.set_style(highlight);
            }
        }
    }

    let slots = view.slots();
    if slots == 0 {
        render_placeholder(view.loading, inner, buf);
        return;
    }

    let first = view.first_visible(area);
    for (row, slot) in (first..slots).take(visible_cards(inner)).enumerate() {
        let y = inner.y + row as u16 * TASK_CARD_HEIGHT;
        if y + TASK_CARD_HEIGHT > inner.bottom() {
            break;
        }
        let card_area = Rect::new(inner.x, y, inner.width, TASK_CARD_HEIGHT);

        match view.tasks.get(slot) {
            Some(task) => render_task_card(task, view.card_style(slot), card_area, buf),
            None => render_drop_slot(card_area, buf),
        }
    }
}

fn render_placeholder(loading: bool, area: Rect, buf: &mut Buffer) {
    let text = if loading { "Loading tasks..." } else { "No tasks" };
    Paragraph::new(Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )))
    .render(area, buf);
}

/// How many whole cards fit in the inner area of a column.
#[must_use]
pub fn visible_cards(inner: Rect) -> usize {
    usize::from((inner.height / TASK_CARD_HEIGHT).max(1))
}

/// Calculates the scroll offset that keeps the cursor visible.
#[must_use]
pub fn scroll_offset(cursor: Option<usize>, slots: usize, visible: usize) -> usize {
    let Some(cursor) = cursor else {
        return 0;
    };

    if slots <= visible {
        return 0;
    }

    let max_offset = slots.saturating_sub(visible);
    if cursor < visible / 2 {
        0
    } else {
        cursor.saturating_sub(visible / 2).min(max_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DragOrigin;
    use crate::test_utils::buffer_to_string;
    use tasklane_config::DropPolicy;
    use tasklane_protocol::{DragLocation, TaskKey, TaskStatus};
    use tasklane_store::TaskStore;

    fn state_with(titles: &[&str]) -> AppState {
        let tasks = titles
            .iter()
            .enumerate()
            .map(|(i, title)| Task::new(TaskKey::from_index(i), *title, TaskStatus::Todo))
            .collect();
        let mut state = AppState::new(DropPolicy::WriteThrough);
        state.binding.sync(&TaskStore::with_tasks(tasks));
        state
    }

    fn render(state: &AppState, id: ColumnId, loading: bool, area: Rect) -> String {
        let mut buf = Buffer::empty(area);
        render_column(&ColumnView::from_state(state, id, loading), area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn empty_column_shows_placeholder() {
        let state = state_with(&[]);
        let content = render(&state, ColumnId::Done, false, Rect::new(0, 0, 24, 12));

        assert!(content.contains("Done (0)"));
        assert!(content.contains("No tasks"));
    }

    #[test]
    fn loading_column_shows_loading_placeholder() {
        let state = state_with(&[]);
        let content = render(&state, ColumnId::Todo, true, Rect::new(0, 0, 24, 12));

        assert!(content.contains("Loading tasks..."));
        assert!(!content.contains("No tasks"));
    }

    #[test]
    fn column_lists_cards_with_count() {
        let state = state_with(&["Buy milk", "Walk the dog"]);
        let content = render(&state, ColumnId::Todo, false, Rect::new(0, 0, 24, 12));

        assert!(content.contains("To do (2)"));
        assert!(content.contains("Buy milk"));
        assert!(content.contains("Walk the dog"));
    }

    #[test]
    fn drop_slot_is_shown_when_appending() {
        let mut state = state_with(&["A"]);
        state.begin_drag(DragLocation::new(ColumnId::Todo, 0), DragOrigin::Keyboard);
        state.navigate_right();

        let content = render(&state, ColumnId::Done, false, Rect::new(0, 0, 24, 12));

        assert!(content.contains("Drop here"));
        assert!(!content.contains("No tasks"));
    }

    #[test]
    fn slot_at_maps_rows_to_cards() {
        let state = state_with(&["A", "B"]);
        let view = ColumnView::from_state(&state, ColumnId::Todo, false);
        let area = Rect::new(0, 3, 40, 18);

        assert_eq!(view.slot_at(area, 2), None);
        assert_eq!(view.slot_at(area, 3), Some(0));
        assert_eq!(view.slot_at(area, 4), Some(0));
        assert_eq!(view.slot_at(area, 6), Some(0));
        assert_eq!(view.slot_at(area, 7), Some(1));
        assert_eq!(view.slot_at(area, 10), Some(2));
        assert_eq!(view.slot_at(area, 21), None);
    }

    #[test]
    fn slot_at_accounts_for_scrolling() {
        let titles: Vec<String> = (0..10).map(|i| format!("Task {i}")).collect();
        let titles: Vec<&str> = titles.iter().map(String::as_str).collect();
        let mut state = state_with(&titles);
        state.selected_task = Some(9);

        let view = ColumnView::from_state(&state, ColumnId::Todo, false);
        let area = Rect::new(0, 0, 40, 11);

        // Three cards fit; the cursor at 9 scrolls to the end.
        assert_eq!(view.first_visible(area), 7);
        assert_eq!(view.slot_at(area, 1), Some(7));
    }

    #[test]
    fn scroll_offset_no_selection() {
        assert_eq!(scroll_offset(None, 10, 3), 0);
    }

    #[test]
    fn scroll_offset_all_visible() {
        assert_eq!(scroll_offset(Some(2), 3, 5), 0);
    }

    #[test]
    fn scroll_offset_selection_in_middle() {
        assert_eq!(scroll_offset(Some(5), 10, 3), 4);
    }

    #[test]
    fn scroll_offset_clamped_at_end() {
        assert_eq!(scroll_offset(Some(9), 10, 3), 7);
    }
}
