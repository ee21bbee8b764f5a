//! Task card rendering widget.
//!
//! A card is a bordered box holding one task title. The border color follows
//! the task status and the card style; titles of done tasks are struck
//! through.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use tasklane_protocol::{Task, TaskStatus};

/// How a card is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardStyle {
    #[default]
    Normal,
    /// The card under the selection cursor.
    Selected,
    /// The card being dragged, shown at its source position.
    Grabbed,
    /// The card the dragged card would be dropped in front of.
    DropTarget,
}

/// Returns the color associated with a task status.
///
/// # Examples
///
/// ```
/// use ratatui::style::Color;
/// use tasklane_protocol::TaskStatus;
/// use tasklane_tui::widgets::status_color;
///
/// assert_eq!(status_color(TaskStatus::Todo), Color::Blue);
/// assert_eq!(status_color(TaskStatus::Done), Color::Green);
/// ```
#[must_use]
pub const fn status_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Todo => Color::Blue,
        TaskStatus::Done => Color::Green,
    }
}

const fn status_color_bright(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Todo => Color::LightBlue,
        TaskStatus::Done => Color::LightGreen,
    }
}

/// Renders a task card to the buffer.
///
/// # Layout
///
/// ```text
/// ┌────────────────┐
/// │ Title          │
/// └────────────────┘
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tasklane_protocol::{Task, TaskStatus};
/// use tasklane_tui::widgets::{CardStyle, render_task_card};
///
/// let task = Task::new("task0", "Write the report", TaskStatus::Todo);
/// let area = Rect::new(0, 0, 20, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_task_card(&task, CardStyle::Normal, area, &mut buf);
/// ```
pub fn render_task_card(task: &Task, style: CardStyle, area: Rect, buf: &mut Buffer) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let (border_color, border_type, mut title_style) = match style {
        CardStyle::Normal => (
            status_color(task.status),
            BorderType::Plain,
            Style::default().fg(Color::White),
        ),
        CardStyle::Selected => (
            status_color_bright(task.status),
            BorderType::Thick,
            Style::default()
                .fg(status_color_bright(task.status))
                .add_modifier(Modifier::BOLD),
        ),
        CardStyle::Grabbed => (
            Color::DarkGray,
            BorderType::Double,
            Style::default().fg(Color::DarkGray),
        ),
        CardStyle::DropTarget => (
            Color::Yellow,
            BorderType::Thick,
            Style::default().fg(Color::White),
        ),
    };
    if task.status.is_done() {
        title_style = title_style.add_modifier(Modifier::CROSSED_OUT);
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let title = truncate_string(&task.title, inner_width);

    Paragraph::new(Line::from(Span::styled(title, title_style)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(Style::default().fg(border_color)),
        )
        .render(area, buf);
}

/// Renders the empty slot a dragged card would be appended into.
pub fn render_drop_slot(area: Rect, buf: &mut Buffer) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    Paragraph::new(Line::from(Span::styled(
        "Drop here",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::ITALIC),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow)),
    )
    .render(area, buf);
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
pub(crate) fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}
