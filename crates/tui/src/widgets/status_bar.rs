//! Status bar rendering widget.
//!
//! The status bar shows the load status, the last load error or load time,
//! the drop policy and keybinding hints.

use chrono::{DateTime, Local, Utc};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tasklane_config::DropPolicy;
use tasklane_store::{LoadStatus, TaskStore};

/// What the status bar reports.
#[derive(Debug, Clone, Copy)]
pub struct StatusInfo<'a> {
    pub status: LoadStatus,
    pub error: Option<&'a str>,
    pub loaded_at: Option<DateTime<Utc>>,
    pub policy: DropPolicy,
    pub dragging: bool,
}

impl<'a> StatusInfo<'a> {
    /// Collects the status of `store`.
    #[must_use]
    pub fn from_store(store: &'a TaskStore, policy: DropPolicy, dragging: bool) -> Self {
        Self {
            status: store.status(),
            error: store.error(),
            loaded_at: store.loaded_at(),
            policy,
            dragging,
        }
    }
}

/// Renders the status bar.
///
/// # Layout
///
/// ```text
/// ┌──────────────────────────────────────────────────────────────┐
/// │ Idle  loaded 14:03:12  write-through │ Space Grab  x Done  ? Help │
/// └──────────────────────────────────────────────────────────────┘
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tasklane_config::DropPolicy;
/// use tasklane_store::LoadStatus;
/// use tasklane_tui::widgets::{StatusInfo, render_status_bar};
///
/// let info = StatusInfo {
///     status: LoadStatus::Loading,
///     error: None,
///     loaded_at: None,
///     policy: DropPolicy::default(),
///     dragging: false,
/// };
/// let area = Rect::new(0, 0, 80, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(&info, area, &mut buf);
/// ```
pub fn render_status_bar(info: &StatusInfo<'_>, area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);
    let dim_style = Style::default().fg(Color::DarkGray);

    let status_style = match info.status {
        LoadStatus::Idle => Style::default().fg(Color::Green),
        LoadStatus::Loading => Style::default().fg(Color::Cyan),
        LoadStatus::Failed => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    };

    let mut spans = vec![Span::styled(info.status.label(), status_style)];
    match (info.error, info.loaded_at) {
        (Some(error), _) => {
            spans.push(Span::styled(
                format!("  {error}"),
                Style::default().fg(Color::Red),
            ));
        }
        (None, Some(at)) => {
            let at = at.with_timezone(&Local).format("%H:%M:%S");
            spans.push(Span::styled(format!("  loaded {at}"), dim_style));
        }
        (None, None) => {}
    }
    spans.push(Span::styled(format!("  {}", info.policy.label()), dim_style));
    spans.push(Span::styled("  │  ", dim_style));

    let hints: &[(&str, &str)] = if info.dragging {
        &[("←→↑↓", " Move  "), ("Space", " Drop  "), ("Esc", " Cancel")]
    } else {
        &[
            ("Space", " Grab  "),
            ("x", " Done  "),
            ("r", " Reload  "),
            ("?", " Help  "),
            ("Ctrl+C", " Quit"),
        ]
    };
    for (key, action) in hints {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(*action, text_style));
    }

    Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .render(area, buf);
}
