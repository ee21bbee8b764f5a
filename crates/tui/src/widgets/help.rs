//! Help overlay widget.
//!
//! Lists every keybinding when the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

const HELP_WIDTH: u16 = 40;
const HELP_HEIGHT: u16 = 21;

/// Keys and what they do, grouped under a heading.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("← →", "Switch column"),
            ("↑ ↓", "Select task"),
            ("Esc", "Clear selection"),
        ],
    ),
    (
        "Drag and drop",
        &[
            ("Space/Enter", "Grab / drop card"),
            ("← → ↑ ↓", "Move drop target"),
            ("Esc", "Cancel drag"),
            ("Mouse", "Press, drag, release"),
        ],
    ),
    (
        "Actions",
        &[
            ("x", "Toggle done"),
            ("r", "Reload tasks"),
            ("?", "Toggle help"),
            ("Ctrl+C", "Quit"),
        ],
    ),
];

/// Renders a centered help overlay on top of the existing content.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tasklane_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);
    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(build_help_lines())
        .block(help_block)
        .render(popup_area, buf);
}

fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let mut lines = Vec::new();
    for (heading, keys) in SECTIONS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {heading}"), header_style)));
        for (key, action) in *keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<13}"), key_style),
                Span::styled(*action, text_style),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Press any key to close", hint_style)));
    lines
}

/// Creates a centered rectangle within a given area, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}
