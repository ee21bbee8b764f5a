//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use tasklane_protocol::Message;

/// Default poll timeout for events.
///
/// Also bounds how long a finished load waits before it is drawn.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
///
/// Returns `Some(Message)` if the event maps to an action,
/// or `None` if the event is not handled.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => key_to_message(*key),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts a mouse event to an application message.
///
/// Left button presses start a drag and left button releases end it.
#[must_use]
fn mouse_to_message(mouse: &MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::PressAt {
            column: mouse.column,
            row: mouse.row,
        }),
        MouseEventKind::Up(MouseButton::Left) => Some(Message::ReleaseAt {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Converts a terminal key event to an application message.
///
/// Returns `Some(Message)` if the key event maps to an action,
/// or `None` if the key is not bound.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Escape (cancel drag or clear selection) |
/// | `Left` / `Right` | Switch column |
/// | `Up` / `Down` | Move selection or drop target |
/// | `Enter` or `Space` | Grab / drop |
/// | `x` | Toggle done |
/// | `r` | Reload |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Grab),
        KeyCode::Char('x') => Some(Message::ToggleStatus),

        KeyCode::Char('r') => Some(Message::Refresh),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn make_mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn quit_keys() {
        assert_eq!(
            key_to_message(make_key_with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Some(Message::Quit)
        );
        assert_eq!(key_to_message(make_key(KeyCode::Char('q'))), None);
        assert_eq!(key_to_message(make_key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(key_to_message(make_key(KeyCode::Left)), Some(Message::NavigateLeft));
        assert_eq!(key_to_message(make_key(KeyCode::Right)), Some(Message::NavigateRight));
        assert_eq!(key_to_message(make_key(KeyCode::Up)), Some(Message::NavigateUp));
        assert_eq!(key_to_message(make_key(KeyCode::Down)), Some(Message::NavigateDown));
    }

    #[test]
    fn grab_keys() {
        assert_eq!(key_to_message(make_key(KeyCode::Enter)), Some(Message::Grab));
        assert_eq!(key_to_message(make_key(KeyCode::Char(' '))), Some(Message::Grab));
    }

    #[test]
    fn action_keys() {
        assert_eq!(key_to_message(make_key(KeyCode::Esc)), Some(Message::Escape));
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('x'))),
            Some(Message::ToggleStatus)
        );
        assert_eq!(key_to_message(make_key(KeyCode::Char('r'))), Some(Message::Refresh));
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('?'))),
            Some(Message::ToggleHelp)
        );
    }

    #[test]
    fn unbound_keys() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('z'))), None);
        assert_eq!(key_to_message(make_key(KeyCode::Tab)), None);
        assert_eq!(key_to_message(make_key(KeyCode::F(1))), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = make_key(KeyCode::Char('x'));
        key.kind = KeyEventKind::Release;
        assert_eq!(event_to_message(&Event::Key(key)), None);
    }

    #[test]
    fn mouse_press_and_release() {
        let press = make_mouse(MouseEventKind::Down(MouseButton::Left), 10, 5);
        assert_eq!(
            event_to_message(&Event::Mouse(press)),
            Some(Message::PressAt { column: 10, row: 5 })
        );

        let release = make_mouse(MouseEventKind::Up(MouseButton::Left), 50, 8);
        assert_eq!(
            event_to_message(&Event::Mouse(release)),
            Some(Message::ReleaseAt { column: 50, row: 8 })
        );
    }

    #[test]
    fn other_mouse_events_are_ignored() {
        let right = make_mouse(MouseEventKind::Down(MouseButton::Right), 1, 1);
        assert_eq!(event_to_message(&Event::Mouse(right)), None);

        let moved = make_mouse(MouseEventKind::Drag(MouseButton::Left), 1, 1);
        assert_eq!(event_to_message(&Event::Mouse(moved)), None);

        let scroll = make_mouse(MouseEventKind::ScrollDown, 1, 1);
        assert_eq!(event_to_message(&Event::Mouse(scroll)), None);
    }

    #[test]
    fn resize_is_ignored() {
        assert_eq!(event_to_message(&Event::Resize(80, 24)), None);
    }
}
