//! Decodes raw terminal events into core events, once, at ingestion.
//!
//! This is the key-to-symbol adapter: a key press either resolves to a
//! [`Command`] or to nothing at all. Keys with no binding and mouse
//! activity other than a held left button produce no event.

use crossterm::event::{
    Event as TerminalEvent, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

use synapta_core::event::{Command, Event};
use synapta_tui::renderer::GridWidget;

/// Resolves a key code to a command, or `None` for keys with no binding.
pub fn decode_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Char('s') => Some(Command::StampBlock),
        KeyCode::Char('a') => Some(Command::StampHorizontalPair),
        KeyCode::Char('d') => Some(Command::StampVerticalPair),
        _ => None,
    }
}

/// Decodes one raw terminal event against the viewport of the last draw.
pub fn decode_event(raw: &TerminalEvent, grid_area: Rect) -> Option<Event> {
    match raw {
        TerminalEvent::Key(key) if key.kind == KeyEventKind::Press => {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Some(Event::WindowClose);
            }
            decode_key(key.code).map(Event::Command)
        }
        TerminalEvent::Mouse(mouse) => decode_mouse(mouse, grid_area),
        _ => None,
    }
}

fn decode_mouse(mouse: &MouseEvent, grid_area: Rect) -> Option<Event> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            let (x, y) = GridWidget::screen_to_grid(mouse.column, mouse.row, grid_area);
            Some(Event::PointerMove { x, y })
        }
        _ => None,
    }
}
