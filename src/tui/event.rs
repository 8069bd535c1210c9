use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEventKind};

/// TUI-specific input events
pub enum TuiEvent {
    // Always-on controls
    ForceQuit, // Ctrl+C
    Submit,    // Enter
    Escape,    // Esc - back from chat, quit from landing

    // Input editing
    InputChar(char),
    Paste(String), // Bracketed paste
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    // Landing selection
    CursorUp,
    CursorDown,

    // Transcript scrolling
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,

    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                match (key_event.modifiers, key_event.code) {
                    // Ctrl+C always quits
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                    (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                    (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                    (_, KeyCode::Delete) => Some(TuiEvent::Delete),
                    (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                    (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                    (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                    (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                    (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
                    (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
                    (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                    (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                    (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
                    (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
                    _ => None,
                }
            }
            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
                MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
                _ => None,
            },
            Event::Paste(data) => Some(TuiEvent::Paste(data)),
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}
