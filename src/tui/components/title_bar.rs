//! # TitleBar Component
//!
//! Top status bar showing the active conversation and its link state.
//!
//! TitleBar is purely presentational - it receives all data as props
//! and has no internal state. The colored dot is the status indicator:
//! blue for the AI companion, green while the room socket is up, yellow
//! while it is connecting, red when it has dropped.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::api::LinkState;
use crate::core::session::Mode;
use crate::tui::component::Component;

/// Top status bar component.
pub struct TitleBar {
    /// Chat screen title, e.g. "AI Companion"
    pub title: String,
    /// Transient status, e.g. "Waiting for reply..."
    pub status_message: String,
    /// Status indicator color
    pub indicator: Color,
}

impl TitleBar {
    pub fn new(title: String, status_message: String, indicator: Color) -> Self {
        Self {
            title,
            status_message,
            indicator,
        }
    }
}

/// Pick the indicator color for the active mode and link state.
pub fn indicator_color(mode: Mode, link: LinkState) -> Color {
    match (mode, link) {
        (Mode::Ai, _) => Color::Blue,
        (Mode::Human, LinkState::Connected) => Color::Green,
        (Mode::Human, LinkState::Connecting) => Color::Yellow,
        (Mode::Human, LinkState::Disconnected) => Color::Red,
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("● ", Style::default().fg(self.indicator)),
            Span::raw(format!("Parley - {}", self.title)),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!(" | {}", self.status_message),
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans.push(Span::styled(
            "  (Esc to leave)",
            Style::default().fg(Color::DarkGray),
        ));

        frame.render_widget(Line::from(spans), area);
    }
}
