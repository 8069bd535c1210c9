//! # Landing Page Component
//!
//! The mode-selection screen shown when no session is active.

use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::core::session::Mode;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Choices in display order.
const CHOICES: [Mode; 2] = [Mode::Ai, Mode::Human];

pub struct Landing {
    /// Index into CHOICES
    selected: usize,
}

impl Default for Landing {
    fn default() -> Self {
        Self::new()
    }
}

impl Landing {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn selected_mode(&self) -> Mode {
        CHOICES[self.selected]
    }
}

impl Component for Landing {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut text_lines = Vec::new();

        text_lines.push(Line::from(Span::styled(
            "Parley",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        text_lines.push(Line::from(Span::styled(
            "who would you like to talk to?",
            Style::default().fg(Color::DarkGray),
        )));
        text_lines.push(Line::from(""));

        for (i, mode) in CHOICES.iter().enumerate() {
            let (marker, style) = if i == self.selected {
                ("▸ ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            } else {
                ("  ", Style::default().fg(Color::DarkGray))
            };
            text_lines.push(Line::from(Span::styled(
                format!("{}{}", marker, mode.title()),
                style,
            )));
        }

        text_lines.push(Line::from(""));
        text_lines.push(Line::from(Span::styled(
            "↑/↓ select · Enter join · 1/2 quick pick · Esc quit",
            Style::default().fg(Color::DarkGray),
        )));

        let version_text = format!("v{}", env!("CARGO_PKG_VERSION"));
        text_lines.push(Line::from(Span::styled(
            version_text,
            Style::default().fg(Color::DarkGray),
        )));

        let text_height = text_lines.len() as u16;
        let vertical_layout = Layout::vertical([Constraint::Length(text_height)])
            .flex(Flex::Center)
            .split(area);

        let paragraph = Paragraph::new(text_lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, vertical_layout[0]);
    }
}

impl EventHandler for Landing {
    type Event = Mode;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(CHOICES.len() - 1);
                None
            }
            TuiEvent::Submit => Some(self.selected_mode()),
            TuiEvent::InputChar('1') => Some(Mode::Ai),
            TuiEvent::InputChar('2') => Some(Mode::Human),
            _ => None,
        }
    }
}
