//! # InputBox Component
//!
//! Single-line text input for composing messages.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter)
//!
//! The buffer is internal state; submitting takes it, which is what
//! clears the field after a send. Whitespace-only submits emit nothing
//! and leave the buffer alone.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
    /// Text content changed
    ContentChanged,
}

/// Single-line text input component.
pub struct InputBox {
    /// Text buffer (internal state)
    pub buffer: String,
    /// Cursor byte position within the buffer
    cursor: usize,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }

    /// Display column of the cursor, in terminal cells.
    fn cursor_col(&self) -> u16 {
        self.buffer[..self.cursor].width() as u16
    }

    fn prev_char_boundary(&self, pos: usize) -> usize {
        let mut prev = pos - 1;
        while !self.buffer.is_char_boundary(prev) {
            prev -= 1;
        }
        prev
    }

    fn next_char_boundary(&self, pos: usize) -> usize {
        let mut next = pos + 1;
        while next < self.buffer.len() && !self.buffer.is_char_boundary(next) {
            next += 1;
        }
        next
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2); // borders

        // Shift the visible window left once the cursor passes the edge
        let cursor_col = self.cursor_col();
        let x_scroll = cursor_col.saturating_sub(inner_width.saturating_sub(1));

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .title("Message");

        let input = Paragraph::new(self.buffer.as_str())
            .block(block)
            .scroll((0, x_scroll))
            .style(Style::default().fg(Color::Green));

        frame.render_widget(input, area);
        frame.set_cursor_position((area.x + 1 + cursor_col - x_scroll, area.y + 1));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line field: pasted line breaks become spaces
                let text = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = self.prev_char_boundary(self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = self.next_char_boundary(self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = self.prev_char_boundary(self.cursor);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = self.next_char_boundary(self.cursor);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => {
                (self.cursor != 0).then(|| {
                    self.cursor = 0;
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::CursorEnd => {
                (self.cursor != self.buffer.len()).then(|| {
                    self.cursor = self.buffer.len();
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::Submit => {
                if !self.buffer.trim().is_empty() {
                    let text = std::mem::take(&mut self.buffer);
                    self.cursor = 0;
                    Some(InputEvent::Submit(text))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_input_box_new() {
        let input = InputBox::new();
        assert!(input.buffer.is_empty());
    }

    #[test]
    fn test_handle_input() {
        let mut input = InputBox::new();

        let res = input.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");

        input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(input.buffer, "ab");

        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn test_cursor_movement_edits_mid_buffer() {
        let mut input = InputBox::new();
        for c in "helo".chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::InputChar('l'));
        assert_eq!(input.buffer, "hello");

        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "ello");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::InputChar('é'));
        input.handle_event(&TuiEvent::InputChar('!'));
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "!");
    }

    #[test]
    fn test_submit_takes_buffer() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("hello".to_string()));

        let res = input.handle_event(&TuiEvent::Submit);
        match res {
            Some(InputEvent::Submit(text)) => assert_eq!(text, "hello"),
            other => panic!("Expected Submit event, got {:?}", other),
        }
        assert!(input.buffer.is_empty(), "Buffer should be cleared after submit");
    }

    #[test]
    fn test_whitespace_submit_is_ignored() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("   ".to_string()));
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
        // Field untouched, matching the no-op contract
        assert_eq!(input.buffer, "   ");
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("a\nb".to_string()));
        assert_eq!(input.buffer, "a b");
    }

    #[test]
    fn test_render_shows_title() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = InputBox::new();

        terminal
            .draw(|f| {
                input.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Message"));
    }
}
