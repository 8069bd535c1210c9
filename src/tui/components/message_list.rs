//! # MessageList Component
//!
//! Scrollable view of the transcript.
//!
//! ## Responsibilities
//!
//! - Display transcript entries in order
//! - Keep the viewport pinned to the newest entry after every append
//!   (stick-to-bottom, re-engaged when the user scrolls back down)
//! - Manage scrolling
//!
//! ## Architecture
//!
//! `MessageList` is a transient component (created each frame) that
//! wraps `&'a mut MessageListState` (persistent state) and the
//! transcript (props). No virtualization and no size limit - the
//! transcript only lives for one session.

use ratatui::layout::{Position, Rect, Size};
use ratatui::Frame;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::transcript::{Origin, Transcript};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::Message;
use crate::tui::event::TuiEvent;

/// Layout and scroll state for the message list.
/// Must be persisted in the parent TuiState.
pub struct MessageListState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// Per-entry rendered heights, rebuilt each frame
    pub heights: Vec<u16>,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            heights: Vec::new(),
            stick_to_bottom: true, // Start attached to bottom
            viewport_height: 0,
        }
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let total_content_height: u16 = self.heights.iter().sum();
        let max_y = total_content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Clamp scroll and re-engage auto-scroll if the user has reached the
    /// bottom. Called on scroll-down events so that scrolling past the
    /// end re-pins to bottom.
    pub fn repin_if_at_bottom(&mut self) {
        let total_content_height: u16 = self.heights.iter().sum();
        let max_y = total_content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

/// Scrollable transcript view. Created fresh each frame with references
/// to state and data.
pub struct MessageList<'a> {
    pub state: &'a mut MessageListState,
    pub transcript: &'a Transcript,
    /// Border title for entries from the far side ("companion" or "room")
    pub other_label: &'a str,
}

impl<'a> MessageList<'a> {
    pub fn new(
        state: &'a mut MessageListState,
        transcript: &'a Transcript,
        other_label: &'a str,
    ) -> Self {
        Self {
            state,
            transcript,
            other_label,
        }
    }

    fn label_for(&self, origin: Origin) -> &'a str {
        match origin {
            Origin::Own => "you",
            Origin::Other => self.other_label,
        }
    }
}

impl<'a> Component for MessageList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area

        // 1. Measure every entry at the current width
        self.state.heights = self
            .transcript
            .entries
            .iter()
            .map(|entry| Message::calculate_height(entry, content_width))
            .collect();
        let total_height: u16 = self.state.heights.iter().sum();

        // 2. Clamp scroll offset to prevent overscrolling past content
        self.state.viewport_height = area.height;
        if !self.state.stick_to_bottom {
            self.state.clamp_scroll();
        }

        // 3. Render entries into a ScrollView
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height.max(1)))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (entry, &height) in self.transcript.entries.iter().zip(&self.state.heights) {
            let entry_rect = Rect::new(0, y_offset, content_width, height);
            let message = Message::new(entry, self.label_for(entry.origin));
            scroll_view.render_widget(message, entry_rect);
            y_offset += height;
        }

        // Auto-scroll (mutation)
        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// EventHandler lives on `MessageListState` rather than `MessageList`
/// because event handling needs persistent state (scroll position,
/// stick_to_bottom flag) while `MessageList` is recreated each frame.
impl EventHandler for MessageListState {
    type Event = (); // Scrolling is handled internally, no events emitted

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
                None
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

    fn transcript_with(entries: &[(&str, Origin)]) -> Transcript {
        let mut transcript = Transcript::new();
        for (content, origin) in entries {
            transcript.push(*content, *origin);
        }
        transcript
    }

    #[test]
    fn test_render_empty_transcript() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = MessageListState::new();
        let transcript = Transcript::new();

        terminal
            .draw(|f| {
                let mut list = MessageList::new(&mut state, &transcript, "room");
                list.render(f, f.area());
            })
            .unwrap();

        assert!(state.heights.is_empty());
    }

    #[test]
    fn test_render_measures_every_entry() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = MessageListState::new();
        let transcript = transcript_with(&[
            ("hello", Origin::Own),
            ("hi there", Origin::Other),
        ]);

        terminal
            .draw(|f| {
                let mut list = MessageList::new(&mut state, &transcript, "room");
                list.render(f, f.area());
            })
            .unwrap();

        assert_eq!(state.heights.len(), 2);
        // One content line + top/bottom borders each
        assert_eq!(state.heights, vec![3, 3]);
    }

    #[test]
    fn test_render_shows_origin_labels() {
        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = MessageListState::new();
        let transcript = transcript_with(&[
            ("hello", Origin::Own),
            ("hi", Origin::Other),
        ]);

        terminal
            .draw(|f| {
                let mut list = MessageList::new(&mut state, &transcript, "companion");
                list.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("you"));
        assert!(text.contains("companion"));
    }

    #[test]
    fn test_scroll_up_disengages_stick_to_bottom() {
        let mut state = MessageListState::new();
        assert!(state.stick_to_bottom);
        state.handle_event(&TuiEvent::ScrollUp);
        assert!(!state.stick_to_bottom);
    }

    #[test]
    fn test_scroll_down_at_bottom_repins() {
        let mut state = MessageListState::new();
        state.stick_to_bottom = false;
        // Short content: offset 0 is already the bottom
        state.heights = vec![3];
        state.viewport_height = 24;
        state.handle_event(&TuiEvent::ScrollDown);
        assert!(state.stick_to_bottom);
    }
}
