use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};
use ratatui::Frame;

use crate::core::transcript::{Entry, Origin};
use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// A stateless component that renders a single transcript entry with
/// origin-based styling.
///
/// `Message` is a **transient component**: it's created fresh each frame
/// with the data it needs to render and holds no mutable state.
///
/// # Styling
///
/// The origin decides the visual treatment - that is all it is for:
/// - **Own** (green): messages typed on this client
/// - **Other** (blue): AI replies, room broadcasts, and system notices
///
/// # Height Calculation
///
/// [`calculate_height`](Self::calculate_height) predicts rendered height
/// using `textwrap` with options that match Ratatui's `Paragraph`
/// wrapping behavior, so the parent list can lay entries out without
/// rendering them first.
#[derive(Clone, Copy)]
pub struct Message<'a> {
    /// The entry to render
    pub entry: &'a Entry,
    /// Border title, e.g. "you", "companion", "room"
    pub label: &'a str,
}

impl<'a> Message<'a> {
    pub fn new(entry: &'a Entry, label: &'a str) -> Self {
        Self { entry, label }
    }

    /// Calculate the height required for this entry given a width.
    ///
    /// The wrapping options must match the `Ratatui` default for
    /// `Paragraph` to ensure 1:1 mapping between calculated and actual
    /// height.
    pub fn calculate_height(entry: &Entry, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Degenerate case: terminal too narrow for borders + padding.
            return 1;
        }

        let content = entry.content.trim();
        if content.is_empty() {
            return VERTICAL_OVERHEAD;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let lines = textwrap::wrap(content, options);
        (lines.len() as u16).max(1) + VERTICAL_OVERHEAD
    }

    fn origin_style(origin: Origin) -> Style {
        match origin {
            Origin::Own => Style::default().fg(Color::Green),
            Origin::Other => Style::default().fg(Color::Blue),
        }
    }
}

// Implement Widget for easy usage in ScrollView
impl<'a> Widget for Message<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let style = Self::origin_style(self.entry.origin);
        let border_style = style.add_modifier(Modifier::DIM);

        let content = self.entry.content.trim();

        let block = Block::bordered()
            .title(self.label)
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .title_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        let paragraph = Paragraph::new(content)
            .style(style)
            .wrap(Wrap { trim: true });

        paragraph.render(inner_area, buf);
    }
}

/// `Message` is stateless, so the `&mut self` required by the trait is a
/// no-op; rendering is delegated to the [`Widget`] implementation.
impl<'a> Component for Message<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}
