use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use crate::core::session::Mode;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::title_bar::indicator_color;
use crate::tui::components::{MessageList, TitleBar};
use crate::tui::TuiState;

/// Border title for entries from the far side of the conversation.
fn other_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Ai => "companion",
        Mode::Human => "room",
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let Some(session) = &app.session else {
        // No active session: the landing screen owns the whole frame
        tui.landing.render(frame, frame.area());
        return;
    };

    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3)]);
    let [title_area, main_area, input_area] = layout.areas(frame.area());

    let mut title_bar = TitleBar::new(
        session.mode.title().to_string(),
        app.status_message.clone(),
        indicator_color(session.mode, app.link),
    );
    title_bar.render(frame, title_area);

    let mut list = MessageList::new(
        &mut tui.message_list,
        &app.transcript,
        other_label(session.mode),
    );
    list.render(frame, main_area);

    tui.input_box.render(frame, input_area);
}
