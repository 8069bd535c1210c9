//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! One synchronous loop drives everything. Terminal events become
//! actions, actions run through `core::update`, and the returned
//! effects are executed here by spawning tokio tasks (history fetch,
//! AI request, room socket). Tasks report back over an `mpsc` channel
//! of actions, so every state change - user-initiated or not - goes
//! through the same reducer.
//!
//! The room socket and any in-flight HTTP tasks are session-scoped:
//! their abort handles are collected and dropped on `Disconnect`, so a
//! stale response can never land on a cleared transcript.

mod component;
mod components;
mod event;
mod ui;

use std::io::stdout;
use std::sync::{mpsc, Arc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use log::{debug, info, warn};
use tokio::task::AbortHandle;

use crate::api::{socket, ApiClient, ChatBackend, Connection};
use crate::core::action::{update, Action, Effect};
use crate::core::config::ResolvedConfig;
use crate::core::session::generate_client_id;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, Landing, MessageListState};
use crate::tui::event::{poll_event_immediate, poll_event_timeout, TuiEvent};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub landing: Landing,
    pub message_list: MessageListState,
    pub input_box: InputBox,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            landing: Landing::new(),
            message_list: MessageListState::new(),
            input_box: InputBox::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend: Arc<dyn ChatBackend> = Arc::new(ApiClient::new(config.server_base_url.clone()));
    let mut app = App::new(backend, generate_client_id());
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Session-scoped resources: the room socket plus in-flight
    // history/AI tasks, all torn down on Disconnect.
    let mut connection: Option<Connection> = None;
    let mut session_tasks: Vec<AbortHandle> = Vec::new();
    let mut should_quit = false;

    // --mode flag or config default: enter the session directly
    if let Some(mode) = config.default_mode {
        for effect in update(&mut app, Action::SelectMode(mode)) {
            run_effect(
                effect,
                &app,
                &config,
                &tx,
                &mut connection,
                &mut session_tasks,
                &mut should_quit,
            );
        }
    }

    let mut needs_redraw = true;
    while !should_quit {
        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(tui_event, TuiEvent::Resize) {
                continue;
            }

            let action = match tui_event {
                TuiEvent::ForceQuit => Some(Action::Quit),
                // Esc leaves the chat screen, or the program from the landing screen
                TuiEvent::Escape => Some(if app.session.is_some() {
                    Action::GoBack
                } else {
                    Action::Quit
                }),
                ev @ (TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown) => {
                    tui.message_list.handle_event(&ev);
                    None
                }
                ev if app.session.is_none() => {
                    tui.landing.handle_event(&ev).map(Action::SelectMode)
                }
                // Arrow keys scroll the transcript in chat
                TuiEvent::CursorUp => {
                    tui.message_list.handle_event(&TuiEvent::ScrollUp);
                    None
                }
                TuiEvent::CursorDown => {
                    tui.message_list.handle_event(&TuiEvent::ScrollDown);
                    None
                }
                ev => match tui.input_box.handle_event(&ev) {
                    Some(InputEvent::Submit(text)) => Some(Action::Submit(text)),
                    _ => None,
                },
            };

            let Some(action) = action else { continue };
            debug!("Event loop received: {:?}", action);
            let entering_session = matches!(action, Action::SelectMode(_));
            for effect in update(&mut app, action) {
                run_effect(
                    effect,
                    &app,
                    &config,
                    &tx,
                    &mut connection,
                    &mut session_tasks,
                    &mut should_quit,
                );
            }
            if entering_session {
                tui.message_list = MessageListState::new();
            }
        }

        // Handle background task actions (fetch results, socket frames)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            for effect in update(&mut app, action) {
                run_effect(
                    effect,
                    &app,
                    &config,
                    &tx,
                    &mut connection,
                    &mut session_tasks,
                    &mut should_quit,
                );
            }
        }
    }

    if let Some(conn) = connection.take() {
        conn.close();
    }
    ratatui::restore();
    Ok(())
}

fn run_effect(
    effect: Effect,
    app: &App,
    config: &ResolvedConfig,
    tx: &mpsc::Sender<Action>,
    connection: &mut Option<Connection>,
    session_tasks: &mut Vec<AbortHandle>,
    should_quit: &mut bool,
) {
    match effect {
        Effect::FetchHistory { session_id } => {
            session_tasks.push(spawn_history_fetch(
                app.backend.clone(),
                session_id,
                tx.clone(),
            ));
        }
        Effect::SendAi {
            message,
            session_id,
        } => {
            session_tasks.push(spawn_ai_request(
                app.backend.clone(),
                message,
                session_id,
                tx.clone(),
            ));
        }
        Effect::SendFrame(text) => match connection {
            Some(conn) => conn.send(text),
            // The reducer only emits SendFrame while CONNECTED, so this
            // means the shell and reducer disagree about the link.
            None => warn!("Outbound frame with no connection; dropped"),
        },
        Effect::Connect { client_id } => {
            // Replace any previous socket so at most one exists per session
            if let Some(old) = connection.take() {
                old.close();
            }
            let url = socket::room_url(&config.server_base_url, &client_id);
            *connection = Some(socket::connect(url, tx.clone()));
        }
        Effect::Disconnect => {
            if let Some(conn) = connection.take() {
                conn.close();
            }
            for handle in session_tasks.drain(..) {
                handle.abort();
            }
        }
        Effect::Quit => *should_quit = true,
    }
}

fn spawn_history_fetch(
    backend: Arc<dyn ChatBackend>,
    session_id: String,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!("Spawning history fetch for {}", session_id);
    tokio::spawn(async move {
        match backend.history(&session_id).await {
            Ok(records) => {
                if tx.send(Action::HistoryLoaded(records)).is_err() {
                    warn!("Failed to deliver history: receiver dropped");
                }
            }
            Err(e) => {
                // Log-only: history failures have no user-visible surface
                warn!("History fetch failed for {}: {}", session_id, e);
            }
        }
    })
    .abort_handle()
}

fn spawn_ai_request(
    backend: Arc<dyn ChatBackend>,
    message: String,
    session_id: String,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!("Spawning AI request for {}", session_id);
    tokio::spawn(async move {
        let action = match backend.ai_reply(&message, &session_id).await {
            Ok(reply) => Action::AiReply(reply),
            Err(e) => {
                warn!("AI request failed: {}", e);
                Action::AiFailed
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver AI result: receiver dropped");
        }
    })
    .abort_handle()
}
