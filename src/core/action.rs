//! # Actions
//!
//! Everything that can happen in Parley becomes an `Action`. The user
//! picks a mode? That's `Action::SelectMode`. A broadcast arrives on
//! the room socket? That's `Action::FrameReceived`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state, returning the effects the shell must carry out.
//! No I/O happens here - the TUI event loop executes effects by
//! spawning tasks that feed actions back in.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effects
//! ```
//!
//! This is where the dual-transport routing lives: which backend a
//! submitted message goes to, what the optimistic echo looks like, and
//! how a dropped socket is recovered (lazily, on the next send).

use crate::api::socket::split_frame;
use crate::api::types::HistoryRecord;
use crate::api::LinkState;
use crate::core::session::{Mode, Session};
use crate::core::state::App;
use crate::core::transcript::Origin;

/// Fixed notice rendered when the AI endpoint fails.
pub const AI_ERROR_NOTICE: &str = "Error communicating with AI.";

/// Fixed notice rendered when a room send finds the socket down.
pub const RECONNECT_NOTICE: &str = "Connection lost. Reconnecting...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// User picked a conversation mode on the landing screen.
    SelectMode(Mode),
    /// User left the chat screen for the landing screen.
    GoBack,
    /// User submitted the input field.
    Submit(String),
    /// History fetch resolved.
    HistoryLoaded(Vec<HistoryRecord>),
    /// AI companion answered.
    AiReply(String),
    /// AI request failed (network or bad payload).
    AiFailed,
    /// Room socket handshake completed.
    SocketOpened,
    /// Room socket ended, by the server or the network.
    SocketClosed,
    /// Raw text frame from the room socket.
    FrameReceived(String),
    /// Shut the whole program down.
    Quit,
}

/// Side effects the shell performs after a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch stored messages for the session.
    FetchHistory { session_id: String },
    /// Post one message to the AI companion.
    SendAi { message: String, session_id: String },
    /// Write one raw text frame to the room socket.
    SendFrame(String),
    /// Open the room socket for this client.
    Connect { client_id: String },
    /// Close the room socket and abort session-scoped tasks.
    Disconnect,
    /// Exit the event loop.
    Quit,
}

/// Apply an action to the state, returning the effects to run.
pub fn update(app: &mut App, action: Action) -> Vec<Effect> {
    match action {
        Action::SelectMode(mode) => {
            let session = Session::new(mode, &app.client_id);
            let mut effects = Vec::new();
            if mode == Mode::Human {
                app.link = LinkState::Connecting;
                effects.push(Effect::Connect {
                    client_id: app.client_id.clone(),
                });
            }
            effects.push(Effect::FetchHistory {
                session_id: session.id.clone(),
            });
            app.session = Some(session);
            app.status_message.clear();
            effects
        }

        Action::GoBack => {
            app.session = None;
            app.transcript.clear();
            app.link = LinkState::Disconnected;
            app.awaiting_reply = false;
            app.status_message.clear();
            vec![Effect::Disconnect]
        }

        Action::Submit(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Vec::new();
            }
            let Some(session) = &app.session else {
                return Vec::new();
            };

            // Optimistic echo: the room server never sends a frame back
            // to its author, so this is the only rendering of the
            // user's own message.
            app.transcript.push(text, Origin::Own);

            match session.mode {
                Mode::Ai => {
                    app.awaiting_reply = true;
                    app.status_message = "Waiting for reply...".to_string();
                    vec![Effect::SendAi {
                        message: text.to_string(),
                        session_id: session.id.clone(),
                    }]
                }
                Mode::Human => {
                    if app.link == LinkState::Connected {
                        vec![Effect::SendFrame(text.to_string())]
                    } else {
                        // Lazy reconnect: the drop is only surfaced (and
                        // repaired) when the user next tries to send.
                        app.transcript.push(RECONNECT_NOTICE, Origin::Other);
                        app.link = LinkState::Connecting;
                        vec![Effect::Connect {
                            client_id: session.client_id.clone(),
                        }]
                    }
                }
            }
        }

        Action::HistoryLoaded(records) => {
            let Some(session) = &app.session else {
                // Stale resolution after GoBack; nothing to seed.
                return Vec::new();
            };
            app.transcript.clear();
            for record in &records {
                app.transcript
                    .push(record.content.clone(), session.classify_sender(&record.sender));
            }
            Vec::new()
        }

        Action::AiReply(reply) => {
            app.awaiting_reply = false;
            app.status_message.clear();
            app.transcript.push(reply, Origin::Other);
            Vec::new()
        }

        Action::AiFailed => {
            app.awaiting_reply = false;
            app.status_message.clear();
            app.transcript.push(AI_ERROR_NOTICE, Origin::Other);
            Vec::new()
        }

        Action::SocketOpened => {
            app.link = LinkState::Connected;
            Vec::new()
        }

        Action::SocketClosed => {
            app.link = LinkState::Disconnected;
            Vec::new()
        }

        Action::FrameReceived(raw) => {
            if app.session.is_none() {
                return Vec::new();
            }
            // The sender label is dropped for display; the server never
            // echoes our own broadcasts, so everything inbound is Other.
            let (_label, body) = split_frame(&raw);
            app.transcript.push(body, Origin::Other);
            Vec::new()
        }

        Action::Quit => vec![Effect::Quit],
    }
}
