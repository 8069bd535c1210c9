//! # Session Identity
//!
//! A session is the active conversation context: which transport backs
//! it (AI companion over HTTP, or the shared human room over the
//! socket) plus the identifiers the server keys history on.
//!
//! Session ids are a pure function of (mode, client id), so selecting
//! the same mode twice always lands in the same conversation.

use chrono::Utc;

use crate::core::transcript::Origin;

/// The single shared room every human-mode client joins.
pub const SHARED_ROOM_ID: &str = "global_human_chat";

/// Which backend carries the active conversation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// AI companion over HTTP request/response.
    Ai,
    /// Human-to-human chat over the persistent room socket.
    Human,
}

impl Mode {
    /// Screen title for the chat view.
    pub fn title(self) -> &'static str {
        match self {
            Mode::Ai => "AI Companion",
            Mode::Human => "Human Connect",
        }
    }

    /// Derive the session id for this mode.
    ///
    /// AI conversations are private to the client; the human room is
    /// one global conversation shared by everyone.
    pub fn session_id(self, client_id: &str) -> String {
        match self {
            Mode::Ai => format!("ai_session_{client_id}"),
            Mode::Human => SHARED_ROOM_ID.to_string(),
        }
    }
}

/// The active conversation context. Exactly one exists at a time;
/// `None` means the landing screen is showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub mode: Mode,
    pub id: String,
    pub client_id: String,
}

impl Session {
    pub fn new(mode: Mode, client_id: &str) -> Self {
        Self {
            mode,
            id: mode.session_id(client_id),
            client_id: client_id.to_string(),
        }
    }

    /// Classify a stored history record by its sender field.
    ///
    /// The server records this client's messages as `"user"` (AI chat)
    /// or `"User <client_id>"` (room broadcasts); anything else came
    /// from another participant or the AI.
    pub fn classify_sender(&self, sender: &str) -> Origin {
        if sender == "user" || sender == format!("User {}", self.client_id) {
            Origin::Own
        } else {
            Origin::Other
        }
    }
}

/// Generate the per-process client id.
///
/// Timestamp-derived, matching what the server expects in the socket
/// path. Not globally unique and not persisted across restarts.
pub fn generate_client_id() -> String {
    Utc::now().timestamp_millis().to_string()
}
