//! # Application State
//!
//! Core business state for Parley. This module contains domain state
//! only - no TUI-specific types. Presentation state lives in the `tui`
//! module.
//!
//! ```text
//! App
//! ├── backend: Arc<dyn ChatBackend>   // HTTP collaborator (history + AI)
//! ├── client_id: String               // stable for this process
//! ├── session: Option<Session>        // None = landing screen
//! ├── transcript: Transcript          // visible conversation
//! ├── link: LinkState                 // room socket readiness
//! ├── awaiting_reply: bool            // AI request in flight
//! └── status_message: String          // title bar text
//! ```
//!
//! State changes only happen through `update(app, action)` in
//! action.rs. This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::api::{ChatBackend, LinkState};
use crate::core::session::Session;
use crate::core::transcript::Transcript;

pub struct App {
    pub backend: Arc<dyn ChatBackend>,
    pub client_id: String,
    /// Active conversation; `None` while the landing screen shows.
    pub session: Option<Session>,
    pub transcript: Transcript,
    /// Readiness of the room socket. Meaningful only in human mode.
    pub link: LinkState,
    /// True between an AI request going out and its reply (or failure).
    pub awaiting_reply: bool,
    pub status_message: String,
}

impl App {
    pub fn new(backend: Arc<dyn ChatBackend>, client_id: String) -> Self {
        Self {
            backend,
            client_id,
            session: None,
            transcript: Transcript::new(),
            link: LinkState::Disconnected,
            awaiting_reply: false,
            status_message: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::api::LinkState;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.session.is_none());
        assert!(app.transcript.is_empty());
        assert_eq!(app.link, LinkState::Disconnected);
        assert!(!app.awaiting_reply);
    }
}
