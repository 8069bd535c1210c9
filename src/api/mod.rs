//! # Server API
//!
//! Everything that talks to the chat server lives here: the HTTP
//! client (history + AI companion endpoints), the room socket
//! transport, and the wire types both share.
//!
//! The core reducer never performs I/O itself - it consumes the
//! `ChatBackend` seam and the socket's `LinkState`, and the TUI shell
//! drives the actual calls.

pub mod client;
pub mod socket;
pub mod types;

pub use client::{ApiClient, ApiError, ChatBackend};
pub use socket::{Connection, LinkState};
pub use types::HistoryRecord;
