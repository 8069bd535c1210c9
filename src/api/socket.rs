//! Room socket transport.
//!
//! Owns the persistent WebSocket backing human mode. `connect` spawns a
//! single task that drives the socket; inbound frames and lifecycle
//! transitions come back to the event loop as `Action`s over the same
//! channel the HTTP tasks use, so the reducer stays the only place
//! state changes.
//!
//! There is no proactive reconnect: when the socket drops, the task
//! reports `SocketClosed` and the next failed send triggers a fresh
//! `connect` (see the dispatcher arm of the reducer).

use std::sync::mpsc;

use futures::{SinkExt, StreamExt};
use log::{debug, info, warn};
use tokio::sync::mpsc as async_mpsc;
use tokio::task::AbortHandle;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use crate::core::action::Action;

/// Readiness of the room socket, as seen by the dispatcher.
///
/// DISCONNECTED → (connect) → CONNECTING → (open) → CONNECTED →
/// (close, explicit or failure) → DISCONNECTED.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// Outbound frames queued for the writer. Sends past this are dropped
/// (the transport is fire-and-forget).
const OUTBOUND_BUFFER: usize = 64;

/// Handle to a live (or connecting) room socket.
///
/// Owned by the TUI shell; at most one exists per session. Dropping or
/// closing it tears the socket task down without a `SocketClosed`
/// round-trip - the reducer has already recorded the teardown.
pub struct Connection {
    outbound: async_mpsc::Sender<String>,
    task: AbortHandle,
}

impl Connection {
    /// Queue one raw text frame. No acknowledgment is awaited; a full
    /// or closed queue is logged and the frame dropped.
    pub fn send(&self, text: String) {
        if let Err(e) = self.outbound.try_send(text) {
            warn!("Dropping outbound frame: {}", e);
        }
    }

    /// Tear down the socket task.
    pub fn close(self) {
        self.task.abort();
    }
}

/// Derive the socket endpoint from the HTTP base URL: the scheme
/// follows the server origin (http → ws, https → wss).
pub fn room_url(base_url: &str, client_id: &str) -> String {
    let ws_base = if base_url.starts_with("https") {
        base_url.replacen("https", "wss", 1)
    } else {
        base_url.replacen("http", "ws", 1)
    };
    format!("{}/ws/{}", ws_base.trim_end_matches('/'), client_id)
}

/// Split an inbound frame into sender label and body.
///
/// The broadcast format is `"<label>: <body>"`; the split is on the
/// first `": "` only, so bodies containing the delimiter survive
/// intact. Frames without the delimiter are opaque system text.
pub fn split_frame(raw: &str) -> (Option<&str>, &str) {
    match raw.split_once(": ") {
        Some((label, body)) => (Some(label), body),
        None => (None, raw),
    }
}

/// Open the room socket and drive it until it closes.
///
/// Emits `SocketOpened` once the handshake completes, `FrameReceived`
/// per inbound text frame, and `SocketClosed` when the connection ends
/// for any reason - including a failed handshake.
pub fn connect(url: String, tx: mpsc::Sender<Action>) -> Connection {
    let (out_tx, mut out_rx) = async_mpsc::channel::<String>(OUTBOUND_BUFFER);

    let handle = tokio::spawn(async move {
        info!("Connecting room socket: {}", url);
        let (stream, _) = match connect_async(&url).await {
            Ok(ok) => ok,
            Err(e) => {
                warn!("Room socket connect failed: {}", e);
                let _ = tx.send(Action::SocketClosed);
                return;
            }
        };
        info!("Room socket open");
        if tx.send(Action::SocketOpened).is_err() {
            return;
        }

        let (mut write, mut read) = stream.split();
        loop {
            tokio::select! {
                inbound = read.next() => match inbound {
                    Some(Ok(Message::Text(text))) => {
                        debug!("Inbound frame: {} bytes", text.len());
                        if tx.send(Action::FrameReceived(text)).is_err() {
                            return;
                        }
                    }
                    Some(Ok(Message::Ping(data))) => {
                        let _ = write.send(Message::Pong(data)).await;
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        info!("Room socket closed by server");
                        break;
                    }
                    Some(Err(e)) => {
                        warn!("Room socket error: {}", e);
                        break;
                    }
                    Some(Ok(_)) => {}
                },
                frame = out_rx.recv() => match frame {
                    Some(text) => {
                        if let Err(e) = write.send(Message::Text(text)).await {
                            warn!("Room socket send failed: {}", e);
                            break;
                        }
                    }
                    // Handle dropped; close politely and stop.
                    None => {
                        let _ = write.send(Message::Close(None)).await;
                        return;
                    }
                },
            }
        }
        let _ = tx.send(Action::SocketClosed);
    });

    Connection {
        outbound: out_tx,
        task: handle.abort_handle(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_url_plain_http() {
        assert_eq!(
            room_url("http://localhost:8000", "1234"),
            "ws://localhost:8000/ws/1234"
        );
    }

    #[test]
    fn test_room_url_https_upgrades_to_wss() {
        assert_eq!(
            room_url("https://chat.example.com", "1234"),
            "wss://chat.example.com/ws/1234"
        );
    }

    #[test]
    fn test_room_url_trailing_slash() {
        assert_eq!(
            room_url("http://localhost:8000/", "7"),
            "ws://localhost:8000/ws/7"
        );
    }

    #[test]
    fn test_split_frame_on_first_delimiter() {
        assert_eq!(split_frame("Alice: hi"), (Some("Alice"), "hi"));
        assert_eq!(
            split_frame("User 1234: note: remember"),
            (Some("User 1234"), "note: remember")
        );
    }

    #[test]
    fn test_split_frame_without_delimiter_is_opaque() {
        assert_eq!(split_frame("system offline"), (None, "system offline"));
        assert_eq!(split_frame(""), (None, ""));
    }

    #[test]
    fn test_split_frame_colon_without_space_is_opaque() {
        assert_eq!(split_frame("Alice:hi"), (None, "Alice:hi"));
    }
}
