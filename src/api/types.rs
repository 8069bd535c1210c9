//! Wire types for the chat server's HTTP API.

use serde::{Deserialize, Serialize};

/// One stored message, as returned by `GET /api/history/{session_id}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HistoryRecord {
    pub content: String,
    pub sender: String,
}

/// Request body for `POST /api/chat/ai`.
#[derive(Serialize, Debug)]
pub struct AiChatRequest {
    pub message: String,
    pub session_id: String,
}

/// Response body from the AI companion endpoint.
#[derive(Deserialize, Debug)]
pub struct AiChatResponse {
    pub response: String,
}
