//! HTTP client for the chat server: history reads and AI chat.
//!
//! Both calls are plain request/response - no retry, no timeout. The
//! `ChatBackend` trait is the seam the reducer shell is tested through.

use std::fmt;

use async_trait::async_trait;
use log::{debug, info};

use super::types::{AiChatRequest, AiChatResponse, HistoryRecord};

/// Errors from the chat server's HTTP API.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// The server answered with a non-success status.
    Api { status: u16, message: String },
    /// The response body didn't match the expected shape.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// The chat server's request/response surface.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Fetch stored messages for a session, oldest first.
    async fn history(&self, session_id: &str) -> Result<Vec<HistoryRecord>, ApiError>;

    /// Send one message to the AI companion and return its reply.
    async fn ai_reply(&self, message: &str, session_id: &str) -> Result<String, ApiError>;
}

/// Reqwest-backed implementation against a configured base URL.
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ChatBackend for ApiClient {
    async fn history(&self, session_id: &str) -> Result<Vec<HistoryRecord>, ApiError> {
        let url = format!("{}/api/history/{}", self.base_url, session_id);
        debug!("Fetching history: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ApiError::Api { status, message });
        }

        let records: Vec<HistoryRecord> = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        info!("History loaded: {} records for {}", records.len(), session_id);
        Ok(records)
    }

    async fn ai_reply(&self, message: &str, session_id: &str) -> Result<String, ApiError> {
        let url = format!("{}/api/chat/ai", self.base_url);
        let body = AiChatRequest {
            message: message.to_string(),
            session_id: session_id.to_string(),
        };
        debug!("AI chat request: session={}", session_id);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ApiError::Api { status, message });
        }

        let reply: AiChatResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        Ok(reply.response)
    }
}
