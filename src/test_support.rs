//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{ApiError, ChatBackend, HistoryRecord};
use crate::core::state::App;

/// A no-op backend for tests that don't need a real server.
pub struct NoopBackend;

#[async_trait]
impl ChatBackend for NoopBackend {
    async fn history(&self, _session_id: &str) -> Result<Vec<HistoryRecord>, ApiError> {
        Ok(Vec::new())
    }

    async fn ai_reply(&self, _message: &str, _session_id: &str) -> Result<String, ApiError> {
        Ok(String::new())
    }
}

/// Creates a test App with a NoopBackend and a fixed client id.
pub fn test_app() -> App {
    App::new(Arc::new(NoopBackend), "1234".to_string())
}
