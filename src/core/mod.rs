//! # Core Application Logic
//!
//! This module contains Parley's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │    API     │
//!             │  Adapter   │          │  (HTTP +   │
//!             │ (ratatui)  │          │   socket)  │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct - all application state in one place
//! - [`action`]: The `Action` enum - everything that can happen in the app
//! - [`session`]: Conversation modes and deterministic session identity
//! - [`transcript`]: The visible conversation
//! - [`config`]: TOML config with defaults → file → env → CLI resolution

pub mod action;
pub mod config;
pub mod session;
pub mod state;
pub mod transcript;
