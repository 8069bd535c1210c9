//! # TUI Components
//!
//! Components follow two patterns:
//!
//! - **Stateless (props-based)**: created fresh each frame with the data
//!   they need - `TitleBar`, `Message`.
//! - **Stateful (event-driven)**: hold local state and emit high-level
//!   events - `Landing`, `InputBox`, `MessageList`.
//!
//! Components receive external data as props (struct fields), not by
//! reaching into global state; this keeps dependencies explicit and the
//! components testable against `ratatui::backend::TestBackend`.

pub mod input_box;
pub mod landing;
pub mod message;
pub mod message_list;
pub mod title_bar;

pub use input_box::{InputBox, InputEvent};
pub use landing::Landing;
pub use message_list::{MessageList, MessageListState};
pub use title_bar::TitleBar;
