//! # Transcript
//!
//! The visible conversation: an append-only list of entries for the
//! lifetime of the active session. Entries are UI-only - history
//! persistence belongs to the server.

/// Who a transcript entry came from. Used purely for visual styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// Typed locally by this client (optimistic echo included).
    Own,
    /// Everything else: AI replies, room broadcasts, system notices.
    Other,
}

/// One visible message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub content: String,
    pub origin: Origin,
}

/// The visible conversation for the active session.
///
/// No size limit and no truncation - the transcript lives only as long
/// as the session and is cleared on `GoBack`.
#[derive(Debug, Default)]
pub struct Transcript {
    pub entries: Vec<Entry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry.
    pub fn push(&mut self, content: impl Into<String>, origin: Origin) {
        self.entries.push(Entry {
            content: content.into(),
            origin,
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
