//! The journal entry data entity.

use chrono::NaiveDateTime;

/// The text + timestamp unit of journal content.
///
/// Entries carry no id of their own: ids are assigned and owned by the
/// storage collaborator, which takes the id alongside the entry for every
/// operation that addresses one. No in-memory entry outlives a single
/// command invocation; each command reloads what it needs from storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    /// Free-text body authored by the user.
    pub text: String,

    /// Creation/modification moment. `Default` is the epoch sentinel; the
    /// authoring flows stamp the current time before persisting, so the
    /// sentinel never reaches storage.
    pub timestamp: NaiveDateTime,
}

impl Entry {
    /// Creates an entry with the given body and the sentinel timestamp.
    pub fn with_text(text: impl Into<String>) -> Self {
        Entry {
            text: text.into(),
            ..Entry::default()
        }
    }
}
