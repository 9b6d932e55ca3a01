//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record rendered by the list and the editor.
//!
//! # Invariants
//! - `id` is unique within one store and never mutated after creation.
//! - `title` and `content` carry no length or character constraints.

use serde::{Deserialize, Serialize};

/// Integer identifier of a note inside one store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = i64;

/// Single user note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Store-local identity, assigned when the draft is created.
    pub id: NoteId,
    /// Headline shown in the list.
    pub title: String,
    /// Body text edited in the dialog.
    pub content: String,
}

impl Note {
    /// Creates a note with the given identity and field values.
    pub fn new(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Creates an empty draft note for a freshly opened editor.
    ///
    /// # Invariants
    /// - `title` and `content` start empty.
    pub fn blank(id: NoteId) -> Self {
        Self::new(id, String::new(), String::new())
    }

    /// Returns a copy keeping this note's identity with new field values.
    pub fn with_fields(&self, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(self.id, title, content)
    }
}
