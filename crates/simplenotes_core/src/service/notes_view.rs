//! Notes screen projection.
//!
//! # Responsibility
//! - Derive list rows, the empty-state label and the editor dialog from a
//!   `NoteStore` snapshot.
//!
//! # Invariants
//! - Projection is read-only; it never mutates the store.
//! - Row order equals store order.
//! - `empty_state` is set only when there are no notes.
//! - `editor` is set exactly when a draft is open and always carries the
//!   field and action labels.

use crate::model::note::NoteId;
use crate::store::note_store::NoteStore;
use serde::Serialize;

/// Label shown centered on the screen while the list is empty.
pub const EMPTY_STATE_LABEL: &str = "Notes App";
/// Heading of the editor dialog, for both new and existing notes.
pub const EDITOR_HEADING: &str = "Edit Note";
pub const TITLE_FIELD_LABEL: &str = "Title";
pub const CONTENT_FIELD_LABEL: &str = "Content";
pub const SAVE_ACTION_LABEL: &str = "Save";
pub const DISMISS_ACTION_LABEL: &str = "Dismiss";

/// One list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteListItem {
    /// Id passed back to `open_existing` when the row is tapped.
    pub id: NoteId,
    /// Row headline; the note title verbatim, even when empty.
    pub headline: String,
}

/// Editor dialog contents pre-filled from the open draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorView {
    pub heading: &'static str,
    pub title_label: &'static str,
    pub content_label: &'static str,
    pub save_label: &'static str,
    pub dismiss_label: &'static str,
    pub note_id: NoteId,
    pub title: String,
    pub content: String,
    /// `true` when saving will append instead of replace.
    pub is_new: bool,
}

/// Full render snapshot of the notes screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotesView {
    pub items: Vec<NoteListItem>,
    pub empty_state: Option<&'static str>,
    pub editor: Option<EditorView>,
}

impl NotesView {
    /// Builds the screen snapshot for the current store state.
    pub fn project(store: &NoteStore) -> Self {
        let items = store
            .notes()
            .iter()
            .map(|note| NoteListItem {
                id: note.id,
                headline: note.title.clone(),
            })
            .collect::<Vec<_>>();
        let empty_state = items.is_empty().then_some(EMPTY_STATE_LABEL);
        let editor = store.draft().map(|draft| EditorView {
            heading: EDITOR_HEADING,
            title_label: TITLE_FIELD_LABEL,
            content_label: CONTENT_FIELD_LABEL,
            save_label: SAVE_ACTION_LABEL,
            dismiss_label: DISMISS_ACTION_LABEL,
            note_id: draft.id,
            title: draft.title.clone(),
            content: draft.content.clone(),
            is_new: store.get(draft.id).is_none(),
        });

        Self {
            items,
            empty_state,
            editor,
        }
    }
}
