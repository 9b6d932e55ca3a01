//! Note store with update-or-append commit semantics.
//!
//! # Responsibility
//! - Keep notes in insertion order and own the single draft slot.
//! - Translate editor actions (new, open, save, dismiss) into list updates.
//!
//! # Invariants
//! - New drafts take `id = note count + 1`; ids in the list are always
//!   exactly `1..=len`, so a new draft never collides with a stored note.
//! - Committing an existing id replaces it in place; an unknown id appends.
//! - `cancel` and failed opens never touch the note list.
//! - Logs carry ids and positions only, never titles or contents.

use crate::model::note::{Note, NoteId};
use log::debug;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, NoteStoreError>;

/// Error for strict store operations and seeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteStoreError {
    /// Commit was requested while no editor was open.
    NoOpenDraft,
    /// Target note does not exist.
    NoteNotFound(NoteId),
    /// Seed list contains the same id twice.
    DuplicateId(NoteId),
    /// Seed id falls outside `1..=len`.
    IdOutOfRange { id: NoteId, len: usize },
}

impl Display for NoteStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoOpenDraft => write!(f, "no draft is open for editing"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::DuplicateId(id) => write!(f, "duplicate note id: {id}"),
            Self::IdOutOfRange { id, len } => {
                write!(f, "note id {id} out of range; expected 1..={len}")
            }
        }
    }
}

impl Error for NoteStoreError {}

/// Effect of a successful commit on the note list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// An existing note was replaced at `index`.
    Updated { index: usize },
    /// The draft was appended and now lives at `index`.
    Appended { index: usize },
}

impl CommitOutcome {
    /// Position of the committed note in the list.
    pub fn index(self) -> usize {
        match self {
            Self::Updated { index } | Self::Appended { index } => index,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Updated { .. } => "update",
            Self::Appended { .. } => "append",
        }
    }
}

/// Ordered in-memory notes plus the editor's draft slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStore {
    notes: Vec<Note>,
    draft: Option<Note>,
}

impl NoteStore {
    /// Creates an empty store with no open editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store from an existing note list.
    ///
    /// # Errors
    /// - `IdOutOfRange` when an id is outside `1..=notes.len()`.
    /// - `DuplicateId` when two notes share an id.
    pub fn from_notes(notes: Vec<Note>) -> StoreResult<Self> {
        let len = notes.len();
        let mut seen = BTreeSet::new();
        for note in &notes {
            if note.id < 1 || note.id > len as NoteId {
                return Err(NoteStoreError::IdOutOfRange { id: note.id, len });
            }
            if !seen.insert(note.id) {
                return Err(NoteStoreError::DuplicateId(note.id));
            }
        }

        Ok(Self { notes, draft: None })
    }

    /// Notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Note currently open in the editor, if any.
    pub fn draft(&self) -> Option<&Note> {
        self.draft.as_ref()
    }

    /// Looks up one stored note by id.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Number of stored notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether no note has been committed yet.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Whether the editor is showing a draft.
    pub fn is_editor_open(&self) -> bool {
        self.draft.is_some()
    }

    /// Id the next `start_new_draft` call will assign.
    pub fn next_draft_id(&self) -> NoteId {
        self.notes.len() as NoteId + 1
    }

    /// Opens the editor on a blank note with the next id.
    ///
    /// Any unsaved draft is discarded without confirmation.
    pub fn start_new_draft(&mut self) -> &Note {
        let id = self.next_draft_id();
        debug!(
            "event=draft_start module=store status=ok note_id={} discarded_draft={}",
            id,
            draft_id_field(self.draft.as_ref())
        );
        self.draft.insert(Note::blank(id))
    }

    /// Opens the editor on a copy of the note with `id`.
    ///
    /// Returns `false` and keeps the current draft when `id` is unknown.
    pub fn open_existing(&mut self, id: NoteId) -> bool {
        match self.try_open_existing(id) {
            Ok(_) => true,
            Err(err) => {
                debug!("event=draft_open module=store status=skipped reason=\"{err}\"");
                false
            }
        }
    }

    /// Strict form of [`NoteStore::open_existing`].
    ///
    /// # Errors
    /// - `NoteNotFound` when no stored note has `id`; the draft is unchanged.
    pub fn try_open_existing(&mut self, id: NoteId) -> StoreResult<&Note> {
        let note = self
            .get(id)
            .cloned()
            .ok_or(NoteStoreError::NoteNotFound(id))?;
        debug!("event=draft_open module=store status=ok note_id={id}");
        Ok(self.draft.insert(note))
    }

    /// Saves the open draft with the given fields and closes the editor.
    ///
    /// Returns `None` when no draft is open; the list is left untouched.
    pub fn commit(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Option<CommitOutcome> {
        match self.try_commit(title, content) {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                debug!("event=note_commit module=store status=skipped reason=\"{err}\"");
                None
            }
        }
    }

    /// Strict form of [`NoteStore::commit`].
    ///
    /// # Errors
    /// - `NoOpenDraft` when the editor is closed.
    pub fn try_commit(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> StoreResult<CommitOutcome> {
        let draft = self.draft.take().ok_or(NoteStoreError::NoOpenDraft)?;
        let note_id = draft.id;
        let updated = draft.with_fields(title, content);

        let outcome = match self.notes.iter().position(|note| note.id == note_id) {
            Some(index) => {
                self.notes[index] = updated;
                CommitOutcome::Updated { index }
            }
            None => {
                self.notes.push(updated);
                CommitOutcome::Appended {
                    index: self.notes.len() - 1,
                }
            }
        };

        debug!(
            "event=note_commit module=store status=ok mode={} note_id={} index={} count={}",
            outcome.label(),
            note_id,
            outcome.index(),
            self.notes.len()
        );
        Ok(outcome)
    }

    /// Closes the editor without saving and returns the discarded draft.
    pub fn cancel(&mut self) -> Option<Note> {
        let discarded = self.draft.take();
        if let Some(draft) = &discarded {
            debug!(
                "event=draft_cancel module=store status=ok note_id={}",
                draft.id
            );
        }
        discarded
    }
}

fn draft_id_field(draft: Option<&Note>) -> String {
    draft.map_or_else(|| "none".to_string(), |draft| draft.id.to_string())
}
