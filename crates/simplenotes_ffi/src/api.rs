//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the notes screen session and health probes to Dart via FRB.
//! - Convert core types into plain DTOs with stable field meaning.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Each `NotesSession` owns its own store; there is no global note state.

use log::warn;
use simplenotes_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    CommitOutcome, Note, NoteStore, NotesView,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Note payload sent to Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl From<&Note> for NoteItem {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            content: note.content.clone(),
        }
    }
}

/// List row payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRow {
    pub id: i64,
    pub headline: String,
}

/// Editor dialog payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEditor {
    pub heading: String,
    pub title_label: String,
    pub content_label: String,
    pub save_label: String,
    pub dismiss_label: String,
    pub note: NoteItem,
    pub is_new: bool,
}

/// Full screen snapshot for one rebuild on the Dart side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesScreen {
    pub rows: Vec<NoteRow>,
    /// Centered label while the list is empty.
    pub empty_label: Option<String>,
    /// Present while the editor dialog should be shown.
    pub editor: Option<NoteEditor>,
}

/// Result envelope for the editor's save action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitResponse {
    /// Whether a draft was saved.
    pub ok: bool,
    /// `update`, `append`, or `none` when nothing was open.
    pub mode: String,
    /// List position of the saved note.
    pub index: Option<u32>,
    pub message: String,
}

impl CommitResponse {
    fn saved(outcome: CommitOutcome) -> Self {
        let (mode, message) = match outcome {
            CommitOutcome::Updated { .. } => ("update", "Note updated."),
            CommitOutcome::Appended { .. } => ("append", "Note added."),
        };
        Self {
            ok: true,
            mode: mode.to_string(),
            index: u32::try_from(outcome.index()).ok(),
            message: message.to_string(),
        }
    }

    fn nothing_open() -> Self {
        Self {
            ok: false,
            mode: "none".to_string(),
            index: None,
            message: "No note is open.".to_string(),
        }
    }
}

/// One notes screen session, owned by the Dart widget state.
///
/// # FFI contract
/// - All methods are sync and non-blocking.
/// - Failed opens and commits with no open editor are reported, never thrown.
#[flutter_rust_bridge::frb(opaque)]
#[derive(Debug, Default)]
pub struct NotesSession {
    store: NoteStore,
}

impl NotesSession {
    /// Creates an empty session with the editor closed.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the editor on a blank note and returns it.
    #[flutter_rust_bridge::frb(sync)]
    pub fn start_new_draft(&mut self) -> NoteItem {
        NoteItem::from(self.store.start_new_draft())
    }

    /// Opens the editor on a stored note; `false` when `id` is unknown.
    #[flutter_rust_bridge::frb(sync)]
    pub fn open_existing(&mut self, id: i64) -> bool {
        let opened = self.store.open_existing(id);
        if !opened {
            warn!("event=ffi_open module=ffi status=skipped note_id={id}");
        }
        opened
    }

    /// Saves the editor fields into the list and closes the editor.
    #[flutter_rust_bridge::frb(sync)]
    pub fn commit(&mut self, title: String, content: String) -> CommitResponse {
        match self.store.commit(title, content) {
            Some(outcome) => CommitResponse::saved(outcome),
            None => CommitResponse::nothing_open(),
        }
    }

    /// Closes the editor without saving.
    #[flutter_rust_bridge::frb(sync)]
    pub fn cancel(&mut self) {
        self.store.cancel();
    }

    /// Stored notes in list order.
    #[flutter_rust_bridge::frb(sync)]
    pub fn notes(&self) -> Vec<NoteItem> {
        self.store.notes().iter().map(NoteItem::from).collect()
    }

    /// Note currently open in the editor.
    #[flutter_rust_bridge::frb(sync)]
    pub fn draft(&self) -> Option<NoteItem> {
        self.store.draft().map(NoteItem::from)
    }

    /// Render snapshot of the whole screen.
    #[flutter_rust_bridge::frb(sync)]
    pub fn view(&self) -> NotesScreen {
        to_notes_screen(NotesView::project(&self.store))
    }
}

fn to_notes_screen(view: NotesView) -> NotesScreen {
    let editor = view.editor.map(|editor| NoteEditor {
        heading: editor.heading.to_string(),
        title_label: editor.title_label.to_string(),
        content_label: editor.content_label.to_string(),
        save_label: editor.save_label.to_string(),
        dismiss_label: editor.dismiss_label.to_string(),
        note: NoteItem {
            id: editor.note_id,
            title: editor.title,
            content: editor.content,
        },
        is_new: editor.is_new,
    });

    NotesScreen {
        rows: view
            .items
            .into_iter()
            .map(|item| NoteRow {
                id: item.id,
                headline: item.headline,
            })
            .collect(),
        empty_label: view.empty_state.map(str::to_string),
        editor,
    }
}
