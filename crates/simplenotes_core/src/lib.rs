//! Core domain logic for SimpleNotes.
//! This crate is the single source of truth for note list invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId};
pub use service::notes_view::{EditorView, NoteListItem, NotesView};
pub use store::note_store::{CommitOutcome, NoteStore, NoteStoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
