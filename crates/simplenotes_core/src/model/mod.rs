//! Domain model for the notes screen.
//!
//! # Responsibility
//! - Define the note record shared by the store, view projection and FFI.
//!
//! # Invariants
//! - Every note is identified by a `NoteId` assigned once at creation.
//! - Title and content are free-form text; core never validates them.

pub mod note;
