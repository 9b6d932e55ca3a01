//! In-memory note storage with a single editor slot.
//!
//! # Responsibility
//! - Own the ordered note list and the currently open draft.
//! - Enforce update-or-append commit semantics.
//!
//! # Invariants
//! - At most one draft is open at a time.
//! - Note ids stay unique before and after every commit.

pub mod note_store;
