//! Flutter-facing bridge crate for SimpleNotes core.

pub mod api;
