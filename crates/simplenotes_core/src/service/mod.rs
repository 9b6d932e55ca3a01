//! Presentation-facing projections.
//!
//! # Responsibility
//! - Turn store state into render-ready snapshots for UI/FFI layers.
//! - Keep UI layers decoupled from store internals.

pub mod notes_view;
