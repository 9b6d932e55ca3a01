//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `simplenotes_core` linkage outside the Flutter/FFI runtime.
//! - Drive one new-draft, save, reopen, save cycle with deterministic output.

use simplenotes_core::{NoteStore, NotesView};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("simplenotes_core ping={}", simplenotes_core::ping());
    println!("simplenotes_core version={}", simplenotes_core::core_version());

    let mut store = NoteStore::new();
    let draft_id = store.start_new_draft().id;
    let created = store.commit("Groceries", "milk");
    store.open_existing(draft_id);
    let edited = store.commit("Groceries", "milk, eggs");

    let (Some(created), Some(edited)) = (created, edited) else {
        eprintln!("simplenotes_core store_cycle=failed");
        return ExitCode::FAILURE;
    };

    let view = NotesView::project(&store);
    println!(
        "simplenotes_core store_cycle=ok created_index={} edited_index={} rows={} editor_open={}",
        created.index(),
        edited.index(),
        view.items.len(),
        view.editor.is_some()
    );
    ExitCode::SUCCESS
}
