use simplenotes_core::{CommitOutcome, Note, NoteStore, NoteStoreError};
use std::collections::BTreeSet;

fn seeded(notes: &[(i64, &str, &str)]) -> NoteStore {
    NoteStore::from_notes(
        notes
            .iter()
            .map(|(id, title, content)| Note::new(*id, *title, *content))
            .collect(),
    )
    .unwrap()
}

#[test]
fn new_draft_on_empty_store_then_commit_appends() {
    let mut store = NoteStore::new();

    let draft = store.start_new_draft().clone();
    assert_eq!(draft, Note::new(1, "", ""));
    assert!(store.is_editor_open());

    let outcome = store.commit("A", "B");
    assert_eq!(outcome, Some(CommitOutcome::Appended { index: 0 }));
    assert_eq!(store.notes(), &[Note::new(1, "A", "B")]);
    assert!(store.draft().is_none());
}

#[test]
fn open_existing_then_commit_replaces_in_place() {
    let mut store = seeded(&[(1, "A", "B")]);

    assert!(store.open_existing(1));
    assert_eq!(store.draft(), Some(&Note::new(1, "A", "B")));

    let outcome = store.commit("A2", "B2");
    assert_eq!(outcome, Some(CommitOutcome::Updated { index: 0 }));
    assert_eq!(store.notes(), &[Note::new(1, "A2", "B2")]);
    assert!(!store.is_editor_open());
}

#[test]
fn update_keeps_length_and_position_of_middle_note() {
    let mut store = seeded(&[(1, "first", ""), (2, "second", ""), (3, "third", "")]);

    store.open_existing(2);
    let outcome = store.commit("second v2", "body");

    assert_eq!(outcome, Some(CommitOutcome::Updated { index: 1 }));
    assert_eq!(store.len(), 3);
    let titles = store
        .notes()
        .iter()
        .map(|note| note.title.as_str())
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["first", "second v2", "third"]);
    assert_eq!(store.notes()[1].id, 2);
}

#[test]
fn commit_without_draft_is_a_no_op() {
    let mut store = seeded(&[(1, "A", "B")]);
    let before = store.clone();

    assert_eq!(store.commit("X", "Y"), None);
    assert_eq!(store, before);
}

#[test]
fn try_commit_without_draft_reports_error() {
    let mut store = NoteStore::new();
    let err = store.try_commit("X", "Y").unwrap_err();
    assert_eq!(err, NoteStoreError::NoOpenDraft);
    assert!(store.is_empty());
}

#[test]
fn open_unknown_id_keeps_current_draft() {
    let mut store = seeded(&[(1, "A", "B")]);
    store.start_new_draft();

    assert!(!store.open_existing(42));
    assert_eq!(store.draft(), Some(&Note::new(2, "", "")));

    let err = store.try_open_existing(42).unwrap_err();
    assert_eq!(err, NoteStoreError::NoteNotFound(42));
    assert_eq!(store.draft().map(|draft| draft.id), Some(2));
}

#[test]
fn open_unknown_id_with_editor_closed_leaves_it_closed() {
    let mut store = NoteStore::new();
    assert!(!store.open_existing(1));
    assert!(!store.is_editor_open());
}

#[test]
fn cancel_never_changes_notes() {
    let mut store = seeded(&[(1, "A", "B"), (2, "C", "D")]);
    let notes_before = store.notes().to_vec();

    assert_eq!(store.cancel(), None);
    assert_eq!(store.notes(), notes_before.as_slice());

    store.start_new_draft();
    assert_eq!(store.cancel(), Some(Note::new(3, "", "")));
    assert_eq!(store.notes(), notes_before.as_slice());

    store.open_existing(1);
    assert_eq!(store.cancel(), Some(Note::new(1, "A", "B")));
    assert_eq!(store.notes(), notes_before.as_slice());
    assert!(!store.is_editor_open());
}

#[test]
fn new_draft_discards_previous_unsaved_draft() {
    let mut store = seeded(&[(1, "A", "B")]);
    store.open_existing(1);

    let draft = store.start_new_draft().clone();
    assert_eq!(draft, Note::new(2, "", ""));

    store.commit("fresh", "");
    assert_eq!(store.notes(), &[Note::new(1, "A", "B"), Note::new(2, "fresh", "")]);
}

#[test]
fn cancelled_new_draft_id_is_reused_by_next_draft() {
    let mut store = NoteStore::new();
    store.start_new_draft();
    store.cancel();

    assert_eq!(store.next_draft_id(), 1);
    assert_eq!(store.start_new_draft().id, 1);
}

#[test]
fn ids_stay_unique_across_mixed_operation_sequences() {
    let mut store = NoteStore::new();
    for round in 0..20_i64 {
        match round % 4 {
            0 | 1 => {
                store.start_new_draft();
                let outcome = store.commit(format!("note {round}"), "");
                assert!(matches!(outcome, Some(CommitOutcome::Appended { .. })));
            }
            2 => {
                store.open_existing(round / 2);
                store.commit(format!("edited {round}"), "body");
            }
            _ => {
                store.start_new_draft();
                store.cancel();
            }
        }

        let ids = store.notes().iter().map(|note| note.id).collect::<BTreeSet<_>>();
        assert_eq!(ids.len(), store.len());
    }

    let ids = store.notes().iter().map(|note| note.id).collect::<Vec<_>>();
    assert_eq!(ids, (1..=10).collect::<Vec<_>>());
}

#[test]
fn append_grows_list_by_exactly_one_at_the_end() {
    let mut store = seeded(&[(1, "A", ""), (2, "B", "")]);
    store.start_new_draft();
    let outcome = store.commit("C", "").unwrap();

    assert_eq!(outcome, CommitOutcome::Appended { index: 2 });
    assert_eq!(store.len(), 3);
    assert_eq!(store.notes().last(), Some(&Note::new(3, "C", "")));
}

#[test]
fn from_notes_rejects_duplicate_and_out_of_range_ids() {
    let duplicate = NoteStore::from_notes(vec![Note::new(1, "a", ""), Note::new(1, "b", "")]);
    assert_eq!(duplicate.unwrap_err(), NoteStoreError::DuplicateId(1));

    let out_of_range = NoteStore::from_notes(vec![Note::new(2, "a", "")]);
    assert_eq!(
        out_of_range.unwrap_err(),
        NoteStoreError::IdOutOfRange { id: 2, len: 1 }
    );

    let zero = NoteStore::from_notes(vec![Note::new(0, "a", "")]);
    assert!(matches!(zero, Err(NoteStoreError::IdOutOfRange { id: 0, .. })));
}

#[test]
fn from_notes_accepts_any_order_of_dense_ids() {
    let store = seeded(&[(2, "second", ""), (1, "first", "")]);
    assert_eq!(store.next_draft_id(), 3);
    assert_eq!(store.get(1).map(|note| note.title.as_str()), Some("first"));
}
