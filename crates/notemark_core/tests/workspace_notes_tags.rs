use notemark_core::{MemoryKvStore, NoteDraft, NoteWorkspace, Tag};
use std::collections::HashSet;
use uuid::Uuid;

fn draft(title: &str, markdown: &str, tags: Vec<Tag>) -> NoteDraft {
    NoteDraft {
        title: title.to_string(),
        markdown: markdown.to_string(),
        tags,
    }
}

#[test]
fn create_tag_and_note_resolves_joined_view() {
    let store = MemoryKvStore::new();
    let mut workspace = NoteWorkspace::open(&store).unwrap();

    let work = workspace.add_tag("work").unwrap();
    assert_eq!(work.label, "work");

    let note = workspace
        .create_note(&draft("Plan", "- [ ] outline", vec![work.clone()]))
        .unwrap();
    assert_eq!(note.tag_ids, vec![work.id]);

    let joined = workspace.joined_notes();
    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].id, note.id);
    assert_eq!(joined[0].tags, vec![work]);
}

#[test]
fn filter_matches_title_and_selected_tags() {
    let store = MemoryKvStore::new();
    let mut workspace = NoteWorkspace::open(&store).unwrap();

    let work = workspace.add_tag("work").unwrap();
    let note = workspace
        .create_note(&draft("Plan", "body", vec![work.clone()]))
        .unwrap();

    let by_title = workspace.filter_notes("plan", &[]);
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].id, note.id);

    let by_tag = workspace.filter_notes("", &[work.id]);
    assert_eq!(by_tag.len(), 1);
    assert_eq!(by_tag[0].id, note.id);

    let missing_tag = workspace.filter_notes("", &[Uuid::new_v4()]);
    assert!(missing_tag.is_empty());
}

#[test]
fn deleting_referenced_tag_orphans_silently() {
    let store = MemoryKvStore::new();
    let mut workspace = NoteWorkspace::open(&store).unwrap();

    let work = workspace.add_tag("work").unwrap();
    let note = workspace
        .create_note(&draft("Plan", "body", vec![work.clone()]))
        .unwrap();

    workspace.delete_tag(work.id).unwrap();

    let joined = workspace.joined_notes();
    assert_eq!(joined.len(), 1);
    assert!(joined[0].tags.is_empty());

    // The stored reference survives the tag delete.
    assert_eq!(workspace.notes()[0].tag_ids, vec![work.id]);
    assert_eq!(workspace.notes()[0].id, note.id);
}

#[test]
fn update_note_replaces_fields_and_preserves_id() {
    let store = MemoryKvStore::new();
    let mut workspace = NoteWorkspace::open(&store).unwrap();

    let work = workspace.add_tag("work").unwrap();
    let home = workspace.add_tag("home").unwrap();
    let note = workspace
        .create_note(&draft("Plan", "old body", vec![work]))
        .unwrap();

    workspace
        .update_note(note.id, &draft("Plan v2", "new body", vec![home.clone()]))
        .unwrap();

    let notes = workspace.notes();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id, note.id);
    assert_eq!(notes[0].title, "Plan v2");
    assert_eq!(notes[0].markdown, "new body");
    assert_eq!(notes[0].tag_ids, vec![home.id]);
}

#[test]
fn update_note_with_unknown_id_is_a_silent_noop() {
    let store = MemoryKvStore::new();
    let mut workspace = NoteWorkspace::open(&store).unwrap();

    let work = workspace.add_tag("work").unwrap();
    workspace
        .create_note(&draft("Plan", "body", vec![work]))
        .unwrap();
    let before = workspace.notes().to_vec();

    workspace
        .update_note(Uuid::new_v4(), &draft("Ghost", "ghost", Vec::new()))
        .unwrap();

    assert_eq!(workspace.notes(), before.as_slice());
}

#[test]
fn delete_note_with_unknown_id_is_a_silent_noop() {
    let store = MemoryKvStore::new();
    let mut workspace = NoteWorkspace::open(&store).unwrap();

    workspace
        .create_note(&draft("Keep me", "body", Vec::new()))
        .unwrap();
    let before = workspace.notes().to_vec();

    workspace.delete_note(Uuid::new_v4()).unwrap();

    assert_eq!(workspace.notes(), before.as_slice());
}

#[test]
fn rename_tag_with_unknown_id_is_a_silent_noop() {
    let store = MemoryKvStore::new();
    let mut workspace = NoteWorkspace::open(&store).unwrap();

    workspace.add_tag("work").unwrap();
    let before = workspace.tags().to_vec();

    workspace.rename_tag(Uuid::new_v4(), "renamed").unwrap();

    assert_eq!(workspace.tags(), before.as_slice());
}

#[test]
fn rename_tag_changes_label_and_next_join_sees_it() {
    let store = MemoryKvStore::new();
    let mut workspace = NoteWorkspace::open(&store).unwrap();

    let work = workspace.add_tag("work").unwrap();
    workspace
        .create_note(&draft("Plan", "body", vec![work.clone()]))
        .unwrap();

    workspace.rename_tag(work.id, "projects").unwrap();

    assert_eq!(workspace.tags()[0].label, "projects");
    assert_eq!(workspace.tags()[0].id, work.id);

    let joined = workspace.joined_notes();
    assert_eq!(joined[0].tags[0].label, "projects");
}

#[test]
fn ids_stay_unique_across_mutation_sequences() {
    let store = MemoryKvStore::new();
    let mut workspace = NoteWorkspace::open(&store).unwrap();

    let mut tag_ids = Vec::new();
    for index in 0..5 {
        tag_ids.push(workspace.add_tag(format!("tag {index}")).unwrap().id);
    }
    workspace.delete_tag(tag_ids[1]).unwrap();
    workspace.rename_tag(tag_ids[2], "renamed").unwrap();
    tag_ids.push(workspace.add_tag("late tag").unwrap().id);

    let mut note_ids = Vec::new();
    for index in 0..5 {
        let note = workspace
            .create_note(&draft(&format!("note {index}"), "body", Vec::new()))
            .unwrap();
        note_ids.push(note.id);
    }
    workspace.delete_note(note_ids[0]).unwrap();
    workspace
        .update_note(note_ids[3], &draft("edited", "body", Vec::new()))
        .unwrap();

    let unique_tags: HashSet<_> = workspace.tags().iter().map(|tag| tag.id).collect();
    assert_eq!(unique_tags.len(), workspace.tags().len());

    let unique_notes: HashSet<_> = workspace.notes().iter().map(|note| note.id).collect();
    assert_eq!(unique_notes.len(), workspace.notes().len());
}

#[test]
fn write_failure_surfaces_error_while_memory_keeps_the_change() {
    let store = MemoryKvStore::new();
    let mut workspace = NoteWorkspace::open(&store).unwrap();

    store.set_fail_writes(true);
    let result = workspace.add_tag("unsynced");
    assert!(result.is_err());

    // Write-ahead-in-memory: the collection reflects the attempted change
    // even though durability failed.
    assert_eq!(workspace.tags().len(), 1);
    assert_eq!(workspace.tags()[0].label, "unsynced");
    assert_eq!(store.snapshot(notemark_core::TAGS_KEY).as_deref(), Some("[]"));
}

#[test]
fn workspace_rehydrates_from_persisted_state() {
    let store = MemoryKvStore::new();
    let (tag, note) = {
        let mut workspace = NoteWorkspace::open(&store).unwrap();
        let tag = workspace.add_tag("work").unwrap();
        let note = workspace
            .create_note(&draft("Plan", "body", vec![tag.clone()]))
            .unwrap();
        (tag, note)
    };

    let reopened = NoteWorkspace::open(&store).unwrap();
    assert_eq!(reopened.tags(), &[tag.clone()]);
    assert_eq!(reopened.notes(), &[note]);

    let joined = reopened.joined_notes();
    assert_eq!(joined[0].tags, vec![tag]);
}
