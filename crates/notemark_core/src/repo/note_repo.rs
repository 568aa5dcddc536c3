//! Note repository over the persistent store.
//!
//! # Responsibility
//! - Own the note collection and its write-through persistence.
//! - Provide create/update/delete with silent no-op semantics for
//!   missing ids.
//!
//! # Invariants
//! - Every note id is unique within the collection.
//! - Updates preserve identity and fully replace `tag_ids` from the
//!   draft, never merging.
//! - Update/delete with a missing id leaves the collection and the store
//!   untouched.

use crate::model::note::{NoteDraft, NoteId, RawNote};
use crate::repo::{RepoError, RepoResult};
use crate::store::{KeyValueStore, StoreCell, StoreResult};
use log::info;

/// Store key holding the JSON note array.
pub const NOTES_KEY: &str = "NOTES";

/// Owner of the note collection.
pub struct NoteRepository<'s> {
    cell: StoreCell<'s, Vec<RawNote>>,
}

impl<'s> NoteRepository<'s> {
    /// Hydrates the repository from the store, starting empty when absent.
    pub fn load(store: &'s dyn KeyValueStore) -> StoreResult<Self> {
        let cell = StoreCell::load(store, NOTES_KEY, Vec::new())?;
        Ok(Self { cell })
    }

    /// Returns the current note collection.
    pub fn notes(&self) -> &[RawNote] {
        self.cell.get()
    }

    /// Creates a note with a fresh stable id and persists the collection.
    ///
    /// `tag_ids` is derived from the draft's tags, order preserved. A
    /// collision on the generated id is practically unreachable; when
    /// detected the create fails closed instead of overwriting.
    ///
    /// # Errors
    /// - `RepoError::DuplicateId` on fresh-id collision.
    /// - `RepoError::Store` when the write-through fails; the in-memory
    ///   collection keeps the new note.
    pub fn create_note(&mut self, draft: &NoteDraft) -> RepoResult<RawNote> {
        let note = RawNote::new(draft);
        if self.notes().iter().any(|existing| existing.id == note.id) {
            return Err(RepoError::DuplicateId(note.id));
        }

        let mut next = self.notes().to_vec();
        next.push(note.clone());
        self.cell.set(next)?;
        info!("event=note_create module=repo status=ok note_id={}", note.id);
        Ok(note)
    }

    /// Replaces title, markdown, and tag references of the note with the
    /// given id, preserving its identity.
    ///
    /// A missing id is a silent no-op: nothing is stored and no error is
    /// returned.
    pub fn update_note(&mut self, id: NoteId, draft: &NoteDraft) -> RepoResult<()> {
        if !self.notes().iter().any(|note| note.id == id) {
            info!("event=note_update module=repo status=noop note_id={id}");
            return Ok(());
        }

        self.cell.update(|notes| {
            notes
                .iter()
                .map(|note| {
                    if note.id == id {
                        let mut updated = note.clone();
                        updated.apply(draft);
                        updated
                    } else {
                        note.clone()
                    }
                })
                .collect()
        })?;
        info!("event=note_update module=repo status=ok note_id={id}");
        Ok(())
    }

    /// Removes the note with the given id.
    ///
    /// A missing id is a silent no-op.
    pub fn delete_note(&mut self, id: NoteId) -> RepoResult<()> {
        if !self.notes().iter().any(|note| note.id == id) {
            info!("event=note_delete module=repo status=noop note_id={id}");
            return Ok(());
        }

        self.cell
            .update(|notes| notes.iter().filter(|note| note.id != id).cloned().collect())?;
        info!("event=note_delete module=repo status=ok note_id={id}");
        Ok(())
    }
}
