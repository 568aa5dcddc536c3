//! Workspace facade for upstream consumers.
//!
//! # Responsibility
//! - Hydrate both collections at open and expose the full mutation
//!   surface.
//! - Serve derived views recomputed from current state on every read.
//!
//! # Invariants
//! - `joined_notes` is never cached; each call reflects the collections
//!   as they are now.
//! - All mutations flow through the repositories' write-through cells.

use crate::model::note::{NoteDraft, NoteId, RawNote};
use crate::model::tag::{Tag, TagId};
use crate::repo::note_repo::NoteRepository;
use crate::repo::tag_registry::TagRegistry;
use crate::repo::RepoResult;
use crate::store::{KeyValueStore, StoreResult};
use crate::view::filter::filter_notes;
use crate::view::join::{join_notes_with_tags, NoteWithTags};
use log::info;

/// Facade owning the tag registry and note repository over one store.
///
/// This is the surface the routing/rendering layer consumes; it has no
/// knowledge of which store implementation backs it.
pub struct NoteWorkspace<'s> {
    tags: TagRegistry<'s>,
    notes: NoteRepository<'s>,
}

impl<'s> NoteWorkspace<'s> {
    /// Opens a workspace over the given store, hydrating both
    /// collections.
    ///
    /// # Errors
    /// - Propagates store read failures and absent-key initialization
    ///   write failures.
    pub fn open(store: &'s dyn KeyValueStore) -> StoreResult<Self> {
        let tags = TagRegistry::load(store)?;
        let notes = NoteRepository::load(store)?;
        info!(
            "event=workspace_open module=service status=ok notes={} tags={}",
            notes.notes().len(),
            tags.tags().len()
        );
        Ok(Self { tags, notes })
    }

    /// Returns the current tag collection.
    pub fn tags(&self) -> &[Tag] {
        self.tags.tags()
    }

    /// Returns the current persisted note collection.
    pub fn notes(&self) -> &[RawNote] {
        self.notes.notes()
    }

    /// Creates a tag with a fresh stable id.
    pub fn add_tag(&mut self, label: impl Into<String>) -> RepoResult<Tag> {
        self.tags.add_tag(label)
    }

    /// Replaces the label of an existing tag; silent no-op when absent.
    pub fn rename_tag(&mut self, id: TagId, label: impl Into<String>) -> RepoResult<()> {
        self.tags.rename_tag(id, label)
    }

    /// Removes a tag without cascading to notes; silent no-op when
    /// absent.
    pub fn delete_tag(&mut self, id: TagId) -> RepoResult<()> {
        self.tags.delete_tag(id)
    }

    /// Creates a note from a draft with a fresh stable id.
    pub fn create_note(&mut self, draft: &NoteDraft) -> RepoResult<RawNote> {
        self.notes.create_note(draft)
    }

    /// Replaces a note's mutable fields from a draft; silent no-op when
    /// absent.
    pub fn update_note(&mut self, id: NoteId, draft: &NoteDraft) -> RepoResult<()> {
        self.notes.update_note(id, draft)
    }

    /// Removes a note; silent no-op when absent.
    pub fn delete_note(&mut self, id: NoteId) -> RepoResult<()> {
        self.notes.delete_note(id)
    }

    /// Resolves the joined view from the current collections.
    pub fn joined_notes(&self) -> Vec<NoteWithTags> {
        join_notes_with_tags(self.notes.notes(), self.tags.tags())
    }

    /// Filters the current joined view by title and selected tags.
    pub fn filter_notes(&self, title_query: &str, selected_tag_ids: &[TagId]) -> Vec<NoteWithTags> {
        filter_notes(&self.joined_notes(), title_query, selected_tag_ids)
    }
}
