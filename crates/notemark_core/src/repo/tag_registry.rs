//! Tag registry over the persistent store.
//!
//! # Responsibility
//! - Own the tag collection and its write-through persistence.
//! - Provide create/rename/delete with silent no-op semantics for
//!   missing ids.
//!
//! # Invariants
//! - Every tag id is unique within the collection.
//! - Deleting a tag never cascades to notes; stored references orphan
//!   silently and the join drops them at view time.
//! - Duplicate labels are permitted.

use crate::model::tag::{Tag, TagId};
use crate::repo::{RepoError, RepoResult};
use crate::store::{KeyValueStore, StoreCell, StoreResult};
use log::info;

/// Store key holding the JSON tag array.
pub const TAGS_KEY: &str = "TAGS";

/// Owner of the tag collection.
pub struct TagRegistry<'s> {
    cell: StoreCell<'s, Vec<Tag>>,
}

impl<'s> TagRegistry<'s> {
    /// Hydrates the registry from the store, starting empty when absent.
    pub fn load(store: &'s dyn KeyValueStore) -> StoreResult<Self> {
        let cell = StoreCell::load(store, TAGS_KEY, Vec::new())?;
        Ok(Self { cell })
    }

    /// Returns the current tag collection.
    pub fn tags(&self) -> &[Tag] {
        self.cell.get()
    }

    /// Creates a tag with a fresh stable id and persists the collection.
    ///
    /// A collision on the generated id is practically unreachable; when
    /// detected the create fails closed instead of overwriting the
    /// existing tag.
    ///
    /// # Errors
    /// - `RepoError::DuplicateId` on fresh-id collision.
    /// - `RepoError::Store` when the write-through fails; the in-memory
    ///   collection keeps the new tag.
    pub fn add_tag(&mut self, label: impl Into<String>) -> RepoResult<Tag> {
        let tag = Tag::new(label);
        if self.tags().iter().any(|existing| existing.id == tag.id) {
            return Err(RepoError::DuplicateId(tag.id));
        }

        let mut next = self.tags().to_vec();
        next.push(tag.clone());
        self.cell.set(next)?;
        info!("event=tag_add module=repo status=ok tag_id={}", tag.id);
        Ok(tag)
    }

    /// Replaces the label of the tag with the given id.
    ///
    /// A missing id is a silent no-op: nothing is stored and no error is
    /// returned.
    pub fn rename_tag(&mut self, id: TagId, label: impl Into<String>) -> RepoResult<()> {
        if !self.tags().iter().any(|tag| tag.id == id) {
            info!("event=tag_rename module=repo status=noop tag_id={id}");
            return Ok(());
        }

        let label = label.into();
        self.cell.update(|tags| {
            tags.iter()
                .map(|tag| {
                    if tag.id == id {
                        Tag::with_id(tag.id, label.clone())
                    } else {
                        tag.clone()
                    }
                })
                .collect()
        })?;
        info!("event=tag_rename module=repo status=ok tag_id={id}");
        Ok(())
    }

    /// Removes the tag with the given id.
    ///
    /// A missing id is a silent no-op. Notes referencing the tag keep
    /// their stored ids.
    pub fn delete_tag(&mut self, id: TagId) -> RepoResult<()> {
        if !self.tags().iter().any(|tag| tag.id == id) {
            info!("event=tag_delete module=repo status=noop tag_id={id}");
            return Ok(());
        }

        self.cell
            .update(|tags| tags.iter().filter(|tag| tag.id != id).cloned().collect())?;
        info!("event=tag_delete module=repo status=ok tag_id={id}");
        Ok(())
    }
}
