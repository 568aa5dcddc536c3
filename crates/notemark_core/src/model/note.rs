//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted note shape and the draft input shape.
//! - Provide the identity-preserving draft application used by updates.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `tag_ids` stores references only; a stored id may point at a tag
//!   that no longer exists (orphan reference) and storage neither rejects
//!   nor repairs it.
//! - Applying a draft replaces `tag_ids` wholesale, never merges.

use crate::model::tag::{Tag, TagId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note.
pub type NoteId = Uuid;

/// Persisted note record.
///
/// Tags are referenced by id only. The wire name `tagIds` is kept for
/// compatibility with stores written by earlier releases of the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNote {
    /// Stable global ID used for routing and edits.
    pub id: NoteId,
    /// Display title, also the target of title filtering.
    pub title: String,
    /// Markdown body.
    pub markdown: String,
    /// Referenced tag ids in user-chosen order.
    #[serde(rename = "tagIds")]
    pub tag_ids: Vec<TagId>,
}

/// Create/update payload for a note.
///
/// Callers hand over resolved `Tag` values; persistence derives the id
/// list from them, preserving order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub markdown: String,
    pub tags: Vec<Tag>,
}

impl NoteDraft {
    /// Derives the persisted id list from the draft's tags.
    pub fn tag_ids(&self) -> Vec<TagId> {
        self.tags.iter().map(|tag| tag.id).collect()
    }
}

impl RawNote {
    /// Creates a note record with a generated stable ID.
    pub fn new(draft: &NoteDraft) -> Self {
        Self::with_id(Uuid::new_v4(), draft)
    }

    /// Creates a note record with a caller-provided stable ID.
    pub fn with_id(id: NoteId, draft: &NoteDraft) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            markdown: draft.markdown.clone(),
            tag_ids: draft.tag_ids(),
        }
    }

    /// Applies a draft to this note, preserving identity.
    ///
    /// All mutable fields are taken from the draft; `tag_ids` is fully
    /// replaced by the draft's tag list.
    pub fn apply(&mut self, draft: &NoteDraft) {
        self.title = draft.title.clone();
        self.markdown = draft.markdown.clone();
        self.tag_ids = draft.tag_ids();
    }
}
