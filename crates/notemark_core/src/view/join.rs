//! Note/tag join projection.
//!
//! # Responsibility
//! - Resolve stored tag ids to full tags for display.
//!
//! # Invariants
//! - Orphaned tag ids are dropped from the resolved list, never errors.
//! - Resolved tags preserve the note's `tag_ids` order.
//! - Pure: inputs are never mutated and equal inputs yield equal outputs.

use crate::model::note::{NoteId, RawNote};
use crate::model::tag::{Tag, TagId};
use crate::view::preview::{derive_markdown_preview, MarkdownPreview};
use std::collections::HashMap;

/// Note viewed with its tag references resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteWithTags {
    /// Stable id shared with the persisted record.
    pub id: NoteId,
    pub title: String,
    pub markdown: String,
    /// Resolved tags in stored reference order; orphans omitted.
    pub tags: Vec<Tag>,
}

impl NoteWithTags {
    /// Returns whether every id in `selected` resolves among this note's
    /// tags.
    pub fn has_all_tags(&self, selected: &[TagId]) -> bool {
        selected
            .iter()
            .all(|wanted| self.tags.iter().any(|tag| tag.id == *wanted))
    }

    /// Derives the markdown preview projection for list rendering.
    pub fn preview(&self) -> MarkdownPreview {
        derive_markdown_preview(&self.markdown)
    }
}

/// Resolves every note's tag ids against the current tag collection.
///
/// Recompute this whenever either collection changes; the result holds no
/// references into the inputs and the core never caches it.
pub fn join_notes_with_tags(notes: &[RawNote], tags: &[Tag]) -> Vec<NoteWithTags> {
    let by_id: HashMap<TagId, &Tag> = tags.iter().map(|tag| (tag.id, tag)).collect();

    notes
        .iter()
        .map(|note| NoteWithTags {
            id: note.id,
            title: note.title.clone(),
            markdown: note.markdown.clone(),
            tags: note
                .tag_ids
                .iter()
                .filter_map(|tag_id| by_id.get(tag_id).map(|tag| (*tag).clone()))
                .collect(),
        })
        .collect()
}
