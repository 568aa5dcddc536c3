//! Joined-view filtering.
//!
//! # Responsibility
//! - Select the displayed subset from the joined view by title query and
//!   tag selection.
//!
//! # Invariants
//! - An empty title query matches every title.
//! - An empty tag selection matches every note.
//! - Selected tags use subset semantics against the note's resolved
//!   tags, not exact-set equality.

use crate::model::tag::TagId;
use crate::view::join::NoteWithTags;

/// Filters the joined view by title substring and selected tags.
///
/// Title matching is case-insensitive substring containment. A note
/// matches the tag selection when every selected id appears among its
/// resolved tags. Returns a new sequence; inputs are never mutated.
pub fn filter_notes(
    joined: &[NoteWithTags],
    title_query: &str,
    selected_tag_ids: &[TagId],
) -> Vec<NoteWithTags> {
    let query = title_query.to_lowercase();

    joined
        .iter()
        .filter(|note| {
            (query.is_empty() || note.title.to_lowercase().contains(&query))
                && note.has_all_tags(selected_tag_ids)
        })
        .cloned()
        .collect()
}
