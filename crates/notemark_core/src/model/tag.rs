//! Tag domain model.
//!
//! # Responsibility
//! - Define the labeled category entity assignable to notes.
//!
//! # Invariants
//! - `id` is stable and never reused for another tag.
//! - `label` is free-form and mutable; duplicate labels are permitted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a tag.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TagId = Uuid;

/// Labeled category with a stable identity.
///
/// Renaming a tag changes `label` only; `id` survives every edit and is
/// what notes reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Stable global ID referenced by notes.
    pub id: TagId,
    /// Display string shown in tag pickers and badges.
    pub label: String,
}

impl Tag {
    /// Creates a tag with a generated stable ID.
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), label)
    }

    /// Creates a tag with a caller-provided stable ID.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(id: TagId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}
