//! Repository layer owning the persisted collections.
//!
//! # Responsibility
//! - Bind each collection to its store key with write-through semantics.
//! - Enforce id uniqueness and missing-id no-op policies.
//!
//! # Invariants
//! - Creates fail closed on fresh-id collisions instead of overwriting.
//! - Rename/update/delete with a missing id never errors and never
//!   touches the store.

use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod note_repo;
pub mod tag_registry;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for collection mutations.
#[derive(Debug)]
pub enum RepoError {
    /// Freshly generated id collided with an existing entity.
    DuplicateId(Uuid),
    /// Hydration or write-through failure in the persistence layer.
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "generated id already exists: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DuplicateId(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
