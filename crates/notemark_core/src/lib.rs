//! Core domain logic for Notemark.
//! This crate is the single source of truth for note/tag invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{NoteDraft, NoteId, RawNote};
pub use model::tag::{Tag, TagId};
pub use repo::note_repo::{NoteRepository, NOTES_KEY};
pub use repo::tag_registry::{TagRegistry, TAGS_KEY};
pub use repo::{RepoError, RepoResult};
pub use service::workspace::NoteWorkspace;
pub use store::{
    KeyValueStore, MemoryKvStore, SqliteKvStore, StoreCell, StoreError, StoreResult,
};
pub use view::filter::filter_notes;
pub use view::join::{join_notes_with_tags, NoteWithTags};
pub use view::preview::{derive_markdown_preview, MarkdownPreview};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
