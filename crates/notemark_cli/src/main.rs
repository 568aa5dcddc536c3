//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `notemark_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use notemark_core::{MemoryKvStore, NoteDraft, NoteWorkspace};

fn main() {
    let store = MemoryKvStore::new();
    let mut workspace = NoteWorkspace::open(&store).expect("in-memory workspace should open");

    let tag = workspace.add_tag("smoke").expect("tag create should succeed");
    workspace
        .create_note(&NoteDraft {
            title: "Smoke note".to_string(),
            markdown: "in-memory wiring probe".to_string(),
            tags: vec![tag],
        })
        .expect("note create should succeed");

    println!("notemark_core version={}", notemark_core::core_version());
    println!(
        "notemark_core joined_notes={}",
        workspace.joined_notes().len()
    );
}
