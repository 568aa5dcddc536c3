//! Derived views over the persisted collections.
//!
//! # Responsibility
//! - Resolve note/tag references into display-ready shapes.
//! - Keep every projection pure so callers control recomputation.
//!
//! # Invariants
//! - View functions never mutate their inputs and hold no internal
//!   caches; equal inputs yield equal outputs.

pub mod filter;
pub mod join;
pub mod preview;
