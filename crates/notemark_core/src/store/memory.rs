//! In-memory key-value store.
//!
//! # Responsibility
//! - Back tests and tooling with a transparent store implementation.
//! - Simulate write unavailability for durability error-path tests.

use crate::store::{KeyValueStore, StoreError, StoreResult};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

/// Map-backed store for tests and tools.
///
/// `set_fail_writes(true)` turns every subsequent `put` into an
/// `Unavailable` error while reads keep working, which mirrors a host
/// store that lost its backing medium mid-session.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: RefCell<BTreeMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryKvStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a raw payload directly, bypassing the failure toggle.
    ///
    /// Used by tests to stage pre-existing or corrupt stored data.
    pub fn seed(&self, key: impl Into<String>, payload: impl Into<String>) {
        self.entries.borrow_mut().insert(key.into(), payload.into());
    }

    /// Returns the raw payload currently stored under `key`.
    pub fn snapshot(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Switches write failure simulation on or off.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        if self.fail_writes.get() {
            return Err(StoreError::Unavailable {
                key: key.to_string(),
                message: "write failure simulation is active".to_string(),
            });
        }

        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
