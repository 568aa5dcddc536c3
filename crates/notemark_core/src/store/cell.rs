//! Typed observable wrapper over one store key.
//!
//! # Responsibility
//! - Hydrate one collection from the store, with a documented fallback on
//!   corrupt payloads.
//! - Keep the canonical value in memory and write through on every change.
//!
//! # Invariants
//! - The in-memory value is canonical; the store is never re-read after
//!   load.
//! - Listeners run on every set, before the write-through.
//! - A failed write-through surfaces an error while the in-memory value
//!   keeps the attempted change.

use crate::store::{KeyValueStore, StoreError, StoreResult};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Change listener invoked with the value just committed.
pub type ChangeListener<T> = Box<dyn FnMut(&T)>;

/// Observable typed value bound to one key of a key-value store.
///
/// The cell owns the current value, a listener list, and a `set` path
/// that updates the value, notifies listeners, and synchronously writes
/// the serialized value through. There is no hidden scheduler; callers
/// decide when derived state is recomputed.
pub struct StoreCell<'s, T> {
    store: &'s dyn KeyValueStore,
    key: &'static str,
    value: T,
    listeners: Vec<ChangeListener<T>>,
}

impl<'s, T> StoreCell<'s, T>
where
    T: Serialize + DeserializeOwned,
{
    /// Hydrates a cell from `key`, initializing the store when absent.
    ///
    /// A stored payload that fails to parse as `T` is non-fatal: the cell
    /// falls back to `default`, logs a `status=fallback` event, and leaves
    /// the stored payload untouched until the next successful
    /// [`StoreCell::set`] replaces it.
    ///
    /// # Errors
    /// - Propagates store read failures, and the write failure when the
    ///   absent-key default cannot be persisted.
    pub fn load(store: &'s dyn KeyValueStore, key: &'static str, default: T) -> StoreResult<Self> {
        let value = match store.get(key)? {
            Some(payload) => match serde_json::from_str(&payload) {
                Ok(value) => {
                    debug!("event=store_load module=store status=ok key={key}");
                    value
                }
                Err(err) => {
                    warn!("event=store_load module=store status=fallback key={key} error={err}");
                    default
                }
            },
            None => {
                let payload = encode(&default)?;
                store.put(key, &payload)?;
                debug!("event=store_load module=store status=initialized key={key}");
                default
            }
        };

        Ok(Self {
            store,
            key,
            value,
            listeners: Vec::new(),
        })
    }

    /// Returns the canonical in-memory value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value, notifies listeners, and writes through.
    ///
    /// # Errors
    /// - Returns the write failure to the caller while the in-memory
    ///   value keeps the attempted change (write-ahead-in-memory).
    pub fn set(&mut self, value: T) -> StoreResult<()> {
        self.value = value;
        for listener in &mut self.listeners {
            listener(&self.value);
        }

        let payload = encode(&self.value)?;
        self.store.put(self.key, &payload)
    }

    /// Replaces the value with `f(current)` and writes through.
    ///
    /// Collections use whole-value replacement semantics; `f` receives
    /// the current value and returns its successor.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> StoreResult<()> {
        let next = f(&self.value);
        self.set(next)
    }

    /// Registers a listener invoked on every subsequent set.
    pub fn subscribe(&mut self, listener: ChangeListener<T>) {
        self.listeners.push(listener);
    }
}

fn encode<T: Serialize>(value: &T) -> StoreResult<String> {
    serde_json::to_string(value).map_err(StoreError::Encode)
}
