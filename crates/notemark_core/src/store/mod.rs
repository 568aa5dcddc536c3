//! Persistence boundary abstractions.
//!
//! # Responsibility
//! - Define the key-value contract the core persists through.
//! - Provide store implementations and the typed observable cell bound to
//!   one key.
//!
//! # Invariants
//! - The core addresses the store with string keys and JSON string
//!   payloads only.
//! - Store implementations never interpret payloads.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod cell;
mod memory;
mod sqlite;

pub use cell::{ChangeListener, StoreCell};
pub use memory::MemoryKvStore;
pub use sqlite::SqliteKvStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport-level error for key-value reads and writes.
#[derive(Debug)]
pub enum StoreError {
    /// SQLite transport failure.
    Db(DbError),
    /// Backing store rejected or failed the operation.
    Unavailable { key: String, message: String },
    /// Value could not be serialized to JSON.
    Encode(serde_json::Error),
    /// Connection lacks a table required by the store schema.
    MissingRequiredTable(&'static str),
    /// Connection lacks a column required by the store schema.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Unavailable { key, message } => {
                write!(f, "store unavailable for key `{key}`: {message}")
            }
            Self::Encode(err) => write!(f, "failed to encode value as JSON: {err}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Unavailable { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Key-value persistence contract consumed by the core.
///
/// Payloads are opaque strings from the store's point of view; the typed
/// layer above ([`StoreCell`]) owns serialization.
pub trait KeyValueStore {
    /// Reads the payload stored under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    /// Writes `value` under `key`, replacing any previous payload.
    fn put(&self, key: &str, value: &str) -> StoreResult<()>;
}
