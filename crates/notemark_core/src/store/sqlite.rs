//! SQLite-backed key-value store.
//!
//! # Responsibility
//! - Persist opaque payloads in the migrated `kv` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Wrapped connections must have migrations applied; construction
//!   verifies the `kv` schema instead of trusting the caller.
//! - `put` replaces the previous payload for a key atomically.

use crate::db::{open_db, open_db_in_memory};
use crate::store::{KeyValueStore, StoreError, StoreResult};
use rusqlite::{params, Connection};
use std::path::Path;

/// Durable store over one SQLite database.
pub struct SqliteKvStore {
    conn: Connection,
}

impl SqliteKvStore {
    /// Wraps a migrated connection after verifying the `kv` schema.
    ///
    /// # Errors
    /// - `StoreError::MissingRequiredTable` / `MissingRequiredColumn` when
    ///   the connection was not bootstrapped through [`crate::db::open_db`].
    pub fn try_new(conn: Connection) -> StoreResult<Self> {
        ensure_kv_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Opens a database file and wraps it as a store.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::try_new(open_db(path)?)
    }

    /// Opens an in-memory database and wraps it as a store.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::try_new(open_db_in_memory()?)
    }
}

impl KeyValueStore for SqliteKvStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv WHERE key = ?1;")?;
        let mut rows = stmt.query([key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }

        Ok(None)
    }

    fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

fn ensure_kv_schema(conn: &Connection) -> StoreResult<()> {
    if !table_exists(conn, "kv")? {
        return Err(StoreError::MissingRequiredTable("kv"));
    }

    for column in ["key", "value"] {
        if !table_has_column(conn, "kv", column)? {
            return Err(StoreError::MissingRequiredColumn {
                table: "kv",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> StoreResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> StoreResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
