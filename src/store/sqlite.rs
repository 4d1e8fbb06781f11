//! SQLite implementation of the storage collaborator.

use super::EntryStore;
use crate::constants::{DB_FILE_NAME, TIMESTAMP_STORE_FORMAT};
use crate::entry::Entry;
use crate::errors::{AppResult, StoreError};
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Entry store backed by a SQLite database file inside a base directory.
///
/// The store keeps only paths and opens a connection per operation: the
/// reset action deletes the whole base directory between calls, and a held
/// handle would pin the old database file.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    base_dir: PathBuf,
    db_path: PathBuf,
}

impl SqliteStore {
    /// Creates a store rooted at `base_dir`. No I/O happens until
    /// `init_table` or the first operation.
    pub fn open(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let db_path = base_dir.join(DB_FILE_NAME);
        SqliteStore { base_dir, db_path }
    }

    fn connect(&self) -> AppResult<Connection> {
        let conn = Connection::open(&self.db_path).map_err(StoreError::Sqlite)?;
        Ok(conn)
    }
}

/// Parses the stored timestamp column at `idx` into a `NaiveDateTime`.
fn timestamp_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<NaiveDateTime> {
    let raw: String = row.get(idx)?;
    NaiveDateTime::parse_from_str(&raw, TIMESTAMP_STORE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

impl EntryStore for SqliteStore {
    fn get(&self, id: i64) -> AppResult<Option<Entry>> {
        let conn = self.connect()?;
        let entry = conn
            .query_row(
                "SELECT text, created_at FROM entries WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Entry {
                        text: row.get(0)?,
                        timestamp: timestamp_at(row, 1)?,
                    })
                },
            )
            .optional()
            .map_err(StoreError::Sqlite)?;
        Ok(entry)
    }

    fn get_all(&self) -> AppResult<Vec<(i64, Entry)>> {
        let conn = self.connect()?;
        let mut stmt = conn
            .prepare("SELECT id, text, created_at FROM entries ORDER BY id")
            .map_err(StoreError::Sqlite)?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get(0)?,
                    Entry {
                        text: row.get(1)?,
                        timestamp: timestamp_at(row, 2)?,
                    },
                ))
            })
            .map_err(StoreError::Sqlite)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row.map_err(StoreError::Sqlite)?);
        }
        Ok(entries)
    }

    fn write(&self, entry: &Entry) -> AppResult<i64> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO entries (text, created_at) VALUES (?1, ?2)",
            params![
                entry.text,
                entry.timestamp.format(TIMESTAMP_STORE_FORMAT).to_string()
            ],
        )
        .map_err(StoreError::Sqlite)?;
        let id = conn.last_insert_rowid();
        debug!("wrote entry {}", id);
        Ok(id)
    }

    fn update(&self, id: i64, entry: &Entry) -> AppResult<()> {
        let conn = self.connect()?;
        conn.execute(
            "UPDATE entries SET text = ?1, created_at = ?2 WHERE id = ?3",
            params![
                entry.text,
                entry.timestamp.format(TIMESTAMP_STORE_FORMAT).to_string(),
                id
            ],
        )
        .map_err(StoreError::Sqlite)?;
        debug!("updated entry {}", id);
        Ok(())
    }

    fn delete(&self, id: i64) -> AppResult<usize> {
        let conn = self.connect()?;
        let removed = conn
            .execute("DELETE FROM entries WHERE id = ?1", params![id])
            .map_err(StoreError::Sqlite)?;
        debug!("deleted {} row(s) for id {}", removed, id);
        Ok(removed)
    }

    fn init_table(&self) -> AppResult<()> {
        fs::create_dir_all(&self.base_dir)?;
        let conn = self.connect()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                text TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .map_err(StoreError::Sqlite)?;
        debug!("entries table ready at {:?}", self.db_path);
        Ok(())
    }

    fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}
