//! Storage collaborator for journal entries.
//!
//! The dispatcher talks to storage exclusively through the `EntryStore`
//! trait; `SqliteStore` is the production implementation. Ids are assigned
//! and owned here — entries themselves carry none.

pub mod sqlite;

pub use sqlite::SqliteStore;

use crate::entry::Entry;
use crate::errors::AppResult;
use std::path::Path;

/// Capability surface the dispatcher requires from storage.
pub trait EntryStore {
    /// Loads the entry under `id`, or `None` if there is none.
    fn get(&self, id: i64) -> AppResult<Option<Entry>>;

    /// Loads every entry with its id, in insertion order.
    fn get_all(&self) -> AppResult<Vec<(i64, Entry)>>;

    /// Persists a new entry and returns its assigned id.
    fn write(&self, entry: &Entry) -> AppResult<i64>;

    /// Replaces the entry under `id` with the given text and timestamp.
    fn update(&self, id: i64, entry: &Entry) -> AppResult<()>;

    /// Removes the entry under `id`, returning the number of rows removed.
    fn delete(&self, id: i64) -> AppResult<usize>;

    /// Idempotent schema setup; also creates the base directory.
    fn init_table(&self) -> AppResult<()>;

    /// The storage location the destructive reset action wipes.
    fn base_dir(&self) -> &Path;
}
