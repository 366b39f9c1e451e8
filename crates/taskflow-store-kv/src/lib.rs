//! Key-value backed persistence for taskflow task records.
//!
//! The engine treats persistence as an opaque synchronous key-value
//! store with string values. This crate supplies that port, two
//! implementations (in-memory and file-backed), and [`KvTaskStore`],
//! which serializes the full ordered task sequence as JSON under a
//! single well-known key.

/// Error types.
pub mod error;

pub use error::KvStoreError;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use taskflow_core::Task;
use tracing::{debug, warn};

/// Key the full task sequence is stored under.
pub const TASKS_KEY: &str = "tasks";

/// Synchronous string key-value store.
pub trait KeyValue {
    /// Read the raw value stored under `key`, if any.
    ///
    /// # Errors
    /// Returns an error when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, KvStoreError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns an error when the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), KvStoreError>;
}

/// In-memory key-value store. Clones share the same underlying map,
/// which lets tests hold a handle onto a store they handed to the engine.
#[derive(Debug, Clone, Default)]
pub struct MemoryKv {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryKv {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValue for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>, KvStoreError> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KvStoreError> {
        self.entries().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// File-backed key-value store: each key maps to `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileKv {
    dir: PathBuf,
}

impl FileKv {
    /// Store rooted at `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the store files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValue for FileKv {
    fn get(&self, key: &str) -> Result<Option<String>, KvStoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KvStoreError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// Persists the canonical task sequence under [`TASKS_KEY`].
///
/// A missing or unparsable stored value loads as the empty collection
/// rather than an error, so a corrupted store never locks the user out.
#[derive(Debug, Clone)]
pub struct KvTaskStore<K> {
    kv: K,
}

impl<K: KeyValue> KvTaskStore<K> {
    /// Wrap a key-value backend.
    #[must_use]
    pub const fn new(kv: K) -> Self {
        Self { kv }
    }

    /// Borrow the underlying backend.
    #[must_use]
    pub const fn backend(&self) -> &K {
        &self.kv
    }

    /// Load the persisted task sequence.
    ///
    /// # Errors
    /// Returns an error only when the backend itself cannot be read;
    /// absent or malformed values yield an empty sequence.
    pub fn load(&self) -> Result<Vec<Task>, KvStoreError> {
        let Some(raw) = self.kv.get(TASKS_KEY)? else {
            debug!("no persisted tasks, starting empty");
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(tasks) => Ok(tasks),
            Err(err) => {
                warn!(%err, "persisted tasks are unparsable, starting empty");
                Ok(Vec::new())
            }
        }
    }

    /// Persist the full task sequence, replacing the previous value.
    ///
    /// # Errors
    /// Returns an error when serialization or the backend write fails.
    pub fn save(&self, tasks: &[Task]) -> Result<(), KvStoreError> {
        let raw = serde_json::to_string(tasks)?;
        self.kv.set(TASKS_KEY, &raw)?;
        debug!(count = tasks.len(), "persisted tasks");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskflow_core::{BoardColumn, TaskId};
    use tempfile::TempDir;
    use time::OffsetDateTime;

    fn sample_task(id: i64) -> Task {
        Task {
            id: TaskId(id),
            text: format!("task {id}"),
            completed: false,
            created_at: OffsetDateTime::UNIX_EPOCH,
            due_date: None,
            priority: None,
            status: Some(BoardColumn::Todo),
        }
    }

    #[test]
    fn memory_kv_round_trips_values() {
        let kv = MemoryKv::new();
        assert_eq!(kv.get("missing").unwrap(), None);
        kv.set("k", "v").unwrap();
        assert_eq!(kv.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn memory_kv_clones_share_state() {
        let kv = MemoryKv::new();
        let handle = kv.clone();
        kv.set("k", "v").unwrap();
        assert_eq!(handle.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn file_kv_round_trips_values() {
        let dir = TempDir::new().unwrap();
        let kv = FileKv::new(dir.path());
        assert_eq!(kv.get(TASKS_KEY).unwrap(), None);
        kv.set(TASKS_KEY, "[]").unwrap();
        assert_eq!(kv.get(TASKS_KEY).unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("tasks.json").exists());
    }

    #[test]
    fn task_store_round_trips_sequence_in_order() {
        let store = KvTaskStore::new(MemoryKv::new());
        let tasks = vec![sample_task(3), sample_task(1), sample_task(2)];
        store.save(&tasks).unwrap();
        assert_eq!(store.load().unwrap(), tasks);
    }

    #[test]
    fn missing_value_loads_as_empty() {
        let store = KvTaskStore::new(MemoryKv::new());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn unparsable_value_loads_as_empty() {
        let kv = MemoryKv::new();
        kv.set(TASKS_KEY, "not json {").unwrap();
        let store = KvTaskStore::new(kv);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn file_backed_store_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let tasks = vec![sample_task(1)];
        KvTaskStore::new(FileKv::new(dir.path())).save(&tasks).unwrap();

        let reopened = KvTaskStore::new(FileKv::new(dir.path()));
        assert_eq!(reopened.load().unwrap(), tasks);
    }
}
