//! Persistence port used by the engine.

use anyhow::Error;
use taskflow_core::Task;
use taskflow_store_kv::{KeyValue, KvTaskStore};

/// Minimal storage abstraction required by [`TaskService`](crate::service::TaskService).
///
/// The engine reads the full sequence once at startup and writes the
/// full sequence after every successful mutation.
pub trait TaskRecordStore {
    /// Error type bubbled up from the backing store.
    type Error: Into<Error>;

    /// Load the persisted task sequence in canonical order.
    ///
    /// A missing or unreadable payload should load as the empty
    /// sequence where the backend can tell the difference; only a
    /// genuinely failing backend should error.
    ///
    /// # Errors
    /// Returns a store-specific error when the backend cannot be read.
    fn load(&self) -> Result<Vec<Task>, Self::Error>;

    /// Replace the persisted sequence with `tasks`.
    ///
    /// # Errors
    /// Returns a store-specific error when the write fails.
    fn save(&self, tasks: &[Task]) -> Result<(), Self::Error>;
}

impl<K: KeyValue> TaskRecordStore for KvTaskStore<K> {
    type Error = taskflow_store_kv::KvStoreError;

    fn load(&self) -> Result<Vec<Task>, Self::Error> {
        Self::load(self)
    }

    fn save(&self, tasks: &[Task]) -> Result<(), Self::Error> {
        Self::save(self, tasks)
    }
}
