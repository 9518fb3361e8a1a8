use std::collections::HashMap;

use super::error::StorageError;
use crate::domain::{DataSet, KeyState};

/// Keyed store of ordered sequences with pluggable backends
///
/// Every mutation replaces a key's sequence whole. Readers only ever receive
/// [`DataSet`] views, never the live value.
pub trait DataStore<T>: Send + Sync {
    /// Store `items` under `key`, replacing any prior sequence
    fn put(&self, key: &str, items: Vec<T>);

    /// Current sequence for `key`, if loaded
    fn get(&self, key: &str) -> Option<DataSet<T>>;

    /// View of every key
    ///
    /// Each sequence is read whole, but keys are read one after another: the
    /// result is not a single cut across keys, so updates to different keys
    /// that race with the snapshot may be seen in any combination.
    fn snapshot(&self) -> HashMap<String, DataSet<T>>;

    /// Atomically swap the sequence of an existing key
    fn replace(&self, key: &str, items: Vec<T>) -> Result<(), StorageError>;

    /// Serialized read-compute-swap on one key
    ///
    /// `update_fn` sees the current sequence and returns its replacement. On
    /// error nothing is stored and the key keeps its previous sequence.
    fn try_update<F, E>(&self, key: &str, update_fn: F) -> Result<(), E>
    where
        F: FnOnce(&DataSet<T>) -> Result<Vec<T>, E>,
        E: From<StorageError>;

    /// Drop `key` and return its last sequence
    fn remove(&self, key: &str) -> Option<DataSet<T>>;

    /// Check if a key is loaded
    fn contains(&self, key: &str) -> bool;

    /// Lifecycle state of `key`
    fn state(&self, key: &str) -> KeyState;

    /// Number of loaded keys
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
