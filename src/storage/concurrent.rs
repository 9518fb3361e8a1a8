use std::collections::HashMap;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use dashmap::{DashMap, Entry};
use tracing::{debug, warn};

use super::error::StorageError;
use super::traits::DataStore;
use crate::domain::{DataSet, KeyState};

/// One key's storage cell
///
/// `writer` serializes every mutation of the key; `current` is only locked for
/// the instant it takes to clone or swap the view, so readers never wait on a
/// running transform.
struct Slot<T> {
    current: RwLock<DataSet<T>>,
    writer: Mutex<()>,
    state: AtomicU8,
}

impl<T> Slot<T> {
    fn new(data: DataSet<T>) -> Self {
        Self {
            current: RwLock::new(data),
            writer: Mutex::new(()),
            state: AtomicU8::new(KeyState::Loaded as u8),
        }
    }

    // A poisoned lock still holds a whole sequence: values are only ever swapped.
    fn lock_writer(&self) -> MutexGuard<'_, ()> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read(&self) -> DataSet<T> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn swap(&self, data: DataSet<T>) -> DataSet<T> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, data)
    }

    fn state(&self) -> KeyState {
        KeyState::from_u8(self.state.load(Ordering::Acquire))
    }
}

/// Holds a slot in `Transforming` and settles it back to `Loaded` on drop
struct TransformGuard<'a> {
    state: &'a AtomicU8,
}

impl<'a> TransformGuard<'a> {
    fn enter(state: &'a AtomicU8) -> Self {
        state.store(KeyState::Transforming as u8, Ordering::Release);
        Self { state }
    }

    fn fail(&self) {
        self.state.store(KeyState::Failed as u8, Ordering::Release);
    }
}

impl Drop for TransformGuard<'_> {
    fn drop(&mut self) {
        self.state.store(KeyState::Loaded as u8, Ordering::Release);
    }
}

/// Concurrent in-memory data store using DashMap
///
/// The map is a key→slot table; each slot carries its own exclusion, and slots
/// are cloned out of the table before any slot lock is taken. Work on one key
/// therefore never holds a table shard, and distinct keys never block each other.
pub struct ConcurrentDataStore<T> {
    slots: DashMap<String, Arc<Slot<T>>>,
}

impl<T> ConcurrentDataStore<T> {
    /// Create a new empty concurrent data store
    pub fn new() -> Self {
        Self {
            slots: DashMap::new(),
        }
    }

    fn slot(&self, key: &str) -> Option<Arc<Slot<T>>> {
        self.slots.get(key).map(|entry| Arc::clone(entry.value()))
    }

    fn is_current(&self, key: &str, slot: &Arc<Slot<T>>) -> bool {
        self.slots
            .get(key)
            .is_some_and(|entry| Arc::ptr_eq(entry.value(), slot))
    }
}

impl<T> Default for ConcurrentDataStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + Sync> DataStore<T> for ConcurrentDataStore<T> {
    fn put(&self, key: &str, items: Vec<T>) {
        let count = items.len();
        let data = DataSet::from(items);

        loop {
            let slot = match self.slots.entry(key.to_owned()) {
                Entry::Vacant(e) => {
                    e.insert(Arc::new(Slot::new(data)));
                    debug!(key, items = count, "Inserted new key");
                    return;
                }
                Entry::Occupied(e) => Arc::clone(e.get()),
            };

            let _writer = slot.lock_writer();
            if self.is_current(key, &slot) {
                slot.swap(data);
                slot.state.store(KeyState::Loaded as u8, Ordering::Release);
                debug!(key, items = count, "Overwrote existing key");
                return;
            }
            warn!(key, "Key removed during overwrite, retrying");
        }
    }

    fn get(&self, key: &str) -> Option<DataSet<T>> {
        self.slot(key).map(|slot| slot.read())
    }

    fn snapshot(&self) -> HashMap<String, DataSet<T>> {
        // Collect slots first so no shard lock is held while reading them
        let slots: Vec<(String, Arc<Slot<T>>)> = self
            .slots
            .iter()
            .map(|entry| (entry.key().clone(), Arc::clone(entry.value())))
            .collect();

        slots
            .into_iter()
            .map(|(key, slot)| (key, slot.read()))
            .collect()
    }

    fn replace(&self, key: &str, items: Vec<T>) -> Result<(), StorageError> {
        let slot = self
            .slot(key)
            .ok_or_else(|| StorageError::KeyNotFound(key.to_owned()))?;

        let _writer = slot.lock_writer();
        if !self.is_current(key, &slot) {
            return Err(StorageError::KeyNotFound(key.to_owned()));
        }

        slot.swap(DataSet::from(items));
        Ok(())
    }

    fn try_update<F, E>(&self, key: &str, update_fn: F) -> Result<(), E>
    where
        F: FnOnce(&DataSet<T>) -> Result<Vec<T>, E>,
        E: From<StorageError>,
    {
        let slot = self
            .slot(key)
            .ok_or_else(|| StorageError::KeyNotFound(key.to_owned()))?;

        let _writer = slot.lock_writer();
        if !self.is_current(key, &slot) {
            return Err(StorageError::KeyNotFound(key.to_owned()).into());
        }

        let guard = TransformGuard::enter(&slot.state);
        let current = slot.read();

        match update_fn(&current) {
            Ok(items) => {
                let after = items.len();
                slot.swap(DataSet::from(items));
                debug!(key, before = current.len(), after, "Replaced sequence");
                Ok(())
            }
            Err(err) => {
                guard.fail();
                debug!(key, "Update rejected, keeping previous sequence");
                Err(err)
            }
        }
    }

    fn remove(&self, key: &str) -> Option<DataSet<T>> {
        let slot = self.slot(key)?;

        // Wait out any in-flight update so it cannot land in a detached slot
        let _writer = slot.lock_writer();
        let (_, removed) = self
            .slots
            .remove_if(key, |_, current| Arc::ptr_eq(current, &slot))?;

        debug!(key, "Removed key");
        Some(removed.read())
    }

    fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    fn state(&self, key: &str) -> KeyState {
        self.slot(key)
            .map(|slot| slot.state())
            .unwrap_or(KeyState::Absent)
    }

    fn len(&self) -> usize {
        self.slots.len()
    }
}
