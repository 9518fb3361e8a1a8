use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt::Display;
use std::marker::PhantomData;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, warn};

use super::config::ProcessorConfig;
use super::error::EngineError;
use crate::domain::{BoxError, DataSet, KeyState, ProcessingFailure};
use crate::io::{SaveMode, load_records, save_records};
use crate::pool::{RayonWorkerPool, WorkerPool};
use crate::storage::{ConcurrentDataStore, DataStore};

/// Keyed data processor orchestrating storage, parallel transforms and persistence
///
/// All operations block the caller until they complete. A processor is
/// `Sync` when its store and pool are, so one instance can serve many threads.
pub struct Processor<T, S = ConcurrentDataStore<T>, P = RayonWorkerPool>
where
    T: Send + Sync,
    S: DataStore<T>,
    P: WorkerPool,
{
    store: S,
    pool: P,
    save_mode: SaveMode,
    _phantom: PhantomData<T>,
}

impl<T: Send + Sync> Processor<T> {
    /// Create a processor backed by a concurrent store and a dedicated rayon pool
    ///
    /// `workers` may be any value; zero and negative counts run with one worker.
    pub fn new(workers: i64) -> Result<Self, EngineError> {
        Self::with_config(ProcessorConfig::new(workers))
    }

    pub fn with_config(config: ProcessorConfig) -> Result<Self, EngineError> {
        let pool = RayonWorkerPool::with_config(&config.pool)?;
        Ok(Self::from_parts(
            ConcurrentDataStore::new(),
            pool,
            config.save_mode,
        ))
    }
}

impl<T, S, P> Processor<T, S, P>
where
    T: Send + Sync,
    S: DataStore<T>,
    P: WorkerPool,
{
    /// Assemble a processor from injected collaborators
    pub fn from_parts(store: S, pool: P, save_mode: SaveMode) -> Self {
        Self {
            store,
            pool,
            save_mode,
            _phantom: PhantomData,
        }
    }

    /// Store `items` under `key`, replacing any previous sequence
    pub fn load_data<I>(&self, key: &str, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        debug!(key, items = items.len(), "Loading data");
        self.store.put(key, items);
    }

    /// Parse `source` line by line and load the result under `key`
    pub fn load_file(&self, key: &str, source: impl AsRef<Path>) -> Result<usize, EngineError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let items: Vec<T> = load_records(source.as_ref())?;
        let count = items.len();
        self.load_data(key, items);
        Ok(count)
    }

    /// Apply `transform` to every item of `key` in parallel
    ///
    /// On success the whole sequence is replaced at once, in the original
    /// order. If any item fails the stored sequence is left untouched and the
    /// failing position is reported.
    pub fn transform_data<F, E>(&self, key: &str, transform: F) -> Result<(), EngineError>
    where
        F: Fn(&T) -> Result<T, E> + Send + Sync,
        E: Into<BoxError>,
    {
        debug!(key, workers = self.pool.workers(), "Transforming data");

        let pool = &self.pool;
        let result = self.store.try_update(key, |current| {
            pool.run_parallel(current.as_slice(), |item| transform(item).map_err(Into::into))
                .map_err(|failure| {
                    EngineError::from(ProcessingFailure::new(
                        key,
                        failure.position,
                        failure.cause,
                    ))
                })
        });

        if let Err(EngineError::Processing(failure)) = &result {
            warn!(
                key,
                position = failure.position,
                cause = %failure.cause,
                "Transform failed, data left unchanged"
            );
        }

        result
    }

    /// Infallible variant of [`Processor::transform_data`]
    pub fn map_data<F>(&self, key: &str, mapper: F) -> Result<(), EngineError>
    where
        F: Fn(&T) -> T + Send + Sync,
    {
        self.transform_data(key, |item| Ok::<_, Infallible>(mapper(item)))
    }

    /// Write the sequence under `key` to `destination`, one record per line
    ///
    /// Returns the number of records written.
    pub fn save_data(&self, key: &str, destination: impl AsRef<Path>) -> Result<usize, EngineError>
    where
        T: Display,
    {
        let data = self
            .store
            .get(key)
            .ok_or_else(|| EngineError::KeyNotFound(key.to_owned()))?;

        let written = save_records(data.as_slice(), destination.as_ref(), self.save_mode)?;
        debug!(key, records = written, "Saved data");
        Ok(written)
    }

    /// Read-only snapshot of every loaded key
    pub fn get_data(&self) -> HashMap<String, DataSet<T>> {
        self.store.snapshot()
    }

    /// Read-only view of one key
    pub fn get(&self, key: &str) -> Option<DataSet<T>> {
        self.store.get(key)
    }

    /// Forget `key`, returning its last sequence
    pub fn remove_data(&self, key: &str) -> Result<DataSet<T>, EngineError> {
        self.store
            .remove(key)
            .ok_or_else(|| EngineError::KeyNotFound(key.to_owned()))
    }

    pub fn state(&self, key: &str) -> KeyState {
        self.store.state(key)
    }

    /// Effective worker count of the underlying pool
    pub fn workers(&self) -> usize {
        self.pool.workers()
    }

    /// Get reference to the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Tear down the worker pool and drop all stored data
    pub fn dispose(self) {
        debug!(keys = self.store.len(), "Disposing processor");
        self.pool.dispose();
    }
}
