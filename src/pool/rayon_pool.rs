use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info};

use super::config::PoolConfig;
use super::error::{PoolError, TaskFailure};
use super::traits::{WorkerPool, run_task};
use crate::domain::BoxError;

/// Worker pool backed by a dedicated rayon thread pool
///
/// Each instance owns its threads; nothing is shared through rayon's global
/// pool, so two processors never compete for each other's workers.
#[derive(Debug)]
pub struct RayonWorkerPool {
    pool: ThreadPool,
    workers: usize,
}

impl RayonWorkerPool {
    /// Create a pool with `max(1, requested_workers)` threads
    pub fn new(requested_workers: i64) -> Result<Self, PoolError> {
        Self::with_config(&PoolConfig::new(requested_workers))
    }

    pub fn with_config(config: &PoolConfig) -> Result<Self, PoolError> {
        let workers = config.effective_workers();
        if i64::try_from(workers).ok() != Some(config.requested_workers) {
            debug!(
                requested = config.requested_workers,
                workers, "Clamped worker count"
            );
        }

        let prefix = config.thread_name_prefix.clone();
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(move |index| format!("{prefix}-{index}"))
            .build()?;

        info!(workers, "Worker pool started");
        Ok(Self { pool, workers })
    }
}

impl WorkerPool for RayonWorkerPool {
    fn workers(&self) -> usize {
        self.workers
    }

    fn run_parallel<T, U, F>(&self, items: &[T], task: F) -> Result<Vec<U>, TaskFailure>
    where
        T: Sync,
        U: Send,
        F: Fn(&T) -> Result<U, BoxError> + Send + Sync,
    {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        // Collecting into Result short-circuits: once a task fails, rayon stops
        // handing out the remaining items and keeps the first error it saw.
        self.pool.install(|| {
            items
                .par_iter()
                .enumerate()
                .map(|(position, item)| run_task(position, item, &task))
                .collect()
        })
    }

    fn dispose(self) {
        info!(workers = self.workers, "Worker pool disposed");
        drop(self.pool);
    }
}
