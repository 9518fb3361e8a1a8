use super::error::TaskFailure;
use super::traits::{WorkerPool, run_task};
use crate::domain::BoxError;

/// Worker pool that runs every task inline on the calling thread
///
/// Deterministic: a failure always names the lowest failing position and no
/// later item is ever started.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialWorkerPool;

impl SequentialWorkerPool {
    pub fn new() -> Self {
        Self
    }
}

impl WorkerPool for SequentialWorkerPool {
    fn workers(&self) -> usize {
        1
    }

    fn run_parallel<T, U, F>(&self, items: &[T], task: F) -> Result<Vec<U>, TaskFailure>
    where
        T: Sync,
        U: Send,
        F: Fn(&T) -> Result<U, BoxError> + Send + Sync,
    {
        items
            .iter()
            .enumerate()
            .map(|(position, item)| run_task(position, item, &task))
            .collect()
    }

    fn dispose(self) {}
}
