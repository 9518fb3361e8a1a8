use std::panic::{self, AssertUnwindSafe};

use super::error::{TaskFailure, TaskPanic};
use crate::domain::BoxError;

/// Bounded set of execution units running elementwise work
///
/// Implementations must return results in input order and must not return
/// partial results when any task fails.
pub trait WorkerPool: Send + Sync {
    /// Number of execution units (always at least one)
    fn workers(&self) -> usize;

    /// Apply `task` to every item, preserving input order
    ///
    /// Stops scheduling new work after the first failure and reports the
    /// first observed failing position.
    fn run_parallel<T, U, F>(&self, items: &[T], task: F) -> Result<Vec<U>, TaskFailure>
    where
        T: Sync,
        U: Send,
        F: Fn(&T) -> Result<U, BoxError> + Send + Sync;

    /// Release the pool's execution units
    fn dispose(self)
    where
        Self: Sized;
}

/// Run one task, turning a panic into a failure at `position`
pub(crate) fn run_task<T, U, F>(position: usize, item: &T, task: &F) -> Result<U, TaskFailure>
where
    F: Fn(&T) -> Result<U, BoxError>,
{
    match panic::catch_unwind(AssertUnwindSafe(|| task(item))) {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(cause)) => Err(TaskFailure::new(position, cause)),
        Err(payload) => Err(TaskFailure::new(position, TaskPanic::from_payload(payload))),
    }
}
