use std::any::Any;

use thiserror::Error;

use crate::domain::BoxError;

/// A task failed inside [`crate::pool::WorkerPool::run_parallel`]
#[derive(Error, Debug)]
#[error("Task failed at position {position}: {cause}")]
pub struct TaskFailure {
    pub position: usize,
    #[source]
    pub cause: BoxError,
}

impl TaskFailure {
    pub fn new(position: usize, cause: impl Into<BoxError>) -> Self {
        Self {
            position,
            cause: cause.into(),
        }
    }
}

/// Cause recorded when a task panics instead of returning an error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Task panicked: {0}")]
pub struct TaskPanic(pub String);

impl TaskPanic {
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Self(message)
    }
}

/// Pool construction errors
#[derive(Error, Debug)]
pub enum PoolError {
    #[error("Failed to build worker pool: {0}")]
    Build(#[from] rayon::ThreadPoolBuildError),
}
