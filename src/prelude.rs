//! Prelude module for convenient imports
//!
//! Import everything you need with: `use dataproc::prelude::*;`

// Domain types
pub use crate::domain::{BoxError, DataSet, KeyState, ProcessingFailure};

// Storage types
pub use crate::storage::{ConcurrentDataStore, DataStore, StorageError};

// Pool types
pub use crate::pool::{
    PoolConfig, PoolError, RayonWorkerPool, SequentialWorkerPool, TaskFailure, TaskPanic,
    WorkerPool,
};

// Engine types
pub use crate::engine::{EngineError, Processor, ProcessorConfig};

// IO types
pub use crate::io::{IoError, SaveMode, load_records, save_records, write_records};

// App types
pub use crate::app::{AppError, CliApp, CliArgs, TextTransform};
