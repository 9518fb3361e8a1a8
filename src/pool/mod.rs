pub mod config;
pub mod error;
pub mod rayon_pool;
pub mod sequential;
pub mod traits;

// Re-export commonly used types
pub use config::{MAX_WORKERS, MIN_WORKERS, PoolConfig, effective_workers};
pub use error::{PoolError, TaskFailure, TaskPanic};
pub use rayon_pool::RayonWorkerPool;
pub use sequential::SequentialWorkerPool;
pub use traits::WorkerPool;
