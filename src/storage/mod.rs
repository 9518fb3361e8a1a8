pub mod concurrent;
pub mod error;
pub mod traits;

// Re-export commonly used types
pub use concurrent::ConcurrentDataStore;
pub use error::StorageError;
pub use traits::DataStore;
