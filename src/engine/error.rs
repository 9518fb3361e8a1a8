use thiserror::Error;

use crate::domain::ProcessingFailure;
use crate::io::IoError;
use crate::pool::PoolError;
use crate::storage::StorageError;

/// Engine-level errors for processor operations
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error(transparent)]
    Processing(#[from] ProcessingFailure),

    #[error("Persistence error: {0}")]
    Io(#[from] IoError),

    #[error("Worker pool error: {0}")]
    Pool(#[from] PoolError),
}

impl From<StorageError> for EngineError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::KeyNotFound(key) => EngineError::KeyNotFound(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            EngineError::KeyNotFound("orders".to_string()).to_string(),
            "Key not found: orders"
        );
        assert_eq!(
            EngineError::from(ProcessingFailure::new("orders", 2, "bad")).to_string(),
            "Processing failed for key 'orders' at position 2: bad"
        );
    }

    #[test]
    fn storage_error_conversion() {
        let storage_err = StorageError::KeyNotFound("missing".to_string());
        let engine_err = EngineError::from(storage_err);

        match engine_err {
            EngineError::KeyNotFound(key) => assert_eq!(key, "missing"),
            _ => panic!("Expected KeyNotFound variant"),
        }
    }

    #[test]
    fn io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let engine_err = EngineError::from(IoError::from(io_err));

        match engine_err {
            EngineError::Io(IoError::Io(_)) => {}
            _ => panic!("Expected Io error variant"),
        }
    }
}
