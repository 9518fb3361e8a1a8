use thiserror::Error;

/// Boxed cause carried by a failed transform step
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A transform step failed for one item of a keyed sequence
///
/// The stored sequence for `key` is left exactly as it was before the call.
#[derive(Error, Debug)]
#[error("Processing failed for key '{key}' at position {position}: {cause}")]
pub struct ProcessingFailure {
    pub key: String,
    pub position: usize,
    #[source]
    pub cause: BoxError,
}

impl ProcessingFailure {
    pub fn new(key: impl Into<String>, position: usize, cause: impl Into<BoxError>) -> Self {
        Self {
            key: key.into(),
            position,
            cause: cause.into(),
        }
    }
}
