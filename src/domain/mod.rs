pub mod dataset;
pub mod error;
pub mod state;

// Re-export commonly used types
pub use dataset::DataSet;
pub use error::{BoxError, ProcessingFailure};
pub use state::KeyState;
