pub mod cli;
pub mod error;
pub mod pipeline;
pub mod transform;

// Re-export commonly used types
pub use cli::{CliApp, CliArgs};
pub use error::AppError;
pub use pipeline::{INPUT_KEY, PipelineSummary, run_pipeline};
pub use transform::TextTransform;
