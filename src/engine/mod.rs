pub mod config;
pub mod error;
pub mod processor;

// Re-export commonly used types
pub use config::ProcessorConfig;
pub use error::EngineError;
pub use processor::Processor;
