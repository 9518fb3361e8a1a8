pub mod error;
pub mod line_reader;
pub mod line_writer;

// Re-export commonly used types
pub use error::IoError;
pub use line_reader::{load_records, read_records};
pub use line_writer::{RECORD_SEPARATOR, SaveMode, save_records, write_records};
