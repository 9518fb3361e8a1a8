use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// IO-level errors for record persistence and loading
#[derive(Error, Debug)]
pub enum IoError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to move temporary file into place at {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Record at position {position} spans more than one line")]
    EmbeddedSeparator { position: usize },

    #[error("Failed to format record at position {position}")]
    Format { position: usize },

    #[error("Failed to parse record on line {line}: {message} (raw='{raw}')")]
    Parse {
        line: usize,
        raw: String,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        let err = IoError::Parse {
            line: 3,
            raw: "abc".to_string(),
            message: "invalid digit found in string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse record on line 3: invalid digit found in string (raw='abc')"
        );

        let err = IoError::EmbeddedSeparator { position: 7 };
        assert_eq!(err.to_string(), "Record at position 7 spans more than one line");

        let err = IoError::Persist {
            path: PathBuf::from("/tmp/out.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to move temporary file into place at /tmp/out.txt: denied"
        );
    }

    #[test]
    fn io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let wrapped = IoError::from(io_err);

        match wrapped {
            IoError::Io(_) => {}
            _ => panic!("Expected Io error variant"),
        }
    }
}
