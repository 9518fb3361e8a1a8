use std::fmt::{Display, Write as _};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use super::error::IoError;

/// Terminator written after every record
pub const RECORD_SEPARATOR: &str = "\n";

/// How [`save_records`] puts the file in place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveMode {
    /// Write a temporary file next to the destination, then rename it over
    /// the destination. Readers see either the old file or the complete new one.
    #[default]
    Atomic,
    /// Render every record, then overwrite the destination in place
    Direct,
}

/// Write each item's `Display` form followed by [`RECORD_SEPARATOR`]
///
/// Returns the number of records written. No header or trailer is emitted.
/// An item rendering to more than one line is rejected with
/// [`IoError::EmbeddedSeparator`]; records before it may already be written.
pub fn write_records<T, W>(items: &[T], writer: W) -> Result<usize, IoError>
where
    T: Display,
    W: Write,
{
    let mut writer = BufWriter::new(writer);
    let mut record = String::new();
    for (position, item) in items.iter().enumerate() {
        record.clear();
        // Formatting into a String only fails if Display itself does
        write!(record, "{item}").map_err(|_| IoError::Format { position })?;
        if record.contains(['\n', '\r']) {
            return Err(IoError::EmbeddedSeparator { position });
        }
        writer.write_all(record.as_bytes())?;
        writer.write_all(RECORD_SEPARATOR.as_bytes())?;
    }
    writer.flush()?;
    Ok(items.len())
}

/// Persist `items` to `destination`, creating it (and missing parent directories)
pub fn save_records<T: Display>(
    items: &[T],
    destination: &Path,
    mode: SaveMode,
) -> Result<usize, IoError> {
    let parent = match destination.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let written = match mode {
        SaveMode::Atomic => {
            let mut tmp = NamedTempFile::new_in(parent)?;
            let written = write_records(items, tmp.as_file_mut())?;
            tmp.as_file().sync_all()?;
            tmp.persist(destination).map_err(|e| IoError::Persist {
                path: destination.to_path_buf(),
                source: e.error,
            })?;
            written
        }
        SaveMode::Direct => {
            let mut rendered = Vec::new();
            let written = write_records(items, &mut rendered)?;
            fs::write(destination, rendered)?;
            written
        }
    };

    debug!(path = %destination.display(), records = written, ?mode, "Saved records");
    Ok(written)
}
