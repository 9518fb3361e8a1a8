use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use super::error::IoError;

/// Parse one item per line with `FromStr`
///
/// Line terminators (`\n` or `\r\n`) are stripped; every line, including
/// blank ones, becomes an item.
pub fn read_records<T, R>(reader: R) -> Result<Vec<T>, IoError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    R: BufRead,
{
    let mut items = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let raw = line?;
        let item = raw.parse::<T>().map_err(|e| IoError::Parse {
            line: index + 1,
            message: e.to_string(),
            raw: raw.clone(),
        })?;
        items.push(item);
    }
    Ok(items)
}

/// Read a file written by [`crate::io::save_records`]
pub fn load_records<T>(source: &Path) -> Result<Vec<T>, IoError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let file = File::open(source)?;
    let items = read_records(BufReader::new(file))?;
    debug!(path = %source.display(), records = items.len(), "Loaded records");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{SaveMode, save_records};
    use std::io::Cursor;

    #[test]
    fn parses_each_line() {
        let items: Vec<i64> = read_records(Cursor::new("1\n-2\n30\n")).unwrap();
        assert_eq!(items, vec![1, -2, 30]);
    }

    #[test]
    fn strips_crlf_terminators() {
        let items: Vec<String> = read_records(Cursor::new("a\r\nb\r\n")).unwrap();
        assert_eq!(items, vec!["a", "b"]);
    }

    #[test]
    fn keeps_blank_lines_as_items() {
        let items: Vec<String> = read_records(Cursor::new("a\n\nb\n")).unwrap();
        assert_eq!(items, vec!["a", "", "b"]);
    }

    #[test]
    fn parse_error_names_the_line() {
        let result: Result<Vec<u8>, _> = read_records(Cursor::new("1\n2\nx\n"));

        match result {
            Err(IoError::Parse { line, raw, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(raw, "x");
            }
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let result: Result<Vec<String>, _> = load_records(Path::new("/definitely/not/here.txt"));
        assert!(matches!(result, Err(IoError::Io(_))));
    }

    #[test]
    fn reads_back_what_was_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.txt");
        save_records(&[7u32, 8, 9], &path, SaveMode::Atomic).unwrap();

        let items: Vec<u32> = load_records(&path).unwrap();
        assert_eq!(items, vec![7, 8, 9]);
    }
}
