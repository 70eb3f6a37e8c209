//! Loading packed record streams from text.
//!
//! Two encodings are accepted:
//!
//! - **JSON**: `[[a, b, c, m], ...]`
//! - **Flat integers**: any run of integers separated by whitespace, commas,
//!   semicolons or brackets, grouped into records of four
//!
//! Obtaining the stream (for example from a puzzle site) is left to the caller.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::record::Record;

const FIELDS_PER_RECORD: usize = 4;

/// Parse a record stream from JSON or flat integer text
pub fn parse_records(text: &str) -> Result<Vec<Record>> {
    let text = text.trim();
    if text
        .strip_prefix('[')
        .is_some_and(|rest| rest.trim_start().starts_with('['))
    {
        let records: Vec<Record> = serde_json::from_str(text)?;
        return Ok(records);
    }

    let values = text
        .split(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | '[' | ']'))
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| Error::InvalidRecordSource(format!("invalid integer {:?}", token)))
        })
        .collect::<Result<Vec<i64>>>()?;

    if values.len() % FIELDS_PER_RECORD != 0 {
        return Err(Error::InvalidRecordSource(format!(
            "{} integers do not form whole records of {}",
            values.len(),
            FIELDS_PER_RECORD
        )));
    }

    Ok(values
        .chunks_exact(FIELDS_PER_RECORD)
        .map(|chunk| Record::new(chunk[0], chunk[1], chunk[2], chunk[3]))
        .collect())
}

/// Load a record stream from a file
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let records = parse_records(&content)?;
    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_json_records() {
        let records = parse_records("[[1,2,3,4], [5,6,7,8]]").unwrap();
        assert_eq!(records, vec![Record::new(1, 2, 3, 4), Record::new(5, 6, 7, 8)]);
        let spaced = parse_records("[ [1,2,3,4] ]").unwrap();
        assert_eq!(spaced, vec![Record::new(1, 2, 3, 4)]);
    }

    #[test]
    fn test_parse_json_rejects_short_record() {
        assert!(matches!(
            parse_records("[[1,2,3]]"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_parse_flat_integers() {
        let records = parse_records("1 2 3 4\n5,6,7,8;\n-1 0 0 9").unwrap();
        assert_eq!(
            records,
            vec![
                Record::new(1, 2, 3, 4),
                Record::new(5, 6, 7, 8),
                Record::new(-1, 0, 0, 9),
            ]
        );
    }

    #[test]
    fn test_parse_flat_partial_record() {
        assert!(matches!(
            parse_records("1 2 3 4 5"),
            Err(Error::InvalidRecordSource(_))
        ));
    }

    #[test]
    fn test_parse_flat_bad_token() {
        let err = parse_records("1 2 x 4").unwrap_err();
        assert!(err.to_string().contains("invalid integer \"x\""));
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_records("").unwrap().is_empty());
    }

    #[test]
    fn test_load_records_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[[10, 20, 30, 40]]").unwrap();
        let records = load_records(file.path()).unwrap();
        assert_eq!(records, vec![Record::new(10, 20, 30, 40)]);
    }

    #[test]
    fn test_load_records_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_records(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound));
    }
}
