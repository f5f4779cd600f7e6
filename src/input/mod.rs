//! Benchmark run loading

pub mod time;

pub use time::{parse_time, try_parse_time, TimeParseError};

use crate::error::{ReportError, Result};
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Column holding the worker thread count
pub const THREADS_COLUMN: &str = "Threads";
/// Column holding wall-clock time (`SS.ss` or `MM:SS.ss`)
pub const ELAPSED_TIME_COLUMN: &str = "Elapsed_Time(s)";
/// Column holding peak resident memory in kilobytes
pub const MEMORY_COLUMN: &str = "Memory(KB)";

/// A single benchmark run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Number of worker threads
    pub thread_count: i64,
    /// Elapsed wall-clock time in seconds
    pub elapsed_secs: f64,
    /// Peak memory in kilobytes
    pub memory_kb: u64,
}

/// Column positions resolved from the header row
///
/// A column absent from the header only becomes an error once a data row
/// asks for it, so a header-only file of any shape loads as empty.
struct Columns {
    threads: Option<usize>,
    elapsed: Option<usize>,
    memory: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        let position = |name: &str| headers.iter().position(|h| h == name);
        Self {
            threads: position(THREADS_COLUMN),
            elapsed: position(ELAPSED_TIME_COLUMN),
            memory: position(MEMORY_COLUMN),
        }
    }
}

fn field<'r>(
    record: &'r StringRecord,
    index: Option<usize>,
    name: &'static str,
    row: usize,
) -> Result<&'r str> {
    index
        .and_then(|i| record.get(i))
        .ok_or(ReportError::MissingField { field: name, row })
}

fn parse_int<T>(value: &str, name: &'static str, row: usize) -> Result<T>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|source| ReportError::InvalidInteger {
            field: name,
            row,
            value: value.to_string(),
            source,
        })
}

impl RunRecord {
    fn from_record(record: &StringRecord, columns: &Columns, row: usize) -> Result<Self> {
        let threads = field(record, columns.threads, THREADS_COLUMN, row)?;
        let elapsed = field(record, columns.elapsed, ELAPSED_TIME_COLUMN, row)?;
        let memory = field(record, columns.memory, MEMORY_COLUMN, row)?;

        Ok(Self {
            thread_count: parse_int(threads, THREADS_COLUMN, row)?,
            elapsed_secs: parse_time(elapsed),
            memory_kb: parse_int(memory, MEMORY_COLUMN, row)?,
        })
    }
}

/// Read benchmark runs from any CSV source
pub fn read_runs<R: Read>(reader: R) -> Result<Vec<RunRecord>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = Columns::from_headers(reader.headers()?);

    let mut runs = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        runs.push(RunRecord::from_record(&record, &columns, idx + 1)?);
    }

    Ok(runs)
}

/// Load benchmark runs from a CSV file
///
/// # Errors
/// Returns [`ReportError::InputMissing`] if the file does not exist, and a
/// parse error for a missing column or a non-integer thread count or memory
/// value. Unreadable time values are not errors, see [`parse_time`].
pub fn load_runs<P: AsRef<Path>>(path: P) -> Result<Vec<RunRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ReportError::InputMissing {
            path: path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(path)?;
    let runs = read_runs(file)?;
    tracing::debug!("Loaded {} runs from {}", runs.len(), path.display());
    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Threads,Elapsed_Time(s),Memory(KB)\n";

    #[test]
    fn test_read_runs() {
        let data = format!("{}1,10.5,2048\n2,0:05.25,4096\n", HEADER);
        let runs = read_runs(data.as_bytes()).unwrap();

        assert_eq!(runs.len(), 2);
        assert_eq!(
            runs[0],
            RunRecord {
                thread_count: 1,
                elapsed_secs: 10.5,
                memory_kb: 2048
            }
        );
        assert_eq!(runs[1].elapsed_secs, 5.25);
    }

    #[test]
    fn test_columns_found_by_name() {
        let data = "Run,Memory(KB),Threads,Elapsed_Time(s),Notes\n7,1024,4,1:00,ok\n";
        let runs = read_runs(data.as_bytes()).unwrap();

        assert_eq!(runs[0].thread_count, 4);
        assert_eq!(runs[0].elapsed_secs, 60.0);
        assert_eq!(runs[0].memory_kb, 1024);
    }

    #[test]
    fn test_header_only_is_empty() {
        assert!(read_runs(HEADER.as_bytes()).unwrap().is_empty());
        assert!(read_runs("Unrelated\n".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_bad_time_is_not_fatal() {
        let data = format!("{}1,bad,100\n", HEADER);
        let runs = read_runs(data.as_bytes()).unwrap();
        assert_eq!(runs[0].elapsed_secs, 0.0);
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let data = "Threads,Memory(KB)\n1,100\n";
        match read_runs(data.as_bytes()) {
            Err(ReportError::MissingField { field, row }) => {
                assert_eq!(field, ELAPSED_TIME_COLUMN);
                assert_eq!(row, 1);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_short_row_is_fatal() {
        let data = format!("{}1,2.0,100\n2,1.0\n", HEADER);
        assert!(matches!(
            read_runs(data.as_bytes()),
            Err(ReportError::MissingField { row: 2, .. })
        ));
    }

    #[test]
    fn test_non_integer_threads_is_fatal() {
        let data = format!("{}four,2.0,100\n", HEADER);
        assert!(matches!(
            read_runs(data.as_bytes()),
            Err(ReportError::InvalidInteger { field: THREADS_COLUMN, .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");

        match load_runs(&path) {
            Err(ReportError::InputMissing { path: missing }) => assert_eq!(missing, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
