// src/ingest/table.rs
//! Header-aware reading of delimited text into rows of cells.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use super::sniff::{sniff_delimiter, Delimiter};
use crate::config::InputConfig;
use crate::error::{OrgTreeError, Result};
use crate::types::{RowIssue, RowWarning};

/// One data row with its original line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub line: u64,
    pub cells: Vec<String>,
}

impl TableRow {
    /// Cell at `index`, or `None` past the end of a short row.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }
}

/// A parsed file: header, kept rows, and the rows that were rejected.
#[derive(Debug, Clone)]
pub struct Table {
    pub delimiter: Delimiter,
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
    pub warnings: Vec<RowWarning>,
    /// Rows dropped for structural problems (width, encoding).
    pub malformed: usize,
}

impl Table {
    /// Reads and parses a file from disk.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or has no usable header.
    pub fn read(path: &Path, input: &InputConfig) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| OrgTreeError::InputRead {
            source,
            path: path.to_path_buf(),
        })?;
        Self::from_bytes(bytes, input)
    }

    /// Parses raw bytes (an uploaded file body).
    ///
    /// # Errors
    /// Returns `Encoding` for non UTF-8 input, `EmptyInput` without a header.
    pub fn from_bytes(bytes: Vec<u8>, input: &InputConfig) -> Result<Self> {
        let text = String::from_utf8(bytes)?;
        Self::parse(&text, input)
    }

    /// Parses UTF-8 text.
    ///
    /// # Errors
    /// Returns `EmptyInput` when the first record is missing or blank.
    pub fn parse(text: &str, input: &InputConfig) -> Result<Self> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let delimiter = input
            .delimiter
            .and_then(Delimiter::from_char)
            .unwrap_or_else(|| sniff_delimiter(text, input.sample_bytes));
        info!("reading table with delimiter '{delimiter}'");

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter.as_byte())
            .flexible(true)
            .has_headers(false)
            .from_reader(text.as_bytes());
        let mut records = reader.records();

        let headers = read_header(&mut records)?;
        let mut table = Self {
            delimiter,
            headers,
            rows: Vec::new(),
            warnings: Vec::new(),
            malformed: 0,
        };
        for record in records {
            table.accept(record);
        }

        debug!(
            "read {} rows ({} malformed) across {} columns",
            table.rows.len(),
            table.malformed,
            table.headers.len()
        );
        Ok(table)
    }

    /// First `n` rows, for a raw data preview.
    #[must_use]
    pub fn preview(&self, n: usize) -> &[TableRow] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Total data records seen, kept or not.
    #[must_use]
    pub fn records_seen(&self) -> usize {
        self.rows.len() + self.malformed
    }

    fn accept(&mut self, record: std::result::Result<csv::StringRecord, csv::Error>) {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                let line = e.position().map_or(0, csv::Position::line);
                self.reject(line, RowIssue::Unparsable { reason: e.to_string() });
                return;
            }
        };

        let line = record.position().map_or(0, csv::Position::line);
        let expected = self.headers.len();
        let found = record.len();

        if found > expected {
            self.reject(line, RowIssue::TooManyFields { expected, found });
            return;
        }
        if found < expected {
            debug!("line {line}: short row ({found}/{expected} fields)");
            self.warnings
                .push(RowWarning::new(line, RowIssue::TooFewFields { expected, found }));
        }
        self.rows.push(TableRow {
            line,
            cells: record.iter().map(str::to_string).collect(),
        });
    }

    fn reject(&mut self, line: u64, issue: RowIssue) {
        warn!("line {line}: {issue}");
        self.malformed += 1;
        self.warnings.push(RowWarning::new(line, issue));
    }
}

fn read_header(records: &mut csv::StringRecordsIter<'_, &[u8]>) -> Result<Vec<String>> {
    let Some(first) = records.next() else {
        return Err(OrgTreeError::EmptyInput);
    };
    let headers: Vec<String> = first?.iter().map(|h| h.trim().to_string()).collect();
    if headers.iter().all(String::is_empty) {
        return Err(OrgTreeError::EmptyInput);
    }
    Ok(headers)
}
