//! Streaming parser for tab-delimited gene interaction files.
//!
//! Each data line carries twelve columns:
//!
//! ```text
//! taxA  geneA  accessionA  productA  type  taxB  geneB  accessionB  productB  pubmed  last_update  generif
//! ```
//!
//! Lines starting with `#` and blank lines are skipped.

use crate::config::accepts_field_count;
use crate::gene::Gene;
use crate::interaction::Interaction;
use memchr::memchr_iter;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Number of tab-separated columns in a data line.
pub const FIELD_COUNT: usize = 12;

/// Errors raised while loading interactions or exporting results.
#[derive(Error, Debug)]
pub enum InteractionError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed record at line {line}: expected 12 tab-separated fields, got {fields}")]
    MalformedRecord { line: usize, fields: usize },

    #[error("Nothing to export: {0}")]
    EmptyExport(&'static str),
}

impl InteractionError {
    /// Classify an error from opening or creating `path`.
    pub(crate) fn from_open(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            InteractionError::NotFound(path.to_path_buf())
        } else {
            InteractionError::Io(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, InteractionError>;

/// Returns true for comment lines and structurally blank lines.
#[inline]
pub fn should_skip_line(line: &str) -> bool {
    line.starts_with('#') || line.trim().is_empty()
}

/// A streaming interaction file reader.
pub struct InteractionReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: String,
}

impl InteractionReader<File> {
    /// Open an interaction file from a path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| InteractionError::from_open(path, e))?;
        Ok(Self::new(file))
    }
}

impl<R: Read> InteractionReader<R> {
    /// Create a new reader from any readable source.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: String::with_capacity(1024),
        }
    }

    /// Create a reader with custom buffer capacity.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            line_number: 0,
            buffer: String::with_capacity(1024),
        }
    }

    /// Number of lines consumed so far (1-based line of the last record).
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next interaction, skipping comments and blank lines.
    pub fn read_record(&mut self) -> Result<Option<Interaction>> {
        loop {
            self.buffer.clear();
            let bytes_read = self.reader.read_line(&mut self.buffer)?;
            if bytes_read == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            // Only the line terminator is stripped; empty trailing columns are data
            let line = self.buffer.trim_end_matches(['\n', '\r']);
            if should_skip_line(line) {
                continue;
            }

            return parse_line(line, self.line_number).map(Some);
        }
    }

    /// Get an iterator over all records.
    pub fn records(self) -> InteractionIter<R> {
        InteractionIter { reader: self }
    }
}

/// Parse a single data line into an [`Interaction`].
fn parse_line(line: &str, line_number: usize) -> Result<Interaction> {
    let fields = memchr_iter(b'\t', line.as_bytes()).count() + 1;
    if !accepts_field_count(fields) {
        return Err(InteractionError::MalformedRecord {
            line: line_number,
            fields,
        });
    }

    let cols: Vec<&str> = line.split('\t').take(FIELD_COUNT).collect();

    let gene_a = Gene::new(cols[1], cols[0], cols[2], cols[3]);
    let gene_b = Gene::new(cols[6], cols[5], cols[7], cols[8]);

    Ok(Interaction::new(gene_a, gene_b, cols[9], cols[4], cols[10], cols[11]))
}

/// Iterator over interaction records.
pub struct InteractionIter<R: Read> {
    reader: InteractionReader<R>,
}

impl<R: Read> Iterator for InteractionIter<R> {
    type Item = Result<Interaction>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Read all interactions from a file.
///
/// Fails on the first malformed line; no partial result is returned.
pub fn read_interactions<P: AsRef<Path>>(path: P) -> Result<Vec<Interaction>> {
    let reader = InteractionReader::from_path(path)?;
    reader.records().collect()
}

/// Parse interactions from a string (useful for testing).
pub fn parse_interactions(content: &str) -> Result<Vec<Interaction>> {
    let reader = InteractionReader::new(content.as_bytes());
    reader.records().collect()
}
