//! Output formatting for comparison exports.
//!
//! Two plain-text formats are produced:
//!
//! - gene exports: a `#` header naming the four columns, then one
//!   tab-delimited gene per line;
//! - PubMed exports: a `#` header, then one identifier per line.
//!
//! File exports go through [`write_file_atomically`], which writes into a
//! temporary file next to the destination and renames it into place only
//! after every line was written and flushed.

use crate::gene::Gene;
use crate::reader::{InteractionError, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tempfile::{Builder, NamedTempFile};
use tracing::info;

#[cfg(unix)]
use std::fs::Permissions;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Header line of a gene export file.
pub const GENE_EXPORT_HEADER: &str = "#Tax ID\tGene ID\tProduct accession version\tProduct name";

/// Header line of a PubMed identifier export file.
pub const PUBMED_EXPORT_HEADER: &str = "#PubMed ID (PMID)";

/// Buffer size for ExportWriter (64KB default).
const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Buffered writer for export records.
pub struct ExportWriter<W: Write> {
    writer: BufWriter<W>,
    lines: usize,
}

impl<W: Write> ExportWriter<W> {
    /// Create a new ExportWriter with the default buffer.
    pub fn new(output: W) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE, output)
    }

    /// Create a new ExportWriter with specified buffer size.
    pub fn with_capacity(capacity: usize, output: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(capacity, output),
            lines: 0,
        }
    }

    /// Write a header line. Header lines are not counted as records.
    pub fn write_header(&mut self, header: &str) -> Result<()> {
        self.writer.write_all(header.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Write one gene in export layout.
    pub fn write_gene(&mut self, gene: &Gene) -> Result<()> {
        writeln!(self.writer, "{}", gene)?;
        self.lines += 1;
        Ok(())
    }

    /// Write one identifier per line.
    pub fn write_id(&mut self, id: &str) -> Result<()> {
        self.writer.write_all(id.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.lines += 1;
        Ok(())
    }

    /// Number of records written so far.
    #[inline]
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Flush the buffer and return the number of records written.
    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush()?;
        Ok(self.lines)
    }
}

/// Write genes sorted by id under the gene export header.
pub fn write_genes<'g, W, I>(output: W, genes: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'g Gene>,
{
    let mut genes: Vec<&Gene> = genes.into_iter().collect();
    genes.sort_unstable();

    let mut writer = ExportWriter::new(output);
    writer.write_header(GENE_EXPORT_HEADER)?;
    for gene in genes {
        writer.write_gene(gene)?;
    }
    writer.finish()
}

/// Write identifiers in lexicographic order under the PubMed header.
pub fn write_pubmed_ids<'s, W, I>(output: W, ids: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'s str>,
{
    let mut ids: Vec<&str> = ids.into_iter().collect();
    ids.sort_unstable();

    let mut writer = ExportWriter::new(output);
    writer.write_header(PUBMED_EXPORT_HEADER)?;
    for id in ids {
        writer.write_id(id)?;
    }
    writer.finish()
}

/// Create `path` from the output of `write`, or leave nothing behind.
///
/// The content is written to a temporary file in the destination
/// directory and persisted over `path` once `write` succeeded. A missing
/// destination directory is reported as [`InteractionError::NotFound`].
///
/// A new file gets the same mode a plain create would give it (`0o666`
/// minus the umask); an existing file keeps its permissions.
pub fn write_file_atomically<P, F>(path: P, write: F) -> Result<usize>
where
    P: AsRef<Path>,
    F: FnOnce(&mut File) -> Result<usize>,
{
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = temp_file_in(dir).map_err(|e| InteractionError::from_open(path, e))?;
    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file().set_permissions(existing.permissions())?;
    }

    let written = write(tmp.as_file_mut())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| InteractionError::Io(e.error))?;

    info!(path = %path.display(), records = written, "export written");
    Ok(written)
}

/// Temporary file whose creation mode is subject to the umask.
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    builder.permissions(Permissions::from_mode(0o666));
    builder.tempfile_in(dir)
}
