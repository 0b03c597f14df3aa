//! Compare command implementation.
//!
//! Loads an interaction file, compares the side-B genes of two type
//! labels and optionally exports the intersection and its PubMed ids.

use crate::comparator::{ComparisonStats, InteractionComparator};
use crate::dataset::InteractionsFile;
use crate::reader::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Compare command configuration.
#[derive(Debug, Clone)]
pub struct CompareCommand {
    /// First interaction type
    pub type_a: String,
    /// Second interaction type
    pub type_b: String,
    /// Export intersecting genes to this file
    pub genes_out: Option<PathBuf>,
    /// Export PubMed identifiers of the intersection to this file
    pub pubmed_out: Option<PathBuf>,
    /// Print intersecting genes to the output after the summary
    pub list: bool,
}

impl CompareCommand {
    pub fn new(type_a: impl Into<String>, type_b: impl Into<String>) -> Self {
        Self {
            type_a: type_a.into(),
            type_b: type_b.into(),
            genes_out: None,
            pubmed_out: None,
            list: false,
        }
    }

    /// Load `input`, compare, export, and write the summary to `output`.
    pub fn run<P: AsRef<Path>, W: Write>(
        &self,
        input: P,
        output: &mut W,
    ) -> Result<ComparisonStats> {
        let file = InteractionsFile::from_path(input)?;
        self.compare(&file, output)
    }

    /// Run the comparison on an already loaded file.
    ///
    /// Exports happen before anything is printed. If any requested
    /// export would be empty, the command fails before writing either
    /// file.
    pub fn compare<W: Write>(
        &self,
        file: &InteractionsFile,
        output: &mut W,
    ) -> Result<ComparisonStats> {
        for kind in [&self.type_a, &self.type_b] {
            if !file.has_type(kind) {
                warn!(
                    interaction_type = %kind,
                    path = %file.path().display(),
                    "interaction type does not occur in the input"
                );
            }
        }

        let cmp = file.comparator(self.type_a.as_str(), self.type_b.as_str());
        self.export(&cmp)?;

        let stats = cmp.summary();
        writeln!(output, "{}", stats)?;

        if self.list && !cmp.intersection().is_empty() {
            writeln!(output)?;
            cmp.write_genes(&mut *output)?;
        }

        Ok(stats)
    }

    fn export(&self, cmp: &InteractionComparator<'_>) -> Result<()> {
        // Every requested export must have content before any file is written
        if self.genes_out.is_some() {
            cmp.check_genes()?;
        }
        if self.pubmed_out.is_some() {
            cmp.checked_pubmed_ids()?;
        }

        if let Some(ref path) = self.genes_out {
            cmp.export_genes(path)?;
        }
        if let Some(ref path) = self.pubmed_out {
            cmp.export_pubmed(path)?;
        }
        Ok(())
    }
}
