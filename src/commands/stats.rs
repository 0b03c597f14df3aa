//! Stats command implementation.
//!
//! Prints the four summary counts of an interaction file and, on request,
//! the distinct type labels available for comparison.

use crate::dataset::{InteractionStats, InteractionsFile};
use crate::reader::Result;
use std::io::Write;
use std::path::Path;

/// Stats command configuration.
#[derive(Debug, Clone, Default)]
pub struct StatsCommand {
    /// Also list every distinct interaction type
    pub list_types: bool,
}

impl StatsCommand {
    pub fn new() -> Self {
        Self { list_types: false }
    }

    /// Load `input` and write its summary to `output`.
    pub fn run<P: AsRef<Path>, W: Write>(
        &self,
        input: P,
        output: &mut W,
    ) -> Result<InteractionStats> {
        let file = InteractionsFile::from_path(input)?;
        self.report(&file, output)
    }

    /// Write the summary of an already loaded file.
    pub fn report<W: Write>(
        &self,
        file: &InteractionsFile,
        output: &mut W,
    ) -> Result<InteractionStats> {
        let stats = file.stats();
        writeln!(output, "{}", stats)?;

        if self.list_types {
            writeln!(output)?;
            writeln!(output, "#Interaction types")?;
            for kind in file.types() {
                writeln!(output, "{}", kind)?;
            }
        }

        Ok(stats)
    }
}
