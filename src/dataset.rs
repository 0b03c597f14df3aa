//! A parsed interaction file and its derived summary sets.

use crate::comparator::InteractionComparator;
use crate::gene::GeneSet;
use crate::interaction::Interaction;
use crate::reader::{read_interactions, Result};
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

/// All interactions of one source file, sorted by type label.
///
/// The distinct side-A genes, side-B genes and type labels are derived
/// from the interactions and recomputed whenever they are replaced.
#[derive(Debug, Clone)]
pub struct InteractionsFile {
    path: PathBuf,
    interactions: Vec<Interaction>,
    genes_a: GeneSet,
    genes_b: GeneSet,
    types: BTreeSet<String>,
}

/// The four summary counts of an [`InteractionsFile`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionStats {
    /// Distinct genes on side A (first taxonomy column)
    pub genes_a: usize,
    /// Distinct genes on side B (second taxonomy column)
    pub genes_b: usize,
    /// Total number of interactions
    pub interactions: usize,
    /// Distinct interaction type labels
    pub types: usize,
}

impl fmt::Display for InteractionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tax ID 1:               \t{} genes\n\
             Tax ID 2:               \t{} genes\n\
             # Interactions:         \t{} interactions\n\
             # Types of interactions:\t{} types",
            self.genes_a, self.genes_b, self.interactions, self.types
        )
    }
}

impl InteractionsFile {
    /// Load and summarize an interaction file.
    ///
    /// The whole load fails if the file is missing, unreadable, or has a
    /// single malformed data line.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let interactions = read_interactions(path)?;
        let file = Self::from_interactions(path, interactions);

        info!(
            path = %path.display(),
            interactions = file.len(),
            types = file.types.len(),
            "loaded interactions"
        );
        Ok(file)
    }

    /// Build a dataset from interactions that were obtained elsewhere.
    pub fn from_interactions<P: Into<PathBuf>>(path: P, interactions: Vec<Interaction>) -> Self {
        let mut file = Self {
            path: path.into(),
            interactions: Vec::new(),
            genes_a: GeneSet::default(),
            genes_b: GeneSet::default(),
            types: BTreeSet::new(),
        };
        file.set_interactions(interactions);
        file
    }

    /// Source path the interactions were read from.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All interactions, sorted by type label.
    #[inline]
    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }

    /// Distinct side-A genes.
    #[inline]
    pub fn genes_a(&self) -> &GeneSet {
        &self.genes_a
    }

    /// Distinct side-B genes.
    #[inline]
    pub fn genes_b(&self) -> &GeneSet {
        &self.genes_b
    }

    /// Distinct type labels in sorted order.
    #[inline]
    pub fn types(&self) -> &BTreeSet<String> {
        &self.types
    }

    /// Check whether any interaction carries the given type label.
    #[inline]
    pub fn has_type(&self, interaction_type: &str) -> bool {
        self.types.contains(interaction_type)
    }

    /// Number of interactions.
    #[inline]
    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    /// Replace the interactions, then re-sort and re-derive every set.
    pub fn set_interactions(&mut self, mut interactions: Vec<Interaction>) {
        interactions.sort();
        self.interactions = interactions;
        self.summarize();
    }

    /// Summary counts.
    pub fn stats(&self) -> InteractionStats {
        InteractionStats {
            genes_a: self.genes_a.len(),
            genes_b: self.genes_b.len(),
            interactions: self.interactions.len(),
            types: self.types.len(),
        }
    }

    /// Human-readable four-line summary.
    pub fn stats_text(&self) -> String {
        self.stats().to_string()
    }

    /// Compare the side-B genes of two interaction types in this file.
    pub fn comparator(
        &self,
        type_a: impl Into<String>,
        type_b: impl Into<String>,
    ) -> InteractionComparator<'_> {
        InteractionComparator::new(type_a, type_b, &self.interactions)
    }

    fn summarize(&mut self) {
        let mut genes_a = GeneSet::default();
        let mut genes_b = GeneSet::default();
        let mut types: BTreeSet<String> = BTreeSet::new();

        for interaction in &self.interactions {
            if !genes_a.contains(interaction.gene_a().gene_id().as_str()) {
                genes_a.insert(interaction.gene_a().clone());
            }
            if !genes_b.contains(interaction.gene_b().gene_id().as_str()) {
                genes_b.insert(interaction.gene_b().clone());
            }
            if !types.contains(interaction.interaction_type()) {
                types.insert(interaction.interaction_type().to_string());
            }
        }

        self.genes_a = genes_a;
        self.genes_b = genes_b;
        self.types = types;
    }
}
