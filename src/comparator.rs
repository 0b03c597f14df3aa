//! Compare the gene sets of two interaction types.
//!
//! The comparator partitions the side-B genes of every interaction by
//! type label and intersects the two partitions:
//!
//! ```text
//! type == A and type == B  ->  gene_b into both sets   (A == B)
//! type == A only           ->  gene_b into genes_a
//! type == B only           ->  gene_b into genes_b
//! otherwise                ->  ignored
//! ```
//!
//! Only side-B genes are ever considered, whichever type matched.
//!
//! # Example
//!
//! ```rust
//! use intercomp::comparator::InteractionComparator;
//! use intercomp::reader::parse_interactions;
//!
//! let content = "9606\tG1\tA1\tP1\tbinding\t10116\tG2\tA2\tP2\t111\t2020\tnote\n\
//!                9606\tG3\tA3\tP3\tinhibition\t10116\tG2\tA2\tP2\t222\t2020\tnote\n";
//! let interactions = parse_interactions(content).unwrap();
//!
//! let cmp = InteractionComparator::new("binding", "inhibition", &interactions);
//! assert_eq!(cmp.intersection().len(), 1);
//! assert_eq!(cmp.pubmed_ids().len(), 2);
//! ```

use crate::export::{write_file_atomically, write_genes, write_pubmed_ids};
use crate::gene::Gene;
use crate::interaction::Interaction;
use crate::reader::{InteractionError, Result};
use rustc_hash::FxHashSet;
use std::fmt;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// A set of genes borrowed from an interaction slice.
pub type GeneRefSet<'a> = FxHashSet<&'a Gene>;

/// Partition and intersection of side-B genes for two type labels.
///
/// All derived sets are recomputed eagerly whenever a type label or the
/// interaction slice changes, so reads never observe stale results.
#[derive(Debug, Clone)]
pub struct InteractionComparator<'a> {
    type_a: String,
    type_b: String,
    interactions: &'a [Interaction],
    genes_a: GeneRefSet<'a>,
    genes_b: GeneRefSet<'a>,
    intersection: GeneRefSet<'a>,
}

/// Set sizes of a comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComparisonStats {
    pub genes_a: usize,
    pub genes_b: usize,
    pub intersection: usize,
    pub pubmed_ids: usize,
}

impl fmt::Display for ComparisonStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Genes A:       \t{} genes\nGenes B:       \t{} genes\nIntersection:  \t{} genes\nPubMed IDs:    \t{} identifiers",
            self.genes_a, self.genes_b, self.intersection, self.pubmed_ids
        )
    }
}

impl<'a> InteractionComparator<'a> {
    /// Create a comparator and compute its sets.
    pub fn new(
        type_a: impl Into<String>,
        type_b: impl Into<String>,
        interactions: &'a [Interaction],
    ) -> Self {
        let mut cmp = Self {
            type_a: type_a.into(),
            type_b: type_b.into(),
            interactions,
            genes_a: GeneRefSet::default(),
            genes_b: GeneRefSet::default(),
            intersection: GeneRefSet::default(),
        };
        cmp.compare();
        cmp
    }

    #[inline]
    pub fn type_a(&self) -> &str {
        &self.type_a
    }

    #[inline]
    pub fn type_b(&self) -> &str {
        &self.type_b
    }

    #[inline]
    pub fn interactions(&self) -> &'a [Interaction] {
        self.interactions
    }

    /// Side-B genes of interactions typed `type_a`.
    #[inline]
    pub fn genes_a(&self) -> &GeneRefSet<'a> {
        &self.genes_a
    }

    /// Side-B genes of interactions typed `type_b`.
    #[inline]
    pub fn genes_b(&self) -> &GeneRefSet<'a> {
        &self.genes_b
    }

    /// Genes present in both partitions.
    #[inline]
    pub fn intersection(&self) -> &GeneRefSet<'a> {
        &self.intersection
    }

    pub fn set_type_a(&mut self, type_a: impl Into<String>) {
        self.type_a = type_a.into();
        self.compare();
    }

    pub fn set_type_b(&mut self, type_b: impl Into<String>) {
        self.type_b = type_b.into();
        self.compare();
    }

    pub fn set_interactions(&mut self, interactions: &'a [Interaction]) {
        self.interactions = interactions;
        self.compare();
    }

    /// Rebuild both partitions and their intersection from scratch.
    pub fn compare(&mut self) {
        let mut genes_a = GeneRefSet::default();
        let mut genes_b = GeneRefSet::default();

        for interaction in self.interactions {
            let kind = interaction.interaction_type();
            let gene = interaction.gene_b();
            match (kind == self.type_a, kind == self.type_b) {
                (true, true) => {
                    genes_a.insert(gene);
                    genes_b.insert(gene);
                }
                (true, false) => {
                    genes_a.insert(gene);
                }
                (false, true) => {
                    genes_b.insert(gene);
                }
                (false, false) => {}
            }
        }

        self.intersection = genes_a.intersection(&genes_b).copied().collect();
        self.genes_a = genes_a;
        self.genes_b = genes_b;

        debug!(
            type_a = %self.type_a,
            type_b = %self.type_b,
            genes_a = self.genes_a.len(),
            genes_b = self.genes_b.len(),
            intersection = self.intersection.len(),
            "comparison recomputed"
        );
    }

    /// PubMed identifiers of every interaction whose side-B gene is in
    /// the intersection.
    ///
    /// Each PubMed field is split on `,` and every non-empty token is
    /// collected individually.
    pub fn pubmed_ids(&self) -> FxHashSet<&'a str> {
        if self.intersection.is_empty() {
            return FxHashSet::default();
        }
        self.interactions
            .iter()
            .filter(|i| self.intersection.contains(i.gene_b()))
            .flat_map(|i| i.pubmed_ids())
            .collect()
    }

    /// Sizes of all derived sets.
    pub fn summary(&self) -> ComparisonStats {
        ComparisonStats {
            genes_a: self.genes_a.len(),
            genes_b: self.genes_b.len(),
            intersection: self.intersection.len(),
            pubmed_ids: self.pubmed_ids().len(),
        }
    }

    /// Write the intersecting genes to `output`.
    ///
    /// Fails with [`InteractionError::EmptyExport`] if the intersection
    /// is empty; nothing is written in that case.
    pub fn write_genes<W: Write>(&self, output: W) -> Result<usize> {
        self.check_genes()?;
        write_genes(output, self.intersection.iter().copied())
    }

    /// Write the PubMed identifiers of the intersection to `output`.
    ///
    /// Requires both a non-empty intersection and at least one
    /// identifier.
    pub fn write_pubmed_ids<W: Write>(&self, output: W) -> Result<usize> {
        let ids = self.checked_pubmed_ids()?;
        write_pubmed_ids(output, ids)
    }

    /// Export the intersecting genes to a tab-delimited file.
    pub fn export_genes<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        self.check_genes()?;
        write_file_atomically(path, |file| {
            write_genes(file, self.intersection.iter().copied())
        })
    }

    /// Export the PubMed identifiers of the intersection to a file.
    pub fn export_pubmed<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let ids = self.checked_pubmed_ids()?;
        write_file_atomically(path, |file| write_pubmed_ids(file, ids))
    }

    pub(crate) fn check_genes(&self) -> Result<()> {
        if self.intersection.is_empty() {
            return Err(InteractionError::EmptyExport("no genes in the intersection"));
        }
        Ok(())
    }

    pub(crate) fn checked_pubmed_ids(&self) -> Result<FxHashSet<&'a str>> {
        let ids = self.pubmed_ids();
        if self.intersection.is_empty() || ids.is_empty() {
            return Err(InteractionError::EmptyExport(
                "no PubMed identifiers for the intersection",
            ));
        }
        Ok(ids)
    }
}
