//! Gene-to-gene interaction records.

use crate::gene::Gene;
use std::cmp::Ordering;
use std::fmt;

/// Separator between identifiers in a PubMed id list.
pub const PUBMED_SEPARATOR: char = ',';

/// An interaction between two genes, supported by PubMed references.
///
/// `gene_a` belongs to the first taxonomy column of the source file and
/// `gene_b` to the second.
///
/// Equality and ordering are keyed on the interaction type label so that
/// a sorted collection groups interactions of the same type together.
/// Many interactions share a type; this is not a uniqueness constraint.
#[derive(Debug, Clone)]
pub struct Interaction {
    gene_a: Gene,
    gene_b: Gene,
    pubmed_id: String,
    interaction_type: String,
    last_update: String,
    gene_rif: String,
}

impl Interaction {
    /// Create a new interaction.
    pub fn new(
        gene_a: Gene,
        gene_b: Gene,
        pubmed_id: impl Into<String>,
        interaction_type: impl Into<String>,
        last_update: impl Into<String>,
        gene_rif: impl Into<String>,
    ) -> Self {
        Self {
            gene_a,
            gene_b,
            pubmed_id: pubmed_id.into(),
            interaction_type: interaction_type.into(),
            last_update: last_update.into(),
            gene_rif: gene_rif.into(),
        }
    }

    #[inline]
    pub fn gene_a(&self) -> &Gene {
        &self.gene_a
    }

    #[inline]
    pub fn gene_b(&self) -> &Gene {
        &self.gene_b
    }

    /// The raw PubMed field, possibly a comma-separated list.
    #[inline]
    pub fn pubmed_id(&self) -> &str {
        &self.pubmed_id
    }

    /// The interaction type label, e.g. `phosphorylation`.
    #[inline]
    pub fn interaction_type(&self) -> &str {
        &self.interaction_type
    }

    /// Last modification timestamp, kept verbatim.
    #[inline]
    pub fn last_update(&self) -> &str {
        &self.last_update
    }

    /// Free-text GeneRIF note.
    #[inline]
    pub fn gene_rif(&self) -> &str {
        &self.gene_rif
    }

    /// Iterate the individual PubMed identifiers of this interaction.
    ///
    /// The PubMed field is split on `,`. Tokens are not trimmed; empty
    /// tokens (from `"1,,2"` or a blank field) are skipped, so a blank
    /// field yields no identifier rather than an empty one. An
    /// interaction can therefore contribute nothing to a PubMed export
    /// even though its gene is in the intersection.
    pub fn pubmed_ids(&self) -> impl Iterator<Item = &str> {
        self.pubmed_id
            .split(PUBMED_SEPARATOR)
            .filter(|id| !id.is_empty())
    }

    pub fn set_gene_a(&mut self, gene: Gene) {
        self.gene_a = gene;
    }

    pub fn set_gene_b(&mut self, gene: Gene) {
        self.gene_b = gene;
    }

    pub fn set_pubmed_id(&mut self, pubmed_id: impl Into<String>) {
        self.pubmed_id = pubmed_id.into();
    }

    pub fn set_interaction_type(&mut self, interaction_type: impl Into<String>) {
        self.interaction_type = interaction_type.into();
    }

    pub fn set_last_update(&mut self, last_update: impl Into<String>) {
        self.last_update = last_update.into();
    }

    pub fn set_gene_rif(&mut self, gene_rif: impl Into<String>) {
        self.gene_rif = gene_rif.into();
    }
}

impl PartialEq for Interaction {
    fn eq(&self, other: &Self) -> bool {
        self.interaction_type == other.interaction_type
    }
}

impl Eq for Interaction {}

impl Ord for Interaction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.interaction_type.cmp(&other.interaction_type)
    }
}

impl PartialOrd for Interaction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Renders the interaction in the 12-column source layout.
impl fmt::Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = &self.gene_a;
        let b = &self.gene_b;
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            a.tax_id(),
            a.gene_id(),
            a.accession_version(),
            a.product_name(),
            self.interaction_type,
            b.tax_id(),
            b.gene_id(),
            b.accession_version(),
            b.product_name(),
            self.pubmed_id,
            self.last_update,
            self.gene_rif
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interaction(kind: &str, pubmed: &str) -> Interaction {
        Interaction::new(
            Gene::new("G1", "9606", "ACC1", "ProtA"),
            Gene::new("G2", "10116", "ACC2", "ProtB"),
            pubmed,
            kind,
            "2020-01-01",
            "note",
        )
    }

    #[test]
    fn test_pubmed_ids_split() {
        let i = interaction("binding", "111,222,333");
        let ids: Vec<&str> = i.pubmed_ids().collect();
        assert_eq!(ids, vec!["111", "222", "333"]);
    }

    #[test]
    fn test_pubmed_ids_single() {
        let i = interaction("binding", "111");
        let ids: Vec<&str> = i.pubmed_ids().collect();
        assert_eq!(ids, vec!["111"]);
    }

    #[test]
    fn test_pubmed_ids_not_trimmed() {
        let i = interaction("binding", "111, 222");
        let ids: Vec<&str> = i.pubmed_ids().collect();
        assert_eq!(ids, vec!["111", " 222"]);
    }

    #[test]
    fn test_pubmed_ids_skip_empty_tokens() {
        let i = interaction("binding", "111,,222,");
        let ids: Vec<&str> = i.pubmed_ids().collect();
        assert_eq!(ids, vec!["111", "222"]);

        let blank = interaction("binding", "");
        assert_eq!(blank.pubmed_ids().count(), 0);
    }

    #[test]
    fn test_ordering_by_type() {
        let mut interactions = [
            interaction("phosphorylation", "1"),
            interaction("binding", "2"),
            interaction("inhibition", "3"),
            interaction("binding", "4"),
        ];
        interactions.sort();

        assert_eq!(interactions[0].interaction_type(), "binding");
        assert_eq!(interactions[1].interaction_type(), "binding");
        // Stable sort keeps input order among equal types
        assert_eq!(interactions[0].pubmed_id(), "2");
        assert_eq!(interactions[1].pubmed_id(), "4");
        assert_eq!(interactions[2].interaction_type(), "inhibition");
        assert_eq!(interactions[3].interaction_type(), "phosphorylation");
    }

    #[test]
    fn test_equality_by_type() {
        assert_eq!(interaction("binding", "1"), interaction("binding", "2"));
        assert_ne!(interaction("binding", "1"), interaction("inhibition", "1"));
    }

    #[test]
    fn test_setters() {
        let mut i = interaction("binding", "1");
        i.set_interaction_type("inhibition");
        i.set_pubmed_id("9,8");
        i.set_last_update("2021-05-05");
        i.set_gene_rif("edited");
        i.set_gene_b(Gene::new("G7", "10116", "ACC7", "ProtG"));

        assert_eq!(i.interaction_type(), "inhibition");
        assert_eq!(i.pubmed_ids().collect::<Vec<_>>(), vec!["9", "8"]);
        assert_eq!(i.last_update(), "2021-05-05");
        assert_eq!(i.gene_rif(), "edited");
        assert_eq!(i.gene_b().gene_id().as_str(), "G7");
    }

    #[test]
    fn test_display_source_layout() {
        let i = interaction("phosphorylation", "111,222");
        assert_eq!(
            i.to_string(),
            "9606\tG1\tACC1\tProtA\tphosphorylation\t10116\tG2\tACC2\tProtB\t111,222\t2020-01-01\tnote"
        );
    }
}
