//! Gene records and gene identity.

use rustc_hash::FxHashSet;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A set of genes, deduplicated by [`GeneId`].
pub type GeneSet = FxHashSet<Gene>;

/// The identity key of a [`Gene`].
///
/// Typically an NCBI Gene ID, but any string is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeneId(String);

impl GeneId {
    /// Create a new gene identifier.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GeneId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for GeneId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for GeneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single gene on one side of an interaction.
///
/// Equality, hashing and ordering use the [`GeneId`] only: two genes with
/// the same id but different taxonomy, accession or product are the same
/// gene and collapse into one set member.
///
/// The id is fixed at construction. The payload attributes can be
/// changed, but a gene stored in a [`GeneSet`] is never reachable
/// mutably, so its identity cannot drift while it is a set member.
#[derive(Debug, Clone, Default)]
pub struct Gene {
    id: GeneId,
    tax_id: String,
    accession_version: String,
    product_name: String,
}

impl Gene {
    /// Create a new gene.
    pub fn new(
        gene_id: impl Into<GeneId>,
        tax_id: impl Into<String>,
        accession_version: impl Into<String>,
        product_name: impl Into<String>,
    ) -> Self {
        Self {
            id: gene_id.into(),
            tax_id: tax_id.into(),
            accession_version: accession_version.into(),
            product_name: product_name.into(),
        }
    }

    /// Return the same gene payload under a different identifier.
    pub fn with_gene_id(self, gene_id: impl Into<GeneId>) -> Self {
        Self {
            id: gene_id.into(),
            ..self
        }
    }

    /// The identity key of the gene.
    #[inline]
    pub fn gene_id(&self) -> &GeneId {
        &self.id
    }

    /// NCBI taxonomy id of the organism.
    #[inline]
    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    /// Product accession version, e.g. `NP_000005.2`.
    #[inline]
    pub fn accession_version(&self) -> &str {
        &self.accession_version
    }

    /// Product name.
    #[inline]
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn set_tax_id(&mut self, tax_id: impl Into<String>) {
        self.tax_id = tax_id.into();
    }

    pub fn set_accession_version(&mut self, accession_version: impl Into<String>) {
        self.accession_version = accession_version.into();
    }

    pub fn set_product_name(&mut self, product_name: impl Into<String>) {
        self.product_name = product_name.into();
    }
}

impl PartialEq for Gene {
    fn eq(&self, other: &Gene) -> bool {
        self.id == other.id
    }
}

impl Eq for Gene {}

// Must hash exactly like `str` so that `Borrow<str>` lookups work.
impl Hash for Gene {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.as_str().hash(state);
    }
}

impl Borrow<str> for Gene {
    fn borrow(&self) -> &str {
        self.id.as_str()
    }
}

impl Ord for Gene {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl PartialOrd for Gene {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Renders the gene export line: tax id, gene id, accession, product.
impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.tax_id, self.id, self.accession_version, self.product_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gene_equality_uses_id_only() {
        let a = Gene::new("G1", "9606", "NP_1.1", "alpha");
        let b = Gene::new("G1", "10116", "NP_2.1", "beta");
        let c = Gene::new("G2", "9606", "NP_1.1", "alpha");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_gene_set_dedup_by_id() {
        let mut set = GeneSet::default();
        assert!(set.insert(Gene::new("G1", "9606", "NP_1.1", "alpha")));
        assert!(!set.insert(Gene::new("G1", "10116", "NP_9.9", "other")));
        assert!(set.insert(Gene::new("G2", "9606", "NP_2.1", "beta")));

        assert_eq!(set.len(), 2);
        // First inserted payload wins
        assert_eq!(set.get("G1").unwrap().tax_id(), "9606");
    }

    #[test]
    fn test_gene_lookup_by_str() {
        let mut set = GeneSet::default();
        set.insert(Gene::new("7157", "9606", "NP_000537.3", "cellular tumor antigen p53"));

        assert!(set.contains("7157"));
        assert!(!set.contains("7158"));
    }

    #[test]
    fn test_gene_ordering() {
        let mut genes = [
            Gene::new("G3", "", "", ""),
            Gene::new("G1", "", "", ""),
            Gene::new("G2", "", "", ""),
        ];
        genes.sort();

        assert_eq!(genes[0].gene_id().as_str(), "G1");
        assert_eq!(genes[1].gene_id().as_str(), "G2");
        assert_eq!(genes[2].gene_id().as_str(), "G3");
    }

    #[test]
    fn test_gene_payload_setters() {
        let mut gene = Gene::new("G1", "9606", "NP_1.1", "alpha");
        gene.set_tax_id("10090");
        gene.set_accession_version("NP_1.2");
        gene.set_product_name("alpha-2");

        assert_eq!(gene.tax_id(), "10090");
        assert_eq!(gene.accession_version(), "NP_1.2");
        assert_eq!(gene.product_name(), "alpha-2");
        assert_eq!(gene.gene_id().as_str(), "G1");
    }

    #[test]
    fn test_gene_with_gene_id() {
        let gene = Gene::new("G1", "9606", "NP_1.1", "alpha").with_gene_id("G9");

        assert_eq!(gene.gene_id().as_str(), "G9");
        assert_eq!(gene.product_name(), "alpha");
    }

    #[test]
    fn test_gene_display() {
        let gene = Gene::new("G1", "9606", "NP_1.1", "alpha");
        assert_eq!(gene.to_string(), "9606\tG1\tNP_1.1\talpha");
    }
}
