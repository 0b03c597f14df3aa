//! Generate synthetic interaction files for benchmarking and fixtures.
//!
//! Genes are drawn from a fixed pool per side so that type partitions
//! overlap; each record gets one to three PubMed identifiers. Output is
//! deterministic for a given seed.

use crate::export::write_file_atomically;
use crate::reader::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Buffer size for I/O operations (1MB)
const BUF_SIZE: usize = 1024 * 1024;

/// Header written at the top of every generated file.
pub const GENERATED_HEADER: &str = "#tax_id\tgene_id\taccn_vers\tname\tkeyphrase\ttax_id\tinteractant_id\taccn_vers\tname\tpubmed_id_list\tlast_mod\tgenerif";

/// Size specification (parses 1K, 1M, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    pub count: u64,
}

impl SizeSpec {
    /// Parse size from string (e.g., "1K", "5M", "100").
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_uppercase();
        if s.is_empty() {
            return None;
        }

        let (num_part, multiplier) = if let Some(n) = s.strip_suffix('K') {
            (n, 1_000u64)
        } else if let Some(n) = s.strip_suffix('M') {
            (n, 1_000_000u64)
        } else {
            (s.as_str(), 1u64)
        };

        num_part
            .parse::<u64>()
            .ok()
            .and_then(|n| n.checked_mul(multiplier))
            .map(|count| Self { count })
    }
}

/// Configuration for the generate command.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub output: PathBuf,
    pub count: u64,
    /// Number of distinct genes per side
    pub genes: u32,
    pub types: Vec<String>,
    pub seed: u64,
    pub tax_a: String,
    pub tax_b: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("interactions.tsv"),
            count: 10_000,
            genes: 1_000,
            types: ["binding", "inhibition", "phosphorylation", "activation"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            seed: 42,
            tax_a: "9606".to_string(),
            tax_b: "10116".to_string(),
        }
    }
}

/// Statistics from generate operation.
#[derive(Debug, Default, Clone)]
pub struct GenerateStats {
    pub interactions: u64,
    pub elapsed_secs: f64,
}

impl std::fmt::Display for GenerateStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} interactions ({:.1}s)",
            self.interactions, self.elapsed_secs
        )
    }
}

/// Generate command.
pub struct GenerateCommand {
    config: GenerateConfig,
}

impl GenerateCommand {
    pub fn new(config: GenerateConfig) -> Self {
        Self { config }
    }

    /// Write the configured file.
    pub fn run(&self) -> Result<GenerateStats> {
        let start = Instant::now();
        let mut rng = SmallRng::seed_from_u64(self.config.seed);

        let written = write_file_atomically(&self.config.output, |file| {
            let mut writer = BufWriter::with_capacity(BUF_SIZE, file);
            self.write_interactions(&mut rng, &mut writer)?;
            writer.flush()?;
            Ok(self.config.count as usize)
        })?;

        Ok(GenerateStats {
            interactions: written as u64,
            elapsed_secs: start.elapsed().as_secs_f64(),
        })
    }

    /// Write the header and `count` random records to `writer`.
    pub fn write_interactions<W: Write>(&self, rng: &mut SmallRng, writer: &mut W) -> Result<()> {
        let mut buf = itoa::Buffer::new();
        let genes = self.config.genes.max(1);

        writer.write_all(GENERATED_HEADER.as_bytes())?;
        writer.write_all(b"\n")?;

        for _ in 0..self.config.count {
            let gene_a = 1_000 + u64::from(rng.gen_range(0..genes));
            let gene_b = 100_000 + u64::from(rng.gen_range(0..genes));
            let kind = self.pick_type(rng);

            Self::write_gene(writer, &mut buf, &self.config.tax_a, gene_a, "NP_", "protein")?;
            writer.write_all(b"\t")?;
            writer.write_all(kind.as_bytes())?;
            writer.write_all(b"\t")?;
            Self::write_gene(writer, &mut buf, &self.config.tax_b, gene_b, "XP_", "interactant")?;
            writer.write_all(b"\t")?;

            let n_ids = rng.gen_range(1..=3);
            for i in 0..n_ids {
                if i > 0 {
                    writer.write_all(b",")?;
                }
                let pmid: u32 = rng.gen_range(10_000_000..40_000_000);
                writer.write_all(buf.format(pmid).as_bytes())?;
            }

            let year: u32 = rng.gen_range(2000..2024);
            let month: u32 = rng.gen_range(1..=12);
            let day: u32 = rng.gen_range(1..=28);
            writeln!(
                writer,
                "\t{}-{:02}-{:02} 00:00\tsynthetic {} interaction",
                year, month, day, kind
            )?;
        }

        Ok(())
    }

    fn pick_type(&self, rng: &mut SmallRng) -> &str {
        if self.config.types.is_empty() {
            return "interaction";
        }
        let idx = rng.gen_range(0..self.config.types.len());
        &self.config.types[idx]
    }

    /// Write the four gene columns: tax id, gene id, accession, product.
    fn write_gene<W: Write>(
        writer: &mut W,
        buf: &mut itoa::Buffer,
        tax_id: &str,
        gene_id: u64,
        accession_prefix: &str,
        product: &str,
    ) -> Result<()> {
        let id = buf.format(gene_id);
        writer.write_all(tax_id.as_bytes())?;
        writer.write_all(b"\t")?;
        writer.write_all(id.as_bytes())?;
        writer.write_all(b"\t")?;
        writer.write_all(accession_prefix.as_bytes())?;
        writer.write_all(id.as_bytes())?;
        writer.write_all(b".1\t")?;
        writer.write_all(product.as_bytes())?;
        writer.write_all(b" ")?;
        writer.write_all(id.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::parse_interactions;

    fn small_config(count: u64) -> GenerateConfig {
        GenerateConfig {
            count,
            genes: 20,
            ..GenerateConfig::default()
        }
    }

    fn generate(config: GenerateConfig, seed: u64) -> String {
        let cmd = GenerateCommand::new(config);
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut out = Vec::new();
        cmd.write_interactions(&mut rng, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_size_spec_parse() {
        assert_eq!(SizeSpec::from_str("1K").unwrap().count, 1_000);
        assert_eq!(SizeSpec::from_str("5M").unwrap().count, 5_000_000);
        assert_eq!(SizeSpec::from_str("100").unwrap().count, 100);
        assert_eq!(SizeSpec::from_str("  10k  ").unwrap().count, 10_000);
        assert!(SizeSpec::from_str("").is_none());
        assert!(SizeSpec::from_str("abc").is_none());
    }

    #[test]
    fn test_generated_file_parses() {
        let content = generate(small_config(200), 7);
        let interactions = parse_interactions(&content).unwrap();

        assert_eq!(interactions.len(), 200);
        assert!(content.starts_with("#tax_id\t"));
        for i in &interactions {
            assert_eq!(i.gene_a().tax_id(), "9606");
            assert_eq!(i.gene_b().tax_id(), "10116");
            let n = i.pubmed_ids().count();
            assert!((1..=3).contains(&n));
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let first = generate(small_config(50), 12345);
        let second = generate(small_config(50), 12345);
        let other = generate(small_config(50), 54321);

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_run_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = GenerateConfig {
            output: dir.path().join("synthetic.tsv"),
            ..small_config(25)
        };

        let stats = GenerateCommand::new(config).run().unwrap();

        assert_eq!(stats.interactions, 25);
        let content = std::fs::read_to_string(dir.path().join("synthetic.tsv")).unwrap();
        assert_eq!(content.lines().count(), 26);
    }

    #[test]
    fn test_large_gene_pool_ids_do_not_wrap() {
        let config = GenerateConfig {
            genes: u32::MAX,
            ..small_config(50)
        };
        let content = generate(config, 99);
        let interactions = parse_interactions(&content).unwrap();

        for i in &interactions {
            let id: u64 = i.gene_b().gene_id().as_str().parse().unwrap();
            assert!(id >= 100_000);
            assert!(id < 100_000 + u64::from(u32::MAX));
        }
    }
}
