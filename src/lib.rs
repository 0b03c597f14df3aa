// Clippy allows for the whole crate
#![allow(clippy::should_implement_trait)]

//! InterComp: gene interaction type comparison
//!
//! This library loads tab-delimited gene interaction files and answers a
//! set-membership question over them: which genes take part in
//! interactions of both type A and type B?
//!
//! # Features
//!
//! - **Strict parsing**: a malformed line fails the whole load
//! - **Eager comparison**: gene partitions are recomputed on every change
//! - **Atomic exports**: result files are either complete or absent
//!
//! # Example
//!
//! ```rust,no_run
//! use intercomp::InteractionsFile;
//!
//! let file = InteractionsFile::from_path("interactions.tsv").unwrap();
//! println!("{}", file.stats_text());
//!
//! let cmp = file.comparator("binding", "inhibition");
//! cmp.export_genes("shared_genes.txt").unwrap();
//! cmp.export_pubmed("shared_pmids.txt").unwrap();
//! ```

pub mod commands;
pub mod comparator;
pub mod config;
pub mod dataset;
pub mod export;
pub mod gene;
pub mod interaction;
pub mod reader;

// Re-export commonly used types
pub use comparator::{ComparisonStats, InteractionComparator};
pub use dataset::{InteractionStats, InteractionsFile};
pub use gene::{Gene, GeneId, GeneSet};
pub use interaction::Interaction;
pub use reader::{parse_interactions, read_interactions, InteractionError, InteractionReader};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::commands::{CompareCommand, GenerateCommand, StatsCommand};
    pub use crate::comparator::InteractionComparator;
    pub use crate::dataset::InteractionsFile;
    pub use crate::gene::{Gene, GeneId, GeneSet};
    pub use crate::interaction::Interaction;
    pub use crate::reader::{parse_interactions, read_interactions, InteractionError};
}
