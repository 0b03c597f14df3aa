//! Command implementations for intercomp.

pub mod compare;
pub mod generate;
pub mod stats;

pub use compare::CompareCommand;
pub use generate::{GenerateCommand, GenerateConfig, GenerateStats, SizeSpec};
pub use stats::StatsCommand;
