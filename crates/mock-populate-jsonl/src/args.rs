//! CLI argument definitions shared by generating commands.

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Output encoding of a generated sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line
    #[default]
    Jsonl,
    /// A single pretty-printed JSON array
    Json,
}

/// Common arguments for commands that synthesize instances.
#[derive(Args, Clone, Debug)]
pub struct CommonGenerateArgs {
    /// Path to schema YAML file
    #[arg(long, short = 's')]
    pub schema: PathBuf,

    /// Record or enum to generate
    #[arg(long, short = 'm')]
    pub model: String,

    /// Random seed for masked and random values (same seed = same data)
    #[arg(long, env = "MOCKGEN_SEED")]
    pub seed: Option<u64>,
}
