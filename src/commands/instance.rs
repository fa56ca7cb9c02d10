//! Instance command handler.

use crate::config::{load_schema, RunSettings};
use anyhow::Context;
use clap::Args;
use mock_generator::MockGenerator;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for `mockgen instance`.
#[derive(Args, Clone, Debug)]
pub struct InstanceArgs {
    /// Path to schema YAML file
    #[arg(long, short = 's')]
    pub schema: PathBuf,

    /// Record or enum to synthesize
    #[arg(long, short = 'm')]
    pub model: String,

    /// Index of the instance
    #[arg(long, short = 'i', default_value_t = 1)]
    pub index: u64,

    /// Random seed for masked and random values
    #[arg(long, env = "MOCKGEN_SEED")]
    pub seed: Option<u64>,
}

/// Print one instance as pretty JSON.
pub fn run_instance<W: Write>(args: &InstanceArgs, mut out: W) -> anyhow::Result<()> {
    let schema = load_schema(&args.schema)?;
    let settings = RunSettings::resolve(args.seed, None, &schema);

    let generator =
        MockGenerator::new(&schema, settings.seed).context("Failed to set up generator")?;
    let value = generator
        .instance(&args.model, args.index)
        .with_context(|| {
            format!(
                "Failed to synthesize '{}' (known models: {})",
                args.model,
                generator.registry().names().join(", ")
            )
        })?;

    let json = serde_json::to_string_pretty(&serde_json::Value::from(&value))?;
    writeln!(out, "{json}")?;
    Ok(())
}
