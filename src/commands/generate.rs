//! Generate command handler.

use crate::config::{load_schema, RunSettings};
use anyhow::Context;
use clap::Args;
use mock_populate_jsonl::{CommonGenerateArgs, JsonlPopulator, OutputFormat, PopulateMetrics};
use std::io::Write;
use std::path::PathBuf;

/// Arguments for `mockgen generate`.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonGenerateArgs,

    /// Number of instances to generate
    #[arg(long, short = 'n', default_value_t = 10)]
    pub count: u64,

    /// Index of the first instance
    #[arg(long, env = "MOCKGEN_START_INDEX")]
    pub start_index: Option<u64>,

    /// Output file (stdout when omitted)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Output encoding
    #[arg(long, value_enum, default_value_t = OutputFormat::Jsonl)]
    pub format: OutputFormat,
}

/// Run the generate command, writing to `args.output` or else to `stdout`.
pub fn run_generate<W: Write>(args: &GenerateArgs, stdout: W) -> anyhow::Result<PopulateMetrics> {
    let schema = load_schema(&args.common.schema)?;
    let settings = RunSettings::resolve(args.common.seed, args.start_index, &schema);

    tracing::info!(
        "Generating {} instances of '{}' (seed {}, start index {})",
        args.count,
        args.common.model,
        settings.seed,
        settings.start_index
    );

    let mut populator = JsonlPopulator::from_schema(&schema, settings.seed)
        .context("Failed to set up generator")?
        .with_start_index(settings.start_index);
    let model = args.common.model.as_str();

    let metrics = match (&args.output, args.format) {
        (Some(path), OutputFormat::Jsonl) => populator.populate(model, path, args.count),
        (Some(path), OutputFormat::Json) => populator.write_json_array(model, path, args.count),
        (None, format) => populator.write_to(model, stdout, args.count, format),
    }
    .with_context(|| format!("Failed to generate instances of '{model}'"))?;

    if let Some(path) = &args.output {
        tracing::info!("Output written to {}", path.display());
    }
    Ok(metrics)
}
