//! Command-line interface for mockgen
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # JSON Lines to a file, continuing from index 101
//! mockgen generate --schema schema.yaml --model User \
//!   --count 100 --start-index 101 --output users.jsonl
//!
//! # JSON array on stdout with a fixed seed
//! MOCKGEN_SEED=7 mockgen generate -s schema.yaml -m User --format json
//! ```
//!
//! ## Inspect
//! ```bash
//! mockgen instance --schema schema.yaml --model Order --index 3
//! mockgen expand --builtin card_number --count 5 --seed 1
//! mockgen lint --schema schema.yaml
//! ```
//!
//! Logs go to stderr and are controlled with `RUST_LOG`; stdout carries data only.

use clap::{Parser, Subcommand};
use mockgen::commands::{
    run_expand, run_generate, run_instance, run_lint, ExpandArgs, GenerateArgs, InstanceArgs,
    LintArgs,
};

#[derive(Parser)]
#[command(name = "mockgen")]
#[command(about = "Deterministic mock data for declared record types")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a sequence of instances as JSON Lines or a JSON array
    Generate(GenerateArgs),

    /// Print a single instance as pretty JSON
    Instance(InstanceArgs),

    /// Expand a mask pattern or built-in mask
    Expand(ExpandArgs),

    /// Check mask patterns for look-alike characters and unresolved masks
    Lint(LintArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Generate(args) => {
            run_generate(&args, stdout)?;
        }
        Commands::Instance(args) => {
            run_instance(&args, stdout)?;
        }
        Commands::Expand(args) => {
            run_expand(&args, stdout)?;
        }
        Commands::Lint(args) => {
            run_lint(&args, stdout)?;
        }
    }

    Ok(())
}
