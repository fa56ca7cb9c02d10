//! Expand command handler.

use clap::Args;
use mock_core::{BuiltinMask, MaskDirective};
use mock_generator::{expand_mask, rng::seeded, DEFAULT_SEED};
use std::io::Write;

/// Arguments for `mockgen expand`.
#[derive(Args, Clone, Debug)]
pub struct ExpandArgs {
    /// Pattern to expand (`A` = letter, `X` = digit)
    #[arg(long, conflicts_with = "builtin", required_unless_present = "builtin")]
    pub pattern: Option<String>,

    /// Built-in mask (card_number, card_expiry, date, phone_region, national_id, passport)
    #[arg(long)]
    pub builtin: Option<BuiltinMask>,

    /// Number of strings to expand
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: u64,

    /// Random seed
    #[arg(long, env = "MOCKGEN_SEED")]
    pub seed: Option<u64>,
}

impl ExpandArgs {
    fn directive(&self) -> anyhow::Result<MaskDirective> {
        match (&self.pattern, self.builtin) {
            (Some(pattern), _) => Ok(MaskDirective::pattern(pattern.as_str())),
            (None, Some(mask)) => Ok(MaskDirective::Builtin(mask)),
            (None, None) => anyhow::bail!("Either --pattern or --builtin is required"),
        }
    }
}

/// Print `count` expansions, one per line.
pub fn run_expand<W: Write>(args: &ExpandArgs, mut out: W) -> anyhow::Result<()> {
    let directive = args.directive()?;
    let mut rng = seeded(args.seed.unwrap_or(DEFAULT_SEED));

    for _ in 0..args.count {
        writeln!(out, "{}", expand_mask(&directive, &mut rng, None))?;
    }
    Ok(())
}
