//! Run settings resolved from flags, environment and the schema file.
//!
//! Flags and environment variables arrive through clap (`env` feature), so a
//! value present here already prefers the flag over `MOCKGEN_SEED` /
//! `MOCKGEN_START_INDEX`. The schema file and the built-in defaults fill in
//! whatever is still missing.

use anyhow::Context;
use mock_core::MockSchema;
use mock_generator::{DEFAULT_SEED, DEFAULT_START_INDEX};
use std::path::Path;

/// Effective seed and start index for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    pub seed: u64,
    pub start_index: u64,
}

impl RunSettings {
    /// Layer command-line values over the schema file and the defaults.
    pub fn resolve(seed: Option<u64>, start_index: Option<u64>, schema: &MockSchema) -> Self {
        let settings = Self {
            seed: seed.or(schema.seed).unwrap_or(DEFAULT_SEED),
            start_index: start_index
                .or(schema.start_index)
                .unwrap_or(DEFAULT_START_INDEX),
        };
        tracing::debug!(
            "Resolved seed {} and start index {}",
            settings.seed,
            settings.start_index
        );
        settings
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            start_index: DEFAULT_START_INDEX,
        }
    }
}

/// Load and validate a schema file.
pub fn load_schema(path: &Path) -> anyhow::Result<MockSchema> {
    MockSchema::from_file(path)
        .with_context(|| format!("Failed to load schema from {}", path.display()))
}
