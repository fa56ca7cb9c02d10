//! Error types for the JSONL populator.

use thiserror::Error;

/// Failure while writing generated instances.
#[derive(Error, Debug)]
pub enum JsonlPopulatorError {
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Generator(#[from] mock_generator::GeneratorError),
}
