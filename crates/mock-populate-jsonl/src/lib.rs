//! JSONL (JSON Lines) populator for mockgen.
//!
//! This crate writes sequences of synthesized instances as JSON Lines files
//! (one object per line) or as a single JSON array.
//!
//! # Example
//!
//! ```ignore
//! use mock_core::MockSchema;
//! use mock_populate_jsonl::JsonlPopulator;
//!
//! let schema = MockSchema::from_file("schema.yaml")?;
//! let mut populator = JsonlPopulator::from_schema(&schema, 42)?;
//!
//! let metrics = populator.populate("User", "users.jsonl", 1000)?;
//! println!("Generated {} rows in {:?}", metrics.rows_written, metrics.elapsed);
//! ```

pub mod args;
pub mod error;
pub mod populator;

pub use args::{CommonGenerateArgs, OutputFormat};
pub use error::JsonlPopulatorError;
pub use populator::{JsonlPopulator, PopulateMetrics};
