//! mockgen library
//!
//! Deterministic synthetic data for records declared in a YAML schema.
//!
//! # Crates
//!
//! - `mock_core` - type shapes, schema declarations, values and JSON conversion
//! - `mock_generator` - pattern expansion, value synthesis and sequences
//! - `mock_populate_jsonl` - JSON Lines / JSON array output with metrics
//!
//! # CLI Usage
//!
//! ```bash
//! # Ten users as JSON Lines on stdout
//! mockgen generate --schema schema.yaml --model User --count 10
//!
//! # Instance 42 as pretty JSON
//! mockgen instance --schema schema.yaml --model User --index 42
//!
//! # Expand a pattern or a built-in mask
//! mockgen expand --pattern "AA-XXXX" --count 3
//! mockgen expand --builtin phone_region
//!
//! # Report look-alike characters and unresolved masks
//! mockgen lint --schema schema.yaml
//! ```

pub mod commands;
pub mod config;

pub use config::{load_schema, RunSettings};
