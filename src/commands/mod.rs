//! Subcommand handlers.
//!
//! Each handler takes its parsed arguments plus the writer that receives data
//! output, so the binary passes stdout and tests pass a buffer.

pub mod expand;
pub mod generate;
pub mod instance;
pub mod lint;

pub use expand::{run_expand, ExpandArgs};
pub use generate::{run_generate, GenerateArgs};
pub use instance::{run_instance, InstanceArgs};
pub use lint::{lint_schema, run_lint, LintArgs, LintFinding};
