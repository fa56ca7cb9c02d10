//! Core types for the mockgen framework.
//!
//! This crate provides the foundational types used across the synthesis
//! crates, including:
//!
//! - [`TypeDescriptor`] - Recursive field type shape, parsed from type text
//! - [`FieldDescriptor`] / [`MaskDirective`] - Resolved per-field synthesis input
//! - [`MockSchema`] - Record and enum declarations loaded from YAML
//! - [`MockValue`] / [`MockRecord`] - Synthesized values
//!
//! # Architecture
//!
//! ```text
//! mock-core (this crate)
//!    │
//!    ├─── mock-generator       (synthesizes MockValues from descriptors)
//!    │
//!    └─── mock-populate-jsonl  (writes MockRecords as JSON Lines)
//! ```
//!
//! # Example
//!
//! ```rust
//! use mock_core::{FieldDescriptor, TypeDescriptor};
//!
//! let field = FieldDescriptor::new("tags", "[String: Int]?");
//! assert_eq!(
//!     field.shape,
//!     TypeDescriptor::optional(TypeDescriptor::map(
//!         TypeDescriptor::scalar("String"),
//!         TypeDescriptor::scalar("Int"),
//!     ))
//! );
//! ```

pub mod json;
pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use schema::{
    BuiltinMask, EnumDefinition, FieldDeclaration, FieldDescriptor, MaskDirective, MockSchema,
    RecordDefinition, SchemaError, SchemaOptions,
};
pub use types::TypeDescriptor;
pub use values::{MockRecord, MockValue};
