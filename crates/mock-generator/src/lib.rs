//! Synthetic value generator for the mockgen framework.
//!
//! This crate turns declared field shapes into plausible, deterministic fake
//! data. Default synthesis is a pure function of the field's type, its name and
//! an integer index; mask directives replace it with pattern-expanded strings.
//!
//! # Architecture
//!
//! ```text
//! MockSchema (YAML)
//!        │
//!        ▼
//! ┌──────────────────┐      ┌─────────────────────┐
//! │  MockGenerator   │─────▶│  ModelRegistry      │
//! │                  │      │  (SelfSynthesizing) │
//! │  - seed          │      └──────────┬──────────┘
//! │  - options       │                 │
//! │  - index         │                 ▼
//! └────────┬─────────┘      synthesize(shape, field, index, mask)
//!          │                   │              │
//!          ▼                   ▼              ▼
//!    MockValue::Record     scalar/collection   pattern / mask
//! ```
//!
//! # Example
//!
//! ```rust
//! use mock_core::{MockSchema, MockValue};
//! use mock_generator::MockGenerator;
//!
//! let schema = MockSchema::from_yaml(r#"
//! records:
//!   - name: User
//!     fields:
//!       - name: name
//!         type: String
//!       - name: age
//!         type: Int
//!       - name: number
//!         type: String
//!         mask:
//!           pattern: "AAA-XXXX"
//! "#).unwrap();
//!
//! let generator = MockGenerator::new(&schema, 42).unwrap();
//! let user = generator.instance("User", 1).unwrap();
//! let record = user.as_record().unwrap();
//! assert_eq!(record.get_field("name"), Some(&MockValue::String("Name_1".into())));
//! assert_eq!(record.get_field("age"), Some(&MockValue::Int64(3)));
//! ```
//!
//! # Synthesis rules
//!
//! - `String` / `Substring` - `"<Field>_<index>"`
//! - integers - `index * 3`
//! - floats - `index`
//! - `Bool` - `index` is even
//! - `UUID` - random v4 UUID from the symbol source
//! - `Date` - base instant plus `index * 1000` seconds
//! - `URL` - `https://example.com/<field>/<index>`
//! - `Data` - empty bytes
//! - capitalized names - nested model instance, else default construction
//! - optionals - always null
//! - lists / sets - two elements; sets collapse equal elements
//! - maps - one entry

pub mod generator;
pub mod generators;
pub mod model;
pub mod options;
pub mod rng;
pub mod sequence;

// Re-exports for convenience
pub use generator::{GeneratorError, InstanceIterator, MockGenerator, DEFAULT_SEED};
pub use generators::mask::{expand_builtin, expand_mask};
pub use generators::pattern::{
    check_pattern, detect_lookalikes, expand_pattern, LookalikeDiagnostic,
};
pub use generators::{synthesize, SynthesisContext};
pub use model::{ModelRegistry, SelfSynthesizing, DEFAULT_START_INDEX};
pub use options::{DateBase, SynthesisOptions};
pub use rng::SymbolSource;
pub use sequence::{instance_of, sequence_of};
