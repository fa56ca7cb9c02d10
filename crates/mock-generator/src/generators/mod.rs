//! Individual value generators for different type shapes.
//!
//! [`synthesize`] is the single entry point: a mask directive, when present,
//! always wins; otherwise the field's [`TypeDescriptor`] selects a rule.

pub mod collection;
pub mod mask;
pub mod pattern;
pub mod scalar;
pub mod timestamp;
pub mod uuid;

use crate::model::{ModelRegistry, SelfSynthesizing};
use crate::options::SynthesisOptions;
use crate::rng::SymbolSource;
use mock_core::{MaskDirective, MockValue, TypeDescriptor};
use scalar::ScalarKind;

/// State threaded through one synthesis pass.
pub struct SynthesisContext<'a> {
    registry: &'a ModelRegistry,
    source: &'a mut dyn SymbolSource,
    options: &'a SynthesisOptions,
    depth: usize,
}

impl<'a> SynthesisContext<'a> {
    /// Create a context at nesting depth zero.
    pub fn new(
        registry: &'a ModelRegistry,
        source: &'a mut dyn SymbolSource,
        options: &'a SynthesisOptions,
    ) -> Self {
        Self {
            registry,
            source,
            options,
            depth: 0,
        }
    }

    /// The randomness source.
    pub fn source(&mut self) -> &mut dyn SymbolSource {
        &mut *self.source
    }

    /// Synthesis options.
    pub fn options(&self) -> &'a SynthesisOptions {
        self.options
    }

    /// Current nested-model depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Look up a registered model.
    pub fn model(&self, name: &str) -> Option<&'a dyn SelfSynthesizing> {
        self.registry.get(name)
    }

    /// Run `f` one nesting level deeper with the model named `name`.
    ///
    /// Unknown names and models beyond `max_depth` degrade to default
    /// construction of `name`.
    pub fn with_model<F>(&mut self, name: &str, f: F) -> MockValue
    where
        F: FnOnce(&dyn SelfSynthesizing, &mut SynthesisContext<'a>) -> MockValue,
    {
        let Some(model) = self.model(name) else {
            tracing::debug!("No model registered for '{}', using default construction", name);
            return MockValue::default_of(name);
        };

        if self.depth >= self.options.max_depth {
            tracing::warn!(
                "Nested model '{}' exceeds max depth {}, using default construction",
                name,
                self.options.max_depth
            );
            return MockValue::default_of(name);
        }

        self.depth += 1;
        let value = f(model, self);
        self.depth -= 1;
        value
    }
}

/// Synthesize the value of one field.
///
/// A mask always overrides the shape. Without one the result is a pure
/// function of `(shape, field, index)`, except for `UUID` fields and a
/// `Now` date base.
pub fn synthesize(
    ctx: &mut SynthesisContext<'_>,
    shape: &TypeDescriptor,
    field: &str,
    index: u64,
    mask: Option<&MaskDirective>,
) -> MockValue {
    match mask {
        Some(directive) => {
            MockValue::String(mask::expand_mask(directive, ctx.source(), Some(field)))
        }
        None => synthesize_shape(ctx, shape, field, index),
    }
}

/// Default, shape-directed synthesis.
pub fn synthesize_shape(
    ctx: &mut SynthesisContext<'_>,
    shape: &TypeDescriptor,
    field: &str,
    index: u64,
) -> MockValue {
    match shape {
        TypeDescriptor::Scalar(name) => synthesize_scalar(ctx, name, field, index),
        // Optional fields are never populated
        TypeDescriptor::Optional(_) => MockValue::Null,
        TypeDescriptor::List(element) => collection::generate_list(ctx, element, field, index),
        TypeDescriptor::Set(element) => collection::generate_set(ctx, element, field, index),
        TypeDescriptor::Map { key, value } => {
            collection::generate_map(ctx, key, value, field, index)
        }
    }
}

fn synthesize_scalar(
    ctx: &mut SynthesisContext<'_>,
    name: &str,
    field: &str,
    index: u64,
) -> MockValue {
    match ScalarKind::classify(name) {
        ScalarKind::Text => scalar::generate_text(field, index),
        ScalarKind::Integer => scalar::generate_integer(index),
        ScalarKind::Float => scalar::generate_float(index),
        ScalarKind::Bool => scalar::generate_bool(index),
        ScalarKind::Uuid => uuid::generate_uuid_v4(ctx.source()),
        ScalarKind::Date => {
            timestamp::generate_offset_timestamp(ctx.options().date_base.instant(), index)
        }
        ScalarKind::Url => scalar::generate_url(field, index),
        ScalarKind::Binary => scalar::generate_binary(),
        ScalarKind::Model => ctx.with_model(name, |model, ctx| model.synthesize(ctx, index)),
        ScalarKind::Other => MockValue::default_of(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;
    use mock_core::{BuiltinMask, EnumDefinition, FieldDeclaration, RecordDefinition};
    use regex::Regex;

    fn registry() -> ModelRegistry {
        let mut registry = ModelRegistry::new();
        registry.register(RecordDefinition::new(
            "Address",
            vec![
                FieldDeclaration::new("street", "String"),
                FieldDeclaration::new("number", "Int"),
            ],
        ));
        registry.register(EnumDefinition::new(
            "Role",
            vec!["admin".to_string(), "member".to_string(), "guest".to_string()],
        ));
        registry
    }

    fn run(shape: &str, field: &str, index: u64) -> MockValue {
        let registry = registry();
        let options = SynthesisOptions::default();
        let mut rng = seeded(42);
        let mut ctx = SynthesisContext::new(&registry, &mut rng, &options);
        synthesize(&mut ctx, &TypeDescriptor::parse(shape), field, index, None)
    }

    #[test]
    fn test_scalar_rules() {
        assert_eq!(run("String", "name", 1), MockValue::String("Name_1".to_string()));
        assert_eq!(run("Int", "age", 2), MockValue::Int64(6));
        assert_eq!(run("Double", "score", 3), MockValue::Float64(3.0));
        assert_eq!(run("Bool", "active", 4), MockValue::Bool(true));
        assert_eq!(run("Data", "blob", 4), MockValue::Bytes(vec![]));
        assert_eq!(run("config", "settings", 1), MockValue::default_of("config"));
        assert!(matches!(run("UUID", "id", 1), MockValue::Uuid(_)));
    }

    #[test]
    fn test_date_is_offset_from_base() {
        let value = run("Date", "created", 2);
        let base = SynthesisOptions::default().date_base.instant();
        assert_eq!((*value.as_datetime().unwrap() - base).num_seconds(), 2000);
    }

    #[test]
    fn test_optional_is_never_populated() {
        assert_eq!(run("String?", "nickname", 1), MockValue::Null);
        assert_eq!(run("Optional<Address>", "home", 1), MockValue::Null);
    }

    #[test]
    fn test_deterministic_without_mask() {
        for shape in ["String", "[Int]", "Set<Bool>", "[String: Double]", "Address", "Role"] {
            for index in 0..5 {
                assert_eq!(run(shape, "field", index), run(shape, "field", index), "{shape}");
            }
        }
    }

    #[test]
    fn test_mask_overrides_shape() {
        let registry = registry();
        let options = SynthesisOptions::default();
        let mut rng = seeded(42);
        let mut ctx = SynthesisContext::new(&registry, &mut rng, &options);
        let re = Regex::new(r"^[A-Z]{3}-\d{4}$").unwrap();

        for shape in ["Int", "[String]", "Address?"] {
            let value = synthesize(
                &mut ctx,
                &TypeDescriptor::parse(shape),
                "number",
                1,
                Some(&MaskDirective::pattern("AAA-XXXX")),
            );
            assert!(re.is_match(value.as_str().unwrap()), "{shape}: {value:?}");
        }

        let value = synthesize(
            &mut ctx,
            &TypeDescriptor::parse("String"),
            "passport",
            7,
            Some(&MaskDirective::Builtin(BuiltinMask::Passport)),
        );
        let re = Regex::new(r"^[A-Z]{2}\d{7}$").unwrap();
        assert!(re.is_match(value.as_str().unwrap()));
    }

    #[test]
    fn test_nested_model() {
        let value = run("Address", "home", 2);
        let record = value.as_record().unwrap();
        assert_eq!(record.model, "Address");
        assert_eq!(record.index, 2);
        assert_eq!(
            record.get_field("street"),
            Some(&MockValue::String("Street_2".to_string()))
        );
        assert_eq!(record.get_field("number"), Some(&MockValue::Int64(6)));
    }

    #[test]
    fn test_unknown_capitalized_falls_back_to_default() {
        assert_eq!(run("Unknown", "thing", 1), MockValue::default_of("Unknown"));
    }

    #[test]
    fn test_enum_cycles() {
        for k in 0..6 {
            assert_eq!(run("Role", "role", k), run("Role", "role", k + 3));
        }
        assert_eq!(
            run("Role", "role", 1),
            MockValue::Variant {
                enum_name: "Role".to_string(),
                case: "member".to_string(),
            }
        );
    }

    #[test]
    fn test_self_referencing_model_stops_at_max_depth() {
        let mut registry = ModelRegistry::new();
        registry.register(RecordDefinition::new(
            "Node",
            vec![
                FieldDeclaration::new("label", "String"),
                FieldDeclaration::new("child", "Node"),
            ],
        ));
        let options = SynthesisOptions {
            max_depth: 3,
            ..SynthesisOptions::default()
        };
        let mut rng = seeded(1);
        let mut ctx = SynthesisContext::new(&registry, &mut rng, &options);

        let mut current = synthesize(&mut ctx, &TypeDescriptor::parse("Node"), "root", 1, None);
        let mut depth = 0;
        loop {
            match current {
                MockValue::Record(record) => {
                    depth += 1;
                    current = record.get_field("child").cloned().unwrap();
                }
                leaf => {
                    assert_eq!(leaf, MockValue::default_of("Node"));
                    break;
                }
            }
        }
        assert_eq!(depth, 3);
        assert_eq!(ctx.depth(), 0);
    }
}
