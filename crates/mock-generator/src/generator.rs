//! Main mock generator for producing model instances from a schema.

use crate::generators::SynthesisContext;
use crate::model::{ModelRegistry, SelfSynthesizing, DEFAULT_START_INDEX};
use crate::options::SynthesisOptions;
use mock_core::{MockSchema, MockValue};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seed used when neither the caller nor the schema provides one.
pub const DEFAULT_SEED: u64 = 42;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Model not found in the registry
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// Schema error
    #[error("Schema error: {0}")]
    SchemaError(#[from] mock_core::SchemaError),
}

/// Generator that produces model instances from a schema.
///
/// Random draws (masks, UUIDs) come from an RNG re-seeded for every index,
/// so the instance for a given index is the same whether it is requested
/// alone or as part of any sequence.
pub struct MockGenerator {
    /// Models available for synthesis
    registry: ModelRegistry,
    /// Resolved synthesis options
    options: SynthesisOptions,
    /// Base seed for per-index RNGs
    seed: u64,
    /// Next index for incremental generation
    index: u64,
}

impl MockGenerator {
    /// Create a new generator from a schema and seed.
    ///
    /// Fails only when the schema's options cannot be interpreted.
    pub fn new(schema: &MockSchema, seed: u64) -> Result<Self, GeneratorError> {
        let options = SynthesisOptions::from_schema(&schema.options)?;
        Ok(Self {
            registry: ModelRegistry::from_schema(schema),
            options,
            seed,
            index: schema.start_index.unwrap_or(DEFAULT_START_INDEX),
        })
    }

    /// Create a generator over an explicit registry.
    pub fn with_registry(registry: ModelRegistry, options: SynthesisOptions, seed: u64) -> Self {
        Self {
            registry,
            options,
            seed,
            index: DEFAULT_START_INDEX,
        }
    }

    /// Set the starting index for incremental generation.
    pub fn with_start_index(mut self, index: u64) -> Self {
        self.index = index;
        self
    }

    /// Register an additional model, e.g. a hand-written Rust type.
    pub fn register<M: SelfSynthesizing + 'static>(&mut self, model: M) {
        if self.registry.register(model).is_some() {
            tracing::debug!("Replaced a previously registered model");
        }
    }

    /// Compute the RNG seed for a specific index.
    fn compute_rng_seed_for_index(&self, index: u64) -> u64 {
        self.seed.wrapping_add(index.wrapping_mul(0x9E3779B97F4A7C15))
    }

    /// Get the current index.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Get a reference to the registry.
    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    fn model(&self, name: &str) -> Result<&dyn SelfSynthesizing, GeneratorError> {
        self.registry
            .get(name)
            .ok_or_else(|| GeneratorError::ModelNotFound(name.to_string()))
    }

    fn synthesize_at(&self, model: &dyn SelfSynthesizing, index: u64) -> MockValue {
        let mut rng = StdRng::seed_from_u64(self.compute_rng_seed_for_index(index));
        let mut ctx = SynthesisContext::new(&self.registry, &mut rng, &self.options);
        model.synthesize(&mut ctx, index)
    }

    /// Synthesize the instance of `model` for `index`.
    pub fn instance(&self, model: &str, index: u64) -> Result<MockValue, GeneratorError> {
        let model = self.model(model)?;
        Ok(self.synthesize_at(model, index))
    }

    /// Synthesize `count` instances with indices `start..start + count`.
    pub fn sequence(
        &self,
        model: &str,
        count: u64,
        start: u64,
    ) -> Result<Vec<MockValue>, GeneratorError> {
        let model = self.model(model)?;
        tracing::debug!(
            "Generating {} instances of '{}' from index {}",
            count,
            model.name(),
            start
        );
        Ok((start..start.saturating_add(count))
            .map(|index| self.synthesize_at(model, index))
            .collect())
    }

    /// Synthesize the instance at the current index and advance it.
    pub fn next_instance(&mut self, model: &str) -> Result<MockValue, GeneratorError> {
        let value = self.instance(model, self.index)?;
        self.index += 1;
        Ok(value)
    }

    /// Lazily synthesize `count` instances from the current index.
    pub fn instances(
        &mut self,
        model: &str,
        count: u64,
    ) -> Result<InstanceIterator<'_>, GeneratorError> {
        // Verify the model exists
        self.model(model)?;

        Ok(InstanceIterator {
            generator: self,
            model: model.to_string(),
            remaining: count,
        })
    }
}

/// Iterator that lazily generates instances.
pub struct InstanceIterator<'a> {
    generator: &'a mut MockGenerator,
    model: String,
    remaining: u64,
}

impl Iterator for InstanceIterator<'_> {
    type Item = MockValue;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;

        // This should not fail since we verified the model exists
        self.generator.next_instance(&self.model).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for InstanceIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_core::{FieldDeclaration, RecordDefinition};
    use regex::Regex;

    /// Amount in cents, written by hand instead of declared in a schema.
    struct Money;

    impl SelfSynthesizing for Money {
        fn name(&self) -> &str {
            "Money"
        }

        fn synthesize(&self, _ctx: &mut SynthesisContext<'_>, index: u64) -> MockValue {
            MockValue::Int64(index as i64 * 100)
        }
    }

    fn invoice() -> RecordDefinition {
        RecordDefinition::new(
            "Invoice",
            vec![
                FieldDeclaration::new("number", "Int"),
                FieldDeclaration::new("total", "Money"),
                FieldDeclaration::new("refunds", "[Money]"),
            ],
        )
    }

    fn test_schema() -> MockSchema {
        let yaml = r#"
version: 1
seed: 42

records:
  - name: User
    fields:
      - name: id
        type: UUID
      - name: name
        type: String
      - name: age
        type: Int
      - name: card
        type: String
        mask: card_number
      - name: addresses
        type: "[Address]"
      - name: nickname
        type: String?
      - name: role
        type: Role

  - name: Address
    fields:
      - name: city
        type: String

enums:
  - name: Role
    cases: [admin, member, guest]
"#;
        MockSchema::from_yaml(yaml).unwrap()
    }

    fn field<'a>(value: &'a MockValue, name: &str) -> &'a MockValue {
        value.as_record().and_then(|r| r.get_field(name)).unwrap()
    }

    #[test]
    fn test_generate_single_instance() {
        let generator = MockGenerator::new(&test_schema(), 42).unwrap();
        let user = generator.instance("User", 1).unwrap();

        assert!(matches!(field(&user, "id"), MockValue::Uuid(_)));
        assert_eq!(field(&user, "name"), &MockValue::String("Name_1".to_string()));
        assert_eq!(field(&user, "age"), &MockValue::Int64(3));
        assert_eq!(field(&user, "nickname"), &MockValue::Null);

        let card = field(&user, "card").as_str().unwrap();
        assert!(Regex::new(r"^\d{4} \d{4} \d{4} \d{4}$").unwrap().is_match(card));

        let addresses = field(&user, "addresses").as_array().unwrap();
        assert_eq!(addresses.len(), 2);
        assert_eq!(
            field(&addresses[1], "city"),
            &MockValue::String("City_2".to_string())
        );
    }

    #[test]
    fn test_deterministic_generation() {
        let gen1 = MockGenerator::new(&test_schema(), 42).unwrap();
        let gen2 = MockGenerator::new(&test_schema(), 42).unwrap();

        assert_eq!(gen1.instance("User", 5).unwrap(), gen2.instance("User", 5).unwrap());
    }

    #[test]
    fn test_instance_matches_sequence_member() {
        let generator = MockGenerator::new(&test_schema(), 42).unwrap();
        let sequence = generator.sequence("User", 5, 1).unwrap();

        assert_eq!(sequence[3], generator.instance("User", 4).unwrap());
    }

    #[test]
    fn test_seed_changes_random_fields_only() {
        let gen1 = MockGenerator::new(&test_schema(), 1).unwrap();
        let gen2 = MockGenerator::new(&test_schema(), 2).unwrap();
        let a = gen1.instance("User", 1).unwrap();
        let b = gen2.instance("User", 1).unwrap();

        assert_ne!(field(&a, "id"), field(&b, "id"));
        assert_eq!(field(&a, "name"), field(&b, "name"));
        assert_eq!(field(&a, "addresses"), field(&b, "addresses"));
    }

    #[test]
    fn test_enum_model_directly() {
        let generator = MockGenerator::new(&test_schema(), 42).unwrap();
        assert_eq!(
            generator.instance("Role", 2).unwrap(),
            generator.instance("Role", 5).unwrap()
        );
    }

    #[test]
    fn test_model_not_found() {
        let generator = MockGenerator::new(&test_schema(), 42).unwrap();
        let result = generator.instance("Nonexistent", 1);
        assert!(matches!(result, Err(GeneratorError::ModelNotFound(_))));
    }

    #[test]
    fn test_incremental_generation() {
        let mut generator = MockGenerator::new(&test_schema(), 42).unwrap();
        assert_eq!(generator.current_index(), 1);

        let values: Vec<_> = generator.instances("User", 3).unwrap().collect();
        assert_eq!(values.len(), 3);
        assert_eq!(generator.current_index(), 4);

        let next = generator.next_instance("User").unwrap();
        assert_eq!(next.as_record().map(|r| r.index), Some(4));
    }

    #[test]
    fn test_with_start_index() {
        let mut generator = MockGenerator::new(&test_schema(), 42)
            .unwrap()
            .with_start_index(10);
        let user = generator.next_instance("User").unwrap();
        assert_eq!(field(&user, "name"), &MockValue::String("Name_10".to_string()));
    }

    #[test]
    fn test_registered_model_nests_in_schema_record() {
        let mut schema = test_schema();
        schema.records.push(invoice());
        let mut generator = MockGenerator::new(&schema, 42).unwrap();

        // Unregistered, the field degrades to default construction
        let before = generator.instance("Invoice", 3).unwrap();
        assert_eq!(field(&before, "total"), &MockValue::default_of("Money"));

        generator.register(Money);
        assert!(generator.registry().contains("Money"));
        let invoice = generator.instance("Invoice", 3).unwrap();
        assert_eq!(field(&invoice, "number"), &MockValue::Int64(9));
        assert_eq!(field(&invoice, "total"), &MockValue::Int64(300));

        let refunds = field(&invoice, "refunds").as_array().unwrap();
        assert_eq!(refunds, &[MockValue::Int64(100), MockValue::Int64(200)]);
    }

    #[test]
    fn test_with_registry() {
        let mut registry = ModelRegistry::new();
        registry.register(invoice());
        registry.register(Money);
        let mut generator = MockGenerator::with_registry(registry, SynthesisOptions::default(), 42);

        assert_eq!(generator.current_index(), DEFAULT_START_INDEX);
        assert_eq!(generator.registry().names(), vec!["Invoice", "Money"]);
        let first = generator.next_instance("Invoice").unwrap();
        assert_eq!(field(&first, "total"), &MockValue::Int64(100));
        assert_eq!(generator.instance("Money", 7).unwrap(), MockValue::Int64(700));
    }

    #[test]
    fn test_size_hint_counts_remaining() {
        let mut generator = MockGenerator::new(&test_schema(), 42).unwrap();
        let mut iter = generator.instances("Address", 3).unwrap();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.size_hint(), (2, Some(2)));
    }

    #[test]
    fn test_invalid_options_rejected() {
        let mut schema = test_schema();
        schema.options.date_base = Some("soon".to_string());
        assert!(matches!(
            MockGenerator::new(&schema, 42),
            Err(GeneratorError::SchemaError(_))
        ));
    }
}
