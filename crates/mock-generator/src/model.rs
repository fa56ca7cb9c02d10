//! Nested models that know how to synthesize themselves.
//!
//! A capitalized scalar type name refers to a model. Models are looked up in a
//! [`ModelRegistry`] and invoked through [`SelfSynthesizing`], so record and
//! enum declarations from a schema and hand-written Rust types all nest the
//! same way.

use crate::generators::SynthesisContext;
use crate::sequence::{instance_of, sequence_of};
use mock_core::{EnumDefinition, MockSchema, MockValue, RecordDefinition};
use std::collections::HashMap;
use std::fmt;

/// First index of a model's own sequence.
pub const DEFAULT_START_INDEX: u64 = 1;

/// A model able to produce its own instances.
pub trait SelfSynthesizing: Send + Sync {
    /// Type name the model is referenced by.
    fn name(&self) -> &str;

    /// Synthesize the instance for `index`.
    fn synthesize(&self, ctx: &mut SynthesisContext<'_>, index: u64) -> MockValue;

    /// Synthesize `count` instances with indices `start..start + count`.
    fn sequence(&self, ctx: &mut SynthesisContext<'_>, count: u64, start: u64) -> Vec<MockValue> {
        (start..start.saturating_add(count))
            .map(|index| self.synthesize(ctx, index))
            .collect()
    }
}

impl SelfSynthesizing for RecordDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn synthesize(&self, ctx: &mut SynthesisContext<'_>, index: u64) -> MockValue {
        let fields = self.stored_fields();
        MockValue::Record(instance_of(&self.name, &fields, index, ctx))
    }

    fn sequence(&self, ctx: &mut SynthesisContext<'_>, count: u64, start: u64) -> Vec<MockValue> {
        // Resolve the descriptors once for the whole sequence
        let fields = self.stored_fields();
        sequence_of(&self.name, &fields, count, start, ctx)
            .into_iter()
            .map(MockValue::Record)
            .collect()
    }
}

impl SelfSynthesizing for EnumDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn synthesize(&self, _ctx: &mut SynthesisContext<'_>, index: u64) -> MockValue {
        match self.case_at(index) {
            Some(case) => MockValue::Variant {
                enum_name: self.name.clone(),
                case: case.to_string(),
            },
            None => MockValue::default_of(&self.name),
        }
    }
}

/// Models available for nested synthesis, keyed by type name.
#[derive(Default)]
pub struct ModelRegistry {
    models: HashMap<String, Box<dyn SelfSynthesizing>>,
}

impl ModelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every record and enum of a schema.
    pub fn from_schema(schema: &MockSchema) -> Self {
        let mut registry = Self::new();
        for record in &schema.records {
            registry.register(record.clone());
        }
        for enumeration in &schema.enums {
            registry.register(enumeration.clone());
        }
        registry
    }

    /// Register a model under its name, returning the model it replaces.
    pub fn register<M: SelfSynthesizing + 'static>(
        &mut self,
        model: M,
    ) -> Option<Box<dyn SelfSynthesizing>> {
        self.models.insert(model.name().to_string(), Box::new(model))
    }

    /// Get a model by name.
    pub fn get(&self, name: &str) -> Option<&dyn SelfSynthesizing> {
        self.models.get(name).map(|model| &**model)
    }

    /// Check if a model is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Registered model names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.models.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("models", &self.names())
            .finish()
    }
}
