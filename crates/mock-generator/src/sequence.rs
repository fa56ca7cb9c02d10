//! Instances and sequences built from bare field descriptor lists.

use crate::generators::{synthesize, SynthesisContext};
use indexmap::IndexMap;
use mock_core::{FieldDescriptor, MockRecord};

/// Build one instance: each field synthesized once with the same `index`.
pub fn instance_of(
    model: &str,
    fields: &[FieldDescriptor],
    index: u64,
    ctx: &mut SynthesisContext<'_>,
) -> MockRecord {
    let values: IndexMap<_, _> = fields
        .iter()
        .map(|field| {
            let value = synthesize(ctx, &field.shape, &field.name, index, field.mask.as_ref());
            (field.name.clone(), value)
        })
        .collect();

    MockRecord::new(model, index, values)
}

/// Build `count` instances with indices `start, start + 1, ...`, in index order.
pub fn sequence_of(
    model: &str,
    fields: &[FieldDescriptor],
    count: u64,
    start: u64,
    ctx: &mut SynthesisContext<'_>,
) -> Vec<MockRecord> {
    (start..start.saturating_add(count))
        .map(|index| instance_of(model, fields, index, ctx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelRegistry;
    use crate::options::SynthesisOptions;
    use crate::rng::seeded;
    use mock_core::{MaskDirective, MockValue};
    use regex::Regex;

    fn person_fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("name", "String"),
            FieldDescriptor::new("age", "Int"),
        ]
    }

    #[test]
    fn test_instance_scenario() {
        let registry = ModelRegistry::new();
        let options = SynthesisOptions::default();
        let mut rng = seeded(42);
        let mut ctx = SynthesisContext::new(&registry, &mut rng, &options);

        let first = instance_of("Person", &person_fields(), 1, &mut ctx);
        assert_eq!(
            first.get_field("name"),
            Some(&MockValue::String("Name_1".to_string()))
        );
        assert_eq!(first.get_field("age"), Some(&MockValue::Int64(3)));

        let second = instance_of("Person", &person_fields(), 2, &mut ctx);
        assert_eq!(
            second.get_field("name"),
            Some(&MockValue::String("Name_2".to_string()))
        );
        assert_eq!(second.get_field("age"), Some(&MockValue::Int64(6)));
    }

    #[test]
    fn test_sequence_order_and_indices() {
        let registry = ModelRegistry::new();
        let options = SynthesisOptions::default();
        let mut rng = seeded(42);
        let mut ctx = SynthesisContext::new(&registry, &mut rng, &options);

        let records = sequence_of("Person", &person_fields(), 4, 10, &mut ctx);
        let indices: Vec<u64> = records.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![10, 11, 12, 13]);
        assert_eq!(records[3].get_field("age"), Some(&MockValue::Int64(39)));
        assert_eq!(records[0].field_names(), vec!["name", "age"]);

        assert!(sequence_of("Person", &person_fields(), 0, 1, &mut ctx).is_empty());
    }

    #[test]
    fn test_masked_field_ignores_index() {
        let registry = ModelRegistry::new();
        let options = SynthesisOptions::default();
        let mut rng = seeded(42);
        let mut ctx = SynthesisContext::new(&registry, &mut rng, &options);
        let fields = vec![
            FieldDescriptor::new("number", "String").with_mask(MaskDirective::pattern("AAA-XXXX")),
        ];

        let re = Regex::new(r"^[A-Z]{3}-\d{4}$").unwrap();
        for record in sequence_of("Plate", &fields, 20, 1, &mut ctx) {
            let number = record.get_field("number").and_then(MockValue::as_str).unwrap();
            assert!(re.is_match(number), "{number}");
        }
    }
}
