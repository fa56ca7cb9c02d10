//! List, set and map generators.

use super::{synthesize_shape, SynthesisContext};
use crate::model::DEFAULT_START_INDEX;
use mock_core::{MockValue, TypeDescriptor};

/// Number of elements in every default list and set.
pub const COLLECTION_LEN: u64 = 2;

/// Generate a two-element list.
///
/// A nested-model element type yields the model's own first two sequence
/// instances. Any other element is synthesized twice with the same index.
pub fn generate_list(
    ctx: &mut SynthesisContext<'_>,
    element: &TypeDescriptor,
    field: &str,
    index: u64,
) -> MockValue {
    MockValue::Array(generate_elements(ctx, element, field, index))
}

/// Generate a set from the list elements; equal elements collapse into one.
pub fn generate_set(
    ctx: &mut SynthesisContext<'_>,
    element: &TypeDescriptor,
    field: &str,
    index: u64,
) -> MockValue {
    MockValue::set_from(generate_elements(ctx, element, field, index))
}

/// Generate a single-entry map.
pub fn generate_map(
    ctx: &mut SynthesisContext<'_>,
    key: &TypeDescriptor,
    value: &TypeDescriptor,
    field: &str,
    index: u64,
) -> MockValue {
    let key = synthesize_shape(ctx, key, field, index);
    let value = synthesize_shape(ctx, value, field, index);
    MockValue::Map(vec![(key, value)])
}

fn generate_elements(
    ctx: &mut SynthesisContext<'_>,
    element: &TypeDescriptor,
    field: &str,
    index: u64,
) -> Vec<MockValue> {
    if let Some(name) = element.scalar_name() {
        if ctx.model(name).is_some() {
            let nested = ctx.with_model(name, |model, ctx| {
                MockValue::Array(model.sequence(ctx, COLLECTION_LEN, DEFAULT_START_INDEX))
            });
            return match nested {
                MockValue::Array(values) => values,
                // Depth limit reached
                other => vec![other.clone(), other],
            };
        }
    }

    (0..COLLECTION_LEN)
        .map(|_| synthesize_shape(ctx, element, field, index))
        .collect()
}
