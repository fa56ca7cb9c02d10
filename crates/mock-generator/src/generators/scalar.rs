//! Deterministic scalar value rules.

use mock_core::MockValue;

/// Host that generated URLs point at.
pub const URL_HOST: &str = "https://example.com";

/// Synthesis rule selected by a scalar type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// `"<Field>_<index>"`
    Text,
    /// `index * 3`
    Integer,
    /// `index` as float
    Float,
    /// `index` is even
    Bool,
    /// Random UUID
    Uuid,
    /// Base instant offset by index
    Date,
    /// URL on a fixed host
    Url,
    /// Empty bytes
    Binary,
    /// Capitalized, possibly a nested model
    Model,
    /// Anything else: default construction
    Other,
}

impl ScalarKind {
    /// Classify a scalar type name.
    pub fn classify(name: &str) -> Self {
        match name {
            "String" | "Substring" | "str" | "&str" | "Text" => Self::Text,

            "Int" | "Int8" | "Int16" | "Int32" | "Int64" | "UInt" | "UInt8" | "UInt16"
            | "UInt32" | "UInt64" | "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8"
            | "u16" | "u32" | "u64" | "u128" | "usize" => Self::Integer,

            "Double" | "Float" | "Float32" | "Float64" | "CGFloat" | "f32" | "f64" => Self::Float,

            "Bool" | "bool" => Self::Bool,
            "UUID" | "Uuid" => Self::Uuid,
            "Date" => Self::Date,
            "URL" | "Url" => Self::Url,
            "Data" | "Bytes" => Self::Binary,

            other if is_capitalized(last_segment(other)) => Self::Model,
            _ => Self::Other,
        }
    }
}

/// Last `::` segment of a type path.
fn last_segment(name: &str) -> &str {
    name.rsplit("::").next().unwrap_or(name)
}

fn is_capitalized(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Generate `"<Field>_<index>"`.
pub fn generate_text(field: &str, index: u64) -> MockValue {
    MockValue::String(format!("{}_{index}", capitalize(field)))
}

/// Generate `index * 3`, saturating at `i64::MAX`.
pub fn generate_integer(index: u64) -> MockValue {
    let value = i64::try_from(index)
        .ok()
        .and_then(|i| i.checked_mul(3))
        .unwrap_or(i64::MAX);
    MockValue::Int64(value)
}

/// Generate the index as a float.
pub fn generate_float(index: u64) -> MockValue {
    MockValue::Float64(index as f64)
}

/// Generate `true` for even indices.
pub fn generate_bool(index: u64) -> MockValue {
    MockValue::Bool(index % 2 == 0)
}

/// Generate a URL on [`URL_HOST`] naming the field and index.
pub fn generate_url(field: &str, index: u64) -> MockValue {
    MockValue::Url(format!("{URL_HOST}/{field}/{index}"))
}

/// Generate empty binary data.
pub fn generate_binary() -> MockValue {
    MockValue::Bytes(Vec::new())
}
