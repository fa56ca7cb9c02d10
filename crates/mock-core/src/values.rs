//! Value representations produced by synthesis.
//!
//! `MockValue` is the type-agnostic result of synthesizing one field;
//! `MockRecord` is one synthesized instance of a record model.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use uuid::Uuid;

/// Synthesized value for a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum MockValue {
    /// Absent optional value
    Null,

    /// Boolean value
    Bool(bool),

    /// Integer value (every integer width)
    Int64(i64),

    /// Floating point value (every float width)
    Float64(f64),

    /// String value
    String(String),

    /// Binary data
    Bytes(Vec<u8>),

    /// UUID value
    Uuid(Uuid),

    /// Instant in time
    DateTime(DateTime<Utc>),

    /// URL value
    Url(String),

    /// Ordered list of values
    Array(Vec<MockValue>),

    /// Set of values, without duplicates
    Set(Vec<MockValue>),

    /// Key/value entries in insertion order
    Map(Vec<(MockValue, MockValue)>),

    /// Nested record instance
    Record(MockRecord),

    /// Selected enum case
    Variant {
        /// Enum type name
        enum_name: String,
        /// Case name
        case: String,
    },

    /// Zero-argument default construction of `type_name`, left to the host
    Default {
        /// Type to construct
        type_name: String,
    },
}

impl MockValue {
    /// Create a default-construction placeholder.
    pub fn default_of(type_name: impl Into<String>) -> Self {
        Self::Default {
            type_name: type_name.into(),
        }
    }

    /// Build a set value, dropping members equal to an earlier one.
    pub fn set_from(values: Vec<MockValue>) -> Self {
        let mut members: Vec<MockValue> = Vec::with_capacity(values.len());
        for value in values {
            if !members.contains(&value) {
                members.push(value);
            }
        }
        Self::Set(members)
    }

    /// Whether this is an absent optional.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Boolean payload, if any.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer payload, if any.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// Float payload, if any.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float64(f) => Some(*f),
            _ => None,
        }
    }

    /// Text of a string or URL value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::Url(s) => Some(s),
            _ => None,
        }
    }

    /// UUID payload, if any.
    pub fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            Self::Uuid(u) => Some(u),
            _ => None,
        }
    }

    /// Instant payload, if any.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Members of a list or set.
    pub fn as_array(&self) -> Option<&[MockValue]> {
        match self {
            Self::Array(values) | Self::Set(values) => Some(values),
            _ => None,
        }
    }

    /// Nested record payload, if any.
    pub fn as_record(&self) -> Option<&MockRecord> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }
}

/// One synthesized instance of a record model.
#[derive(Debug, Clone, PartialEq)]
pub struct MockRecord {
    /// Model name (empty for anonymous field lists)
    pub model: String,

    /// Index the instance was synthesized for
    pub index: u64,

    /// Field values in declaration order
    pub fields: IndexMap<String, MockValue>,
}

impl MockRecord {
    /// Create a new record.
    pub fn new(model: impl Into<String>, index: u64, fields: IndexMap<String, MockValue>) -> Self {
        Self {
            model: model.into(),
            index,
            fields,
        }
    }

    /// Get a field value by name.
    pub fn get_field(&self, name: &str) -> Option<&MockValue> {
        self.fields.get(name)
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }
}
