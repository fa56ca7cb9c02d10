//! Schema definitions for the mockgen framework.
//!
//! This module defines the declaration side of synthesis: the records and
//! enumerations whose instances get generated, loaded from YAML.
//!
//! ## Type Hierarchy
//!
//! **Declaration types** (as written in the schema file):
//! - `FieldDeclaration` - Field name, type text, optional raw mask
//! - `RecordDefinition` - Record with ordered field declarations
//! - `EnumDefinition` - Enumeration with a fixed list of cases
//! - `MockSchema` - Full schema with records, enums and options
//!
//! **Resolved types** (built fresh per synthesis pass):
//! - `FieldDescriptor` - Field name, parsed `TypeDescriptor`, resolved `MaskDirective`

use crate::types::TypeDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Two models share a name
    #[error("Duplicate model name: {0}")]
    DuplicateModel(String),

    /// Two fields of one record share a name
    #[error("Duplicate field '{field}' in record '{record}'")]
    DuplicateField { record: String, field: String },

    /// Enumeration without cases
    #[error("Enum '{0}' declares no cases")]
    EmptyEnum(String),

    /// Option value that cannot be interpreted
    #[error("Invalid option '{option}': {reason}")]
    InvalidOption { option: String, reason: String },
}

// ============================================================================
// Mask Directives
// ============================================================================

/// Built-in mask identifiers, each backed by a fixed pattern template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinMask {
    /// `XXXX XXXX XXXX XXXX`
    CardNumber,
    /// `XX/XX`
    CardExpiry,
    /// `XX-XX-XXXX`
    Date,
    /// Country prefix, operator code, `XXX XX XX`
    PhoneRegion,
    /// 14 digits
    NationalId,
    /// `AAXXXXXXX`
    Passport,
}

impl BuiltinMask {
    /// All built-in masks.
    pub const ALL: [BuiltinMask; 6] = [
        Self::CardNumber,
        Self::CardExpiry,
        Self::Date,
        Self::PhoneRegion,
        Self::NationalId,
        Self::Passport,
    ];

    /// Canonical identifier as written in schema files.
    pub fn id(&self) -> &'static str {
        match self {
            Self::CardNumber => "card_number",
            Self::CardExpiry => "card_expiry",
            Self::Date => "date",
            Self::PhoneRegion => "phone_region",
            Self::NationalId => "national_id",
            Self::Passport => "passport",
        }
    }
}

impl fmt::Display for BuiltinMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BuiltinMask {
    type Err = String;

    /// Accepts both `card_number` and `cardNumber` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "cardnumber" => Ok(Self::CardNumber),
            "cardexpiry" => Ok(Self::CardExpiry),
            "date" => Ok(Self::Date),
            "phoneregion" => Ok(Self::PhoneRegion),
            "nationalid" => Ok(Self::NationalId),
            "passport" => Ok(Self::Passport),
            _ => Err(format!("unknown built-in mask: {s}")),
        }
    }
}

/// Instruction to replace default synthesis with a pattern-expanded string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskDirective {
    /// One of the built-in templates
    Builtin(BuiltinMask),
    /// A custom `A`/`X` pattern
    Custom(String),
}

impl MaskDirective {
    /// Create a custom pattern directive.
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::Custom(pattern.into())
    }

    /// Resolve a raw schema value into a directive.
    ///
    /// A string names a built-in; a mapping with a `pattern` key is a custom
    /// pattern. Anything else is treated as no mask at all.
    pub fn resolve(raw: &serde_yaml::Value) -> Option<Self> {
        let resolved = match raw {
            serde_yaml::Value::Null => return None,
            serde_yaml::Value::String(id) => id.parse().ok().map(Self::Builtin),
            serde_yaml::Value::Mapping(map) => match map.get("pattern") {
                Some(serde_yaml::Value::String(pattern)) => Some(Self::Custom(pattern.clone())),
                _ => None,
            },
            _ => None,
        };

        if resolved.is_none() {
            tracing::warn!("Ignoring unresolvable mask directive: {:?}", raw);
        }
        resolved
    }
}

// ============================================================================
// Declarations
// ============================================================================

/// Field as declared in a schema file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDeclaration {
    /// Field name
    pub name: String,

    /// Declared type text, parsed by [`TypeDescriptor::parse`]
    #[serde(rename = "type")]
    pub type_string: String,

    /// Raw mask directive, resolved by [`MaskDirective::resolve`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<serde_yaml::Value>,

    /// Computed fields hold no storage and are never synthesized
    #[serde(default)]
    pub computed: bool,

    /// Static fields belong to the type, not to instances
    #[serde(default, rename = "static")]
    pub is_static: bool,
}

impl FieldDeclaration {
    /// Create a stored field declaration without a mask.
    pub fn new(name: impl Into<String>, type_string: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_string: type_string.into(),
            mask: None,
            computed: false,
            is_static: false,
        }
    }

    /// Whether the field is stored per instance.
    pub fn is_stored(&self) -> bool {
        !self.computed && !self.is_static
    }

    /// Resolve this declaration into a descriptor.
    pub fn to_descriptor(&self) -> FieldDescriptor {
        FieldDescriptor {
            name: self.name.clone(),
            shape: TypeDescriptor::parse(&self.type_string),
            mask: self.mask.as_ref().and_then(MaskDirective::resolve),
        }
    }
}

/// Resolved field: name, parsed shape and optional mask.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Field name
    pub name: String,
    /// Parsed type shape
    pub shape: TypeDescriptor,
    /// Mask overriding default synthesis
    pub mask: Option<MaskDirective>,
}

impl FieldDescriptor {
    /// Create a descriptor by parsing `type_string`.
    pub fn new(name: impl Into<String>, type_string: &str) -> Self {
        Self {
            name: name.into(),
            shape: TypeDescriptor::parse(type_string),
            mask: None,
        }
    }

    /// Attach a mask directive.
    pub fn with_mask(mut self, mask: MaskDirective) -> Self {
        self.mask = Some(mask);
        self
    }
}

/// Record with ordered field declarations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDefinition {
    /// Record type name
    pub name: String,

    /// Whether the record is publicly visible. Metadata only.
    #[serde(default)]
    pub public: bool,

    /// Field declarations in declaration order
    pub fields: Vec<FieldDeclaration>,
}

impl RecordDefinition {
    /// Create a new record definition.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDeclaration>) -> Self {
        Self {
            name: name.into(),
            public: false,
            fields,
        }
    }

    /// Descriptors for stored fields only, in declaration order.
    pub fn stored_fields(&self) -> Vec<FieldDescriptor> {
        self.fields
            .iter()
            .filter(|f| f.is_stored())
            .map(FieldDeclaration::to_descriptor)
            .collect()
    }
}

/// Enumeration with a fixed, non-parameterized list of cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumDefinition {
    /// Enum type name
    pub name: String,

    /// Case names in declaration order
    pub cases: Vec<String>,
}

impl EnumDefinition {
    /// Create a new enum definition.
    pub fn new(name: impl Into<String>, cases: Vec<String>) -> Self {
        Self {
            name: name.into(),
            cases,
        }
    }

    /// The case selected for `index`, cycling through declaration order.
    pub fn case_at(&self, index: u64) -> Option<&str> {
        if self.cases.is_empty() {
            return None;
        }
        let position = (index % self.cases.len() as u64) as usize;
        self.cases.get(position).map(String::as_str)
    }
}

/// Synthesis options as written in the schema file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaOptions {
    /// Base instant for `Date` fields: RFC 3339, `YYYY-MM-DD`, or `now`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_base: Option<String>,

    /// Maximum nested-model depth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

/// Full schema: records, enums and generation defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockSchema {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Seed for masked and random values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// First index of a generated sequence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_index: Option<u64>,

    /// Synthesis options
    #[serde(default)]
    pub options: SchemaOptions,

    /// Record declarations
    #[serde(default)]
    pub records: Vec<RecordDefinition>,

    /// Enum declarations
    #[serde(default)]
    pub enums: Vec<EnumDefinition>,
}

fn default_version() -> u32 {
    1
}

impl MockSchema {
    /// Create a schema from declarations.
    pub fn new(records: Vec<RecordDefinition>, enums: Vec<EnumDefinition>) -> Self {
        Self {
            version: default_version(),
            seed: None,
            start_index: None,
            options: SchemaOptions::default(),
            records,
            enums,
        }
    }

    /// Parse and validate a schema from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let schema: Self = serde_yaml::from_str(yaml)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Load and validate a schema file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Check model and field name uniqueness and enum cases.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut models = HashSet::new();
        for name in self.model_names() {
            if !models.insert(name) {
                return Err(SchemaError::DuplicateModel(name.to_string()));
            }
        }

        for record in &self.records {
            let mut fields = HashSet::new();
            for field in &record.fields {
                if !fields.insert(field.name.as_str()) {
                    return Err(SchemaError::DuplicateField {
                        record: record.name.clone(),
                        field: field.name.clone(),
                    });
                }
            }
        }

        if let Some(empty) = self.enums.iter().find(|e| e.cases.is_empty()) {
            return Err(SchemaError::EmptyEnum(empty.name.clone()));
        }

        Ok(())
    }

    /// Get a record definition by name.
    pub fn get_record(&self, name: &str) -> Option<&RecordDefinition> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Get an enum definition by name.
    pub fn get_enum(&self, name: &str) -> Option<&EnumDefinition> {
        self.enums.iter().find(|e| e.name == name)
    }

    /// Names of all records and enums, records first.
    pub fn model_names(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.name.as_str())
            .chain(self.enums.iter().map(|e| e.name.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn test_yaml() -> &'static str {
        r#"
version: 1
seed: 7
start_index: 1
options:
  date_base: "2020-01-01T00:00:00Z"
  max_depth: 4
records:
  - name: User
    public: true
    fields:
      - name: name
        type: String
      - name: age
        type: Int
      - name: card
        type: String
        mask: cardNumber
      - name: code
        type: String
        mask:
          pattern: "AAA-XXXX"
      - name: display
        type: String
        computed: true
      - name: shared
        type: Int
        static: true
enums:
  - name: Role
    cases: [admin, member, guest]
"#
    }

    #[test]
    fn test_parse_schema() {
        let schema = MockSchema::from_yaml(test_yaml()).unwrap();
        assert_eq!(schema.seed, Some(7));
        assert_eq!(schema.start_index, Some(1));
        assert_eq!(schema.options.max_depth, Some(4));
        assert_eq!(schema.model_names(), vec!["User", "Role"]);

        let user = schema.get_record("User").unwrap();
        assert!(user.public);
        assert_eq!(user.fields.len(), 6);
        assert!(schema.get_enum("Role").is_some());
        assert!(schema.get_record("Role").is_none());
    }

    #[test]
    fn test_stored_fields_skip_computed_and_static() {
        let schema = MockSchema::from_yaml(test_yaml()).unwrap();
        let fields = schema.get_record("User").unwrap().stored_fields();

        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["name", "age", "card", "code"]);
        assert_eq!(fields[1].shape, TypeDescriptor::scalar("Int"));
        assert_eq!(
            fields[2].mask,
            Some(MaskDirective::Builtin(BuiltinMask::CardNumber))
        );
        assert_eq!(fields[3].mask, Some(MaskDirective::pattern("AAA-XXXX")));
    }

    #[test]
    fn test_builtin_spellings() {
        for mask in BuiltinMask::ALL {
            assert_eq!(mask.id().parse::<BuiltinMask>(), Ok(mask));
        }
        assert_eq!("phoneRegion".parse::<BuiltinMask>(), Ok(BuiltinMask::PhoneRegion));
        assert_eq!("nationalId".parse::<BuiltinMask>(), Ok(BuiltinMask::NationalId));
        assert!("iban".parse::<BuiltinMask>().is_err());
    }

    #[test]
    fn test_unresolvable_mask_is_absent() {
        let unknown = serde_yaml::Value::String("iban".to_string());
        assert_eq!(MaskDirective::resolve(&unknown), None);

        let number: serde_yaml::Value = serde_yaml::from_str("42").unwrap();
        assert_eq!(MaskDirective::resolve(&number), None);

        let no_pattern: serde_yaml::Value = serde_yaml::from_str("{ format: AAA }").unwrap();
        assert_eq!(MaskDirective::resolve(&no_pattern), None);
    }

    #[test]
    fn test_enum_case_cycles() {
        let role = EnumDefinition::new(
            "Role",
            vec!["admin".to_string(), "member".to_string(), "guest".to_string()],
        );
        assert_eq!(role.case_at(0), Some("admin"));
        assert_eq!(role.case_at(4), Some("member"));
        assert_eq!(role.case_at(5), role.case_at(8));
        assert_eq!(EnumDefinition::new("Empty", vec![]).case_at(3), None);
    }

    #[test]
    fn test_duplicate_model_rejected() {
        let yaml = r#"
records:
  - name: User
    fields: []
enums:
  - name: User
    cases: [a]
"#;
        assert!(matches!(
            MockSchema::from_yaml(yaml),
            Err(SchemaError::DuplicateModel(name)) if name == "User"
        ));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let yaml = r#"
records:
  - name: User
    fields:
      - { name: id, type: Int }
      - { name: id, type: String }
"#;
        assert!(matches!(
            MockSchema::from_yaml(yaml),
            Err(SchemaError::DuplicateField { .. })
        ));
    }

    #[test]
    fn test_empty_enum_rejected() {
        let yaml = r#"
enums:
  - name: Nothing
    cases: []
"#;
        assert!(matches!(
            MockSchema::from_yaml(yaml),
            Err(SchemaError::EmptyEnum(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(test_yaml().as_bytes()).unwrap();

        let schema = MockSchema::from_file(file.path()).unwrap();
        assert_eq!(schema.records.len(), 1);

        assert!(matches!(
            MockSchema::from_file("/nonexistent/schema.yaml"),
            Err(SchemaError::IoError(_))
        ));
    }
}
