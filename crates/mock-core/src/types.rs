//! Type shape descriptors for declared fields.
//!
//! A field's declared type arrives as plain text (`"[String: Int]"`, `"Array<User>?"`,
//! `"HashMap<String, Vec<u8>>"`). [`TypeDescriptor::parse`] turns that text into a
//! recursive descriptor that the synthesizer walks to pick a value rule.
//!
//! Parsing is total: text that matches no compound form becomes a
//! [`TypeDescriptor::Scalar`] holding the trimmed text.

use std::fmt;

/// Recursive structural description of a field's declared type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// Leaf primitive or user model type name
    Scalar(String),

    /// Optional value (`T?`, `Optional<T>`, `Option<T>`)
    Optional(Box<TypeDescriptor>),

    /// Ordered collection (`[T]`, `Array<T>`, `Vec<T>`)
    List(Box<TypeDescriptor>),

    /// Unordered unique collection (`Set<T>`, `HashSet<T>`, `BTreeSet<T>`)
    Set(Box<TypeDescriptor>),

    /// Key/value mapping (`[K: V]`, `Dictionary<K, V>`, `HashMap<K, V>`, `BTreeMap<K, V>`)
    Map {
        /// Key type
        key: Box<TypeDescriptor>,
        /// Value type
        value: Box<TypeDescriptor>,
    },
}

const OPTIONAL_WRAPPERS: &[&str] = &["Optional", "Option"];
const LIST_WRAPPERS: &[&str] = &["Array", "Vec"];
const SET_WRAPPERS: &[&str] = &["Set", "HashSet", "BTreeSet"];
const MAP_WRAPPERS: &[&str] = &["Dictionary", "HashMap", "BTreeMap"];

impl TypeDescriptor {
    /// Parse a textual type description. Never fails.
    pub fn parse(type_string: &str) -> Self {
        let text = type_string.trim();

        if let Some(inner) = text.strip_suffix('?') {
            if !inner.trim().is_empty() {
                return Self::optional(Self::parse(inner));
            }
        }

        if let Some(inner) = strip_generic(text, OPTIONAL_WRAPPERS) {
            return Self::optional(Self::parse(inner));
        }

        if let Some(inner) = strip_enclosing(text, '[', ']') {
            return match split_top_level(inner, ':') {
                Some((key, value)) => Self::map(Self::parse(key), Self::parse(value)),
                None => Self::list(Self::parse(inner)),
            };
        }

        if let Some(inner) = strip_generic(text, LIST_WRAPPERS) {
            return Self::list(Self::parse(inner));
        }

        if let Some(inner) = strip_generic(text, SET_WRAPPERS) {
            return Self::set(Self::parse(inner));
        }

        if let Some(inner) = strip_generic(text, MAP_WRAPPERS) {
            if let Some((key, value)) = split_top_level(inner, ',') {
                return Self::map(Self::parse(key), Self::parse(value));
            }
        }

        Self::Scalar(text.to_string())
    }

    /// Create a scalar descriptor.
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::Scalar(name.into())
    }

    /// Create an optional descriptor.
    pub fn optional(inner: TypeDescriptor) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Create a list descriptor.
    pub fn list(element: TypeDescriptor) -> Self {
        Self::List(Box::new(element))
    }

    /// Create a set descriptor.
    pub fn set(element: TypeDescriptor) -> Self {
        Self::Set(Box::new(element))
    }

    /// Create a map descriptor.
    pub fn map(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// The scalar type name, if this is a leaf.
    pub fn scalar_name(&self) -> Option<&str> {
        match self {
            Self::Scalar(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(name) => f.write_str(name),
            Self::Optional(inner) => write!(f, "Optional<{inner}>"),
            Self::List(element) => write!(f, "[{element}]"),
            Self::Set(element) => write!(f, "Set<{element}>"),
            Self::Map { key, value } => write!(f, "Dictionary<{key}, {value}>"),
        }
    }
}

impl From<&str> for TypeDescriptor {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// Return the contents of `open ... close` when the opening bracket at position 0
/// is matched by the final character.
fn strip_enclosing(text: &str, open: char, close: char) -> Option<&str> {
    let rest = text.strip_prefix(open)?;
    let inner = rest.strip_suffix(close)?;

    let mut depth = 1usize;
    for (pos, c) in rest.char_indices() {
        match c {
            c if c == open => depth += 1,
            c if c == close => {
                depth -= 1;
                if depth == 0 {
                    // The first bracket closed before the end of the text
                    return (pos == inner.len() && !inner.trim().is_empty()).then_some(inner);
                }
            }
            _ => {}
        }
    }
    None
}

/// Match `Name<...>` for any of the given wrapper names.
fn strip_generic<'a>(text: &'a str, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| {
        let rest = text.strip_prefix(name)?;
        strip_enclosing(rest.trim_start(), '<', '>')
    })
}

/// Split on the first occurrence of `separator` that is not nested inside
/// `<>`, `[]` or `()`. A `::` path separator never counts as a colon.
fn split_top_level(text: &str, separator: char) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    let mut chars = text.char_indices().peekable();
    while let Some((pos, c)) = chars.next() {
        match c {
            '<' | '[' | '(' => depth += 1,
            '>' | ']' | ')' => depth = depth.saturating_sub(1),
            ':' if separator == ':' && chars.peek().is_some_and(|&(_, next)| next == ':') => {
                chars.next();
            }
            c if c == separator && depth == 0 => {
                return Some((&text[..pos], &text[pos + c.len_utf8()..]));
            }
            _ => {}
        }
    }
    None
}
