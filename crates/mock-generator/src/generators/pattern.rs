//! Symbol pattern expander.
//!
//! Pattern symbols:
//! - `A` - random uppercase Latin letter
//! - `X` - random decimal digit
//!
//! Every other character is copied verbatim, so the expansion always has
//! exactly as many characters as the pattern.

use crate::rng::SymbolSource;
use std::fmt;
use std::ops::RangeInclusive;

/// Symbol replaced by a random letter.
pub const LETTER_SYMBOL: char = 'A';

/// Symbol replaced by a random digit.
pub const DIGIT_SYMBOL: char = 'X';

/// Cyrillic blocks whose letters can pass for `A` and `X`.
const LOOKALIKE_RANGES: [RangeInclusive<char>; 4] = [
    // Cyrillic
    '\u{0400}'..='\u{04FF}',
    // Cyrillic Supplement
    '\u{0500}'..='\u{052F}',
    // Cyrillic Extended-A
    '\u{2DE0}'..='\u{2DFF}',
    // Cyrillic Extended-B
    '\u{A640}'..='\u{A69F}',
];

/// Advisory warning for a pattern containing look-alike characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookalikeDiagnostic {
    /// The offending pattern
    pub pattern: String,
    /// Field owning the pattern, when known
    pub field: Option<String>,
    /// Distinct look-alike characters in order of appearance
    pub characters: Vec<char>,
}

impl fmt::Display for LookalikeDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mask pattern '{}'", self.pattern)?;
        if let Some(field) = &self.field {
            write!(f, " on field '{field}'")?;
        }
        let codes: Vec<String> = self
            .characters
            .iter()
            .map(|c| format!("'{c}' (U+{:04X})", *c as u32))
            .collect();
        write!(
            f,
            " contains Cyrillic characters {}; they are copied as-is. Use Latin '{LETTER_SYMBOL}' and '{DIGIT_SYMBOL}' for symbols",
            codes.join(", ")
        )
    }
}

/// Check whether a character falls in one of the look-alike blocks.
pub fn is_lookalike(c: char) -> bool {
    LOOKALIKE_RANGES.iter().any(|range| range.contains(&c))
}

/// Distinct look-alike characters of `pattern`, in order of appearance.
pub fn detect_lookalikes(pattern: &str) -> Vec<char> {
    let mut found = Vec::new();
    for c in pattern.chars().filter(|c| is_lookalike(*c)) {
        if !found.contains(&c) {
            found.push(c);
        }
    }
    found
}

/// Build the diagnostic for `pattern`, if it contains look-alikes.
pub fn check_pattern(pattern: &str, field: Option<&str>) -> Option<LookalikeDiagnostic> {
    let characters = detect_lookalikes(pattern);
    if characters.is_empty() {
        return None;
    }
    Some(LookalikeDiagnostic {
        pattern: pattern.to_string(),
        field: field.map(str::to_string),
        characters,
    })
}

/// Expand a pattern, warning first if it contains look-alike characters.
pub fn expand_pattern<S: SymbolSource + ?Sized>(
    pattern: &str,
    source: &mut S,
    field: Option<&str>,
) -> String {
    if let Some(diagnostic) = check_pattern(pattern, field) {
        tracing::warn!("{}", diagnostic);
    }
    expand_symbols(pattern, source)
}

/// Substitute symbols without the look-alike check.
pub(crate) fn expand_symbols<S: SymbolSource + ?Sized>(pattern: &str, source: &mut S) -> String {
    pattern
        .chars()
        .map(|c| match c {
            LETTER_SYMBOL => source.letter(),
            DIGIT_SYMBOL => source.digit(),
            other => other,
        })
        .collect()
}
