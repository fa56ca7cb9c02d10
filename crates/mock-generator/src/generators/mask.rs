//! Built-in mask templates and mask directive expansion.

use super::pattern::{expand_pattern, expand_symbols};
use crate::rng::SymbolSource;
use mock_core::{BuiltinMask, MaskDirective};

/// Country prefix of generated phone numbers.
pub const PHONE_COUNTRY_PREFIX: &str = "+375";

/// Operator codes a phone number is drawn from.
pub const PHONE_OPERATOR_CODES: [&str; 4] = ["25", "29", "33", "44"];

/// Subscriber part of a phone number.
pub const PHONE_SUBSCRIBER_PATTERN: &str = "XXX XX XX";

/// Literal pattern template of a built-in mask.
///
/// `PhoneRegion` has no single template since its operator code is chosen
/// from [`PHONE_OPERATOR_CODES`].
pub fn builtin_template(mask: BuiltinMask) -> Option<&'static str> {
    match mask {
        BuiltinMask::CardNumber => Some("XXXX XXXX XXXX XXXX"),
        BuiltinMask::CardExpiry => Some("XX/XX"),
        BuiltinMask::Date => Some("XX-XX-XXXX"),
        BuiltinMask::NationalId => Some("XXXXXXXXXXXXXX"),
        BuiltinMask::Passport => Some("AAXXXXXXX"),
        BuiltinMask::PhoneRegion => None,
    }
}

/// Expand a built-in mask.
pub fn expand_builtin<S: SymbolSource + ?Sized>(mask: BuiltinMask, source: &mut S) -> String {
    match builtin_template(mask) {
        Some(template) => expand_symbols(template, source),
        None => {
            // Custom sources may pick out of range
            let position = source.pick(PHONE_OPERATOR_CODES.len()) % PHONE_OPERATOR_CODES.len();
            let operator = PHONE_OPERATOR_CODES[position];
            let subscriber = expand_symbols(PHONE_SUBSCRIBER_PATTERN, source);
            format!("{PHONE_COUNTRY_PREFIX} {operator} {subscriber}")
        }
    }
}

/// Expand any mask directive. `field` names the owner in diagnostics.
pub fn expand_mask<S: SymbolSource + ?Sized>(
    directive: &MaskDirective,
    source: &mut S,
    field: Option<&str>,
) -> String {
    match directive {
        MaskDirective::Builtin(mask) => expand_builtin(*mask, source),
        MaskDirective::Custom(pattern) => expand_pattern(pattern, source, field),
    }
}
