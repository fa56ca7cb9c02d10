//! UUID value generator.

use crate::rng::SymbolSource;
use mock_core::MockValue;
use uuid::Uuid;

/// Generate a random UUID v4 using the provided source.
pub fn generate_uuid_v4<S: SymbolSource + ?Sized>(source: &mut S) -> MockValue {
    let mut bytes = source.fill_bytes16();

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40; // Version 4
    bytes[8] = (bytes[8] & 0x3f) | 0x80; // Variant RFC 4122

    MockValue::Uuid(Uuid::from_bytes(bytes))
}
