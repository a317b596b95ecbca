//! Opaque identifiers for outline nodes and XMind elements.
//!
//! Identifiers are random RFC4122 v4 GUIDs rendered as 32 lowercase hex
//! digits without separators. Generation needs no shared state, so every
//! call is independent and process-wide uniqueness follows from the 122
//! random bits.

use std::fmt::Write as FmtWrite;

/// Generate a random RFC4122 v4 GUID as raw 16 bytes
pub fn generate_guid_bytes() -> [u8; 16] {
    let mut bytes: [u8; 16] = rand::random();
    // RFC4122 v4
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    bytes
}

/// Generate a fresh identifier in the form `xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx`
pub fn generate_id() -> String {
    format_guid_hex(&generate_guid_bytes())
}

/// Format raw GUID bytes as 32 lowercase hex digits
pub fn format_guid_hex(bytes: &[u8; 16]) -> String {
    let mut out = String::with_capacity(32);
    for byte in bytes {
        // Writing into a String cannot fail
        let _ = write!(out, "{byte:02x}");
    }
    out
}
