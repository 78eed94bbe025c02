//! Fuzz target for hex public key parsing.
//!
//! Arbitrary strings and arbitrary 48-byte buffers must never panic, and a
//! parsed key must print back to the digits it was parsed from.

#![no_main]

use libfuzzer_sys::fuzz_target;
use xck_key_tools::{bytes_to_hex, hex_key_to_public_point, G1PublicKey, G1_SIZE};

/// Fuzz input structure for public key parsing.
#[derive(Debug, arbitrary::Arbitrary)]
struct HexKeyFuzzInput {
    /// Free-form text handed to the hex parser
    text: String,
    /// Raw compressed point candidate
    point_bytes: [u8; G1_SIZE],
    /// Whether to prepend "0x" to the hex of `point_bytes`
    prefixed: bool,
}

fuzz_target!(|input: HexKeyFuzzInput| {
    // Free text: any result is fine, panics are not
    let result = hex_key_to_public_point(&input.text);
    assert_eq!(result, hex_key_to_public_point(&input.text));

    // Well-formed hex: only the point check can fail
    let digits = bytes_to_hex(&input.point_bytes);
    let text = if input.prefixed {
        format!("0x{digits}")
    } else {
        digits.clone()
    };

    let parsed = hex_key_to_public_point(&text);
    assert_eq!(parsed.is_ok(), G1PublicKey::from_bytes(&input.point_bytes).is_ok());
    if let Ok(key) = parsed {
        assert_eq!(key.to_hex(), digits);
    }
});
