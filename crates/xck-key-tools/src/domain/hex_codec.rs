//! # Hex Codec
//!
//! Fixed-size byte buffer to hex string conversion shared by the key and
//! puzzle hash codecs. Output is always lowercase with no `0x` prefix.

use super::errors::KeyToolsError;

/// Encode `bytes` as `2 * bytes.len()` lowercase hex characters.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string of any even length.
///
/// # Errors
/// * `InvalidEncoding` on odd length or a non-hex character
pub fn hex_to_bytes(hex_str: &str) -> Result<Vec<u8>, KeyToolsError> {
    Ok(hex::decode(hex_str)?)
}

/// Decode a hex string into `out`, which must be exactly `hex_str.len() / 2`
/// bytes long.
///
/// Lengths are checked before anything is written; on error `out` is
/// untouched.
///
/// # Errors
/// * `InvalidEncoding` on odd length or a non-hex character
/// * `InvalidLength` (in hex digits) if the decoded size does not match `out`
pub fn hex_to_bytes_safe(hex_str: &str, out: &mut [u8]) -> Result<(), KeyToolsError> {
    let hex_len = hex_str.len();
    if hex_len % 2 != 0 {
        return Err(KeyToolsError::InvalidEncoding(format!(
            "odd number of hex digits: {hex_len}"
        )));
    }

    if hex_len / 2 != out.len() {
        return Err(KeyToolsError::InvalidLength { actual: hex_len });
    }

    // decode_to_slice writes as it goes, so reject bad digits first
    if let Some(index) = hex_str.bytes().position(|b| !b.is_ascii_hexdigit()) {
        return Err(KeyToolsError::InvalidEncoding(format!(
            "invalid hex character at index {index}"
        )));
    }

    hex::decode_to_slice(hex_str, out)?;
    Ok(())
}

/// Decode exactly `N` bytes from `2 * N` hex characters.
pub fn hex_to_array<const N: usize>(hex_str: &str) -> Result<[u8; N], KeyToolsError> {
    let mut out = [0u8; N];
    hex_to_bytes_safe(hex_str, &mut out)?;
    Ok(out)
}
