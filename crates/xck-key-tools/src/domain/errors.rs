//! # Key Tools Errors
//!
//! Error kinds for key and address conversions. The public boundary
//! (`KeyToolsApi`) collapses these into a plain success/failure result; the
//! domain functions return them so callers and tests can see which check failed.

use thiserror::Error;

/// Errors that can occur while converting keys, hashes and addresses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyToolsError {
    /// Text input has the wrong number of characters
    #[error("Invalid length: {actual} characters")]
    InvalidLength { actual: usize },

    /// Decoded address payload is not a 32-byte puzzle hash
    #[error("Invalid payload length: {payload_len} bytes")]
    InvalidPayloadLength { payload_len: usize },

    /// Hex or bech32 syntax error (bad digit, odd length, bad checksum, bad padding)
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// A checksum variant other than bech32m was used
    #[error("Invalid bech32 variant: bech32m required")]
    InvalidVariant,

    /// Human-readable prefix is not a known network identifier
    #[error("Invalid address prefix: {0:?}")]
    InvalidPrefix(String),

    /// Deserialized G1 point failed the validity check
    #[error("Invalid G1 point")]
    InvalidPoint,

    /// Bytes do not form a usable BLS secret scalar
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Derivation index outside the range its role allows
    #[error("Invalid derivation index: {0}")]
    InvalidIndex(u32),

    /// A required input was absent
    #[error("Missing input")]
    MissingInput,
}

impl From<hex::FromHexError> for KeyToolsError {
    fn from(err: hex::FromHexError) -> Self {
        KeyToolsError::InvalidEncoding(err.to_string())
    }
}

impl From<bech32::Error> for KeyToolsError {
    fn from(err: bech32::Error) -> Self {
        KeyToolsError::InvalidEncoding(err.to_string())
    }
}
