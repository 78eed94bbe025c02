//! # Puzzle Hash
//!
//! A 32-byte puzzle hash and its two text forms:
//! - bech32m address with a network prefix (`xck` mainnet, `txck` testnet)
//! - 64-digit lowercase hex
//!
//! ## Address Layout
//!
//! ```text
//! xck  1  <52 data symbols>  <6 checksum symbols>   = 62 chars
//! txck 1  <52 data symbols>  <6 checksum symbols>   = 63 chars
//! ```
//!
//! Only the bech32m checksum is accepted. A string that checks out under plain
//! bech32 is rejected even if everything else matches.

use std::fmt;
use std::str::FromStr;

use bech32::{ToBase32, Variant};
use serde::{Deserialize, Serialize};

use super::errors::KeyToolsError;
use super::hex_codec::{bytes_to_hex, hex_to_bytes_safe};

/// Puzzle hash size in bytes
pub const PUZZLE_HASH_SIZE: usize = 32;

/// Mainnet address length: 3 (hrp) + 1 (separator) + 52 (data) + 6 (checksum)
pub const ADDRESS_LENGTH: usize = 62;

/// Testnet address length: 4 (hrp) + 1 (separator) + 52 (data) + 6 (checksum)
pub const TESTNET_ADDRESS_LENGTH: usize = 63;

/// Longest address accepted by the decoder
pub const ADDRESS_MAX_LENGTH: usize = TESTNET_ADDRESS_LENGTH;

/// Mainnet human-readable prefix
pub const MAINNET_PREFIX: &str = "xck";

/// Testnet human-readable prefix
pub const TESTNET_PREFIX: &str = "txck";

// =============================================================================
// Network
// =============================================================================

/// Network an address belongs to, selected by its human-readable prefix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    /// Human-readable prefix for addresses on this network
    pub const fn prefix(self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_PREFIX,
            Network::Testnet => TESTNET_PREFIX,
        }
    }

    /// Exact address length on this network
    pub const fn address_length(self) -> usize {
        match self {
            Network::Mainnet => ADDRESS_LENGTH,
            Network::Testnet => TESTNET_ADDRESS_LENGTH,
        }
    }

    /// Look up the network whose prefix is exactly `hrp`
    pub fn from_prefix(hrp: &str) -> Result<Self, KeyToolsError> {
        match hrp {
            MAINNET_PREFIX => Ok(Network::Mainnet),
            TESTNET_PREFIX => Ok(Network::Testnet),
            other => Err(KeyToolsError::InvalidPrefix(other.to_string())),
        }
    }
}

impl FromStr for Network {
    type Err = KeyToolsError;

    /// Accepts network names (`mainnet`, `testnet`) and address prefixes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            other => Network::from_prefix(other),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("mainnet"),
            Network::Testnet => f.write_str("testnet"),
        }
    }
}

// =============================================================================
// PuzzleHash
// =============================================================================

/// 32-byte puzzle hash. Equality is byte-wise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PuzzleHash([u8; PUZZLE_HASH_SIZE]);

impl PuzzleHash {
    /// Wrap raw bytes
    pub const fn new(bytes: [u8; PUZZLE_HASH_SIZE]) -> Self {
        Self(bytes)
    }

    /// Raw bytes
    pub fn as_bytes(&self) -> &[u8; PUZZLE_HASH_SIZE] {
        &self.0
    }

    /// Decode a mainnet or testnet address.
    ///
    /// # Errors
    /// * `InvalidLength` if the address is not 62/63 characters
    /// * `InvalidPayloadLength` if the payload is not 32 bytes
    /// * `InvalidEncoding` on bech32 syntax, checksum or padding errors
    /// * `InvalidVariant` if the checksum is plain bech32
    /// * `InvalidPrefix` if the prefix is neither `xck` nor `txck`
    pub fn from_address(address: &str) -> Result<Self, KeyToolsError> {
        Self::decode_address(address).map(|(hash, _)| hash)
    }

    /// Decode an address, also returning the network its prefix selects.
    pub fn decode_address(address: &str) -> Result<(Self, Network), KeyToolsError> {
        let address_len = address.len();
        if address_len != ADDRESS_LENGTH && address_len != TESTNET_ADDRESS_LENGTH {
            return Err(KeyToolsError::InvalidLength {
                actual: address_len,
            });
        }

        let (hrp, data, variant) = bech32::decode(address)?;
        if variant != Variant::Bech32m {
            return Err(KeyToolsError::InvalidVariant);
        }

        let network = Network::from_prefix(&hrp)?;

        // Strict repack: leftover bits must be fewer than 5 and all zero
        let decoded = bech32::convert_bits(&data, 5, 8, false)?;
        let bytes: [u8; PUZZLE_HASH_SIZE] =
            decoded
                .as_slice()
                .try_into()
                .map_err(|_| KeyToolsError::InvalidPayloadLength {
                    payload_len: decoded.len(),
                })?;

        Ok((Self(bytes), network))
    }

    /// Encode as a bech32m address for `network`.
    pub fn to_address(&self, network: Network) -> String {
        bech32::encode(network.prefix(), self.0.to_base32(), Variant::Bech32m)
            .expect("valid hrp and payload")
    }

    /// Encode as a mainnet address
    pub fn to_address_string(&self) -> String {
        self.to_address(Network::Mainnet)
    }

    /// Parse exactly 64 hex digits; no `0x` prefix is accepted.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyToolsError> {
        if hex_str.len() != PUZZLE_HASH_SIZE * 2 {
            return Err(KeyToolsError::InvalidLength {
                actual: hex_str.len(),
            });
        }

        let mut bytes = [0u8; PUZZLE_HASH_SIZE];
        hex_to_bytes_safe(hex_str, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// 64 lowercase hex digits
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }
}

impl From<[u8; PUZZLE_HASH_SIZE]> for PuzzleHash {
    fn from(bytes: [u8; PUZZLE_HASH_SIZE]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for PuzzleHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for PuzzleHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
