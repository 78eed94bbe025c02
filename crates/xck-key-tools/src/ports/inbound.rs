//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.
//!
//! Conversions here report plain success or failure (`bool` / `Option`).
//! The failure kind is emitted as a `debug` event; callers that need it
//! directly use the domain functions, which return `KeyToolsError`.

use crate::domain::keys::{G1PublicKey, PrivateKey};
use crate::domain::puzzle_hash::{Network, PuzzleHash};

/// Primary Key Tools API.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait KeyToolsApi: Send + Sync {
    // =========================================================================
    // Key Conversion
    // =========================================================================

    /// Parse a hex G1 public key, optionally prefixed with `0x`.
    ///
    /// Returns `None` unless the result is a fully validated point.
    fn hex_key_to_public_point(&self, hex_key: &str) -> Option<G1PublicKey>;

    /// Derive the local key `m / 12381 / 8444 / 3 / 0` from a master key.
    fn master_sk_to_local_sk(&self, sk: &PrivateKey) -> PrivateKey;

    /// Write the hex of a public key as one line to the sink.
    fn print_public_key(&self, key: &G1PublicKey);

    /// Write the hex of a private key as one line to the sink.
    fn print_private_key(&self, key: &PrivateKey);

    // =========================================================================
    // Puzzle Hash
    // =========================================================================

    /// Decode a mainnet or testnet address. `None` input fails.
    fn address_to_puzzle_hash(&self, address: Option<&str>) -> Option<PuzzleHash>;

    /// `true` if `address` decodes to a puzzle hash.
    fn is_valid_address(&self, address: &str) -> bool {
        self.address_to_puzzle_hash(Some(address)).is_some()
    }

    /// Encode a puzzle hash for the configured network.
    fn puzzle_hash_to_address(&self, hash: &PuzzleHash) -> String;

    /// Encode a puzzle hash for an explicit network.
    fn puzzle_hash_to_network_address(&self, hash: &PuzzleHash, network: Network) -> String {
        hash.to_address(network)
    }

    /// Parse exactly 64 hex digits.
    fn puzzle_hash_from_hex(&self, hex_str: &str) -> Option<PuzzleHash>;

    /// 64 lowercase hex digits.
    fn puzzle_hash_to_hex(&self, hash: &PuzzleHash) -> String {
        hash.to_hex()
    }
}
