//! # Key Tools Service
//!
//! Application service layer that implements the `KeyToolsApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`KeyToolsApi`)
//! - Uses the outbound port (`KeyLineSink`) for printed keys
//! - Delegates conversions to the domain layer
//!
//! Domain errors stop here: each failure is logged at `debug` with its kind
//! and the caller sees `None`.

use crate::adapters::TracingLineSink;
use crate::config::KeyToolsConfig;
use crate::domain::errors::KeyToolsError;
use crate::domain::keys::{self, G1PublicKey, PrivateKey};
use crate::domain::puzzle_hash::PuzzleHash;
use crate::ports::inbound::KeyToolsApi;
use crate::ports::outbound::KeyLineSink;

/// Key Tools Service.
///
/// Stateless apart from its configuration; safe to share between threads.
pub struct KeyToolsService<S: KeyLineSink> {
    sink: S,
    config: KeyToolsConfig,
}

impl<S: KeyLineSink> KeyToolsService<S> {
    /// Create a new key tools service.
    ///
    /// # Arguments
    /// * `sink` - Destination for printed key lines
    /// * `config` - Default network and logging settings
    pub fn new(sink: S, config: KeyToolsConfig) -> Self {
        Self { sink, config }
    }

    /// Active configuration
    pub fn config(&self) -> &KeyToolsConfig {
        &self.config
    }
}

impl KeyToolsService<TracingLineSink> {
    /// Service printing through `tracing`, configured from the environment.
    pub fn from_env() -> Self {
        Self::new(TracingLineSink::new(), KeyToolsConfig::from_env())
    }
}

impl<S: KeyLineSink> KeyToolsApi for KeyToolsService<S> {
    fn hex_key_to_public_point(&self, hex_key: &str) -> Option<G1PublicKey> {
        keys::hex_key_to_public_point(hex_key)
            .map_err(|e| reject("hex_key_to_public_point", hex_key.len(), &e))
            .ok()
    }

    fn master_sk_to_local_sk(&self, sk: &PrivateKey) -> PrivateKey {
        keys::master_sk_to_local_sk(sk)
    }

    fn print_public_key(&self, key: &G1PublicKey) {
        self.sink.write_line(&keys::public_key_to_hex(key));
    }

    fn print_private_key(&self, key: &PrivateKey) {
        self.sink.write_line(&keys::private_key_to_hex(key));
    }

    fn address_to_puzzle_hash(&self, address: Option<&str>) -> Option<PuzzleHash> {
        let Some(address) = address else {
            reject("address_to_puzzle_hash", 0, &KeyToolsError::MissingInput);
            return None;
        };

        PuzzleHash::from_address(address)
            .map_err(|e| reject("address_to_puzzle_hash", address.len(), &e))
            .ok()
    }

    fn puzzle_hash_to_address(&self, hash: &PuzzleHash) -> String {
        hash.to_address(self.config.network)
    }

    fn puzzle_hash_from_hex(&self, hex_str: &str) -> Option<PuzzleHash> {
        PuzzleHash::from_hex(hex_str)
            .map_err(|e| reject("puzzle_hash_from_hex", hex_str.len(), &e))
            .ok()
    }
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Record why a conversion failed. Input contents are never logged.
fn reject(operation: &'static str, input_len: usize, error: &KeyToolsError) {
    tracing::debug!(operation, input_len, error = %error, "conversion rejected");
}
