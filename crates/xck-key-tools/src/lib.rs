//! # XCK Key Tools
//!
//! Conversions between BLS key material, hex strings and bech32m puzzle hash
//! addresses, plus the fixed EIP-2333 path that turns a master key into the
//! local key used by farming clients.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure conversion logic, no I/O
//! - **Ports Layer** (`ports/`): Trait definitions for inbound/outbound interfaces
//! - **Adapters Layer** (`adapters/`): `tracing`-backed line sink
//! - **Service Layer** (`service.rs`): Wires domain logic to ports
//!
//! ## Formats
//!
//! | Value | Text form |
//! |-------|-----------|
//! | G1 public key | 96 hex digits, optional `0x` on input |
//! | Private key | 64 hex digits |
//! | Puzzle hash | 64 hex digits, or a 62-char `xck1…` / 63-char `txck1…` bech32m address |
//!
//! ## Security Notes
//!
//! - **Bit-exact derivation**: the local key path `12381/8444/3/0` is fixed;
//!   any change yields a different key for every existing address
//! - **No unchecked points**: parsed public keys always pass the subgroup check
//! - **Secret hygiene**: private key bytes and hex are zeroized on drop and
//!   never appear in `Debug` output or logs

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;
pub mod telemetry;

// Re-export public API
pub use adapters::TracingLineSink;
pub use config::KeyToolsConfig;
pub use domain::errors::KeyToolsError;
pub use domain::hex_codec::{bytes_to_hex, hex_to_array, hex_to_bytes, hex_to_bytes_safe};
pub use domain::keys::{
    derive_path, hex_key_to_public_point, master_sk_to_backup_sk, master_sk_to_farmer_sk,
    master_sk_to_local_sk, master_sk_to_pool_sk, master_sk_to_pooling_authentication_sk,
    master_sk_to_singleton_owner_sk, master_sk_to_wallet_sk, private_key_to_hex,
    public_key_to_hex, G1PublicKey, KeyRole, PrivateKey, G1_SIZE, LOCAL_KEY_PATH,
    PRIVATE_KEY_SIZE,
};
pub use domain::puzzle_hash::{
    Network, PuzzleHash, ADDRESS_LENGTH, ADDRESS_MAX_LENGTH, PUZZLE_HASH_SIZE,
    TESTNET_ADDRESS_LENGTH,
};
pub use ports::inbound::KeyToolsApi;
pub use ports::outbound::KeyLineSink;
pub use service::KeyToolsService;
pub use telemetry::{init_logging, TelemetryError};
