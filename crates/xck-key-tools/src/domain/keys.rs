//! # BLS Key Conversion (BLS12-381)
//!
//! Pure domain logic for BLS keys:
//! - Hex public key parsing into a validated G1 point
//! - EIP-2333 hierarchical derivation of role keys from a master key
//! - Fixed-size serialization for printing
//!
//! ## Implementation Details
//!
//! Public keys are on G1 (48 bytes compressed), secret keys are 32-byte
//! big-endian scalars. This uses blst's `min_pk` variant.
//!
//! Derivation paths follow EIP-2333/EIP-2334:
//! `m / 12381 / 8444 / role / index`, where 12381 is the BLS spec number and
//! 8444 the blockchain number (also its port).

use std::fmt;

use blst::min_pk::{PublicKey, SecretKey};
use blst::BLST_ERROR;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use super::errors::KeyToolsError;
use super::hex_codec::{bytes_to_hex, hex_to_array};

/// Compressed G1 point size in bytes
pub const G1_SIZE: usize = 48;

/// Serialized secret key size in bytes
pub const PRIVATE_KEY_SIZE: usize = 32;

/// First path index: the BLS12-381 spec number
pub const BLS_SPEC_NUMBER: u32 = 12381;

/// Second path index: blockchain number and port
pub const BLOCKCHAIN_NUMBER: u32 = 8444;

/// Pooling authentication leaves are `pool_wallet_index * 10000 + index`
const POOLING_AUTHENTICATION_STRIDE: u32 = 10_000;

/// Minimum seed length accepted by EIP-2333 master derivation
const MIN_SEED_LEN: usize = 32;

/// Role index at the third level of the derivation path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyRole {
    Farmer = 0,
    Pool = 1,
    Wallet = 2,
    Local = 3,
    Backup = 4,
    Singleton = 5,
    PoolingAuthentication = 6,
}

impl KeyRole {
    /// Index used for this role in the derivation path
    pub const fn index(self) -> u32 {
        self as u32
    }

    /// Full four-level path for this role and leaf index
    pub const fn path(self, leaf: u32) -> [u32; 4] {
        [BLS_SPEC_NUMBER, BLOCKCHAIN_NUMBER, self.index(), leaf]
    }
}

/// Path of the local key used by farming clients.
///
/// Changing any element yields a different, incompatible key.
pub const LOCAL_KEY_PATH: [u32; 4] = [12381, 8444, 3, 0];

// =============================================================================
// Public Key (G1)
// =============================================================================

/// BLS public key (G1 point, 48 bytes compressed).
///
/// Always holds a point that passed the subgroup check (the identity included),
/// or one computed from a secret key.
#[derive(Clone, Copy, Debug)]
pub struct G1PublicKey(PublicKey);

impl G1PublicKey {
    /// Deserialize and validate a compressed G1 point.
    ///
    /// # Errors
    /// * `InvalidPoint` if the bytes are not a compressed point on the curve
    ///   or are outside the prime-order subgroup
    ///
    /// The compressed identity (`c0` followed by zeros) is a valid G1 element
    /// and is accepted.
    pub fn from_bytes(bytes: &[u8; G1_SIZE]) -> Result<Self, KeyToolsError> {
        let point = PublicKey::from_bytes(bytes).map_err(|_| KeyToolsError::InvalidPoint)?;
        match point.validate() {
            Ok(()) | Err(BLST_ERROR::BLST_PK_IS_INFINITY) => Ok(Self(point)),
            Err(_) => Err(KeyToolsError::InvalidPoint),
        }
    }

    /// Serialize to 48-byte compressed form
    pub fn to_bytes(&self) -> [u8; G1_SIZE] {
        self.0.compress()
    }

    /// Lowercase hex of the compressed form
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.to_bytes())
    }
}

impl PartialEq for G1PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for G1PublicKey {}

impl fmt::Display for G1PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// =============================================================================
// Private Key (scalar)
// =============================================================================

/// BLS secret key (32-byte scalar).
#[derive(Clone)]
pub struct PrivateKey(SecretKey);

impl PrivateKey {
    /// Create from a 32-byte big-endian scalar.
    ///
    /// # Errors
    /// * `InvalidPrivateKey` if the scalar is zero or not below the group order
    pub fn from_bytes(bytes: &[u8; PRIVATE_KEY_SIZE]) -> Result<Self, KeyToolsError> {
        SecretKey::from_bytes(bytes)
            .map(PrivateKey)
            .map_err(|_| KeyToolsError::InvalidPrivateKey)
    }

    /// Parse exactly 64 hex characters (no `0x` prefix).
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyToolsError> {
        let bytes = Zeroizing::new(hex_to_array::<PRIVATE_KEY_SIZE>(hex_str)?);
        Self::from_bytes(&bytes)
    }

    /// EIP-2333 master key from a seed of at least 32 bytes.
    pub fn derive_master(seed: &[u8]) -> Result<Self, KeyToolsError> {
        if seed.len() < MIN_SEED_LEN {
            return Err(KeyToolsError::InvalidPrivateKey);
        }
        SecretKey::derive_master_eip2333(seed)
            .map(PrivateKey)
            .map_err(|_| KeyToolsError::InvalidPrivateKey)
    }

    /// EIP-2333 hardened child key. `self` is left unchanged.
    pub fn derive_child(&self, index: u32) -> PrivateKey {
        PrivateKey(self.0.derive_child_eip2333(index))
    }

    /// Matching G1 public key
    pub fn public_key(&self) -> G1PublicKey {
        G1PublicKey(self.0.sk_to_pk())
    }

    /// Serialize to 32 big-endian bytes, cleared on drop
    pub fn to_bytes(&self) -> Zeroizing<[u8; PRIVATE_KEY_SIZE]> {
        Zeroizing::new(self.0.to_bytes())
    }

    /// Lowercase hex of the serialized key, cleared on drop
    pub fn to_hex(&self) -> Zeroizing<String> {
        let bytes = self.to_bytes();
        Zeroizing::new(bytes_to_hex(&bytes[..]))
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        let ours = self.to_bytes();
        let theirs = other.to_bytes();
        ours[..].ct_eq(&theirs[..]).into()
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parse a hex G1 public key, optionally prefixed with `0x`.
///
/// The raw length (prefix included) is checked before the prefix is
/// stripped, so a 96-character string starting with `0x` is rejected.
///
/// # Errors
/// * `InvalidLength` if the digits are not exactly `G1_SIZE * 2` long
/// * `InvalidEncoding` on a non-hex digit
/// * `InvalidPoint` if the bytes do not form a valid G1 point
pub fn hex_key_to_public_point(hex_key: &str) -> Result<G1PublicKey, KeyToolsError> {
    if hex_key.len() < G1_SIZE * 2 {
        return Err(KeyToolsError::InvalidLength {
            actual: hex_key.len(),
        });
    }

    let digits = hex_key.strip_prefix("0x").unwrap_or(hex_key);
    if digits.len() != G1_SIZE * 2 {
        return Err(KeyToolsError::InvalidLength {
            actual: digits.len(),
        });
    }

    let bytes = hex_to_array::<G1_SIZE>(digits)?;
    G1PublicKey::from_bytes(&bytes)
}

/// Lowercase hex of a public key, as printed
pub fn public_key_to_hex(key: &G1PublicKey) -> String {
    key.to_hex()
}

/// Lowercase hex of a private key, as printed
pub fn private_key_to_hex(key: &PrivateKey) -> Zeroizing<String> {
    key.to_hex()
}

// =============================================================================
// Derivation
// =============================================================================

/// Apply EIP-2333 child derivation along `path`, starting from `sk`.
pub fn derive_path(sk: &PrivateKey, path: &[u32]) -> PrivateKey {
    path.iter()
        .fold(sk.clone(), |parent, &index| parent.derive_child(index))
}

/// Derive the local key: `m / 12381 / 8444 / 3 / 0`.
pub fn master_sk_to_local_sk(sk: &PrivateKey) -> PrivateKey {
    let ssk = sk.derive_child(BLS_SPEC_NUMBER);
    let ssk = ssk.derive_child(BLOCKCHAIN_NUMBER);
    let ssk = ssk.derive_child(KeyRole::Local.index());
    ssk.derive_child(0)
}

/// `m / 12381 / 8444 / 0 / 0`
pub fn master_sk_to_farmer_sk(sk: &PrivateKey) -> PrivateKey {
    derive_path(sk, &KeyRole::Farmer.path(0))
}

/// `m / 12381 / 8444 / 1 / 0`
pub fn master_sk_to_pool_sk(sk: &PrivateKey) -> PrivateKey {
    derive_path(sk, &KeyRole::Pool.path(0))
}

/// `m / 12381 / 8444 / 2 / index`
pub fn master_sk_to_wallet_sk(sk: &PrivateKey, index: u32) -> PrivateKey {
    derive_path(sk, &KeyRole::Wallet.path(index))
}

/// `m / 12381 / 8444 / 4 / 0`
pub fn master_sk_to_backup_sk(sk: &PrivateKey) -> PrivateKey {
    derive_path(sk, &KeyRole::Backup.path(0))
}

/// `m / 12381 / 8444 / 5 / pool_wallet_index`
pub fn master_sk_to_singleton_owner_sk(sk: &PrivateKey, pool_wallet_index: u32) -> PrivateKey {
    derive_path(sk, &KeyRole::Singleton.path(pool_wallet_index))
}

/// `m / 12381 / 8444 / 6 / (pool_wallet_index * 10000 + index)`
///
/// # Errors
/// * `InvalidIndex` if `index >= 10000` or the leaf does not fit in a `u32`
pub fn master_sk_to_pooling_authentication_sk(
    sk: &PrivateKey,
    pool_wallet_index: u32,
    index: u32,
) -> Result<PrivateKey, KeyToolsError> {
    if index >= POOLING_AUTHENTICATION_STRIDE {
        return Err(KeyToolsError::InvalidIndex(index));
    }

    let leaf = pool_wallet_index
        .checked_mul(POOLING_AUTHENTICATION_STRIDE)
        .and_then(|base| base.checked_add(index))
        .ok_or(KeyToolsError::InvalidIndex(pool_wallet_index))?;

    Ok(derive_path(
        sk,
        &KeyRole::PoolingAuthentication.path(leaf),
    ))
}
