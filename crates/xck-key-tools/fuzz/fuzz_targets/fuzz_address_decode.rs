//! Fuzz target for bech32m address decoding.
//!
//! Decoding must never panic, and anything that decodes must re-encode to
//! the same address for the network its prefix selected.

#![no_main]

use libfuzzer_sys::fuzz_target;
use xck_key_tools::{PuzzleHash, PUZZLE_HASH_SIZE};

/// Fuzz input structure for address decoding.
#[derive(Debug, arbitrary::Arbitrary)]
struct AddressFuzzInput {
    /// Free-form address candidate
    address: String,
    /// Puzzle hash to encode and decode
    hash_bytes: [u8; PUZZLE_HASH_SIZE],
    /// Encode for testnet instead of mainnet
    testnet: bool,
}

fuzz_target!(|input: AddressFuzzInput| {
    if let Ok((hash, network)) = PuzzleHash::decode_address(&input.address) {
        assert_eq!(
            hash.to_address(network),
            input.address.to_lowercase()
        );
    }

    let network = if input.testnet {
        xck_key_tools::Network::Testnet
    } else {
        xck_key_tools::Network::Mainnet
    };
    let hash = PuzzleHash::new(input.hash_bytes);
    let address = hash.to_address(network);
    assert_eq!(address.len(), network.address_length());
    assert_eq!(PuzzleHash::decode_address(&address), Ok((hash, network)));
});
