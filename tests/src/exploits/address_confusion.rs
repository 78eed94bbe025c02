//! # Address Confusion
//!
//! Strings that look like addresses but must never decode to a puzzle hash:
//! wrong checksum variant, foreign prefixes, broken padding and payloads of
//! the wrong size.

#[cfg(test)]
mod tests {
    use bech32::{u5, ToBase32, Variant};
    use xck_key_tools::{
        KeyToolsApi, KeyToolsConfig, KeyToolsError, KeyToolsService, PuzzleHash, TracingLineSink,
    };

    fn service() -> KeyToolsService<TracingLineSink> {
        KeyToolsService::new(TracingLineSink::new(), KeyToolsConfig::default())
    }

    fn encode_symbols(hrp: &str, symbols: &[u8], variant: Variant) -> String {
        let data: Vec<u5> = symbols
            .iter()
            .map(|s| u5::try_from_u8(*s).unwrap())
            .collect();
        bech32::encode(hrp, data, variant).unwrap()
    }

    #[test]
    fn test_plain_bech32_checksum_rejected() {
        let address = bech32::encode("xck", [0u8; 32].to_base32(), Variant::Bech32).unwrap();
        assert_eq!(
            address,
            "xck1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqhacvat"
        );
        assert_eq!(
            PuzzleHash::from_address(&address),
            Err(KeyToolsError::InvalidVariant)
        );
        assert_eq!(service().address_to_puzzle_hash(Some(&address)), None);
    }

    #[test]
    fn test_foreign_prefix_rejected() {
        let address = "abc1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq5q2p3c";
        assert!(matches!(
            PuzzleHash::from_address(address),
            Err(KeyToolsError::InvalidPrefix(_))
        ));
        assert_eq!(service().address_to_puzzle_hash(Some(address)), None);
    }

    #[test]
    fn test_uppercase_accepted_mixed_case_rejected() {
        let hash = PuzzleHash::new([0u8; 32]);
        let upper = "XCK1QQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQZPGQCF";
        let mixed = "xck1QQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQZPGQCF";

        assert_eq!(PuzzleHash::from_address(upper), Ok(hash));
        assert!(matches!(
            PuzzleHash::from_address(mixed),
            Err(KeyToolsError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_nonzero_padding_rejected() {
        let mut symbols = vec![0u8; 52];
        symbols[51] = 1;
        let address = encode_symbols("xck", &symbols, Variant::Bech32m);
        assert_eq!(
            address,
            "xck1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqplhu49m"
        );
        assert!(matches!(
            PuzzleHash::from_address(&address),
            Err(KeyToolsError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_short_payload_with_valid_length_rejected() {
        // 51 symbols carry 255 bits: 31 bytes plus 7 leftover bits
        let address = encode_symbols("txck", &[0u8; 51], Variant::Bech32m);
        assert_eq!(
            address,
            "txck1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqt3suwg"
        );
        assert_eq!(address.len(), 62);
        assert!(matches!(
            PuzzleHash::from_address(&address),
            Err(KeyToolsError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_oversized_payload_rejected() {
        let address = bech32::encode("xck", [0u8; 33].to_base32(), Variant::Bech32m).unwrap();
        assert_eq!(
            address,
            "xck1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqquurem4"
        );
        assert_eq!(address.len(), 63);
        assert_eq!(
            PuzzleHash::from_address(&address),
            Err(KeyToolsError::InvalidPayloadLength { payload_len: 33 })
        );
    }

    #[test]
    fn test_wrong_lengths_rejected_before_decode() {
        let valid = "xck1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqzpgqcf";

        let short = &valid[..61];
        assert_eq!(
            PuzzleHash::from_address(short),
            Err(KeyToolsError::InvalidLength { actual: 61 })
        );

        let long = format!("{valid}qq");
        assert_eq!(
            PuzzleHash::from_address(&long),
            Err(KeyToolsError::InvalidLength { actual: 64 })
        );

        assert_eq!(
            PuzzleHash::from_address(""),
            Err(KeyToolsError::InvalidLength { actual: 0 })
        );
    }

    #[test]
    fn test_flipped_checksum_symbol_rejected() {
        let mut address = PuzzleHash::new([0x42; 32]).to_address_string().into_bytes();
        let last = address.len() - 1;
        address[last] = if address[last] == b'q' { b'p' } else { b'q' };
        let address = String::from_utf8(address).unwrap();

        assert!(matches!(
            PuzzleHash::from_address(&address),
            Err(KeyToolsError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_missing_address_rejected() {
        assert_eq!(service().address_to_puzzle_hash(None), None);
        assert!(!service().is_valid_address(""));
    }
}
