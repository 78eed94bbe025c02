//! # End-to-End Flows
//!
//! Drives the service the way a farming client would: derive the local key,
//! print it, read it back, then move puzzle hashes between hex and address
//! form on both networks.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use xck_key_tools::{
        KeyLineSink, KeyToolsApi, KeyToolsConfig, KeyToolsService, Network, PrivateKey,
        PuzzleHash, ADDRESS_LENGTH, TESTNET_ADDRESS_LENGTH,
    };

    #[derive(Default)]
    struct CapturedLines(Mutex<Vec<String>>);

    impl CapturedLines {
        fn take(&self) -> Vec<String> {
            std::mem::take(&mut *self.0.lock().unwrap())
        }
    }

    impl KeyLineSink for CapturedLines {
        fn write_line(&self, line: &str) {
            self.0.lock().unwrap().push(line.to_string());
        }
    }

    fn service(network: Network) -> (Arc<CapturedLines>, KeyToolsService<Arc<CapturedLines>>) {
        let sink = Arc::new(CapturedLines::default());
        let config = KeyToolsConfig::default().with_network(network);
        (sink.clone(), KeyToolsService::new(sink, config))
    }

    #[test]
    fn test_seed_to_printed_local_key_flow() {
        let (sink, service) = service(Network::Mainnet);

        let master = PrivateKey::derive_master(&[7u8; 64]).unwrap();
        let local = service.master_sk_to_local_sk(&master);
        let public = local.public_key();

        service.print_private_key(&local);
        service.print_public_key(&public);

        let lines = sink.take();
        assert_eq!(lines.len(), 2);

        // Printed private key parses back to the same key
        let reparsed = PrivateKey::from_hex(&lines[0]).unwrap();
        assert_eq!(reparsed, local);

        // Printed public key parses back to the same point, with or without 0x
        assert_eq!(service.hex_key_to_public_point(&lines[1]), Some(public));
        assert_eq!(
            service.hex_key_to_public_point(&format!("0x{}", lines[1])),
            Some(public)
        );
    }

    #[test]
    fn test_local_key_differs_from_master() {
        let (_, service) = service(Network::Mainnet);
        let master = PrivateKey::derive_master(&[7u8; 32]).unwrap();
        let local = service.master_sk_to_local_sk(&master);

        assert_ne!(local, master);
        assert_ne!(local.public_key(), master.public_key());
    }

    #[test]
    fn test_hex_to_address_flow_mainnet() {
        let (_, service) = service(Network::Mainnet);
        let hex = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

        let hash = service.puzzle_hash_from_hex(hex).unwrap();
        let address = service.puzzle_hash_to_address(&hash);

        assert_eq!(address.len(), ADDRESS_LENGTH);
        assert_eq!(
            address,
            "xck1qqqsyqcyq5rqwzqfpg9scrgwpugpzysnzs23v9ccrydpk8qarc0st4rzcs"
        );
        assert_eq!(service.address_to_puzzle_hash(Some(&address)), Some(hash));
        assert_eq!(service.puzzle_hash_to_hex(&hash), hex);
    }

    #[test]
    fn test_hex_to_address_flow_testnet() {
        let (_, service) = service(Network::Testnet);
        let hex = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

        let hash = service.puzzle_hash_from_hex(hex).unwrap();
        let address = service.puzzle_hash_to_address(&hash);

        assert_eq!(address.len(), TESTNET_ADDRESS_LENGTH);
        assert_eq!(
            address,
            "txck1qqqsyqcyq5rqwzqfpg9scrgwpugpzysnzs23v9ccrydpk8qarc0sxjy5er"
        );
        assert_eq!(service.address_to_puzzle_hash(Some(&address)), Some(hash));
    }

    #[test]
    fn test_either_network_decodes_both_prefixes() {
        let (_, mainnet) = service(Network::Mainnet);
        let (_, testnet) = service(Network::Testnet);
        let hash = PuzzleHash::new(rand::random::<[u8; 32]>());

        let main_addr = mainnet.puzzle_hash_to_address(&hash);
        let test_addr = testnet.puzzle_hash_to_address(&hash);

        assert_eq!(testnet.address_to_puzzle_hash(Some(&main_addr)), Some(hash));
        assert_eq!(mainnet.address_to_puzzle_hash(Some(&test_addr)), Some(hash));
    }

    #[test]
    fn test_random_hashes_roundtrip() {
        let (_, service) = service(Network::Mainnet);
        for _ in 0..32 {
            let hash = PuzzleHash::new(rand::random::<[u8; 32]>());
            let address = service.puzzle_hash_to_address(&hash);
            assert!(service.is_valid_address(&address));
            assert_eq!(service.address_to_puzzle_hash(Some(&address)), Some(hash));
        }
    }
}
