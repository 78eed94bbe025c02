//! # Domain Layer
//!
//! Pure key and address conversion logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod errors;
pub mod hex_codec;
pub mod keys;
pub mod puzzle_hash;
