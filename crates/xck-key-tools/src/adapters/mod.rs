//! # Adapters Layer
//!
//! Concrete implementations of the outbound ports.

pub mod sink;

pub use sink::TracingLineSink;
