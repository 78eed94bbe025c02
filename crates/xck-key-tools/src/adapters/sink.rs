//! Line sink backed by `tracing`.

use crate::ports::outbound::KeyLineSink;

/// Emits each line as an `info` event on the `xck_key_tools::keys` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLineSink;

impl TracingLineSink {
    pub fn new() -> Self {
        Self
    }
}

impl KeyLineSink for TracingLineSink {
    fn write_line(&self, line: &str) {
        tracing::info!(target: "xck_key_tools::keys", "{}", line);
    }
}
