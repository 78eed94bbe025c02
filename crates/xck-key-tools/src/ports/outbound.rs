//! # Outbound Ports (Driven Ports)
//!
//! Dependencies the key tools service needs from the outside world.

/// Destination for printed key lines.
///
/// Implementations must be thread-safe (`Send + Sync`). Nothing is returned:
/// a sink that cannot write drops the line.
pub trait KeyLineSink: Send + Sync {
    /// Emit one formatted line of text
    fn write_line(&self, line: &str);
}

impl<T: KeyLineSink + ?Sized> KeyLineSink for &T {
    fn write_line(&self, line: &str) {
        (**self).write_line(line)
    }
}

impl<T: KeyLineSink + ?Sized> KeyLineSink for std::sync::Arc<T> {
    fn write_line(&self, line: &str) {
        (**self).write_line(line)
    }
}
