//! Sink trait for rendered output destinations

use std::io;

/// Destination for fully rendered records
///
/// Handlers derived from one root share a single sink, so implementations
/// must make each `write_all` call land as one uninterrupted write.
pub trait Sink: Send + Sync {
    fn write_all(&self, buf: &[u8]) -> io::Result<()>;
    fn flush(&self) -> io::Result<()>;
    fn name(&self) -> &str;
}
