use std::fs::File;
use std::io::{self, Write};
use std::sync::Mutex;

/// Byte destination shared by every handler derived from the same root.
///
/// Implementations only need `&self`, so a single sink can sit behind an
/// `Arc` and be written to from many handler snapshots at once. Handlers
/// never flush or close a sink; its lifetime belongs to whoever created it.
///
/// Each call is one write as seen by the handler. A record is produced by
/// several calls, so sinks shared between threads may interleave records
/// at call granularity unless the caller serializes logging above them.
pub trait LogSink: Send + Sync {
    /// Write all of `buf` or fail.
    ///
    /// **Returns**
    /// - `Ok(())` once every byte was accepted.
    /// - `Err(..)` with the underlying I/O error; the handler hands it
    ///   back to its caller unchanged and does not retry.
    fn write_all(&self, buf: &[u8]) -> io::Result<()>;
}

impl LogSink for io::Stdout {
    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        self.lock().write_all(buf)
    }
}

impl LogSink for io::Stderr {
    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        self.lock().write_all(buf)
    }
}

impl LogSink for File {
    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        let mut file: &File = self;
        Write::write_all(&mut file, buf)
    }
}

/// Adapts any [`Write`] into a [`LogSink`] by locking around each write.
///
/// Useful for in-memory buffers and for writers that are not `Sync`.
#[derive(Debug, Default)]
pub struct SharedWriter<W> {
    inner: Mutex<W>,
}

impl<W: Write + Send> SharedWriter<W> {
    pub fn new(inner: W) -> Self {
        SharedWriter { inner: Mutex::new(inner) }
    }

    /// Run `f` against the wrapped writer, e.g. to inspect a buffer.
    pub fn with_inner<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }

    pub fn into_inner(self) -> W {
        self.inner.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> LogSink for SharedWriter<W> {
    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        let mut guard = self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.write_all(buf)
    }
}

/// A sink that discards everything.
///
/// Handy for measuring formatting overhead and for tests that only care
/// about filtering.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn write_all(&self, _buf: &[u8]) -> io::Result<()> {
        Ok(())
    }
}
