//! Destinations for rendered log text.
//!
//! Backends never talk to `std::io` directly; they write through a [`Sink`]
//! so that callers can redirect output (tests, embedding hosts) without
//! touching formatting code.

mod memory;
mod stream;

pub use memory::MemorySink;
pub use stream::{StderrSink, StdoutSink};

/// `Send + Sync` so a logger can be shared across threads without a lock
/// around the sink.
pub trait Sink: Send + Sync {
    /// Writes `text` exactly as given; no newline is appended.
    ///
    /// # Errors
    /// I/O errors from the underlying stream.
    fn write(&self, text: &str) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying stream.
    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }

    /// Whether ANSI escapes render on this destination. Consulted only when
    /// the logger's color mode is `Auto`.
    fn supports_color(&self) -> bool {
        false
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&self, text: &str) -> Result<(), crate::Error> {
        (**self).write(text)
    }

    fn flush(&self) -> Result<(), crate::Error> {
        (**self).flush()
    }

    fn supports_color(&self) -> bool {
        (**self).supports_color()
    }
}
