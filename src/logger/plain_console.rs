//! Unformatted backend that forwards each message to the host console
//! channel for its severity.

use super::{LogEvent, Logger};
use crate::fmt::PayloadStyle;
use crate::level::Level;
use crate::output::{Sink, StderrSink, StdoutSink};

/// Host console channels, coarser than [`Level`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Error,
    Warn,
    Info,
    Debug,
}

impl Channel {
    /// Maps a raw level name to its channel. Unknown names use `Info`.
    #[must_use]
    pub fn for_level(level: &str) -> Self {
        match level.parse::<Level>() {
            Ok(Level::Emergency | Level::Alert | Level::Critical | Level::Error) => Self::Error,
            Ok(Level::Warning | Level::Notice) => Self::Warn,
            Ok(Level::Debug) => Self::Debug,
            Ok(Level::Info) | Err(_) => Self::Info,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// `error` and `warn` share the error stream.
    #[must_use]
    pub const fn is_error_stream(self) -> bool {
        matches!(self, Self::Error | Self::Warn)
    }
}

/// No timestamp, color, or placeholder substitution. The message and the
/// payload are two separate writes on the same channel.
pub struct PlainConsole {
    stdout: Box<dyn Sink>,
    stderr: Box<dyn Sink>,
}

impl Default for PlainConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PlainConsole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlainConsole").finish_non_exhaustive()
    }
}

impl PlainConsole {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stdout: Box::new(StdoutSink),
            stderr: Box::new(StderrSink),
        }
    }

    /// Redirects the standard and error streams, e.g. to [`crate::output::MemorySink`]s.
    #[must_use]
    pub fn with_sinks(stdout: impl Sink + 'static, stderr: impl Sink + 'static) -> Self {
        Self {
            stdout: Box::new(stdout),
            stderr: Box::new(stderr),
        }
    }

    fn sink_for(&self, channel: Channel) -> &dyn Sink {
        if channel.is_error_stream() {
            self.stderr.as_ref()
        } else {
            self.stdout.as_ref()
        }
    }
}

impl Logger for PlainConsole {
    fn emit(&self, event: LogEvent<'_>) {
        let sink = self.sink_for(Channel::for_level(event.level));

        let _ = sink.write(&format!("{}\n", event.message.body()));

        if let Some(payload) = &event.payload
            && let Ok(json) = PayloadStyle::Compact.render(payload)
        {
            let _ = sink.write(&format!("{json}\n"));
        }
    }

    fn flush(&self) {
        let _ = self.stdout.flush();
        let _ = self.stderr.flush();
    }
}
