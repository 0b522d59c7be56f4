//! Timestamped, level-colored console output with placeholder substitution.
//!
//! Line layout:
//!
//! ```text
//! <HH:MM:SS.mmm> [<level>] <message>
//! <optional payload block>
//!
//! ```
//!
//! The trailing blank line is always present. The whole entry, payload
//! included, goes out in a single sink write.

use super::{LogEvent, Logger};
use crate::fmt::{self, Clock, PayloadStyle, SystemClock};
use crate::internal;
use crate::level;
use crate::output::{Sink, StderrSink, StdoutSink};
use std::str::FromStr;

/// When the timestamp and label get ANSI escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Ask the destination sink.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        }
    }

    fn enabled_for(self, sink: &dyn Sink) -> bool {
        match self {
            Self::Auto => sink.supports_color(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

impl FromStr for ColorMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" | "on" | "true" => Ok(Self::Always),
            "never" | "off" | "false" => Ok(Self::Never),
            _ => Err(crate::Error::Format(format!("unknown color mode: '{s}'"))),
        }
    }
}

/// Console backend that colors by level and routes error-classified levels
/// to the error sink.
pub struct ColorConsole {
    pub(super) stdout: Box<dyn Sink>,
    pub(super) stderr: Box<dyn Sink>,
    pub(super) clock: Box<dyn Clock>,
    pub(super) color_mode: ColorMode,
    pub(super) payload_style: PayloadStyle,
}

impl Default for ColorConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ColorConsole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorConsole")
            .field("color_mode", &self.color_mode)
            .field("payload_style", &self.payload_style)
            .finish_non_exhaustive()
    }
}

impl ColorConsole {
    /// Process stdout/stderr, local wall clock, auto color, 2-space payloads.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stdout: Box::new(StdoutSink),
            stderr: Box::new(StderrSink),
            clock: Box::new(SystemClock),
            color_mode: ColorMode::Auto,
            payload_style: PayloadStyle::default(),
        }
    }

    #[must_use]
    pub fn builder() -> super::ColorConsoleBuilder {
        super::ColorConsoleBuilder::new()
    }

    #[must_use]
    pub const fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    #[must_use]
    pub const fn payload_style(&self) -> PayloadStyle {
        self.payload_style
    }

    /// Renders the complete entry for `event`, trailing blank line included.
    /// `colors` decides whether registered level colors are applied.
    #[must_use]
    pub fn format(&self, event: &LogEvent<'_>, colors: bool) -> String {
        let settings = level::lookup(event.level);
        let body = event.message.body();
        let body = event
            .context
            .map_or_else(|| body.to_string(), |context| fmt::substitute(body, context));
        let time = fmt::format_time(self.clock.now());
        let tag = format!("[{}]", event.level);

        let (time, tag) = match settings.color {
            Some(color) if colors => (fmt::colorize(&time, color), fmt::colorize(&tag, color)),
            _ => (time, tag),
        };

        let mut line = format!("{time} {tag} {body}");

        if let Some(payload) = &event.payload {
            match self.payload_style.render(payload) {
                Ok(block) => {
                    line.push('\n');
                    line.push_str(&block);
                }
                Err(e) => internal::debug("PAYLOAD", &format!("Payload omitted: {e}")),
            }
        }

        line.push_str("\n\n");
        line
    }
}

impl Logger for ColorConsole {
    fn emit(&self, event: LogEvent<'_>) {
        let sink: &dyn Sink = if level::lookup(event.level).is_error_stream {
            self.stderr.as_ref()
        } else {
            self.stdout.as_ref()
        };

        let line = self.format(&event, self.color_mode.enabled_for(sink));
        let _ = sink.write(&line);
    }

    fn flush(&self) {
        let _ = self.stdout.flush();
        let _ = self.stderr.flush();
    }
}
