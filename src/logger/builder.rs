//! Stepwise construction of a [`ColorConsole`].

use super::{ColorConsole, ColorMode};
use crate::fmt::{Clock, PayloadStyle};
use crate::output::Sink;

/// Starts from [`ColorConsole::new`] defaults; every setter is optional.
#[derive(Debug, Default)]
pub struct ColorConsoleBuilder {
    output: ColorConsole,
}

impl ColorConsoleBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: ColorConsole::new(),
        }
    }

    /// Destination for non-error levels and unknown level names.
    #[must_use]
    pub fn stdout(mut self, sink: impl Sink + 'static) -> Self {
        self.output.stdout = Box::new(sink);
        self
    }

    /// Destination for error-classified levels.
    #[must_use]
    pub fn stderr(mut self, sink: impl Sink + 'static) -> Self {
        self.output.stderr = Box::new(sink);
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.output.clock = Box::new(clock);
        self
    }

    #[must_use]
    pub const fn colors(mut self, mode: ColorMode) -> Self {
        self.output.color_mode = mode;
        self
    }

    #[must_use]
    pub const fn payload_style(mut self, style: PayloadStyle) -> Self {
        self.output.payload_style = style;
        self
    }

    #[must_use]
    pub fn build(self) -> ColorConsole {
        self.output
    }
}
