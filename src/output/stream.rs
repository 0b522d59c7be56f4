//! Process standard output and standard error.

use super::Sink;
use std::io::{self, IsTerminal, Write};

/// Escapes only help when a human is watching; `NO_COLOR` opts out entirely.
fn color_allowed(is_terminal: bool) -> bool {
    is_terminal && std::env::var_os("NO_COLOR").is_none()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write(&self, text: &str) -> Result<(), crate::Error> {
        io::stdout().lock().write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        Ok(())
    }

    fn supports_color(&self) -> bool {
        color_allowed(io::stdout().is_terminal())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn write(&self, text: &str) -> Result<(), crate::Error> {
        io::stderr().lock().write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stderr().flush()?;
        Ok(())
    }

    fn supports_color(&self) -> bool {
        color_allowed(io::stderr().is_terminal())
    }
}
