//! Best-effort rendering of the additional data attached to a log call.
//!
//! Conversion to JSON happens when the payload is attached, rendering happens
//! when the line is composed; either step can fail, and both report failure as
//! a plain `Result` for the caller to discard.

use crate::error::Error;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

/// Additional data for one log call, already converted to a JSON value.
///
/// A conversion failure (non-string map keys, a `Serialize` impl that
/// refuses, cyclic structures detected by the impl) is kept and only shows up
/// as a missing block in the output.
#[derive(Debug)]
pub struct Payload(Result<Value, serde_json::Error>);

impl Payload {
    #[must_use]
    pub fn new<T: Serialize + ?Sized>(data: &T) -> Self {
        Self(serde_json::to_value(data))
    }

    #[must_use]
    pub const fn from_value(value: Value) -> Self {
        Self(Ok(value))
    }

    /// # Errors
    /// Returns [`Error::Format`] when the data could not be converted.
    pub fn value(&self) -> Result<&Value, Error> {
        self.0
            .as_ref()
            .map_err(|e| Error::Format(format!("payload conversion failed: {e}")))
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

/// Block layout for payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadStyle {
    /// Multi-line JSON indented by the given number of spaces.
    Pretty { indent: usize },
    /// Single-line JSON.
    Compact,
}

impl Default for PayloadStyle {
    fn default() -> Self {
        Self::Pretty { indent: 2 }
    }
}

impl PayloadStyle {
    /// Renders the payload as a text block.
    ///
    /// # Errors
    /// Returns [`Error::Format`] when the payload failed conversion or
    /// serialization.
    pub fn render(self, payload: &Payload) -> Result<String, Error> {
        let value = payload.value()?;
        match self {
            Self::Compact => Ok(serde_json::to_string(value)?),
            Self::Pretty { indent } => {
                let indent = " ".repeat(indent);
                let mut buf = Vec::new();
                let formatter = PrettyFormatter::with_indent(indent.as_bytes());
                let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
                value.serialize(&mut ser)?;
                String::from_utf8(buf).map_err(|e| Error::Format(e.to_string()))
            }
        }
    }
}
