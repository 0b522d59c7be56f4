//! What a caller hands to a log method: plain text, or a failure with an
//! optional trace.

use std::error::Error as StdError;
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Plain(String),
    /// An error value. `trace` is preferred over `text` when present and non-empty.
    Failure { text: String, trace: Option<String> },
}

impl Message {
    /// A failure with no trace.
    #[must_use]
    pub fn failure(text: impl Into<String>) -> Self {
        Self::Failure {
            text: text.into(),
            trace: None,
        }
    }

    /// Attaches a trace. A plain message becomes a failure whose text is the
    /// original message.
    #[must_use]
    pub fn with_trace(self, trace: impl Into<String>) -> Self {
        let text = match self {
            Self::Plain(text) | Self::Failure { text, .. } => text,
        };
        Self::Failure {
            text,
            trace: Some(trace.into()),
        }
    }

    /// Builds a failure from an error value. The text is the error's
    /// `Display`; when the error has a source chain, the trace lists the error
    /// followed by one `caused by:` line per source.
    #[must_use]
    pub fn from_error<E: StdError + ?Sized>(err: &E) -> Self {
        let text = err.to_string();
        let mut source = err.source();
        if source.is_none() {
            return Self::failure(text);
        }

        let mut trace = text.clone();
        while let Some(cause) = source {
            let _ = write!(trace, "\n    caused by: {cause}");
            source = cause.source();
        }

        Self::Failure {
            text,
            trace: Some(trace),
        }
    }

    /// The text that ends up on the log line.
    #[must_use]
    pub fn body(&self) -> &str {
        match self {
            Self::Plain(text) => text.as_str(),
            Self::Failure {
                trace: Some(trace), ..
            } if !trace.is_empty() => trace.as_str(),
            Self::Failure { text, .. } => text.as_str(),
        }
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}

impl From<&String> for Message {
    fn from(text: &String) -> Self {
        Self::Plain(text.clone())
    }
}
