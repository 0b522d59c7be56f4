//! In-process buffer sink.

use super::Sink;
use std::sync::{Arc, Mutex, PoisonError};

/// Records every write. Clones share the same buffer, so one handle can be
/// given to a logger while another inspects what was written.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    writes: Arc<Mutex<Vec<String>>>,
    color: bool,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `supports_color` report `enabled`, for exercising `ColorMode::Auto`.
    #[must_use]
    pub const fn with_color_support(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Each write as it was received.
    #[must_use]
    pub fn writes(&self) -> Vec<String> {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// All writes concatenated.
    #[must_use]
    pub fn contents(&self) -> String {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .concat()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    pub fn clear(&self) {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, text: &str) -> Result<(), crate::Error> {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_string());
        Ok(())
    }

    fn supports_color(&self) -> bool {
        self.color
    }
}
