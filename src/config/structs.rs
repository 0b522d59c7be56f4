//! Configuration struct definitions.

use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Route tintlog's own diagnostics to stderr.
    pub diagnostics: bool,
}

/// Terminal output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Color mode (auto, always, never).
    pub colors: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            colors: "auto".to_string(),
        }
    }
}

/// Additional-data block configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PayloadConfig {
    /// Block style (pretty, compact).
    pub style: String,
    /// Spaces per indentation level for the pretty style.
    pub indent: usize,
}

impl Default for PayloadConfig {
    fn default() -> Self {
        Self {
            style: "pretty".to_string(),
            indent: 2,
        }
    }
}
