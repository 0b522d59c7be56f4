//! TOML configuration loading.
//!
//! Every section is `#[serde(default)]`, so an empty or partial file still
//! produces a usable config, and a missing file is treated as empty.

mod structs;

pub use structs::{GeneralConfig, PayloadConfig, TerminalConfig};

use crate::fmt::PayloadStyle;
use crate::internal;
use crate::logger::ColorMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub terminal: TerminalConfig,
    pub payload: PayloadConfig,
}

impl Config {
    /// Loads the config from the default location.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be
    /// read, or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let config_path = Self::get_config_path()?;
        let config = Self::load_from(&config_path)?;
        internal::info(
            "CONFIG",
            &format!("Config loaded from {}", config_path.display()),
        );
        Ok(config)
    }

    /// Loads configuration from an explicit path; `~` is expanded.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let path_str = path.to_string_lossy();
        let expanded = shellexpand::tilde(&path_str);
        let path = Path::new(expanded.as_ref());

        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses config text.
    ///
    /// # Errors
    /// Returns [`crate::Error::ConfigParse`] on invalid TOML or mistyped fields.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config dir>/tintlog/config.toml`, e.g. `~/.config/tintlog/config.toml` on Linux.
    ///
    /// # Errors
    /// Returns [`crate::Error::ConfigDirNotFound`] when no home directory is known.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "tintlog")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Unknown values fall back to [`ColorMode::Auto`].
    #[must_use]
    pub fn parse_color_mode(&self) -> ColorMode {
        self.terminal.colors.parse().unwrap_or_else(|e| {
            internal::warn("CONFIG", &format!("{e}, using auto"));
            ColorMode::Auto
        })
    }

    /// Unknown styles fall back to pretty printing.
    #[must_use]
    pub fn parse_payload_style(&self) -> PayloadStyle {
        match self.payload.style.to_lowercase().as_str() {
            "compact" => PayloadStyle::Compact,
            "pretty" => PayloadStyle::Pretty {
                indent: self.payload.indent,
            },
            other => {
                internal::warn(
                    "CONFIG",
                    &format!("unknown payload style '{other}', using pretty"),
                );
                PayloadStyle::Pretty {
                    indent: self.payload.indent,
                }
            }
        }
    }
}
