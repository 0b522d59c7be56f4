//! `ColorConsole` construction from tintlog config files.

use super::{ColorConsole, ColorConsoleBuilder};
use crate::config::Config;
use crate::internal;

impl ColorConsole {
    /// Loads the default config file and builds a console from it. A missing
    /// or unreadable config yields the defaults.
    #[must_use]
    pub fn from_default_config() -> Self {
        internal::debug("LOGGER", "Building color console from default config");
        let config = Config::load().unwrap_or_else(|e| {
            internal::warn("LOGGER", &format!("Falling back to default config: {e}"));
            Config::default()
        });
        Self::from_config(&config)
    }

    /// Applies the `[terminal]` and `[payload]` sections; sinks and clock keep
    /// their process defaults.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let color_mode = config.parse_color_mode();
        let payload_style = config.parse_payload_style();
        internal::debug(
            "LOGGER",
            &format!(
                "Color console: colors={}, payload={payload_style:?}",
                color_mode.as_str()
            ),
        );

        ColorConsoleBuilder::new()
            .colors(color_mode)
            .payload_style(payload_style)
            .build()
    }
}
