//! tintlog's own diagnostic channel.
//!
//! Degraded paths (dropped payloads, config fallbacks) are reported here
//! instead of to the caller. The channel is a stderr [`ColorConsole`] that
//! only exists after [`init_with_config`] runs with `general.diagnostics`
//! enabled; every call before that, or with diagnostics off, does nothing.

use crate::config::Config;
use crate::context::Context;
use crate::level::Level;
use crate::logger::{ColorConsole, Logger};
use crate::output::StderrSink;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Option<ColorConsole>> = OnceLock::new();

/// Only the first call takes effect.
pub fn init_with_config(config: &Config) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| build_internal_logger(config));
    if !was_init {
        debug("INTERNAL", "Internal logger ready");
        debug(
            "INTERNAL",
            &format!(
                "Terminal: colors={}, payload={}",
                config.terminal.colors, config.payload.style
            ),
        );
    }
}

/// Whether diagnostics are currently being written.
#[must_use]
pub fn enabled() -> bool {
    matches!(INTERNAL_LOGGER.get(), Some(Some(_)))
}

fn build_internal_logger(config: &Config) -> Option<ColorConsole> {
    config.general.diagnostics.then(|| {
        // Diagnostics must never land on stdout, whatever the level.
        ColorConsole::builder()
            .stdout(StderrSink)
            .stderr(StderrSink)
            .colors(config.parse_color_mode())
            .build()
    })
}

fn log(level: Level, scope: &str, msg: &str) {
    if let Some(Some(logger)) = INTERNAL_LOGGER.get() {
        logger.log(level.as_str(), format!("{scope}: {msg}"), &Context::new());
    }
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warning, scope, msg);
}
