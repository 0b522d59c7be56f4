//! `tintlog` - leveled logging facade with a colored console backend.
//!
//! Two interchangeable backends implement the same [`Logger`] surface:
//! - [`ColorConsole`]: `HH:MM:SS.mmm [level] message` lines, colored by
//!   level, with `{{name}}` placeholders filled from a [`Context`] and an
//!   optional JSON payload block
//! - [`PlainConsole`]: unformatted passthrough to the host console channel
//!
//! # Example
//!
//! ```
//! use tintlog::{ColorConsole, ColorMode, Context, Logger, MemorySink};
//!
//! let out = MemorySink::new();
//! let logger = ColorConsole::builder()
//!     .stdout(out.clone())
//!     .colors(ColorMode::Never)
//!     .build();
//!
//! logger.info("user {{name}} logged in", &Context::new().with("name", "ada"));
//! assert!(out.contents().ends_with("[info] user ada logged in\n\n"));
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod message;
pub mod output;

pub use config::Config;
pub use context::Context;
pub use error::Error;
pub use fmt::{Clock, Color, FixedClock, Payload, PayloadStyle, SystemClock, substitute};
pub use level::{Level, LevelSettings, lookup};
pub use logger::{
    Channel, ColorConsole, ColorConsoleBuilder, ColorMode, LogEvent, Logger, PlainConsole,
};
pub use message::Message;
pub use output::{MemorySink, Sink, StderrSink, StdoutSink};
