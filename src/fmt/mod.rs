//! Text production for log lines: colors, placeholder substitution,
//! timestamps, and payload blocks.

mod color;
mod payload;
pub mod template;
mod timestamp;

pub use color::{Color, ParseColorError, colorize, wrap};
pub use payload::{Payload, PayloadStyle};
pub use template::{render_value, substitute};
pub use timestamp::{Clock, FixedClock, SystemClock, format_time};
