//! Severity levels and the static registry that maps each one to a display
//! color and a destination stream.
//!
//! Callers address levels by string at the `Logger::log` boundary, so the
//! registry is reachable both from the typed [`Level`] and from a raw name via
//! [`lookup`]. Unknown names are not an error: they resolve to
//! [`LevelSettings::default`].

use crate::fmt::Color;
use std::fmt;
use std::str::FromStr;

/// Derives `Ord` in declaration order, so `Level::Emergency < Level::Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// System is unusable.
    Emergency,
    /// Action must be taken immediately (site down, database unavailable).
    Alert,
    /// Critical conditions, e.g. an application component is unavailable.
    Critical,
    /// Runtime errors that should be logged and monitored.
    Error,
    /// Exceptional occurrences that are not errors (deprecated APIs, misuse).
    Warning,
    /// Normal but significant events.
    Notice,
    /// Interesting events, e.g. a user logs in.
    Info,
    /// Detailed debug information.
    Debug,
}

impl Level {
    /// The exact string key used by `Logger::log` and the `[level]` label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::Alert => "alert",
            Self::Critical => "critical",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Every level, most severe first.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::Emergency,
            Self::Alert,
            Self::Critical,
            Self::Error,
            Self::Warning,
            Self::Notice,
            Self::Info,
            Self::Debug,
        ]
    }

    /// Registry entry for this level. The match is exhaustive, so adding a
    /// level without settings fails to compile.
    #[must_use]
    pub const fn settings(self) -> LevelSettings {
        match self {
            Self::Emergency | Self::Alert | Self::Critical | Self::Error => {
                LevelSettings::new(Some(Color::Red), true)
            }
            Self::Warning | Self::Notice => LevelSettings::new(Some(Color::Yellow), false),
            Self::Info => LevelSettings::new(Some(Color::Blue), false),
            Self::Debug => LevelSettings::new(Some(Color::Cyan), false),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` for names outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Exact, case-sensitive: `"Info"` and `"warn"` are not levels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

/// How a level is displayed and where its lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelSettings {
    /// `None` leaves the timestamp and label unstyled.
    pub color: Option<Color>,
    /// Error-classified levels are written to the error sink.
    pub is_error_stream: bool,
}

impl LevelSettings {
    #[must_use]
    pub const fn new(color: Option<Color>, is_error_stream: bool) -> Self {
        Self {
            color,
            is_error_stream,
        }
    }
}

/// Resolves a raw level name against the registry. Names outside the fixed
/// set degrade to no color on the standard stream.
#[must_use]
pub fn lookup(level: &str) -> LevelSettings {
    level
        .parse::<Level>()
        .map_or_else(|_| LevelSettings::default(), Level::settings)
}
