//! Wall-clock access and the `HH:MM:SS.mmm` line prefix.

use chrono::{Local, NaiveTime};

/// Source of the current local time of day.
///
/// Tests substitute [`FixedClock`] so rendered lines are deterministic.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveTime;
}

/// Reads the host's local time through chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveTime);

impl FixedClock {
    #[must_use]
    pub const fn new(time: NaiveTime) -> Self {
        Self(time)
    }

    /// Returns `None` when any field is out of range.
    #[must_use]
    pub fn from_hms_milli(hours: u32, minutes: u32, seconds: u32, millis: u32) -> Option<Self> {
        NaiveTime::from_hms_milli_opt(hours, minutes, seconds, millis).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

/// 24-hour `HH:MM:SS.mmm`, every field zero padded.
#[must_use]
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M:%S%.3f").to_string()
}
