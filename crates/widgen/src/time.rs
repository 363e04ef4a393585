use crate::Error;
use std::time::{SystemTime, UNIX_EPOCH};

/// Timestamp precision for the identifier's calendar prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TimeUnit {
    /// Seconds since the Unix epoch; 15-character prefix.
    Sec,
    /// Milliseconds since the Unix epoch; 18-character prefix.
    Ms,
}

impl TimeUnit {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sec => "sec",
            Self::Ms => "ms",
        }
    }

    /// Width of the calendar prefix in characters.
    pub(crate) const fn timestamp_len(self) -> usize {
        match self {
            Self::Sec => 15,
            Self::Ms => 18,
        }
    }
}

impl core::str::FromStr for TimeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sec" => Ok(Self::Sec),
            "ms" => Ok(Self::Ms),
            _ => Err(Error::InvalidParameter("time unit must be \"sec\" or \"ms\"")),
        }
    }
}

/// A trait for wall-clock sources that return the current tick.
///
/// This abstraction allows you to plug in the real system clock or a mocked
/// time source in tests. Ticks are the integer value of the wall clock in
/// the requested unit since the Unix epoch.
///
/// # Example
///
/// ```
/// use widgen::{TimeSource, TimeUnit};
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn now_tick(&self, _unit: TimeUnit) -> i64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.now_tick(TimeUnit::Sec), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current wall-clock tick in `unit`.
    fn now_tick(&self, unit: TimeUnit) -> i64;
}

/// The system wall clock.
///
/// May jump backward under NTP adjustment; generators compensate by never
/// letting their emitted tick regress.
#[derive(Debug, Default, Clone, Copy)]
pub struct WallClock;

impl TimeSource for WallClock {
    fn now_tick(&self, unit: TimeUnit) -> i64 {
        let dur = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        match unit {
            TimeUnit::Sec => dur.as_secs() as i64,
            TimeUnit::Ms => dur.as_millis() as i64,
        }
    }
}
