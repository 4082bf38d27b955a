//! Time abstraction traits for platform-agnostic timing.

use crate::types::ClockError;

/// Trait for abstracting time sources.
///
/// A time source provides two views of time: a monotonic instant used for all
/// duration math, and the local wall-clock time used by the clock faces.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current monotonic instant.
    fn now(&self) -> I;

    /// Returns the current local time of day.
    fn wall_time(&self) -> WallTime;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Milliseconds elapsed between two instants.
#[inline]
pub(crate) fn millis_between<I: TimeInstant>(earlier: I, later: I) -> u64 {
    later.duration_since(earlier).as_millis()
}

/// A validated local time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl WallTime {
    /// Creates a wall time, rejecting out-of-range fields.
    ///
    /// # Errors
    /// * `InvalidWallTime` - hour > 23, minute > 59 or second > 59
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, ClockError> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(ClockError::InvalidWallTime);
        }

        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Hour of day, 0-23.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute within the hour, 0-59.
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Second within the minute, 0-59.
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Hour on a 12-hour dial, 1-12.
    pub fn twelve_hour(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            hour => hour,
        }
    }
}
