//! This module implements a [`Duration`] with microsecond precision.

use core::num::TryFromIntError;

/// Duration represents a span of time since boot or between two [`Instant`][super::Instant]s.
///
/// Negative durations are not supported.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration {
    micros: u64,
}

impl Duration {
    /// A duration of zero time.
    pub const ZERO: Duration = Duration { micros: 0 };

    /// Factor of microseconds per millisecond.
    const MICROS_PER_MILLI: u64 = 1_000;

    /// Creates a duration from the specified number of milliseconds.
    pub const fn from_millis(millis: u64) -> Duration {
        Duration {
            micros: millis * Self::MICROS_PER_MILLI,
        }
    }

    /// Creates a duration from the specified number of microseconds.
    pub const fn from_micros(micros: u64) -> Duration {
        Duration { micros }
    }

    /// Returns the total amount of milliseconds, rounded down.
    ///
    /// # Examples
    ///
    /// ```
    /// use stanza_api::time::Duration;
    ///
    /// assert_eq!(Duration::from_micros(1_980_999).as_millis(), 1980);
    /// ```
    pub const fn as_millis(&self) -> u64 {
        self.micros / Self::MICROS_PER_MILLI
    }

    /// Returns the total amount of microseconds.
    pub const fn as_micros(&self) -> u64 {
        self.micros
    }
}

impl TryFrom<core::time::Duration> for Duration {
    type Error = TryFromIntError;

    /// Fails if `value` does not fit in 2^64-1 microseconds.
    fn try_from(value: core::time::Duration) -> Result<Self, Self::Error> {
        value.as_micros().try_into().map(Self::from_micros)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::Duration;
    use pretty_assertions::assert_eq;

    #[test]
    fn millis_round_down() {
        assert_eq!(Duration::from_millis(3).as_micros(), 3_000);
        assert_eq!(Duration::from_micros(2_999).as_millis(), 2);
    }

    #[test]
    fn converts_from_core() {
        assert_eq!(
            Duration::try_from(core::time::Duration::from_millis(3)),
            Ok(Duration::from_micros(3_000))
        );
        assert!(Duration::try_from(core::time::Duration::MAX).is_err());
    }
}
