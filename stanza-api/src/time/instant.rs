//! This module implements an [`Instant`] with microsecond precision.

use core::num::NonZeroU64;
use core::ops::Add;

use super::Duration;

/// An Instant in time. Instants should be always increasing and are
/// generally obtainable through a [`Clock`][super::Clock].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant {
    micros: NonZeroU64,
}

impl Instant {
    /// The largest value that can be represented by the [`Instant`] type.
    pub const MAX: Instant = Instant {
        micros: NonZeroU64::MAX,
    };

    /// The smallest value that can be represented by the [`Instant`] type.
    ///
    /// Clocks count from here; it usually stands for the moment the device booted.
    pub const MIN: Instant = Instant {
        micros: NonZeroU64::MIN,
    };

    /// Returns the [`Duration`] since [`Instant::MIN`].
    ///
    /// Every instant is at least [`Instant::MIN`], so this never fails.
    pub const fn elapsed_since_min(&self) -> Duration {
        Duration::from_micros(self.micros.get() - Self::MIN.micros.get())
    }

    /// Adds one [`Duration`] to self, returning a new [`Instant`] or None in the event of an overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use stanza_api::time::{Duration, Instant};
    ///
    /// assert!(Instant::MIN.checked_add(Duration::from_millis(1)).unwrap() > Instant::MIN);
    /// assert_eq!(Instant::MAX.checked_add(Duration::from_millis(1)), None);
    /// ```
    pub fn checked_add(self, rhs: Duration) -> Option<Instant> {
        self.micros
            .checked_add(rhs.as_micros())
            .map(|micros| Instant { micros })
    }
}

impl Add<Duration> for Instant {
    type Output = Self;

    /// # Panics
    ///
    /// This function may panic if the resulting instant overflows. See [`Instant::checked_add`] for a version
    /// without panic.
    fn add(self, rhs: Duration) -> Self::Output {
        let Some(result) = self.checked_add(rhs) else {
            panic!("overflow when adding a duration to an instant");
        };

        result
    }
}
