//! Timestamp sources for line headers.
//!
//! The logger does not own a timer. It asks a [`Clock`] for the current [`Instant`] whenever it
//! writes a header and prints the elapsed milliseconds since [`Instant::MIN`], the boot-relative
//! "millis" convention serial consoles use.
//!
//! # Example
//!
//! ```rust
//! use stanza_api::time::{Clock, Duration, Instant};
//!
//! /// A board whose tick counter runs at 1 kHz.
//! struct Ticks;
//!
//! impl Clock for Ticks {
//!     fn now() -> Instant {
//!         # let ticks = 1_500;
//!         Instant::MIN + Duration::from_millis(ticks)
//!     }
//! }
//!
//! assert_eq!(stanza_api::time::millis::<Ticks>(), 1_500);
//! ```

mod duration;
mod instant;

pub use self::duration::Duration;
pub use self::instant::Instant;

/// `Clock` is used to read a monotonic time in a platform-agnostic manner.
pub trait Clock {
    /// Retrieves the current time.
    fn now() -> Instant;
}

/// Returns [`<C as Clock>::now`][Clock::now] converted into milliseconds since [`Instant::MIN`].
pub fn millis<C>() -> u64
where
    C: Clock,
{
    C::now().elapsed_since_min().as_millis()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::{Clock, Duration, Instant, millis};
    use pretty_assertions::assert_eq;

    struct Fixed;

    impl Clock for Fixed {
        fn now() -> Instant {
            Instant::MIN + Duration::from_micros(12_345_678)
        }
    }

    #[test]
    fn millis_counts_from_min() {
        assert_eq!(millis::<Fixed>(), 12_345);
        assert_eq!(Instant::MIN.elapsed_since_min(), Duration::ZERO);
    }
}
