//! Monotonic timestamps from `std::time`.

use std::sync::LazyLock;

pub use stanza_api::time::{Clock, Duration, Instant};

/// Implements the [`Clock`] trait for standard Rust.
///
/// Time is counted from the first call to [`Time::now`], so header timestamps start near zero like
/// a freshly booted device.
#[derive(Debug)]
pub struct Time;

impl Clock for Time {
    fn now() -> Instant {
        static EPOCH: LazyLock<std::time::Instant> = LazyLock::new(std::time::Instant::now);
        Instant::MIN
            + Duration::try_from(EPOCH.elapsed())
                .expect("time elapsed since start is less than 2^64-1 microseconds")
    }
}

#[cfg(all(test, not(miri)))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use stanza_api::time::{Clock, millis};

    use crate::time::Time;

    #[test]
    fn time_is_monotonic_and_starts_near_zero() {
        let a = millis::<Time>();
        assert!(a < 100);

        let sleep_time = 50;
        std::thread::sleep(std::time::Duration::from_millis(sleep_time));

        let b = millis::<Time>();
        assert!(b - a >= sleep_time);

        let earlier = Time::now();
        assert!(Time::now() >= earlier);
    }
}
