//! Macros for one-shot log lines made of one or more parts.
//!
//! - `log!`: Generic logging macro that accepts a level
//! - `debug!`: Logs debug-level lines
//! - `info!`: Logs informational lines
//! - `warn!`: Logs warning lines
//! - `error!`: Logs error lines
//!
//! Every part may be of any type convertible into a [`Value`][crate::Value]. A single part is
//! written with [`LineLogger::log`][crate::LineLogger::log], several parts with
//! [`LineLogger::log_parts`][crate::LineLogger::log_parts].

/// Logs a line at the specified level.
///
/// # Examples
///
/// ```rust
/// use stanza::sink::FmtSink;
/// use stanza::{Level, LineLogger, Options, log};
///
/// let mut sink = FmtSink::new(heapless::String::<64>::new()).with_line_ending("\n");
/// let mut logger = LineLogger::new()
///     .with_options(Options::default().with_timestamp(false))
///     .with_sink(&mut sink);
///
/// let backoff = 250;
/// log!(logger, Level::Info, "Backoff", backoff, "ms");
/// log!(logger, Level::Warn, "Boot");
/// drop(logger);
///
/// assert_eq!(sink.get_ref().as_str(), "INFO: Backoff 250 ms\nWARN: Boot\n");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $message:expr $(,)?) => {
        $logger.log($level, $message)
    };
    ($logger:expr, $level:expr, $($part:expr),+ $(,)?) => {
        $logger.log_parts($level, &[$($crate::Value::from($part)),+])
    };
}

/// Logs a debug-level line.
///
/// ```rust
/// # let mut logger = stanza::LineLogger::new();
/// let address = 0x2000_u32;
/// stanza::debug!(logger, "flash erase at", address);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($part:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::Level::Debug, $($part),+)
    };
}

/// Logs an info-level line.
///
/// ```rust
/// # let mut logger = stanza::LineLogger::new();
/// stanza::info!(logger, "Backoff", 250, "ms");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($part:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::Level::Info, $($part),+)
    };
}

/// Logs a warn-level line.
///
/// ```rust
/// # let mut logger = stanza::LineLogger::new();
/// # let (status, backoff) = (503, 1_000);
/// stanza::warn!(logger, "HTTP", status, "retry in", backoff);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($part:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::Level::Warn, $($part),+)
    };
}

/// Logs an error-level line.
///
/// ```rust
/// # let mut logger = stanza::LineLogger::new();
/// stanza::error!(logger, "sensor offline");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($part:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::Level::Error, $($part),+)
    };
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::sink::FmtSink;
    use crate::{Level, LineLogger, Options};
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn macros_pick_single_or_multi_part_forms() {
        let mut sink = FmtSink::new(heapless::String::<256>::new()).with_line_ending("\n");
        let mut logger = LineLogger::new()
            .with_options(
                Options::default()
                    .with_timestamp(false)
                    .with_part_separator(", "),
            )
            .with_sink(&mut sink);

        let status = 503_u16;
        crate::log!(logger, Level::Info, "one");
        crate::log!(logger, Level::Info, "x", 5, "y",);
        crate::debug!(logger, "d", 'c', true);
        crate::info!(logger, "i");
        crate::warn!(logger, "HTTP", status, "retry in", 1.5);
        crate::error!(&mut logger, "e", -1);
        drop(logger);

        assert_eq!(
            sink.get_ref().as_str(),
            indoc! {"
                INFO: one
                INFO: x, 5, y
                DEBUG: d, c, true
                INFO: i
                WARN: HTTP, 503, retry in, 1.5
                ERROR: e, -1
            "}
        );
    }
}
