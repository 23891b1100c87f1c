//! Forwarding of [`log`] facade records into the global logger.
//!
//! Crates that log through `log::info!` and friends end up on the same lines, headers and filter
//! as direct calls once [`init`] has run and a [`global`][crate::global] logger is installed.

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::{Level, global};

static LOGGER: GlobalLogger = GlobalLogger(());

/// Implements [`log::Log`] on top of the [`global`][crate::global] logger.
#[derive(Debug)]
pub struct GlobalLogger(());

impl Log for GlobalLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let level = level_from_log(metadata.level());
        global::with(|logger| logger.can_emit(level)).unwrap_or(false)
    }

    fn log(&self, record: &Record) {
        let level = level_from_log(record.level());
        global::with(|logger| logger.log(level, *record.args()));
    }

    fn flush(&self) {}
}

/// Maps a [`log::Level`] onto the closest [`Level`]; `Trace` folds into `Debug`.
pub const fn level_from_log(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warn,
        log::Level::Info => Level::Info,
        log::Level::Debug | log::Level::Trace => Level::Debug,
    }
}

/// Installs the bridge as the `log` facade's logger.
///
/// The global logger's own filter still applies on top of `max_level`.
pub fn init(max_level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(max_level);
    Ok(())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::level_from_log;
    use crate::Level;
    use test_case::test_case;

    #[test_case(log::Level::Error, Level::Error)]
    #[test_case(log::Level::Warn, Level::Warn)]
    #[test_case(log::Level::Info, Level::Info)]
    #[test_case(log::Level::Debug, Level::Debug)]
    #[test_case(log::Level::Trace, Level::Debug)]
    fn maps_levels(from: log::Level, to: Level) {
        assert_eq!(level_from_log(from), to);
    }
}
