//! Severity levels and the suppress-all filter sentinel.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Log line severity, ordered from least to most important.
///
/// Used both to tag a request and as the minimum-level filter. [`Level::None`] is only meaningful
/// as a filter: it suppresses everything and is never emitted itself.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Level {
    /// Designates lower priority information.
    Debug = 0,

    /// Designates useful information.
    ///
    /// This is the level used when a call does not name one.
    #[default]
    Info = 1,

    /// Designates hazardous situations.
    #[serde(alias = "warning")]
    Warn = 2,

    /// Designates very serious errors.
    Error = 3,

    /// Filter sentinel that suppresses all output.
    #[serde(alias = "off")]
    None = 255,
}

impl Level {
    /// All levels that can tag a log line, in ascending order.
    pub const EMITTABLE: [Level; 4] = [Level::Debug, Level::Info, Level::Warn, Level::Error];

    /// Returns the label written in line headers.
    ///
    /// Anything that is not an emittable level falls back to `"LOG"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stanza_api::Level;
    ///
    /// assert_eq!(Level::Warn.label(), "WARN");
    /// assert_eq!(Level::None.label(), "LOG");
    /// ```
    pub const fn label(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::None => "LOG",
        }
    }

    /// Returns the raw ordinal of this level.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether a request tagged with this level may ever reach a sink.
    pub const fn is_emittable(self) -> bool {
        !matches!(self, Level::None)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for Level {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        match value {
            0 => Ok(Level::Debug),
            1 => Ok(Level::Info),
            2 => Ok(Level::Warn),
            3 => Ok(Level::Error),
            255 => Ok(Level::None),
            other => Err(Error::InvalidLevel(other)),
        }
    }
}

impl FromStr for Level {
    type Err = Error;

    /// Parses a level name, ignoring ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// use stanza_api::Level;
    ///
    /// assert_eq!("warning".parse(), Ok(Level::Warn));
    /// assert_eq!("OFF".parse(), Ok(Level::None));
    /// ```
    fn from_str(name: &str) -> Result<Self, Error> {
        const NAMES: [(&str, Level); 7] = [
            ("debug", Level::Debug),
            ("info", Level::Info),
            ("warn", Level::Warn),
            ("warning", Level::Warn),
            ("error", Level::Error),
            ("none", Level::None),
            ("off", Level::None),
        ];

        NAMES
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|&(_, level)| level)
            .ok_or(Error::UnknownLevelName)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::Level;
    use crate::Error;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn ordering_follows_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::None);
    }

    #[test_case(0, Level::Debug)]
    #[test_case(1, Level::Info)]
    #[test_case(2, Level::Warn)]
    #[test_case(3, Level::Error)]
    #[test_case(255, Level::None)]
    fn raw_values(raw: u8, level: Level) {
        assert_eq!(Level::try_from(raw), Ok(level));
        assert_eq!(level.as_u8(), raw);
    }

    #[test]
    fn converts_through_try_into() {
        let level: Result<Level, Error> = 2_u8.try_into();
        assert_eq!(level, Ok(Level::Warn));
    }

    #[test]
    fn rejects_unknown_raw_values() {
        assert_eq!(Level::try_from(4), Err(Error::InvalidLevel(4)));
        assert_eq!(Level::try_from(254), Err(Error::InvalidLevel(254)));
    }

    #[test_case("debug", Level::Debug)]
    #[test_case("Info", Level::Info)]
    #[test_case("WARN", Level::Warn)]
    #[test_case("warning", Level::Warn)]
    #[test_case("error", Level::Error)]
    #[test_case("none", Level::None)]
    #[test_case("off", Level::None)]
    fn parses_names(name: &str, level: Level) {
        assert_eq!(name.parse::<Level>(), Ok(level));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!("verbose".parse::<Level>(), Err(Error::UnknownLevelName));
        assert_eq!("".parse::<Level>(), Err(Error::UnknownLevelName));
    }

    #[test]
    fn labels() {
        let labels: std::vec::Vec<_> = Level::EMITTABLE.iter().map(|level| level.label()).collect();
        assert_eq!(labels, ["DEBUG", "INFO", "WARN", "ERROR"]);
        assert_eq!(std::format!("{}", Level::None), "LOG");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Level::Warn).unwrap(), r#""warn""#);
        assert_eq!(
            serde_json::from_str::<Level>(r#""warning""#).unwrap(),
            Level::Warn
        );
        assert_eq!(serde_json::from_str::<Level>(r#""off""#).unwrap(), Level::None);
    }
}
