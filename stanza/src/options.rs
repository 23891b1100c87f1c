//! Logger configuration and the fixed-capacity strings it is made of.

use core::fmt;
use core::ops::Deref;

use serde::{Deserialize, Serialize};
use stanza_api::Level;

/// The line prefix, at most 31 bytes.
pub type Prefix = BoundedStr<31>;

/// The separator written between parts, at most 7 bytes.
pub type Separator = BoundedStr<7>;

/// The separator used when none (or an empty one) is configured.
pub const DEFAULT_SEPARATOR: &str = " ";

/// A string stored inline with a capacity of `N` bytes.
///
/// Input longer than the capacity is cut after the last complete character that fits; the
/// truncation is silent.
///
/// # Examples
///
/// ```rust
/// use stanza::BoundedStr;
///
/// let tag = BoundedStr::<4>::truncating("sensor");
/// assert_eq!(&*tag, "sens");
///
/// // Never splits a character.
/// let tag = BoundedStr::<4>::truncating("abcé");
/// assert_eq!(&*tag, "abc");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BoundedStr<const N: usize>(heapless::String<N>);

impl<const N: usize> BoundedStr<N> {
    /// The capacity in bytes.
    pub const CAPACITY: usize = N;

    /// Creates an empty string.
    pub const fn new() -> Self {
        Self(heapless::String::new())
    }

    /// Copies as much of `value` as fits.
    pub fn truncating(value: &str) -> Self {
        let mut inner = heapless::String::new();
        for ch in value.chars() {
            if inner.push(ch).is_err() {
                break;
            }
        }
        Self(inner)
    }

    /// Returns the stored text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl<const N: usize> Deref for BoundedStr<N> {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> From<&str> for BoundedStr<N> {
    fn from(value: &str) -> Self {
        Self::truncating(value)
    }
}

impl<const N: usize> fmt::Display for BoundedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> fmt::Debug for BoundedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const N: usize> Serialize for BoundedStr<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, const N: usize> Deserialize<'de> for BoundedStr<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor<const N: usize>;

        impl<const N: usize> serde::de::Visitor<'_> for Visitor<N> {
            type Value = BoundedStr<N>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(BoundedStr::truncating(value))
            }
        }

        deserializer.deserialize_str(Visitor::<N>)
    }
}

/// A full configuration snapshot for a [`LineLogger`][crate::LineLogger].
///
/// Missing fields take their defaults when deserializing:
///
/// ```rust
/// use stanza::{Level, Options};
///
/// let options: Options = serde_json::from_str(r#"{ "prefix": "NET", "min_level": "warn" }"#)?;
///
/// assert_eq!(&*options.prefix, "NET");
/// assert_eq!(options.min_level, Level::Warn);
/// assert!(options.show_timestamp);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Written as `[prefix] ` at the start of every line; empty disables the brackets.
    pub prefix: Prefix,
    /// Whether to write the clock's milliseconds after the prefix.
    pub show_timestamp: bool,
    /// Whether to write the level label, e.g. `INFO: `.
    pub show_level: bool,
    /// Requests below this level are dropped; [`Level::None`] drops everything.
    pub min_level: Level,
    /// Written between the parts of a multi-part log call.
    pub part_separator: Separator,
}

impl Options {
    /// Sets the prefix, truncating it to [`Prefix::CAPACITY`].
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = Prefix::truncating(prefix);
        self
    }

    /// Sets whether timestamps are written.
    pub fn with_timestamp(mut self, show_timestamp: bool) -> Self {
        self.show_timestamp = show_timestamp;
        self
    }

    /// Sets whether level labels are written.
    pub fn with_level(mut self, show_level: bool) -> Self {
        self.show_level = show_level;
        self
    }

    /// Sets the minimum level.
    pub fn with_min_level(mut self, min_level: Level) -> Self {
        self.min_level = min_level;
        self
    }

    /// Sets the part separator; an empty separator means [`DEFAULT_SEPARATOR`].
    pub fn with_part_separator(mut self, separator: &str) -> Self {
        self.part_separator = separator_or_default(separator);
        self
    }

    /// Replaces an empty separator, e.g. from deserialized input, with [`DEFAULT_SEPARATOR`].
    pub(crate) fn normalized(mut self) -> Self {
        if self.part_separator.is_empty() {
            self.part_separator = Separator::truncating(DEFAULT_SEPARATOR);
        }
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            prefix: Prefix::new(),
            show_timestamp: true,
            show_level: true,
            min_level: Level::Debug,
            part_separator: Separator::truncating(DEFAULT_SEPARATOR),
        }
    }
}

pub(crate) fn separator_or_default(separator: &str) -> Separator {
    if separator.is_empty() {
        Separator::truncating(DEFAULT_SEPARATOR)
    } else {
        Separator::truncating(separator)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::{BoundedStr, Options, Prefix, Separator};
    use pretty_assertions::assert_eq;
    use stanza_api::Level;
    use test_case::test_case;

    #[test_case("", ""; "empty")]
    #[test_case("NET", "NET"; "short")]
    #[test_case("0123456789012345678901234567890", "0123456789012345678901234567890"; "exactly full")]
    #[test_case(
        "0123456789012345678901234567890123456789",
        "0123456789012345678901234567890";
        "too long"
    )]
    fn prefix_truncates_to_capacity(input: &str, stored: &str) {
        let prefix = Prefix::truncating(input);
        assert_eq!(prefix.as_str(), stored);
        assert!(prefix.len() <= Prefix::CAPACITY);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // 'ü' is two bytes and does not fit after six ASCII bytes.
        assert_eq!(Separator::truncating("------ü").as_str(), "------");
        assert_eq!(BoundedStr::<3>::truncating("€uro").as_str(), "€");
    }

    #[test]
    fn defaults() {
        let options = Options::default();

        assert_eq!(options.prefix.as_str(), "");
        assert!(options.show_timestamp);
        assert!(options.show_level);
        assert_eq!(options.min_level, Level::Debug);
        assert_eq!(options.part_separator.as_str(), " ");
    }

    #[test]
    fn empty_separator_falls_back_to_space() {
        assert_eq!(
            Options::default()
                .with_part_separator("")
                .part_separator
                .as_str(),
            " "
        );
        assert_eq!(
            Options::default()
                .with_part_separator(" | ")
                .part_separator
                .as_str(),
            " | "
        );
    }

    #[test]
    fn deserializes_with_truncation_and_defaults() {
        let options: Options = serde_json::from_str(
            r#"{
                "prefix": "a-prefix-that-is-much-longer-than-thirty-one-bytes",
                "show_level": false,
                "min_level": "none",
                "part_separator": ", and then "
            }"#,
        )
        .unwrap();

        assert_eq!(
            options,
            Options {
                prefix: Prefix::truncating("a-prefix-that-is-much-longer-th"),
                show_timestamp: true,
                show_level: false,
                min_level: Level::None,
                part_separator: Separator::truncating(", and t"),
            }
        );
    }

    #[test]
    fn normalizes_empty_deserialized_separator() {
        let options: Options = serde_json::from_str(r#"{ "part_separator": "" }"#).unwrap();

        assert_eq!(options.part_separator.as_str(), "");
        assert_eq!(options.normalized().part_separator.as_str(), " ");
    }

    #[test]
    fn serializes_as_plain_strings() {
        let json = serde_json::to_string(&Options::default().with_prefix("IO")).unwrap();

        assert_eq!(
            json,
            r#"{"prefix":"IO","show_timestamp":true,"show_level":true,"min_level":"debug","part_separator":" "}"#
        );
    }
}
