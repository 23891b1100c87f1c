//! Printable parts of a log line.
//!
//! A [`Value`] is the closed set of things a sink knows how to format natively:
//! - **Str**: text, written as-is
//! - **Char**: a single character
//! - **Bool**: `true`/`false`
//! - **I64** / **U64**: integers of any width, widened
//! - **F64**: floating-point numbers
//! - **Args**: pre-formatted arguments from [`format_args!`]
//!
//! # Examples
//!
//! ```rust
//! use stanza_api::Value;
//!
//! let parts: [Value; 3] = ["backoff".into(), 250_u32.into(), "ms".into()];
//! assert_eq!(parts[1], Value::U64(250));
//! ```

use core::fmt;

/// A value that can be written as one part of a log line.
#[derive(Clone, Copy, Debug)]
pub enum Value<'a> {
    /// A string slice, written without delimiters.
    Str(&'a str),
    /// A single character.
    Char(char),
    /// A boolean value.
    Bool(bool),
    /// A signed integer.
    I64(i64),
    /// An unsigned integer.
    U64(u64),
    /// A floating-point number.
    F64(f64),
    /// Deferred formatting arguments.
    Args(fmt::Arguments<'a>),
}

impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::I64(a), Value::I64(b)) => a == b,
            (Value::U64(a), Value::U64(b)) => a == b,
            (Value::F64(a), Value::F64(b)) => a == b,
            // Arguments are opaque until formatted.
            _ => false,
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(value) => f.write_str(value),
            Value::Char(value) => fmt::Display::fmt(value, f),
            Value::Bool(value) => fmt::Display::fmt(value, f),
            Value::I64(value) => fmt::Display::fmt(value, f),
            Value::U64(value) => fmt::Display::fmt(value, f),
            Value::F64(value) => fmt::Display::fmt(value, f),
            Value::Args(value) => fmt::Display::fmt(value, f),
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Str(value)
    }
}

impl From<char> for Value<'_> {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl<'a> From<fmt::Arguments<'a>> for Value<'a> {
    fn from(value: fmt::Arguments<'a>) -> Self {
        Value::Args(value)
    }
}

impl From<f32> for Value<'_> {
    fn from(value: f32) -> Self {
        Value::F64(value.into())
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Value::F64(value)
    }
}

macro_rules! impl_from_int {
    ($variant:ident: $wide:ty => $($int:ty),*) => {
        $(
            impl From<$int> for Value<'_> {
                fn from(value: $int) -> Self {
                    Value::$variant(value as $wide)
                }
            }
        )*
    };
}

impl_from_int!(I64: i64 => i8, i16, i32, i64, isize);
impl_from_int!(U64: u64 => u8, u16, u32, u64, usize);

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::Value;
    use pretty_assertions::assert_eq;
    use std::format;

    #[test]
    fn integers_widen() {
        assert_eq!(Value::from(-5_i8), Value::I64(-5));
        assert_eq!(Value::from(7_u16), Value::U64(7));
        assert_eq!(Value::from(usize::MAX), Value::U64(usize::MAX as u64));
    }

    #[test]
    fn displays_natively() {
        let rendered = [
            Value::from("text"),
            Value::from('c'),
            Value::from(false),
            Value::from(-42),
            Value::from(42_u64),
            Value::from(1.5),
            Value::from(format_args!("{}-{}", 1, 2)),
        ]
        .map(|value| format!("{value}"));

        assert_eq!(rendered, ["text", "c", "false", "-42", "42", "1.5", "1-2"]);
    }

    #[test]
    fn arguments_never_compare_equal() {
        assert_ne!(Value::from(format_args!("a")), Value::from(format_args!("a")));
        assert_ne!(Value::from(1_i32), Value::from(1_u32));
    }
}
