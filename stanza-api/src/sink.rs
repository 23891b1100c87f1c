//! Traits for the byte streams log lines are written to.

use core::fmt;

use crate::{Error, Result, Value};

/// The terminator written by [`Sink::end_line`] unless a sink overrides it.
pub const CRLF: &str = "\r\n";

/// `Sink` is an append-only destination for log output.
///
/// The logger never opens, closes or flushes a sink, it only appends to it. Implementations only
/// need [`Sink::write_str`]; values and line terminators have provided implementations that a sink
/// may override when it has a native way to write them.
pub trait Sink {
    /// Appends `text` to the stream.
    fn write_str(&mut self, text: &str) -> Result<()>;

    /// Appends formatted arguments to the stream.
    ///
    /// This makes `write!(sink, ...)` usable on any sink.
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        struct Adapter<'a, S: ?Sized> {
            sink: &'a mut S,
            error: Option<Error>,
        }

        impl<S: Sink + ?Sized> fmt::Write for Adapter<'_, S> {
            fn write_str(&mut self, text: &str) -> fmt::Result {
                self.sink.write_str(text).map_err(|error| {
                    self.error = Some(error);
                    fmt::Error
                })
            }
        }

        let mut adapter = Adapter {
            sink: self,
            error: None,
        };

        fmt::write(&mut adapter, args).map_err(|fmt::Error| adapter.error.unwrap_or(Error::Write))
    }

    /// Appends one value using its native formatting.
    fn write_value(&mut self, value: &Value<'_>) -> Result<()> {
        match value {
            Value::Str(text) => self.write_str(text),
            other => self.write_fmt(format_args!("{other}")),
        }
    }

    /// Terminates the current line.
    fn end_line(&mut self) -> Result<()> {
        self.write_str(CRLF)
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write_str(&mut self, text: &str) -> Result<()> {
        (**self).write_str(text)
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        (**self).write_fmt(args)
    }

    fn write_value(&mut self, value: &Value<'_>) -> Result<()> {
        (**self).write_value(value)
    }

    fn end_line(&mut self) -> Result<()> {
        (**self).end_line()
    }
}

/// A [`Sink`] over anything implementing [`core::fmt::Write`].
///
/// # Examples
///
/// ```rust
/// use stanza_api::sink::{FmtSink, Sink};
///
/// let mut sink = FmtSink::new(heapless::String::<16>::new());
/// sink.write_str("ready").unwrap();
/// sink.end_line().unwrap();
/// assert_eq!(sink.get_ref().as_str(), "ready\r\n");
/// ```
#[derive(Debug)]
pub struct FmtSink<W> {
    writer: W,
    line_ending: &'static str,
}

impl<W: fmt::Write> FmtSink<W> {
    /// Wraps `writer`, terminating lines with [`CRLF`].
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            line_ending: CRLF,
        }
    }

    /// Replaces the line terminator.
    pub const fn with_line_ending(mut self, line_ending: &'static str) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Returns a reference to the wrapped writer.
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Unwraps the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: fmt::Write> Sink for FmtSink<W> {
    fn write_str(&mut self, text: &str) -> Result<()> {
        fmt::Write::write_str(&mut self.writer, text).map_err(|fmt::Error| Error::Write)
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        fmt::Write::write_fmt(&mut self.writer, args).map_err(|fmt::Error| Error::Write)
    }

    fn end_line(&mut self) -> Result<()> {
        self.write_str(self.line_ending)
    }
}

/// A [`Sink`] over an [`embedded_io::Write`] byte stream, e.g. a UART or a socket.
#[derive(Debug)]
pub struct IoSink<W> {
    writer: W,
    line_ending: &'static str,
}

impl<W: embedded_io::Write> IoSink<W> {
    /// Wraps `writer`, terminating lines with [`CRLF`].
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            line_ending: CRLF,
        }
    }

    /// Replaces the line terminator.
    pub const fn with_line_ending(mut self, line_ending: &'static str) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Returns a reference to the wrapped writer.
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Unwraps the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: embedded_io::Write> Sink for IoSink<W> {
    fn write_str(&mut self, text: &str) -> Result<()> {
        embedded_io::Write::write_all(&mut self.writer, text.as_bytes()).map_err(|_| Error::Write)
    }

    fn end_line(&mut self) -> Result<()> {
        self.write_str(self.line_ending)
    }
}
