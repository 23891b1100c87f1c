//! Sinks over standard output and `std::io` writers.

use std::io::Write;

use embedded_io_adapters::std::FromStd;
pub use stanza_api::sink::{IoSink, Sink};
use stanza_api::{Error, Result};

/// Line terminator used by the host sinks.
pub const LF: &str = "\n";

/// Implements the [`Sink`] trait by printing to standard output.
///
/// Every terminated line is flushed so interleaving with other output stays readable.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Sink for Stdout {
    /// Prints to [`std::io::stdout`].
    fn write_str(&mut self, text: &str) -> Result<()> {
        std::io::stdout()
            .write_all(text.as_bytes())
            .map_err(|_| Error::Write)
    }

    fn end_line(&mut self) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(LF.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|_| Error::Write)
    }
}

/// Wraps a [`std::io::Write`] implementation (a file, a socket, a `Vec<u8>`) as a [`Sink`]
/// terminating lines with [`LF`].
pub fn from_std<W>(writer: W) -> IoSink<FromStd<W>>
where
    W: Write,
{
    IoSink::new(FromStd::new(writer)).with_line_ending(LF)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use stanza::{Level, LineLogger, Options};
    use stanza_api::Error;

    use super::{Sink, Stdout, from_std};

    #[test]
    fn from_std_writes_lines_with_lf() {
        let mut sink = from_std(Vec::new());
        let mut logger = LineLogger::new()
            .with_options(Options::default().with_prefix("HOST").with_timestamp(false))
            .with_sink(&mut sink);

        logger.print(Level::Info, "rx");
        logger.println(Level::Info, 42_u8);
        logger.warn("slow");
        drop(logger);

        let bytes = sink.into_inner().into_inner();
        assert_eq!(
            std::str::from_utf8(&bytes).unwrap(),
            "[HOST] INFO: rx42\n[HOST] WARN: slow\n"
        );
    }

    #[test]
    fn from_std_maps_writer_errors() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut sink = from_std(Closed);
        assert_eq!(sink.write_str("x"), Err(Error::Write));
        assert_eq!(sink.end_line(), Err(Error::Write));
    }

    #[test]
    fn stdout_accepts_lines() {
        let mut sink = Stdout;
        assert_eq!(sink.write_str("stanza stdout sink"), Ok(()));
        assert_eq!(sink.end_line(), Ok(()));
    }
}
