//! The line logger and its header-once-per-line state machine.

use core::fmt;

use stanza_api::sink::Sink;
use stanza_api::time::{self, Clock};
use stanza_api::{Level, Result, Value};

use crate::options::{Options, Prefix, separator_or_default};

/// The level used by calls that do not name one.
pub const DEFAULT_LEVEL: Level = Level::Info;

/// Whether a header has been written for the line in progress, and at which level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct LineState {
    open: bool,
    active_level: Level,
}

impl LineState {
    const CLOSED: Self = Self {
        open: false,
        active_level: DEFAULT_LEVEL,
    };
}

fn nop_timestamp() -> u64 {
    0
}

/// Formats log lines onto a borrowed [`Sink`].
///
/// Several `print` calls at the same level share one line and one header:
///
/// ```text
/// [NET] 1234 INFO: connected to 10.0.0.2
/// ```
///
/// Switching level mid-line terminates the line first, so every line carries exactly one
/// severity. Nothing here returns an error: an unbound sink, a disabled logger, a filtered level or
/// a failing sink all mean the output is dropped.
///
/// The logger holds mutable line state and must not be shared between an interrupt handler and
/// the main loop without serialization; see [`global`][crate::global] for a shared instance.
///
/// # Examples
///
/// ```rust
/// use stanza::sink::FmtSink;
/// use stanza::{Level, LineLogger, Options};
///
/// let mut sink = FmtSink::new(heapless::String::<64>::new()).with_line_ending("\n");
/// let mut logger = LineLogger::new()
///     .with_options(Options::default().with_prefix("NET").with_timestamp(false))
///     .with_sink(&mut sink);
///
/// logger.print(Level::Info, "retry in ");
/// logger.print(Level::Info, 250);
/// logger.println(Level::Info, "ms");
/// drop(logger);
///
/// assert_eq!(sink.get_ref().as_str(), "[NET] INFO: retry in 250ms\n");
/// ```
pub struct LineLogger<'s> {
    sink: Option<&'s mut (dyn Sink + Send)>,
    now_fn: fn() -> u64,
    enabled: bool,
    options: Options,
    line: LineState,
}

impl fmt::Debug for LineLogger<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineLogger")
            .field("sink_bound", &self.sink.is_some())
            .field("enabled", &self.enabled)
            .field("options", &self.options)
            .field("line", &self.line)
            .finish_non_exhaustive()
    }
}

impl Default for LineLogger<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'s> LineLogger<'s> {
    /// Creates an enabled logger with default [`Options`], no sink and no clock.
    pub fn new() -> Self {
        Self {
            sink: None,
            now_fn: nop_timestamp,
            enabled: true,
            options: Options::default(),
            line: LineState::CLOSED,
        }
    }

    /// Binds `sink`, see [`LineLogger::bind_sink`].
    pub fn with_sink(mut self, sink: &'s mut (dyn Sink + Send)) -> Self {
        self.bind_sink(sink);
        self
    }

    /// Applies `options`, see [`LineLogger::configure`].
    pub fn with_options(mut self, options: Options) -> Self {
        self.configure(options);
        self
    }

    /// Configures the clock used for header timestamps.
    pub fn time<C>(mut self) -> Self
    where
        C: Clock,
    {
        self.set_clock::<C>();
        self
    }

    /// Attaches the output target. The sink must already be open.
    ///
    /// Replacing a sink mid-line carries the open line over to the new sink.
    pub fn bind_sink(&mut self, sink: &'s mut (dyn Sink + Send)) {
        self.sink = Some(sink);
    }

    /// Detaches the output target and returns it, closing the line in progress.
    pub fn unbind_sink(&mut self) -> Option<&'s mut (dyn Sink + Send)> {
        self.line = LineState::CLOSED;
        self.sink.take()
    }

    /// Configures the clock used for header timestamps.
    pub fn set_clock<C>(&mut self)
    where
        C: Clock,
    {
        self.now_fn = time::millis::<C>;
    }

    /// Applies a full configuration snapshot and closes the line in progress.
    pub fn configure(&mut self, options: Options) {
        self.options = options.normalized();
        self.line = LineState::CLOSED;
    }

    /// Returns the active configuration.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Sets the prefix, silently truncating it to [`Prefix::CAPACITY`] bytes.
    pub fn set_prefix(&mut self, prefix: &str) {
        self.options.prefix = Prefix::truncating(prefix);
    }

    /// Sets the minimum level.
    ///
    /// This does not touch the line in progress.
    pub fn set_min_level(&mut self, min_level: Level) {
        self.options.min_level = min_level;
    }

    /// Sets the multi-part separator; empty means a single space.
    pub fn set_part_separator(&mut self, separator: &str) {
        self.options.part_separator = separator_or_default(separator);
    }

    /// Sets whether headers carry a timestamp.
    pub fn set_show_timestamp(&mut self, show_timestamp: bool) {
        self.options.show_timestamp = show_timestamp;
    }

    /// Sets whether headers carry the level label.
    pub fn set_show_level(&mut self, show_level: bool) {
        self.options.show_level = show_level;
    }

    /// Enables or disables all output.
    ///
    /// Disabling closes the line in progress without terminating it, so output resumes with a
    /// fresh header.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.line = LineState::CLOSED;
        }
    }

    /// Whether output is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a header has been written for a line that is not terminated yet.
    pub fn is_line_open(&self) -> bool {
        self.line.open
    }

    /// The level of the line in progress, or [`DEFAULT_LEVEL`] if no line is open.
    pub fn active_level(&self) -> Level {
        self.line.active_level
    }

    /// Whether a request at `level` would reach the sink.
    pub fn can_emit(&self, level: Level) -> bool {
        self.enabled
            && self.sink.is_some()
            && self.options.min_level != Level::None
            && level.is_emittable()
            && level >= self.options.min_level
    }

    /// Writes `value` on the current line without terminating it.
    pub fn print<'v>(&mut self, level: Level, value: impl Into<Value<'v>>) {
        let value = value.into();
        self.emit(level, false, |sink, _| sink.write_value(&value));
    }

    /// Writes `value` and terminates the line.
    pub fn println<'v>(&mut self, level: Level, value: impl Into<Value<'v>>) {
        let value = value.into();
        self.emit(level, true, |sink, _| sink.write_value(&value));
    }

    /// [`LineLogger::print`] at [`DEFAULT_LEVEL`].
    pub fn print_default<'v>(&mut self, value: impl Into<Value<'v>>) {
        self.print(DEFAULT_LEVEL, value);
    }

    /// [`LineLogger::println`] at [`DEFAULT_LEVEL`].
    pub fn println_default<'v>(&mut self, value: impl Into<Value<'v>>) {
        self.println(DEFAULT_LEVEL, value);
    }

    /// Terminates the line in progress.
    ///
    /// Uses the level of the open line, or [`DEFAULT_LEVEL`] when no line is open, in which case
    /// a header followed by an empty line is written.
    pub fn newline(&mut self) {
        self.emit(self.line.active_level, true, |_, _| Ok(()));
    }

    /// Writes a one-shot message on its own line.
    pub fn log<'v>(&mut self, level: Level, message: impl Into<Value<'v>>) {
        self.println(level, message);
    }

    /// Writes `parts` joined by the configured separator on one line.
    ///
    /// The separator only goes between parts, never before the first or after the last.
    pub fn log_parts(&mut self, level: Level, parts: &[Value<'_>]) {
        self.emit(level, true, |sink, options| {
            let mut parts = parts.iter();
            if let Some(first) = parts.next() {
                sink.write_value(first)?;
            }
            for part in parts {
                sink.write_str(&options.part_separator)?;
                sink.write_value(part)?;
            }
            Ok(())
        });
    }

    /// Logs `message` at [`Level::Debug`].
    pub fn debug<'v>(&mut self, message: impl Into<Value<'v>>) {
        self.log(Level::Debug, message);
    }

    /// Logs `message` at [`Level::Info`].
    pub fn info<'v>(&mut self, message: impl Into<Value<'v>>) {
        self.log(Level::Info, message);
    }

    /// Logs `message` at [`Level::Warn`].
    pub fn warn<'v>(&mut self, message: impl Into<Value<'v>>) {
        self.log(Level::Warn, message);
    }

    /// Logs `message` at [`Level::Error`].
    pub fn error<'v>(&mut self, message: impl Into<Value<'v>>) {
        self.log(Level::Error, message);
    }

    /// Runs one request: filter, header, body and, if `terminate`, the line terminator.
    ///
    /// Sink failures abort the remaining writes of this request but never the state transitions.
    fn emit(
        &mut self,
        level: Level,
        terminate: bool,
        body: impl FnOnce(&mut dyn Sink, &Options) -> Result<()>,
    ) {
        if !self.can_emit(level) {
            return;
        }

        let Self {
            sink,
            now_fn,
            options,
            line,
            ..
        } = self;
        let Some(sink) = sink.as_deref_mut() else {
            return;
        };

        // this is a logger, ignore any errors writing
        let _ = ensure_header(sink, options, *now_fn, line, level).and_then(|()| body(sink, options));

        if terminate {
            let _ = sink.end_line();
            *line = LineState::CLOSED;
        }
    }
}

/// Writes a header unless the open line already has one for `level`.
fn ensure_header(
    sink: &mut dyn Sink,
    options: &Options,
    now_fn: fn() -> u64,
    line: &mut LineState,
    level: Level,
) -> Result<()> {
    let terminated = match *line {
        LineState { open: true, active_level } if active_level == level => return Ok(()),
        LineState { open: true, .. } => sink.end_line(),
        LineState { open: false, .. } => Ok(()),
    };

    *line = LineState {
        open: true,
        active_level: level,
    };
    terminated?;
    write_header(sink, options, now_fn, level)
}

/// `[prefix] <millis> LEVEL: `, each piece depending on `options`.
fn write_header(
    sink: &mut dyn Sink,
    options: &Options,
    now_fn: fn() -> u64,
    level: Level,
) -> Result<()> {
    if !options.prefix.is_empty() {
        write!(sink, "[{}] ", options.prefix)?;
    }

    if options.show_timestamp {
        write!(sink, "{} ", now_fn())?;
    }

    if options.show_level {
        write!(sink, "{}: ", level.label())?;
    }

    Ok(())
}
