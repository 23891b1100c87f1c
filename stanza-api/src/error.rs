/// A result with the [`Error`] error.
pub type Result<T> = core::result::Result<T, Error>;

/// An error that may happen at the edges of the logger.
///
/// Logging operations never surface these; they are returned by sinks and by level parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The sink could not accept the bytes.
    #[error("sink write failed")]
    Write,
    /// A raw value that does not name a level.
    #[error("invalid level value {0}")]
    InvalidLevel(u8),
    /// A level name that is not recognized.
    #[error("unknown level name")]
    UnknownLevelName,
}
