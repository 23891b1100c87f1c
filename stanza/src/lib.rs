//! # `stanza`
//!
//! A header-once line logger for resource-constrained devices.
//!
//! Output goes to a borrowed [`Sink`][sink::Sink] (a UART, a socket, a fixed buffer) without
//! allocating. Several calls can build one line; the line gets exactly one header:
//!
//! ```text
//! [NET] 1234 INFO: Backoff 250 ms
//! ^^^^^ ^^^^ ^^^^^
//! prefix  |   level label
//!      timestamp (milliseconds from the configured clock)
//! ```
//!
//! ## Basic Usage
//!
//! ```rust
//! use stanza::sink::FmtSink;
//! use stanza::{Level, LineLogger, Options, info};
//!
//! let mut uart = FmtSink::new(heapless::String::<128>::new());
//! let mut logger = LineLogger::new()
//!     .with_options(Options::default().with_prefix("NET").with_min_level(Level::Info))
//!     .with_sink(&mut uart);
//!
//! logger.debug("filtered out");
//! info!(logger, "Backoff", 250, "ms");
//! ```
//!
//! ## Modules
//!
//! - [`global`]: one explicitly initialized process-wide logger
//! - [`bridge`]: routes the [`log`] facade into the global logger
//!
//! The logger is not synchronized; use [`global`] (which runs inside a critical section) when
//! several producers share one output.

#![no_std]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg(test)]
extern crate std;

pub mod bridge;
pub mod global;
mod logger;
mod macros;
mod options;

pub use logger::{DEFAULT_LEVEL, LineLogger};
pub use options::{BoundedStr, DEFAULT_SEPARATOR, Options, Prefix, Separator};
pub use stanza_api::time::Clock;
pub use stanza_api::{Error, Level, Result, Value, sink, time};
