//! Host implementations of the Stanza clock and sink contracts, using the std library.
//!
//! # Example
//!
//! ```rust
//! use stanza::{LineLogger, Options};
//! use stanza_std::sink::Stdout;
//! use stanza_std::time::Time;
//!
//! let mut stdout = Stdout;
//! let mut logger = LineLogger::new()
//!     .with_options(Options::default().with_prefix("HOST"))
//!     .time::<Time>()
//!     .with_sink(&mut stdout);
//!
//! stanza::info!(logger, "listening on port", 8080);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod sink;
pub mod time;

pub use stanza_api::{Error, Result};
