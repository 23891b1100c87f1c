//! Contracts consumed by the Stanza line logger.
//!
//! The logger itself lives in the `stanza` crate; this crate only describes what it writes to
//! ([`sink::Sink`]), what it writes ([`Value`] tagged with a [`Level`]) and where timestamps come
//! from ([`time::Clock`]).

#![no_std]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg(test)]
extern crate std;

mod error;
mod level;
pub mod sink;
pub mod time;
mod value;

pub use error::{Error, Result};
pub use level::Level;
pub use value::Value;
