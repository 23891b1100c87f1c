//! Process-wide logger state and initialization.
//!
//! Embedded call sites often log from code that has no logger passed to it. This module holds one
//! explicitly initialized [`LineLogger`] for them. It is set once with [`init`] and reached with
//! [`with`]; every access runs inside a [`critical_section`], which also serializes producers such
//! as an interrupt handler and the main loop.
//!
//! # Examples
//!
//! ```rust
//! use static_cell::StaticCell;
//! use stanza::sink::FmtSink;
//! use stanza::{LineLogger, global};
//!
//! # type Uart = heapless::String<128>;
//! static SINK: StaticCell<FmtSink<Uart>> = StaticCell::new();
//!
//! let sink = SINK.init(FmtSink::new(Uart::new()));
//! global::init(LineLogger::new().with_sink(sink))?;
//!
//! global::with(|logger| logger.info("ready"));
//! # Ok::<(), global::SetGlobalError>(())
//! ```

use core::cell::RefCell;
use core::sync::atomic::{AtomicBool, Ordering};

use critical_section::Mutex;

use crate::LineLogger;

/// The `GLOBAL_LOGGER` static holds the global logger instance once [`init`] has run.
static GLOBAL_LOGGER: Mutex<RefCell<Option<LineLogger<'static>>>> =
    Mutex::new(RefCell::new(None));

/// Mirrors whether `GLOBAL_LOGGER` is set, so uninitialized callers skip the critical section.
static GLOBAL_INIT: AtomicBool = AtomicBool::new(false);

/// Installs `logger` as the global logger instance.
///
/// This can only succeed once per process.
pub fn init(logger: LineLogger<'static>) -> Result<(), SetGlobalError> {
    critical_section::with(|cs| {
        let Ok(mut slot) = GLOBAL_LOGGER.borrow(cs).try_borrow_mut() else {
            return Err(SetGlobalError(()));
        };
        if slot.is_some() {
            return Err(SetGlobalError(()));
        }
        *slot = Some(logger);
        GLOBAL_INIT.store(true, Ordering::Release);
        Ok(())
    })
}

/// Whether [`init`] has installed a logger.
pub fn is_initialized() -> bool {
    GLOBAL_INIT.load(Ordering::Acquire)
}

/// Runs `f` with exclusive access to the global logger.
///
/// Returns `None` without calling `f` if no logger is installed, or if called from inside another
/// `with` closure (for example by a sink that logs).
pub fn with<R>(f: impl FnOnce(&mut LineLogger<'static>) -> R) -> Option<R> {
    if !is_initialized() {
        return None;
    }

    critical_section::with(|cs| {
        let mut slot = GLOBAL_LOGGER.borrow(cs).try_borrow_mut().ok()?;
        slot.as_mut().map(f)
    })
}

/// The type returned by [`init`] if the global logger has already been set.
#[derive(Debug, thiserror::Error)]
#[error("a global logger has already been set")]
pub struct SetGlobalError(());
