//! Process-wide diagnostic toggle.
//!
//! When enabled the compiler emits a `debug` event for every resolved
//! invocation and chain step. The toggle never changes compiled output.

use std::sync::atomic::{AtomicBool, Ordering};

static DIAGNOSTICS: AtomicBool = AtomicBool::new(false);

/// Turns compile diagnostics on or off.
pub fn set_diagnostics(enabled: bool) {
    DIAGNOSTICS.store(enabled, Ordering::Relaxed);
}

/// Returns true if compile diagnostics are on.
#[must_use]
pub fn diagnostics_enabled() -> bool {
    DIAGNOSTICS.load(Ordering::Relaxed)
}

/// Emits a `debug` event only while diagnostics are enabled.
macro_rules! diagnostic {
    ($($arg:tt)*) => {
        if $crate::diagnostics::diagnostics_enabled() {
            ::tracing::debug!($($arg)*);
        }
    };
}

pub(crate) use diagnostic;
