//! Crash diagnostics for the emulation core.
//!
//! A panic raised from inside the core (through [`panic_gb!`] or one
//! of the assertion macros) is preceded by a dump of the machine
//! state. The frame runner registers the machine for the duration of
//! a frame through the [`DiagScope`] guard, so the dump has something
//! to print exactly when emulation is in flight.

use std::{cell::Cell, ptr::null};

use crate::gb::GameBoy;

thread_local! {
    /// The machine currently running a frame on this thread, if any.
    /// Only dereferenced by [`GameBoy::dump_diagnostics`], which runs
    /// strictly inside the registration scope.
    static ACTIVE_INSTANCE: Cell<*const GameBoy> = const { Cell::new(null()) };
}

/// RAII guard that keeps a machine registered for panic diagnostics.
///
/// Deregistration happens on drop, which includes the unwinding of
/// the panic the registration exists for (the dump runs before the
/// panic is raised, while the scope is still active).
pub(crate) struct DiagScope;

impl DiagScope {
    pub(crate) fn enter(instance: *const GameBoy) -> Self {
        ACTIVE_INSTANCE.with(|active| active.set(instance));
        Self
    }
}

impl Drop for DiagScope {
    fn drop(&mut self) {
        ACTIVE_INSTANCE.with(|active| active.set(null()));
    }
}

impl GameBoy {
    /// Dumps the state of the machine currently in flight on this
    /// thread (if any) to stderr. Called by the panic macros right
    /// before aborting emulation.
    pub fn dump_diagnostics() {
        let instance = ACTIVE_INSTANCE.with(|active| active.get());
        if instance.is_null() {
            return;
        }
        let game_boy = unsafe { &*instance };
        eprintln!("Machine state at crash:");
        eprintln!("{}", game_boy.description_debug());
    }
}

/// Controls whether the (expensive) pedantic assertions are run,
/// only meaningful when the `pedantic` feature is enabled.
#[cfg(feature = "pedantic")]
pub static PEDANTIC: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

#[cfg(feature = "pedantic")]
#[macro_export]
macro_rules! enable_pedantic {
    () => {
        $crate::diag::PEDANTIC.store(true, std::sync::atomic::Ordering::Relaxed)
    };
}

#[cfg(not(feature = "pedantic"))]
#[macro_export]
macro_rules! enable_pedantic {
    () => {};
}

#[cfg(feature = "pedantic")]
#[macro_export]
macro_rules! disable_pedantic {
    () => {
        $crate::diag::PEDANTIC.store(false, std::sync::atomic::Ordering::Relaxed)
    };
}

#[cfg(not(feature = "pedantic"))]
#[macro_export]
macro_rules! disable_pedantic {
    () => {};
}

#[macro_export]
macro_rules! panic_gb {
    ($($arg:tt)+) => {{
        $crate::gb::GameBoy::dump_diagnostics();
        panic!($($arg)+);
    }};
}

#[macro_export]
macro_rules! assert_gb {
    ($cond:expr) => {
        $crate::assert_gb!($cond, stringify!($cond));
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::panic_gb!($($arg)+);
        }
    };
}

#[cfg(feature = "pedantic")]
#[macro_export]
macro_rules! assert_pedantic_gb {
    ($cond:expr $(, $arg:tt)*) => {
        if $crate::diag::PEDANTIC.load(std::sync::atomic::Ordering::Relaxed) {
            $crate::assert_gb!($cond $(, $arg)*);
        }
    };
}

#[cfg(not(feature = "pedantic"))]
#[macro_export]
macro_rules! assert_pedantic_gb {
    ($cond:expr $(, $arg:tt)*) => {
        ()
    };
}

#[cfg(test)]
mod tests {
    use crate::gb::GameBoy;

    use super::{DiagScope, ACTIVE_INSTANCE};

    #[test]
    fn test_scope_lifecycle() {
        let gb = GameBoy::new();
        {
            let _scope = DiagScope::enter(&gb);
            assert!(!ACTIVE_INSTANCE.with(|active| active.get()).is_null());

            // with a machine registered the dump walks its state
            GameBoy::dump_diagnostics();
        }
        assert!(ACTIVE_INSTANCE.with(|active| active.get()).is_null());
    }

    #[test]
    fn test_dump_without_instance() {
        // nothing in flight on this thread, must be a no-op
        GameBoy::dump_diagnostics();
    }
}
