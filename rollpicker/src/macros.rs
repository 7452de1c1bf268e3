/// Target of every event the engine emits, for `EnvFilter` directives like `rollpicker=trace`.
#[cfg(feature = "tracing")]
pub(crate) const LOG_TARGET: &str = "rollpicker";

#[cfg(feature = "tracing")]
macro_rules! plog {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: $crate::macros::LOG_TARGET, $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! plog {
    ($level:ident, $($tt:tt)*) => {};
}

// Per-event sync and debounce steps.
macro_rules! ptrace {
    ($($tt:tt)*) => { plog!(trace, $($tt)*) };
}

// Selection commits and reconfiguration.
macro_rules! pdebug {
    ($($tt:tt)*) => { plog!(debug, $($tt)*) };
}

// Degenerate but accepted input.
macro_rules! pwarn {
    ($($tt:tt)*) => { plog!(warn, $($tt)*) };
}
