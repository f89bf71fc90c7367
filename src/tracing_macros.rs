//! Logging macros for the diff hot path.
//!
//! Events are forwarded to `tracing` when the crate is built for tests or with
//! the `debug_diff` feature; otherwise they compile to nothing.

#[cfg(any(test, feature = "debug_diff"))]
macro_rules! trace {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*);
    };
}

#[cfg(not(any(test, feature = "debug_diff")))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(any(test, feature = "debug_diff"))]
macro_rules! debug {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*);
    };
}

#[cfg(not(any(test, feature = "debug_diff")))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}
