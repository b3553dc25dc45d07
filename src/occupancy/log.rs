//! Logging shims: forward to `tracing` with the `std` feature, expand to
//! nothing otherwise so firmware builds link without an allocator.
//!
//! Arguments are not evaluated when logging is compiled out; only pass values
//! the caller uses anyway.

#[cfg(feature = "std")]
macro_rules! info {
    ($($arg:tt)*) => { ::tracing::info!($($arg)*) };
}

#[cfg(not(feature = "std"))]
macro_rules! info {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(feature = "std")]
macro_rules! warn_ {
    ($($arg:tt)*) => { ::tracing::warn!($($arg)*) };
}

#[cfg(not(feature = "std"))]
macro_rules! warn_ {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(feature = "std")]
macro_rules! debug {
    ($($arg:tt)*) => { ::tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "std"))]
macro_rules! debug {
    ($($arg:tt)*) => {
        ()
    };
}

pub(crate) use debug;
pub(crate) use info;
pub(crate) use warn_ as warn;
