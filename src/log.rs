//! Logging for the converter.
//!
//! The parser reports skipped records and short inputs here, and the
//! renderer reports pen changes and page size. Build with the `tracing`
//! feature to see them; without it `debug!` and `warn!` expand to nothing.
//! Call them as statements (`debug!(...);`), never as expressions.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
