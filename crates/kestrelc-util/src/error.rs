//! The single error type the rest of the toolchain sees from a failed compile.
//!
//! Individual diagnostics are reported through [`crate::diagnostic::Handler`]
//! as they're found; this type is just the marker a caller matches on to
//! decide the compile as a whole failed, for use with `?` in callers that
//! want an `std::error::Error` (e.g. the driver's `anyhow` chain).

use thiserror::Error;

#[derive(Debug, Error)]
#[error("compilation failed with {error_count} error(s)")]
pub struct CompileFailed {
    pub error_count: usize,
}
