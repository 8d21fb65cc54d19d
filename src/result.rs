//! Shared result type for guardian-tools.
//!
//! All fallible operations in this crate return the `Result<T>` alias defined
//! here, backed by `color-eyre` for readable error reports with context.

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used throughout guardian-tools.
///
/// Chain context onto errors with `.wrap_err()` as they propagate; `main`
/// surfaces the final report and exits non-zero.
pub type Result<T> = EyreResult<T>;
