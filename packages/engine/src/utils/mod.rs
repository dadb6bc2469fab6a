//! Shared helpers: console logging macros and the seeded random source.
//!
//! Declared first in `lib.rs` so the logging macros are in scope for every
//! other module.

#[macro_use]
mod logging;
pub mod random;

#[doc(hidden)]
pub use logging::{console_log, console_warn};
