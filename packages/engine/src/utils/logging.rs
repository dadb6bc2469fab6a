//! Console logging
//!
//! On `wasm32` messages go to the browser console through `web_sys::console`.
//! Native builds (unit tests, benches) have no console import to call into,
//! so the macros format their arguments and drop the result there.
//!
//! Usage:
//! ```rust
//! use collisions_engine::engine_log;
//!
//! let placed = 42;
//! engine_log!("placed {} bodies", placed);
//! ```

/// Log an informational message to the browser console.
#[macro_export]
macro_rules! engine_log {
    ($($arg:tt)*) => {
        $crate::utils::console_log(&format!($($arg)*))
    };
}

/// Log a warning (degraded but recoverable behavior).
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {
        $crate::utils::console_warn(&format!($($arg)*))
    };
}

#[doc(hidden)]
pub fn console_log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

#[doc(hidden)]
pub fn console_warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}
