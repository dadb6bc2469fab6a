//! Frame timing for `PerfStats`.
//!
//! Both targets read one millisecond clock, so a timer is a single `f64`
//! regardless of platform.

/// Milliseconds on the host clock: `Date.now()` in the browser.
#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Milliseconds since the first clock read in this process.
#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Started at a step or render pass; read once when the pass ends
#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    start_ms: f64,
}

impl PerfTimer {
    /// `None` when metrics are off, so disabled runs never touch the clock
    pub(crate) fn start_if(enabled: bool) -> Option<Self> {
        enabled.then(|| PerfTimer { start_ms: now_ms() })
    }

    /// Never negative, even if the wall clock steps backwards
    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.start_ms).max(0.0)
    }
}
