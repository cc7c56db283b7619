//! Frame cost clock
//!
//! A frame of seven bodies costs well under a millisecond, so the clock needs
//! sub-millisecond resolution. In the browser that is `performance.now()`
//! (`Date.now()` only ticks in whole ms); natively it is a monotonic
//! `Instant` measured from a process-wide epoch.

/// Milliseconds on a monotonic clock with a sub-millisecond fraction.
/// Only differences between two readings are meaningful.
#[cfg(target_arch = "wasm32")]
pub(crate) fn now_ms() -> f64 {
    match web_sys::window().and_then(|w| w.performance()) {
        Some(perf) => perf.now(),
        // Workers and odd hosts without a window: coarse but never absent
        None => js_sys::Date::now(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Measures how long one frame's stepping took.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FrameTimer {
    start_ms: f64,
}

impl FrameTimer {
    pub(crate) fn start() -> Self {
        FrameTimer { start_ms: now_ms() }
    }

    /// Never negative, even if the host clock misbehaves.
    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.start_ms).max(0.0)
    }
}
