//! Console logging
//!
//! On wasm32 lines go to the browser console through `web_sys::console`.
//! Native builds (tests, tooling) write to stderr instead, since the JS
//! console imports are not callable outside a wasm host.
//!
//! Usage:
//! ```rust
//! use freefall_engine::{console_log, console_warn};
//!
//! console_log!("reset: {} bodies", 2);
//! console_warn!("ignoring unknown body '{}'", "pluto");
//! ```

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
}

/// Write one line at the given level.
pub fn emit(level: Level, msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let value = wasm_bindgen::JsValue::from_str(msg);
        match level {
            Level::Info => web_sys::console::log_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        match level {
            Level::Info => eprintln!("[freefall] {}", msg),
            Level::Warn => eprintln!("[freefall] WARN {}", msg),
        }
    }
}

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::log::emit($crate::core::log::Level::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::log::emit($crate::core::log::Level::Warn, &format!($($arg)*))
    };
}
