//! Core utilities shared by every layer of the engine.
//!
//! `log` must stay first so its macros are visible to the rest of the crate.

#[macro_use]
#[path = "utils/log.rs"]
pub mod log;
