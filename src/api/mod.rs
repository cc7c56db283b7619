//! JS-facing surface: the `Simulation` handle for pages with their own loop,
//! and (on wasm32) `mount`, which runs the whole page from Rust.

pub mod wasm;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
