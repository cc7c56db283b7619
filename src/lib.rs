//! Freefall Engine - planetary drop simulation in WASM
//!
//! Drops a ball from a chosen height on several bodies at once and keeps
//! their position/velocity histories aligned for charting.
//!
//! Architecture:
//! - core/       - Logging macros
//! - domain/     - Body registry, run config, per-body state
//! - systems/    - Stepper (kinematics) and chart aligner
//! - simulation/ - Owned simulation context and frame driver
//! - api/        - Public wasm API and the browser app

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

pub use domain::bodies;
pub use domain::config;
pub use systems::chart;
pub use systems::kinematics;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("freefall engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::Simulation;
pub use domain::bodies::{Body, BodyId};
pub use domain::config::SimConfig;
pub use simulation::{RunToken, SimulationCore, TickOutcome};
