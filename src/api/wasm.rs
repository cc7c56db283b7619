use wasm_bindgen::prelude::*;

use crate::domain::bodies;
use crate::systems::kinematics;

pub use crate::simulation::{FrameStats, Simulation};

/// Preset bodies as JSON: `[{key, name, gravity, color}, ...]`
#[wasm_bindgen]
pub fn bodies_json() -> String {
    bodies::manifest_json()
}

/// Exact landing time (s) of a drop, for annotating the charts
#[wasm_bindgen]
pub fn landing_time(height: f64, gravity: f64) -> f64 {
    kinematics::landing_time(height, gravity)
}
