use wasm_bindgen::prelude::*;

/// Per-run frame counters, reset together with the simulation.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub(super) frames: u32,
    pub(super) last_delta_s: f64,
    pub(super) max_delta_s: f64,
    pub(super) last_frame_ms: f64,
    pub(super) active_bodies: u32,
}

impl FrameStats {
    pub(super) fn record(&mut self, delta_s: f64, frame_ms: f64, active_bodies: u32) {
        self.frames = self.frames.saturating_add(1);
        self.last_delta_s = delta_s;
        self.max_delta_s = self.max_delta_s.max(delta_s);
        self.last_frame_ms = frame_ms;
        self.active_bodies = active_bodies;
    }
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> u32 { self.frames }
    #[wasm_bindgen(getter)]
    pub fn last_delta_s(&self) -> f64 { self.last_delta_s }
    #[wasm_bindgen(getter)]
    pub fn max_delta_s(&self) -> f64 { self.max_delta_s }
    #[wasm_bindgen(getter)]
    pub fn last_frame_ms(&self) -> f64 { self.last_frame_ms }
    #[wasm_bindgen(getter)]
    pub fn active_bodies(&self) -> u32 { self.active_bodies }
}
