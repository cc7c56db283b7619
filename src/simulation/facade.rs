use wasm_bindgen::prelude::*;

use crate::domain::bodies::BodyId;
use crate::domain::config::SimConfig;

use super::frame_stats::FrameStats;
use super::{RunToken, SimulationCore};

/// JS handle to a simulation. Pages that bring their own frame loop drive it
/// through `start` / `tick`; `mount` wires the same core to the DOM.
#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Drop from `height` meters on Earth only
    #[wasm_bindgen(constructor)]
    pub fn new(height: f64) -> Self {
        Self {
            core: SimulationCore::with_bodies(height, &[BodyId::Earth]),
        }
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<Simulation, JsValue> {
        let core = SimulationCore::from_config_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 { self.core.config().height }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool { self.core.is_running() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.states().len() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn all_finished(&self) -> bool { self.core.all_finished() }

    /// Changing the height resets every drop
    pub fn set_height(&mut self, height: f64) {
        self.core.set_height(height);
    }

    /// Toggle one body by key ("earth", "moon", ...). Resets every drop.
    pub fn set_body_selected(&mut self, key: &str, selected: bool) -> Result<(), JsValue> {
        let body = BodyId::from_key(key).map_err(|e| JsValue::from_str(&e))?;
        self.core.set_body_selected(body, selected);
        Ok(())
    }

    /// Replace the selection with a JSON array of keys. Resets every drop.
    pub fn select_bodies_json(&mut self, json: &str) -> Result<(), JsValue> {
        let bodies = parse_body_keys(json).map_err(|e| JsValue::from_str(&e))?;
        self.core.select_bodies(&bodies);
        Ok(())
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    pub fn set_config_json(&mut self, json: &str) -> Result<(), JsValue> {
        let config = SimConfig::from_json(json).map_err(|e| JsValue::from_str(&e))?;
        self.core.set_config(config).map_err(|e| JsValue::from_str(&e))
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    /// Returns the run token to pass to `tick`, or `undefined` when no frame
    /// should be scheduled.
    pub fn start(&mut self) -> Option<u32> {
        self.core.start().map(RunToken::value)
    }

    pub fn pause(&mut self) {
        self.core.pause();
    }

    /// Advance one animation frame. Returns whether another frame should be
    /// requested for this token.
    pub fn tick(&mut self, token: u32, timestamp_ms: f64) -> bool {
        self.core
            .tick(RunToken::from_value(token), timestamp_ms)
            .should_reschedule()
    }

    /// Ball center row (canvas pixels) of the `index`-th selected body
    pub fn ball_y(&self, index: usize) -> Option<f64> {
        self.core.body_frames().get(index).map(|f| f.ball_y)
    }

    /// Per-body frames (ball position, readouts) as JSON
    pub fn frames_json(&self) -> String {
        serde_json::to_string(&self.core.body_frames()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Shared axis and per-body series for both charts, as JSON
    pub fn chart_json(&self) -> String {
        self.core.chart_data().to_json()
    }

    pub fn frame_stats(&self) -> FrameStats {
        self.core.frame_stats()
    }
}

impl Simulation {
    pub fn core(&self) -> &SimulationCore {
        &self.core
    }
}

pub(crate) fn parse_body_keys(json: &str) -> Result<Vec<BodyId>, String> {
    serde_json::from_str(json).map_err(|e| e.to_string())
}
