//! Simulation core - owned context for one page's worth of drops
//!
//! Holds the selected bodies' states, the run flag and the run token that
//! the frame driver checks before touching anything. Nothing here is
//! global: the wasm facade and the browser app each own a `SimulationCore`.
//!
//! - init/     - building a core and its states from a config
//! - commands/ - reset / start / pause
//! - step/     - the per-frame tick (lockstep delta, stepping)
//! - render/   - per-body frame extraction and the sink trait
//! - perf/     - frame timing stats

use crate::domain::bodies::BodyId;
use crate::domain::config::SimConfig;
use crate::domain::state::SimulationState;
use crate::systems::chart::{self, ChartData};

#[path = "perf/frame_timer.rs"]
mod frame_timer;
#[path = "perf/frame_stats.rs"]
mod frame_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::Simulation;
pub use frame_stats::FrameStats;
pub use render_extract::{ball_y, BodyFrame, FrameSink, Readouts};

use frame_timer::FrameTimer;

/// Identifies one run of the frame loop. Every start, pause and reset
/// invalidates the previous token, so a frame scheduled by an old loop can
/// tell it must neither step nor reschedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RunToken(pub(crate) u32);

impl RunToken {
    pub fn value(self) -> u32 {
        self.0
    }

    pub fn from_value(value: u32) -> Self {
        RunToken(value)
    }
}

/// What the frame scheduler should do after a tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// At least one body is still falling: request another frame
    Reschedule,
    /// Every body has landed; the core is idle again
    Idle,
    /// The token belongs to a paused, reset or superseded run. Nothing was touched.
    Stale,
}

impl TickOutcome {
    #[inline]
    pub fn should_reschedule(self) -> bool {
        self == TickOutcome::Reschedule
    }
}

pub struct SimulationCore {
    config: SimConfig,
    states: Vec<SimulationState>,
    running: bool,
    generation: u32,
    frame: u64,
    stats: FrameStats,
}

impl SimulationCore {
    pub fn new(config: SimConfig) -> Self {
        init::create_simulation_core(config)
    }

    pub fn with_bodies(height: f64, bodies: &[BodyId]) -> Self {
        init::create_with_bodies(height, bodies)
    }

    pub fn from_config_json(json: &str) -> Result<Self, String> {
        let config = SimConfig::from_json(json)?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn states(&self) -> &[SimulationState] {
        &self.states
    }

    pub fn state(&self, body: BodyId) -> Option<&SimulationState> {
        self.states.iter().find(|s| s.body == body)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames stepped since the last reset
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn active_count(&self) -> usize {
        self.states.iter().filter(|s| s.is_active()).count()
    }

    pub fn all_finished(&self) -> bool {
        self.active_count() == 0
    }

    pub fn frame_stats(&self) -> FrameStats {
        self.stats.clone()
    }

    // === CONTROLS ===

    /// Changing the height restarts every drop
    pub fn set_height(&mut self, height: f64) {
        settings::set_height(self, height);
    }

    pub fn set_body_selected(&mut self, body: BodyId, selected: bool) {
        settings::set_body_selected(self, body, selected);
    }

    pub fn select_bodies(&mut self, bodies: &[BodyId]) {
        settings::select_bodies(self, bodies);
    }

    pub fn set_config(&mut self, config: SimConfig) -> Result<(), String> {
        settings::set_config(self, config)
    }

    /// Discard every state and rebuild from the config. Stops the loop.
    pub fn reset(&mut self) {
        commands::reset(self);
    }

    /// Begin (or resume) the frame loop. `None` when already running or
    /// when nothing is left to animate; the caller must not schedule frames then.
    pub fn start(&mut self) -> Option<RunToken> {
        commands::start(self)
    }

    pub fn pause(&mut self) {
        commands::pause(self);
    }

    // === FRAME DRIVER ===

    /// Advance every active body by the shared delta since the last frame.
    pub fn tick(&mut self, token: RunToken, timestamp_ms: f64) -> TickOutcome {
        step::tick(self, token, timestamp_ms)
    }

    /// One full frame: tick, then hand every body and both charts to `sink`.
    /// Stale frames draw nothing.
    pub fn drive_frame<S: FrameSink + ?Sized>(
        &mut self,
        token: RunToken,
        timestamp_ms: f64,
        sink: &mut S,
    ) -> TickOutcome {
        let outcome = self.tick(token, timestamp_ms);
        if outcome != TickOutcome::Stale {
            self.present(sink);
        }
        outcome
    }

    /// Redraw everything without stepping (after a reset, for instance).
    pub fn present<S: FrameSink + ?Sized>(&self, sink: &mut S) {
        render_extract::present(self, sink);
    }

    // === OUTPUT ===

    pub fn body_frames(&self) -> Vec<BodyFrame> {
        render_extract::body_frames(self)
    }

    pub fn chart_data(&self) -> ChartData {
        chart::align(&self.states, self.config.chart_step, self.config.min_chart_span)
    }

    fn current_token(&self) -> RunToken {
        RunToken(self.generation)
    }

    fn invalidate_run(&mut self) {
        self.running = false;
        self.generation = self.generation.wrapping_add(1);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
