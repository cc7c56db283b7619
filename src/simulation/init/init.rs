use crate::domain::bodies::BodyId;
use crate::domain::config::SimConfig;
use crate::domain::state::SimulationState;

use super::frame_stats::FrameStats;
use super::SimulationCore;

pub(super) fn create_simulation_core(config: SimConfig) -> SimulationCore {
    let states = build_states(&config);
    SimulationCore {
        config,
        states,
        running: false,
        generation: 0,
        frame: 0,
        stats: FrameStats::default(),
    }
}

pub(super) fn create_with_bodies(height: f64, bodies: &[BodyId]) -> SimulationCore {
    let mut config = SimConfig {
        height,
        bodies: bodies.to_vec(),
        ..SimConfig::default()
    };
    config.dedup_bodies();
    create_simulation_core(config)
}

/// One fresh state per selected body, or none at all for a degenerate config.
pub(super) fn build_states(config: &SimConfig) -> Vec<SimulationState> {
    if !config.is_runnable() {
        return Vec::new();
    }
    config
        .bodies
        .iter()
        .map(|&body| SimulationState::new(body, config.height))
        .collect()
}
