use crate::domain::state::SimulationState;
use crate::systems::kinematics;

use super::{FrameTimer, RunToken, SimulationCore, TickOutcome};

/// Shared delta (s) for this frame: measured from the oldest baseline any
/// body holds, or zero when no body has one yet (first frame of a run).
pub(super) fn lockstep_delta(states: &[SimulationState], timestamp_ms: f64) -> f64 {
    let min_last = states
        .iter()
        .filter_map(|s| s.last_frame_timestamp)
        .fold(None, |acc: Option<f64>, t| Some(acc.map_or(t, |a| a.min(t))))
        .unwrap_or(timestamp_ms);

    // Host clocks are monotonic, but a replayed or synthetic timestamp
    // must never run a drop backwards
    ((timestamp_ms - min_last) / 1000.0).max(0.0)
}

pub(super) fn tick(core: &mut SimulationCore, token: RunToken, timestamp_ms: f64) -> TickOutcome {
    if !core.running || token != core.current_token() {
        return TickOutcome::Stale;
    }

    let timer = FrameTimer::start();
    let delta = lockstep_delta(&core.states, timestamp_ms);

    for state in core.states.iter_mut() {
        state.last_frame_timestamp = Some(timestamp_ms);
    }

    let mut any_active = false;
    for state in core.states.iter_mut().filter(|s| s.is_active()) {
        if kinematics::step(state, delta) {
            any_active = true;
        } else {
            console_log!(
                "{} landed at t={:.3}s v={:.2}m/s",
                state.body.body().name,
                state.time,
                state.velocity
            );
        }
    }

    core.frame += 1;
    let active = core.active_count() as u32;
    core.stats.record(delta, timer.elapsed_ms(), active);

    if any_active {
        TickOutcome::Reschedule
    } else {
        core.running = false;
        TickOutcome::Idle
    }
}
