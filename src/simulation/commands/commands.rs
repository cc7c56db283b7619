use super::init::build_states;
use super::frame_stats::FrameStats;
use super::{RunToken, SimulationCore};

pub(super) fn reset(core: &mut SimulationCore) {
    core.invalidate_run();
    core.states = build_states(&core.config);
    core.frame = 0;
    core.stats = FrameStats::default();

    console_log!(
        "reset: height={:.2}m bodies=[{}]",
        core.config.height,
        core.states
            .iter()
            .map(|s| s.body.key())
            .collect::<Vec<_>>()
            .join(",")
    );
}

pub(super) fn start(core: &mut SimulationCore) -> Option<RunToken> {
    if core.running || core.all_finished() {
        return None;
    }

    // New run, new token: frames still queued by a previous loop go stale
    core.invalidate_run();
    core.running = true;

    // Fresh baseline so the first frame doesn't see the time spent paused
    for state in core.states.iter_mut() {
        state.last_frame_timestamp = None;
    }

    Some(core.current_token())
}

pub(super) fn pause(core: &mut SimulationCore) {
    if core.running {
        core.invalidate_run();
    }
}
