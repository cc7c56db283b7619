use crate::domain::bodies::BodyId;
use crate::domain::config::SimConfig;

use super::SimulationCore;

pub(super) fn set_height(core: &mut SimulationCore, height: f64) {
    core.config.height = height;
    core.reset();
}

pub(super) fn set_body_selected(core: &mut SimulationCore, body: BodyId, selected: bool) {
    let present = core.config.bodies.contains(&body);
    if selected && !present {
        // Keep registry order so panels don't reshuffle as toggles change
        core.config.bodies.push(body);
        core.config.bodies.sort();
    } else if !selected && present {
        core.config.bodies.retain(|b| *b != body);
    }
    core.reset();
}

pub(super) fn select_bodies(core: &mut SimulationCore, bodies: &[BodyId]) {
    core.config.bodies = bodies.to_vec();
    core.config.dedup_bodies();
    core.reset();
}

pub(super) fn set_config(core: &mut SimulationCore, config: SimConfig) -> Result<(), String> {
    config.validate()?;
    core.config = config;
    core.config.dedup_bodies();
    core.reset();
    Ok(())
}
