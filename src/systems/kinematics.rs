//! Stepper - closed-form free fall
//!
//! velocity = g·t, position = height - ½·g·t², clamped at the ground.
//! No rendering side effects: callers decide what to redraw.

use crate::domain::state::{HistorySample, SimulationState};

/// Exact time (s) for a drop from `height` to reach the ground under `gravity`.
#[inline]
pub fn landing_time(height: f64, gravity: f64) -> f64 {
    (2.0 * height / gravity).sqrt()
}

/// Speed (m/s) at the moment of landing.
#[inline]
pub fn landing_velocity(height: f64, gravity: f64) -> f64 {
    gravity * landing_time(height, gravity)
}

/// Advance `state` by `delta` seconds. Returns whether the body is still
/// falling afterwards.
///
/// A finished body is left untouched. A zero or negative delta does not move
/// the clock and records nothing, so history stays strictly increasing.
pub fn step(state: &mut SimulationState, delta: f64) -> bool {
    if state.finished {
        return false;
    }
    if delta.is_nan() || delta <= 0.0 {
        return true;
    }

    state.time += delta;
    state.velocity = state.gravity * state.time;
    state.position = state.height - 0.5 * state.gravity * state.time * state.time;

    let active = if state.position <= 0.0 {
        state.position = 0.0;
        state.finished = true;
        false
    } else {
        true
    };

    state.history.push(HistorySample {
        time: state.time,
        position: state.position,
        velocity: state.velocity,
    });

    active
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bodies::BodyId;

    const DT: f64 = 1.0 / 60.0;

    fn run_to_ground(state: &mut SimulationState, dt: f64) -> usize {
        let mut steps = 0;
        while step(state, dt) {
            steps += 1;
            assert!(steps < 1_000_000, "drop never landed");
        }
        steps + 1
    }

    #[test]
    fn follows_closed_form_until_landing() {
        let mut state = SimulationState::new(BodyId::Mars, 50.0);
        for _ in 0..30 {
            step(&mut state, DT);
            let t = state.time;
            assert!((state.velocity - 3.71 * t).abs() < 1e-9);
            assert!((state.position - (50.0 - 0.5 * 3.71 * t * t)).abs() < 1e-9);
        }
        assert!(!state.finished);
    }

    #[test]
    fn lands_within_one_interval_of_exact_time() {
        for id in BodyId::ALL {
            for &height in &[0.5, 10.0, 123.0] {
                let mut state = SimulationState::new(id, height);
                run_to_ground(&mut state, DT);
                let exact = landing_time(height, id.body().gravity);
                assert!(state.finished);
                assert!(state.time >= exact - 1e-9, "{:?} landed early", id);
                assert!(state.time < exact + DT, "{:?} landed late", id);
            }
        }
    }

    #[test]
    fn position_is_clamped_at_ground() {
        let mut state = SimulationState::new(BodyId::Jupiter, 1.0);
        assert!(!step(&mut state, 5.0));
        assert_eq!(state.position, 0.0);
        assert!(state.finished);
        assert_eq!(state.history.last().unwrap().position, 0.0);
    }

    #[test]
    fn finished_state_is_frozen() {
        let mut state = SimulationState::new(BodyId::Earth, 2.0);
        run_to_ground(&mut state, 0.1);
        let (time, velocity, samples) = (state.time, state.velocity, state.history.len());

        assert!(!step(&mut state, 0.1));
        assert_eq!(state.time, time);
        assert_eq!(state.velocity, velocity);
        assert_eq!(state.history.len(), samples);
    }

    #[test]
    fn zero_delta_records_nothing() {
        let mut state = SimulationState::new(BodyId::Moon, 5.0);
        assert!(step(&mut state, 0.0));
        assert!(step(&mut state, -1.0));
        assert_eq!(state.time, 0.0);
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn history_is_strictly_increasing() {
        let mut state = SimulationState::new(BodyId::Venus, 30.0);
        let deltas = [0.016, 0.0, 0.033, 0.001, 0.0, 0.25];
        for d in deltas.iter().cycle().take(200) {
            step(&mut state, *d);
        }
        for pair in state.history.windows(2) {
            assert!(pair[1].time > pair[0].time);
        }
    }

    #[test]
    fn earth_ten_meters() {
        let t = landing_time(10.0, 9.8);
        assert!((t - 1.4286).abs() < 1e-4);
        assert!((landing_velocity(10.0, 9.8) - 14.0).abs() < 1e-9);

        let mut state = SimulationState::new(BodyId::Earth, 10.0);
        run_to_ground(&mut state, 0.001);
        assert!((state.time - 1.4286).abs() < 2e-3);
        assert!((state.velocity - 14.0).abs() < 0.02);
    }
}
