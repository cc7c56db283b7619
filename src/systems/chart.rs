//! Chart aligner
//!
//! Each body samples its history at its own frame times and stops sampling
//! when it lands, but both charts share one time axis. Histories are
//! resampled onto evenly spaced ticks by linear interpolation; past a body's
//! last sample its values are held flat.

use serde::Serialize;

use crate::domain::state::{HistorySample, SimulationState};

/// One labeled line on a chart
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub color: String,
    pub data: Vec<f64>,
}

/// Axis captions the chart widget shows; one time axis shared by both charts
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisTitles {
    pub time: &'static str,
    pub position: &'static str,
    pub velocity: &'static str,
}

impl Default for AxisTitles {
    fn default() -> Self {
        Self {
            time: "Time (s)",
            position: "Position (m)",
            velocity: "Velocity (m/s)",
        }
    }
}

/// Shared axis plus one series per body for each chart
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub titles: AxisTitles,
    /// Tick labels, two decimals
    pub labels: Vec<String>,
    /// Tick times (s); `labels[i]` is `ticks[i]` formatted
    #[serde(skip)]
    pub ticks: Vec<f64>,
    pub position: Vec<Series>,
    pub velocity: Vec<Series>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Evenly spaced ticks from 0 covering `max_time`, which is first raised to
/// `min_span`. The last tick is the first multiple of `step` at or past the
/// end, so every body's final sample lands on the axis.
pub fn time_axis(max_time: f64, step: f64, min_span: f64) -> Vec<f64> {
    let end = max_time.max(min_span);
    // Exact multiples must not gain an extra tick from float noise
    let last = (end / step - 1e-9).ceil().max(0.0) as usize;
    (0..=last).map(|i| i as f64 * step).collect()
}

/// Resample `history` at every tick. `ticks` must be ascending.
///
/// Returns `(positions, velocities)`, each `ticks.len()` long (empty when
/// there is no history at all).
pub fn resample(history: &[HistorySample], ticks: &[f64]) -> (Vec<f64>, Vec<f64>) {
    if history.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let mut positions = Vec::with_capacity(ticks.len());
    let mut velocities = Vec::with_capacity(ticks.len());
    let mut cursor = 0usize;

    for &t in ticks {
        // Ticks and history are both time-ordered, so the cursor only moves forward
        while cursor + 1 < history.len() && history[cursor + 1].time <= t {
            cursor += 1;
        }

        let d0 = &history[cursor];
        let (pos, vel) = match history.get(cursor + 1) {
            Some(d1) if d1.time > d0.time => {
                let ratio = ((t - d0.time) / (d1.time - d0.time)).clamp(0.0, 1.0);
                (
                    d0.position + (d1.position - d0.position) * ratio,
                    d0.velocity + (d1.velocity - d0.velocity) * ratio,
                )
            }
            // Past the end, or a zero-length interval: hold
            _ => (d0.position, d0.velocity),
        };

        positions.push(pos);
        velocities.push(vel);
    }

    (positions, velocities)
}

/// Build both charts for the current set of bodies.
pub fn align(states: &[SimulationState], step: f64, min_span: f64) -> ChartData {
    if states.is_empty() {
        return ChartData::default();
    }

    // Histories are time-ordered, so each body's last sample is its latest
    let max_time = states
        .iter()
        .filter_map(|s| s.last_sample())
        .map(|h| h.time)
        .fold(0.0f64, f64::max);

    let ticks = time_axis(max_time, step, min_span);
    let labels = ticks.iter().map(|t| format!("{:.2}", t)).collect();

    let mut position = Vec::with_capacity(states.len());
    let mut velocity = Vec::with_capacity(states.len());
    for state in states {
        let body = state.body.body();
        let (pos, vel) = resample(&state.history, &ticks);
        position.push(Series {
            label: body.name.to_string(),
            color: body.color.to_string(),
            data: pos,
        });
        velocity.push(Series {
            label: body.name.to_string(),
            color: body.color.to_string(),
            data: vel,
        });
    }

    ChartData {
        titles: AxisTitles::default(),
        labels,
        ticks,
        position,
        velocity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bodies::BodyId;

    fn sample(time: f64, position: f64, velocity: f64) -> HistorySample {
        HistorySample { time, position, velocity }
    }

    #[test]
    fn axis_has_minimum_span() {
        let ticks = time_axis(0.3, 0.05, 2.0);
        assert_eq!(ticks.len(), 41);
        assert_eq!(ticks[0], 0.0);
        assert!((ticks[40] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn axis_covers_max_time() {
        let ticks = time_axis(4.97, 0.05, 2.0);
        let last = *ticks.last().unwrap();
        assert!(last >= 4.97);
        assert!(last < 4.97 + 0.05);
        assert_eq!(ticks.len(), 101);
    }

    #[test]
    fn axis_on_an_exact_multiple_gets_no_extra_tick() {
        let ticks = time_axis(3.0, 0.05, 2.0);
        assert_eq!(ticks.len(), 61);
        assert!((ticks[60] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn landing_sample_between_ticks_reaches_the_chart() {
        let history = [
            sample(0.0, 20.0, 0.0),
            sample(4.95, 0.15, 8.02),
            sample(4.97, 0.0, 8.05),
        ];
        let state = SimulationState {
            history: history.to_vec(),
            ..SimulationState::new(BodyId::Moon, 20.0)
        };
        let charts = align(&[state], 0.05, 2.0);
        assert_eq!(charts.labels.last().map(String::as_str), Some("5.00"));
        assert_eq!(charts.position[0].data.last(), Some(&0.0));
        assert_eq!(charts.velocity[0].data.last(), Some(&8.05));
    }

    #[test]
    fn interpolates_between_samples() {
        let history = [sample(0.0, 10.0, 0.0), sample(0.1, 8.0, 2.0)];
        let (pos, vel) = resample(&history, &[0.0, 0.05, 0.1]);
        assert_eq!(pos.len(), 3);
        assert!((pos[1] - 9.0).abs() < 1e-12);
        assert!((vel[1] - 1.0).abs() < 1e-12);
        assert_eq!(pos[2], 8.0);
    }

    #[test]
    fn holds_last_value_past_the_end() {
        let history = [sample(0.0, 3.0, 0.0), sample(0.5, 0.0, 6.0)];
        let (pos, vel) = resample(&history, &[0.5, 1.0, 1.5]);
        assert_eq!(pos, vec![0.0, 0.0, 0.0]);
        assert_eq!(vel, vec![6.0, 6.0, 6.0]);
    }

    #[test]
    fn equal_timestamps_hold_earlier_sample() {
        let history = [
            sample(0.0, 10.0, 0.0),
            sample(0.2, 9.0, 1.0),
            sample(0.2, 8.0, 2.0),
            sample(0.4, 7.0, 3.0),
        ];
        let (pos, _) = resample(&history, &[0.1, 0.2, 0.3]);
        assert!(pos.iter().all(|p| p.is_finite()));
        assert!((pos[0] - 9.5).abs() < 1e-12);
        // Cursor sits on the second 0.2 sample and interpolates toward 0.4
        assert!((pos[2] - 7.5).abs() < 1e-12);

        let twin = [sample(0.3, 5.0, 1.0), sample(0.3, 4.0, 2.0)];
        let (pos, vel) = resample(&twin, &[0.0]);
        assert_eq!((pos[0], vel[0]), (5.0, 1.0));
    }

    #[test]
    fn resampling_an_evenly_spaced_series_is_idempotent() {
        let ticks = time_axis(3.0, 0.05, 2.0);
        let history: Vec<HistorySample> = ticks
            .iter()
            .map(|&t| sample(t, 50.0 - 0.5 * 9.8 * t * t, 9.8 * t))
            .collect();

        let (pos, vel) = resample(&history, &ticks);
        let again: Vec<HistorySample> = ticks
            .iter()
            .zip(pos.iter().zip(vel.iter()))
            .map(|(&t, (&p, &v))| sample(t, p, v))
            .collect();
        let (pos2, vel2) = resample(&again, &ticks);

        for i in 0..ticks.len() {
            assert!((pos2[i] - history[i].position).abs() < 1e-9);
            assert!((vel2[i] - history[i].velocity).abs() < 1e-9);
        }
    }

    #[test]
    fn align_emits_one_series_per_body_per_chart() {
        let states = vec![
            SimulationState::new(BodyId::Earth, 20.0),
            SimulationState::new(BodyId::Moon, 20.0),
        ];
        let charts = align(&states, 0.05, 2.0);
        assert_eq!(charts.labels.first().map(String::as_str), Some("0.00"));
        assert_eq!(charts.labels.last().map(String::as_str), Some("2.00"));
        assert_eq!(charts.position.len(), 2);
        assert_eq!(charts.velocity.len(), 2);
        assert_eq!(charts.position[1].label, "Moon");
        assert_eq!(charts.velocity[0].color, "#1976d2");
        assert!(charts.position[0].data.iter().all(|p| *p == 20.0));
    }

    #[test]
    fn align_without_bodies_is_empty() {
        let charts = align(&[], 0.05, 2.0);
        assert!(charts.is_empty());
        assert!(charts.labels.is_empty());
        let json: serde_json::Value = serde_json::from_str(&charts.to_json()).unwrap();
        assert_eq!(json["labels"].as_array().unwrap().len(), 0);
        assert_eq!(json["titles"]["time"], "Time (s)");
    }

    #[test]
    fn chart_json_carries_axis_titles_with_units() {
        let states = vec![SimulationState::new(BodyId::Earth, 10.0)];
        let json: serde_json::Value =
            serde_json::from_str(&align(&states, 0.05, 2.0).to_json()).unwrap();
        assert_eq!(json["titles"]["time"], "Time (s)");
        assert_eq!(json["titles"]["position"], "Position (m)");
        assert_eq!(json["titles"]["velocity"], "Velocity (m/s)");
        assert!(json.get("ticks").is_none());
    }
}
