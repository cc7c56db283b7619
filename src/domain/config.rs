use serde::{Deserialize, Serialize};

use super::bodies::BodyId;

pub const DEFAULT_HEIGHT: f64 = 10.0;
pub const DEFAULT_CANVAS_WIDTH: u32 = 120;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 240;
pub const DEFAULT_BALL_RADIUS: f64 = 12.0;
/// Spacing of the shared chart time axis (s)
pub const DEFAULT_CHART_STEP: f64 = 0.05;
/// The chart axis always spans at least this long (s)
pub const DEFAULT_MIN_CHART_SPAN: f64 = 2.0;

/// Run configuration. Every field is optional in JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Drop height (m)
    pub height: f64,
    /// Selected bodies, in panel order
    pub bodies: Vec<BodyId>,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub ball_radius: f64,
    pub chart_step: f64,
    pub min_chart_span: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            bodies: vec![BodyId::Earth],
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            ball_radius: DEFAULT_BALL_RADIUS,
            chart_step: DEFAULT_CHART_STEP,
            min_chart_span: DEFAULT_MIN_CHART_SPAN,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let mut config: SimConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        config.dedup_bodies();
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// A degenerate height is allowed (it yields an empty run); rendering
    /// and charting parameters are not.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.chart_step.is_finite() && self.chart_step > 0.0) {
            return Err(format!("chart_step must be positive, got {}", self.chart_step));
        }
        if !(self.min_chart_span.is_finite() && self.min_chart_span >= 0.0) {
            return Err(format!(
                "min_chart_span must be non-negative, got {}",
                self.min_chart_span
            ));
        }
        if self.canvas_height == 0 || self.canvas_width == 0 {
            return Err("canvas dimensions must be non-zero".to_string());
        }
        if !(self.ball_radius.is_finite() && self.ball_radius >= 0.0) {
            return Err(format!("ball_radius must be non-negative, got {}", self.ball_radius));
        }
        if self.ball_radius * 2.0 > self.canvas_height as f64 {
            return Err(format!(
                "ball diameter {} does not fit a {}px canvas",
                self.ball_radius * 2.0,
                self.canvas_height
            ));
        }
        Ok(())
    }

    /// Whether a run with this config has anything to animate.
    pub fn is_runnable(&self) -> bool {
        self.height.is_finite() && self.height > 0.0 && !self.bodies.is_empty()
    }

    pub(crate) fn dedup_bodies(&mut self) {
        let mut seen = Vec::with_capacity(self.bodies.len());
        self.bodies.retain(|id| {
            if seen.contains(id) {
                false
            } else {
                seen.push(*id);
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let config = SimConfig::from_json("{}").unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn parses_bodies_by_key_and_drops_duplicates() {
        let config =
            SimConfig::from_json(r#"{"height": 20, "bodies": ["earth", "moon", "earth"]}"#).unwrap();
        assert_eq!(config.height, 20.0);
        assert_eq!(config.bodies, vec![BodyId::Earth, BodyId::Moon]);
    }

    #[test]
    fn rejects_unknown_body() {
        let err = SimConfig::from_json(r#"{"bodies": ["pluto"]}"#).unwrap_err();
        assert!(err.contains("unknown body key 'pluto'"), "{err}");
    }

    #[test]
    fn body_keys_in_config_ignore_case_and_padding() {
        let config = SimConfig::from_json(r#"{"bodies": ["Earth", " MOON "]}"#).unwrap();
        assert_eq!(config.bodies, vec![BodyId::Earth, BodyId::Moon]);
        // Written back in canonical form
        assert!(config.to_json().contains(r#""bodies":["earth","moon"]"#));
    }

    #[test]
    fn rejects_zero_chart_step() {
        let err = SimConfig::from_json(r#"{"chart_step": 0}"#).unwrap_err();
        assert!(err.contains("chart_step"));
    }

    #[test]
    fn degenerate_height_parses_but_is_not_runnable() {
        let config = SimConfig::from_json(r#"{"height": -3}"#).unwrap();
        assert!(!config.is_runnable());
        let config = SimConfig::from_json(r#"{"bodies": []}"#).unwrap();
        assert!(!config.is_runnable());
    }

    #[test]
    fn to_json_round_trips_through_from_json() {
        let mut config = SimConfig::default();
        config.bodies.push(BodyId::Saturn);
        let back = SimConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(back, config);
    }
}
