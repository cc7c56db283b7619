use serde::Serialize;

use crate::domain::bodies::BodyId;
use crate::domain::state::SimulationState;
use crate::systems::chart::ChartData;

use super::SimulationCore;

/// Text readouts for one panel, two decimals each
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Readouts {
    pub time: String,
    pub position: String,
    pub velocity: String,
}

impl Readouts {
    pub fn from_state(state: &SimulationState) -> Self {
        Self {
            time: format!("{:.2}", state.time),
            position: format!("{:.2}", state.position.max(0.0)),
            velocity: format!("{:.2}", state.velocity),
        }
    }
}

/// Everything a panel needs to draw one body for one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BodyFrame {
    pub body: BodyId,
    pub name: &'static str,
    pub color: &'static str,
    /// Ball center in canvas pixels
    pub ball_x: f64,
    pub ball_y: f64,
    pub radius: f64,
    pub finished: bool,
    pub readouts: Readouts,
}

/// Receives drawing work from the frame driver. The browser app implements
/// it over canvases and a chart callback.
pub trait FrameSink {
    fn draw_body(&mut self, frame: &BodyFrame);

    fn update_charts(&mut self, charts: &ChartData);
}

/// Vertical pixel of the ball center: `height` maps to the top and 0 to the
/// bottom, inset by the radius so the ball never leaves the canvas.
pub fn ball_y(position: f64, height: f64, canvas_height: f64, radius: f64) -> f64 {
    let fraction = if height > 0.0 {
        (position / height).clamp(0.0, 1.0)
    } else {
        0.0
    };
    canvas_height - fraction * (canvas_height - radius * 2.0) - radius
}

pub(super) fn body_frames(core: &SimulationCore) -> Vec<BodyFrame> {
    let config = &core.config;
    let canvas_height = config.canvas_height as f64;
    let ball_x = config.canvas_width as f64 / 2.0;

    core.states
        .iter()
        .map(|state| {
            let body = state.body.body();
            BodyFrame {
                body: state.body,
                name: body.name,
                color: body.color,
                ball_x,
                ball_y: ball_y(state.position, state.height, canvas_height, config.ball_radius),
                radius: config.ball_radius,
                finished: state.finished,
                readouts: Readouts::from_state(state),
            }
        })
        .collect()
}

pub(super) fn present<S: FrameSink + ?Sized>(core: &SimulationCore, sink: &mut S) {
    for frame in body_frames(core) {
        sink.draw_body(&frame);
    }
    sink.update_charts(&core.chart_data());
}
