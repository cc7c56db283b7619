//! Per-body fall state

use super::bodies::BodyId;

/// One recorded `(time, position, velocity)` triple, used only for charting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistorySample {
    pub time: f64,
    pub position: f64,
    pub velocity: f64,
}

/// Mutable state of one body's drop. Owned by the simulation core and
/// replaced wholesale on every reset.
#[derive(Clone, Debug)]
pub struct SimulationState {
    pub body: BodyId,
    /// Drop height (m), fixed for the run
    pub height: f64,
    /// Copied from the body at initialization (m/s²)
    pub gravity: f64,
    /// Elapsed simulation time (s)
    pub time: f64,
    pub velocity: f64,
    /// Height above ground (m), clamped to 0
    pub position: f64,
    pub finished: bool,
    /// Frame timestamp (ms) this body was last advanced at; `None` until the
    /// first frame of a run
    pub last_frame_timestamp: Option<f64>,
    /// Strictly increasing in `time`; frozen once `finished`
    pub history: Vec<HistorySample>,
}

impl SimulationState {
    pub fn new(body: BodyId, height: f64) -> Self {
        Self {
            body,
            height,
            gravity: body.body().gravity,
            time: 0.0,
            velocity: 0.0,
            position: height,
            finished: false,
            last_frame_timestamp: None,
            history: vec![HistorySample {
                time: 0.0,
                position: height,
                velocity: 0.0,
            }],
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        !self.finished
    }

    pub fn last_sample(&self) -> Option<&HistorySample> {
        self.history.last()
    }
}
