use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Interaction", inline)]
#[serde(default)]
/// Drag rotation, damping and idle spin parameters.
///
/// Rates are expressed per 60 Hz frame; the engine rescales them by the
/// actual frame time.
pub struct InteractionOptions {
    /// Radians of target rotation per pixel of drag.
    #[schemars(title = "Rotate Sensitivity", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub rotate_sensitivity: f32,
    /// Fraction of the remaining rotation covered each frame.
    #[schemars(title = "Damping", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub damping: f32,
    /// Radians of z spin per frame while animation is on.
    #[schemars(title = "Spin Speed", range(min = 0.0, max = 0.05), extend("step" = 0.001))]
    pub spin_speed: f32,
    /// Longest frame time honoured by one update, in seconds.
    #[schemars(skip)]
    pub max_frame_time: f32,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            rotate_sensitivity: 0.01,
            damping: 0.1,
            spin_speed: 0.005,
            max_frame_time: 0.25,
        }
    }
}
