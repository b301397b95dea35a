use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and zoom parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Eye distance from the origin on reset.
    #[schemars(title = "Home Distance", range(min = 2.0, max = 100.0), extend("step" = 0.5))]
    pub home_distance: f32,
    /// Closest allowed eye distance.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest allowed eye distance.
    #[schemars(skip)]
    pub max_distance: f32,
    /// Distance multiplier for one zoom-in step.
    #[schemars(title = "Zoom In Factor", range(min = 0.5, max = 0.99), extend("step" = 0.01))]
    pub zoom_in_factor: f32,
    /// Distance multiplier for one zoom-out step.
    #[schemars(title = "Zoom Out Factor", range(min = 1.01, max = 2.0), extend("step" = 0.01))]
    pub zoom_out_factor: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            home_distance: 15.0,
            min_distance: 2.0,
            max_distance: 500.0,
            zoom_in_factor: 0.9,
            zoom_out_factor: 1.1,
        }
    }
}
