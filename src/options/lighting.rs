use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::color::hex_rgb;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// Ambient + directional key + colored point fill, plus material shininess.
pub struct LightingOptions {
    /// Ambient light color.
    #[schemars(skip)]
    pub ambient_color: [f32; 3],
    /// Ambient light intensity.
    #[schemars(title = "Ambient", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub ambient_intensity: f32,
    /// Directional light color.
    #[schemars(skip)]
    pub directional_color: [f32; 3],
    /// Directional light intensity.
    #[schemars(title = "Key Light", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub directional_intensity: f32,
    /// Directional light position; it shines toward the origin.
    #[schemars(skip)]
    pub directional_position: [f32; 3],
    /// Whether the directional light casts shadows.
    #[schemars(title = "Shadows")]
    pub cast_shadows: bool,
    /// Point light color.
    #[schemars(skip)]
    pub point_color: [f32; 3],
    /// Point light intensity.
    #[schemars(title = "Fill Light", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub point_intensity: f32,
    /// Point light position.
    #[schemars(skip)]
    pub point_position: [f32; 3],
    /// Specular exponent for atom spheres.
    #[schemars(title = "Atom Shininess", range(min = 1.0, max = 200.0), extend("step" = 1.0))]
    pub atom_shininess: f32,
    /// Specular exponent for bond cylinders.
    #[schemars(title = "Bond Shininess", range(min = 1.0, max = 200.0), extend("step" = 1.0))]
    pub bond_shininess: f32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            ambient_color: hex_rgb(0x40_40_40),
            ambient_intensity: 0.6,
            directional_color: hex_rgb(0xff_ff_ff),
            directional_intensity: 0.8,
            directional_position: [10.0, 10.0, 5.0],
            cast_shadows: true,
            point_color: hex_rgb(0xff_a7_26),
            point_intensity: 0.5,
            point_position: [-10.0, -10.0, -5.0],
            atom_shininess: 100.0,
            bond_shininess: 50.0,
        }
    }
}
