use serde::{Deserialize, Serialize};

use crate::util::color::hex_rgb;

/// Color palette for the scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// RGB clear color behind the molecule.
    pub background: [f32; 3],
    /// RGB color of carbon atom spheres.
    pub atom: [f32; 3],
    /// RGB color of bond cylinders.
    pub bond: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            background: hex_rgb(0x0a_0a_0a),
            atom: hex_rgb(0x33_33_33),
            bond: hex_rgb(0x66_66_66),
        }
    }
}
