use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
/// Sizes and tessellation of the ball-and-stick primitives.
pub struct GeometryOptions {
    /// Atom sphere radius.
    #[schemars(title = "Atom Radius", range(min = 0.05, max = 1.0), extend("step" = 0.01))]
    pub atom_radius: f32,
    /// Bond cylinder radius.
    #[schemars(title = "Bond Radius", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub bond_radius: f32,
    /// Longitude segments of the atom sphere mesh.
    #[schemars(skip)]
    pub sphere_segments: u32,
    /// Latitude rings of the atom sphere mesh.
    #[schemars(skip)]
    pub sphere_rings: u32,
    /// Radial segments of the bond cylinder mesh.
    #[schemars(skip)]
    pub cylinder_segments: u32,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            atom_radius: 0.3,
            bond_radius: 0.1,
            sphere_segments: 16,
            sphere_rings: 16,
            cylinder_segments: 8,
        }
    }
}
