use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::molecule::MoleculeKind;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Startup molecule and display toggles.
pub struct DisplayOptions {
    /// Cage shown when the viewer starts.
    #[schemars(title = "Molecule")]
    pub molecule: MoleculeKind,
    /// Draw meshes as wireframes.
    #[schemars(title = "Wireframe")]
    pub wireframe: bool,
    /// Spin the cage slowly about z.
    #[schemars(title = "Animate")]
    pub animate: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            molecule: MoleculeKind::C60,
            wireframe: false,
            animate: true,
        }
    }
}
