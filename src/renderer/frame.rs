//! Per-frame draw description handed to the presentation layer.

use glam::Mat4;

use crate::camera::{CameraController, CameraUniform};
use crate::engine::ViewState;
use crate::options::Options;
use crate::renderer::instances::{
    BallAndStickInstances, CylinderInstance, SphereInstance,
};
use crate::renderer::lighting::{LightingUniform, MaterialUniform};
use crate::util::color::with_alpha;

/// Everything needed to draw one frame.
///
/// Instance slices borrow from the engine; uniforms are copied so the
/// frame can be uploaded without holding engine state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreparedFrame<'a> {
    /// View-projection and eye data.
    pub camera: CameraUniform,
    /// Molecule rotation, applied to every instance.
    pub model: Mat4,
    /// Scene lights.
    pub lighting: LightingUniform,
    /// Atom/bond materials and draw-mode flag.
    pub material: MaterialUniform,
    /// Clear color (opaque).
    pub clear_color: [f32; 4],
    /// One sphere per atom.
    pub spheres: &'a [SphereInstance],
    /// One cylinder per bond.
    pub cylinders: &'a [CylinderInstance],
    /// Draw triangle edges instead of filled faces.
    pub wireframe: bool,
}

impl PreparedFrame<'_> {
    /// Raw sphere instance bytes.
    #[must_use]
    pub fn sphere_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.spheres)
    }

    /// Raw cylinder instance bytes.
    #[must_use]
    pub fn cylinder_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.cylinders)
    }

    /// Model matrix as column arrays for uniform upload.
    #[must_use]
    pub fn model_cols(&self) -> [[f32; 4]; 4] {
        self.model.to_cols_array_2d()
    }
}

/// Molecule rotation for the given view state.
///
/// Angles compose in X, Y, Z order: `Rx * Ry * Rz`.
#[must_use]
pub fn model_matrix(state: &ViewState) -> Mat4 {
    let [x, y, z] = state.euler();
    Mat4::from_rotation_x(x) * Mat4::from_rotation_y(y) * Mat4::from_rotation_z(z)
}

/// Assemble a frame from explicit view state and prepared instances.
#[must_use]
pub fn prepare_frame<'a>(
    state: &ViewState,
    instances: &'a BallAndStickInstances,
    camera: &CameraController,
    options: &Options,
) -> PreparedFrame<'a> {
    PreparedFrame {
        camera: camera.uniform(),
        model: model_matrix(state),
        lighting: LightingUniform::from_options(&options.lighting),
        material: MaterialUniform::new(
            &options.colors,
            &options.lighting,
            state.wireframe,
        ),
        clear_color: with_alpha(options.colors.background, 1.0),
        spheres: &instances.spheres,
        cylinders: &instances.cylinders,
        wireframe: state.wireframe,
    }
}
