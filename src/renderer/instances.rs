//! Per-atom sphere and per-bond cylinder instance data.
//!
//! Instances are built in the molecule's local frame; the frame's model
//! matrix carries the view rotation.

use glam::{Mat4, Quat, Vec3};

use crate::molecule::Fullerene;
use crate::options::{ColorOptions, GeometryOptions};
use crate::util::color::with_alpha;

/// Per-instance data for the unit sphere mesh.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereInstance {
    /// Model matrix to transform unit sphere (4x4 = 16 floats)
    pub model: [[f32; 4]; 4],
    /// RGBA color
    pub color: [f32; 4],
}

/// Per-instance data for the unit cylinder mesh.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CylinderInstance {
    /// Model matrix to transform unit cylinder (4x4 = 16 floats)
    pub model: [[f32; 4]; 4],
    /// RGBA color
    pub color: [f32; 4],
}

/// Instance lists for one cage.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BallAndStickInstances {
    /// One per atom, in atom order.
    pub spheres: Vec<SphereInstance>,
    /// One per non-degenerate bond, in bond order.
    pub cylinders: Vec<CylinderInstance>,
}

/// Transform placing the unit cylinder between `start` and `end`.
///
/// The cylinder's local Y axis maps onto the bond, its height onto the
/// bond length and its unit radius onto `radius`. Returns `None` for a
/// zero-length bond.
#[must_use]
pub fn cylinder_transform(start: Vec3, end: Vec3, radius: f32) -> Option<Mat4> {
    let diff = end - start;
    let length = diff.length();
    if length < 1e-6 {
        return None;
    }

    let rotation = Quat::from_rotation_arc(Vec3::Y, diff / length);
    let center = (start + end) * 0.5;
    Some(Mat4::from_scale_rotation_translation(
        Vec3::new(radius, length, radius),
        rotation,
        center,
    ))
}

/// Transform placing the unit sphere at `center` with `radius`.
#[must_use]
pub fn sphere_transform(center: Vec3, radius: f32) -> Mat4 {
    Mat4::from_scale_rotation_translation(
        Vec3::splat(radius),
        Quat::IDENTITY,
        center,
    )
}

impl BallAndStickInstances {
    /// Build instances for every atom and bond of `molecule`.
    #[must_use]
    pub fn generate(
        molecule: &Fullerene,
        geometry: &GeometryOptions,
        colors: &ColorOptions,
    ) -> Self {
        let atom_color = with_alpha(colors.atom, 1.0);
        let bond_color = with_alpha(colors.bond, 1.0);
        let atoms = molecule.atoms();

        let spheres = atoms
            .iter()
            .map(|&pos| SphereInstance {
                model: sphere_transform(pos, geometry.atom_radius)
                    .to_cols_array_2d(),
                color: atom_color,
            })
            .collect();

        let cylinders = molecule
            .bonds()
            .iter()
            .filter_map(|bond| {
                let (start, end) = bond.endpoints(atoms)?;
                let model =
                    cylinder_transform(start, end, geometry.bond_radius)?;
                Some(CylinderInstance {
                    model: model.to_cols_array_2d(),
                    color: bond_color,
                })
            })
            .collect();

        Self { spheres, cylinders }
    }

    /// Raw sphere instance bytes for GPU upload.
    #[must_use]
    pub fn sphere_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.spheres)
    }

    /// Raw cylinder instance bytes for GPU upload.
    #[must_use]
    pub fn cylinder_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cylinders)
    }
}
