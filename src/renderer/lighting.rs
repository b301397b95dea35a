//! Lighting and material uniforms.

use glam::Vec3;

use crate::options::{ColorOptions, LightingOptions};
use crate::util::color::with_alpha;

/// Lighting configuration shared by the sphere and cylinder shaders.
///
/// Every field is a 16-byte `vec4` so the struct matches WGSL/GLSL std140
/// layout without explicit padding (80 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    /// Ambient color (rgb) and intensity (w).
    pub ambient: [f32; 4],
    /// Directional light color (rgb) and intensity (w).
    pub directional_color: [f32; 4],
    /// Unit direction toward the directional light (xyz); w = 1.0 when it
    /// casts shadows.
    pub directional_dir: [f32; 4],
    /// Point light color (rgb) and intensity (w).
    pub point_color: [f32; 4],
    /// Point light world position (xyz), w = 1.
    pub point_position: [f32; 4],
}

impl LightingUniform {
    /// Pack lighting options into the GPU layout.
    #[must_use]
    pub fn from_options(options: &LightingOptions) -> Self {
        let dir = Vec3::from_array(options.directional_position)
            .normalize_or(Vec3::Z);
        let shadows = if options.cast_shadows { 1.0 } else { 0.0 };
        Self {
            ambient: with_alpha(options.ambient_color, options.ambient_intensity),
            directional_color: with_alpha(
                options.directional_color,
                options.directional_intensity,
            ),
            directional_dir: [dir.x, dir.y, dir.z, shadows],
            point_color: with_alpha(options.point_color, options.point_intensity),
            point_position: with_alpha(options.point_position, 1.0),
        }
    }
}

/// Surface material for atoms and bonds plus the draw-mode flag.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    /// Atom base color (rgb) and shininess (w).
    pub atom: [f32; 4],
    /// Bond base color (rgb) and shininess (w).
    pub bond: [f32; 4],
    /// x = 1 for wireframe, 0 for filled; yzw unused.
    pub flags: [u32; 4],
}

impl MaterialUniform {
    /// Pack colors, shininess and the wireframe flag.
    #[must_use]
    pub fn new(
        colors: &ColorOptions,
        lighting: &LightingOptions,
        wireframe: bool,
    ) -> Self {
        Self {
            atom: with_alpha(colors.atom, lighting.atom_shininess),
            bond: with_alpha(colors.bond, lighting.bond_shininess),
            flags: [u32::from(wireframe), 0, 0, 0],
        }
    }

    /// Whether the wireframe flag is set.
    #[must_use]
    pub fn wireframe(&self) -> bool {
        self.flags[0] != 0
    }
}
