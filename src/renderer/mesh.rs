//! Unit primitive meshes for instanced ball-and-stick drawing.
//!
//! Both meshes are built once and drawn many times: the sphere once per
//! atom, the cylinder once per bond, each instance carrying its own model
//! matrix.

use std::collections::HashSet;
use std::f32::consts::{PI, TAU};

use crate::options::GeometryOptions;

/// Vertex for the unit primitive meshes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit outward normal.
    pub normal: [f32; 3],
}

/// Indexed triangle-list mesh.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,
    /// Triangle-list indices (three per triangle).
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Unit UV sphere (radius 1, centered at origin, poles on ±Y).
    ///
    /// `segments` is clamped to at least 3 and `rings` to at least 2.
    #[must_use]
    pub fn uv_sphere(segments: u32, rings: u32) -> Self {
        let segments = segments.max(3);
        let rings = rings.max(2);
        let stride = segments + 1;

        let mut vertices =
            Vec::with_capacity(((segments + 1) * (rings + 1)) as usize);
        for iy in 0..=rings {
            let v = iy as f32 / rings as f32;
            let (sin_v, cos_v) = (v * PI).sin_cos();
            for ix in 0..=segments {
                let u = ix as f32 / segments as f32;
                let (sin_u, cos_u) = (u * TAU).sin_cos();
                let p = [-cos_u * sin_v, cos_v, sin_u * sin_v];
                vertices.push(Vertex {
                    position: p,
                    normal: p,
                });
            }
        }

        // Pole rows contribute one triangle per quad instead of two.
        let mut indices = Vec::new();
        for iy in 0..rings {
            for ix in 0..segments {
                let a = iy * stride + ix + 1;
                let b = iy * stride + ix;
                let c = (iy + 1) * stride + ix;
                let d = (iy + 1) * stride + ix + 1;
                if iy != 0 {
                    indices.extend_from_slice(&[a, b, d]);
                }
                if iy != rings - 1 {
                    indices.extend_from_slice(&[b, c, d]);
                }
            }
        }

        Self { vertices, indices }
    }

    /// Unit open cylinder (radius 1, height 1, Y-axis aligned, centered at
    /// origin).
    ///
    /// `radial_segments` is clamped to at least 3.
    #[must_use]
    pub fn unit_cylinder(radial_segments: u32) -> Self {
        let segments = radial_segments.max(3);
        let mut vertices = Vec::with_capacity(segments as usize * 2);
        let mut indices = Vec::with_capacity(segments as usize * 6);

        for i in 0..segments {
            let angle = (i as f32 / segments as f32) * TAU;
            let (sin_a, cos_a) = angle.sin_cos();
            let normal = [cos_a, 0.0, sin_a];

            vertices.push(Vertex {
                position: [cos_a, -0.5, sin_a],
                normal,
            });
            vertices.push(Vertex {
                position: [cos_a, 0.5, sin_a],
                normal,
            });
        }

        for i in 0..segments {
            let i_next = (i + 1) % segments;

            let v0 = i * 2; // bottom current
            let v1 = i * 2 + 1; // top current
            let v2 = i_next * 2; // bottom next
            let v3 = i_next * 2 + 1; // top next

            indices.extend_from_slice(&[v0, v2, v1]);
            indices.extend_from_slice(&[v1, v2, v3]);
        }

        Self { vertices, indices }
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Line-list indices covering every unique triangle edge once, in
    /// first-seen order.
    #[must_use]
    pub fn wireframe_indices(&self) -> Vec<u32> {
        let mut seen = HashSet::new();
        let mut lines = Vec::new();
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])]
            {
                if seen.insert((a.min(b), a.max(b))) {
                    lines.extend_from_slice(&[a, b]);
                }
            }
        }
        lines
    }

    /// Raw vertex bytes for GPU upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes for GPU upload.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// The two unit meshes every frame instances from.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveMeshes {
    /// Atom sphere.
    pub sphere: Mesh,
    /// Bond cylinder.
    pub cylinder: Mesh,
}

impl PrimitiveMeshes {
    /// Tessellate both primitives at the configured detail.
    #[must_use]
    pub fn from_options(geometry: &GeometryOptions) -> Self {
        Self {
            sphere: Mesh::uv_sphere(
                geometry.sphere_segments,
                geometry.sphere_rings,
            ),
            cylinder: Mesh::unit_cylinder(geometry.cylinder_segments),
        }
    }
}
