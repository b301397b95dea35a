//! CPU-side render preparation for ball-and-stick cages.
//!
//! Produces unit primitive meshes, per-atom and per-bond instance data,
//! lighting/material uniforms, and a [`PreparedFrame`] describing one draw.
//! All GPU-facing types are `Pod` so a presentation layer can upload them
//! directly.

pub mod frame;
pub mod instances;
pub mod lighting;
pub mod mesh;

pub use frame::{model_matrix, prepare_frame, PreparedFrame};
pub use instances::{BallAndStickInstances, CylinderInstance, SphereInstance};
pub use lighting::{LightingUniform, MaterialUniform};
pub use mesh::{Mesh, PrimitiveMeshes, Vertex};
