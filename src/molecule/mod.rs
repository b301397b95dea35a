//! Procedural fullerene geometry.
//!
//! A [`Fullerene`] is generated from a [`MoleculeKind`] by sampling atom
//! positions on a sphere (or, for C70, a y-stretched ellipsoid) and bonding
//! every pair closer than the cage's threshold. Generation is a pure
//! function of the kind: same kind in, identical atoms and bonds out.

mod bonds;
mod info;
mod kind;
mod sampling;

pub use bonds::{infer_bonds, Bond};
use glam::Vec3;
pub use info::MoleculeInfo;
pub use kind::MoleculeKind;
pub use sampling::{Colatitude, SamplingParams};
use serde::Serialize;

use crate::error::BuckyError;

/// Atoms, bonds and metadata for one generated cage.
///
/// Never mutated after construction; switching molecules builds a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Fullerene {
    kind: MoleculeKind,
    atoms: Vec<Vec3>,
    bonds: Vec<Bond>,
}

/// Serialized shape of [`Fullerene::to_json`].
#[derive(Serialize)]
struct FullereneExport<'a> {
    kind: MoleculeKind,
    info: &'a MoleculeInfo,
    bond_threshold: f32,
    atoms: &'a [Vec3],
    bonds: &'a [Bond],
}

/// Generate the cage for `kind`.
#[must_use]
pub fn generate(kind: MoleculeKind) -> Fullerene {
    let params = kind.sampling();
    let atoms = params.positions();
    let bonds = infer_bonds(&atoms, params.bond_threshold);
    log::debug!(
        "generated {kind}: {} atoms, {} bonds (threshold {})",
        atoms.len(),
        bonds.len(),
        params.bond_threshold
    );
    Fullerene { kind, atoms, bonds }
}

impl Fullerene {
    /// Generate the cage for `kind`.
    #[must_use]
    pub fn new(kind: MoleculeKind) -> Self {
        generate(kind)
    }

    /// Generate from a selector string, falling back to C60 for anything
    /// unrecognized.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        generate(MoleculeKind::from_tag(tag))
    }

    /// Which cage this is.
    #[must_use]
    pub fn kind(&self) -> MoleculeKind {
        self.kind
    }

    /// Atom positions in generation order.
    #[must_use]
    pub fn atoms(&self) -> &[Vec3] {
        &self.atoms
    }

    /// Bonds, each with `a < b < atom_count`.
    #[must_use]
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Static metadata for the cage.
    #[must_use]
    pub fn info(&self) -> &'static MoleculeInfo {
        self.kind.info()
    }

    /// Distance below which atoms were bonded.
    #[must_use]
    pub fn bond_threshold(&self) -> f32 {
        self.kind.sampling().bond_threshold
    }

    /// Mean atom position.
    #[must_use]
    pub fn centroid(&self) -> Vec3 {
        if self.atoms.is_empty() {
            return Vec3::ZERO;
        }
        self.atoms.iter().copied().sum::<Vec3>() / self.atoms.len() as f32
    }

    /// Largest distance from the centroid to any atom center.
    #[must_use]
    pub fn bounding_radius(&self) -> f32 {
        let centroid = self.centroid();
        self.atoms
            .iter()
            .map(|p| p.distance(centroid))
            .fold(0.0_f32, f32::max)
    }

    /// Pretty-printed JSON with kind, metadata, atoms and bonds.
    pub fn to_json(&self) -> Result<String, BuckyError> {
        let export = FullereneExport {
            kind: self.kind,
            info: self.info(),
            bond_threshold: self.bond_threshold(),
            atoms: &self.atoms,
            bonds: &self.bonds,
        };
        Ok(serde_json::to_string_pretty(&export)?)
    }
}
