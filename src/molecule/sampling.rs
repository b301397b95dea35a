//! Parametric placement of atoms on a sphere or y-stretched ellipsoid.
//!
//! Atom `i` of `N` gets a longitude `θ = (i/N)·2π·sweep` and a colatitude
//! `φ` from one of the [`Colatitude`] rules, then lands at
//! `(s·sinφ·cosθ, s·sinφ·sinθ·stretch, s·cosφ)`.
//!
//! The result is a decorative cage, not a real fullerene lattice.

use std::f64::consts::TAU;

use glam::Vec3;

/// How the colatitude angle is derived from the atom index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colatitude {
    /// `φ = acos(−1 + 2i/N)`: one pass from the south pole to the north.
    Linear,
    /// `φ = acos(1 − 2·(i mod m)/m)`: `N/m` bands, each sweeping from the
    /// north pole downward.
    Banded {
        /// Atoms per band (`m`). Zero is treated as one.
        modulus: u32,
    },
}

/// Per-cage sampling and bonding parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    /// Number of atoms to place.
    pub atom_count: usize,
    /// Radius of the sampled sphere.
    pub scale: f32,
    /// Multiplier on the y axis (1.0 for a sphere).
    pub y_stretch: f32,
    /// Integer longitude sweep multiplier (`k`).
    pub sweep: u32,
    /// Colatitude rule.
    pub colatitude: Colatitude,
    /// Pairs strictly closer than this are bonded.
    pub bond_threshold: f32,
}

impl SamplingParams {
    /// Longitude and colatitude (radians) for atom `index`.
    #[must_use]
    pub fn angles(&self, index: usize) -> (f64, f64) {
        let n = self.atom_count.max(1) as f64;
        let i = index as f64;
        let theta = (i / n) * TAU * f64::from(self.sweep);
        let cos_phi = match self.colatitude {
            Colatitude::Linear => -1.0 + (2.0 * i) / n,
            Colatitude::Banded { modulus } => {
                let m = u64::from(modulus.max(1));
                let step = (index as u64 % m) as f64;
                1.0 - 2.0 * step / m as f64
            }
        };
        (theta, cos_phi.clamp(-1.0, 1.0).acos())
    }

    /// Cartesian position of atom `index`.
    #[must_use]
    pub fn position(&self, index: usize) -> Vec3 {
        let (theta, phi) = self.angles(index);
        let scale = f64::from(self.scale);
        let x = scale * phi.sin() * theta.cos();
        let y = scale * phi.sin() * theta.sin() * f64::from(self.y_stretch);
        let z = scale * phi.cos();
        Vec3::new(x as f32, y as f32, z as f32)
    }

    /// Positions of every atom, in index order.
    #[must_use]
    pub fn positions(&self) -> Vec<Vec3> {
        (0..self.atom_count).map(|i| self.position(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere(atom_count: usize, colatitude: Colatitude) -> SamplingParams {
        SamplingParams {
            atom_count,
            scale: 3.0,
            y_stretch: 1.0,
            sweep: 1,
            colatitude,
            bond_threshold: 2.5,
        }
    }

    #[test]
    fn linear_sampling_starts_at_south_pole() {
        let params = sphere(60, Colatitude::Linear);
        let first = params.position(0);
        assert!(first.x.abs() < 1e-6);
        assert!(first.y.abs() < 1e-6);
        assert!((first.z + 3.0).abs() < 1e-6);
    }

    #[test]
    fn unstretched_points_lie_on_the_sphere() {
        let params = sphere(84, Colatitude::Linear);
        for p in params.positions() {
            assert!((p.length() - 3.0).abs() < 1e-4, "{p:?}");
        }
    }

    #[test]
    fn banded_sampling_restarts_each_band() {
        let params = sphere(60, Colatitude::Banded { modulus: 20 });
        let (_, phi_0) = params.angles(0);
        let (_, phi_20) = params.angles(20);
        assert!(phi_0.abs() < 1e-12);
        assert!((phi_0 - phi_20).abs() < 1e-12);
        assert!(params.angles(10).1 > phi_0);
    }

    #[test]
    fn zero_modulus_does_not_divide_by_zero() {
        let params = sphere(10, Colatitude::Banded { modulus: 0 });
        assert!(params.positions().iter().all(|p| p.is_finite()));
    }

    #[test]
    fn sweep_multiplies_longitude() {
        let mut params = sphere(60, Colatitude::Linear);
        let (theta_1, _) = params.angles(7);
        params.sweep = 3;
        let (theta_3, _) = params.angles(7);
        assert!((theta_3 - 3.0 * theta_1).abs() < 1e-12);
    }

    #[test]
    fn empty_sampling_yields_no_points() {
        assert!(sphere(0, Colatitude::Linear).positions().is_empty());
    }
}
