//! Distance-threshold bond inference.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// An unordered pair of atom indices, stored with `a < b`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub struct Bond {
    /// Lower atom index.
    pub a: u32,
    /// Higher atom index.
    pub b: u32,
}

impl Bond {
    /// Build a bond from two indices in either order. Returns `None` for a
    /// self-pair.
    #[must_use]
    pub fn new(i: u32, j: u32) -> Option<Self> {
        match i.cmp(&j) {
            std::cmp::Ordering::Less => Some(Self { a: i, b: j }),
            std::cmp::Ordering::Greater => Some(Self { a: j, b: i }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Both end positions, or `None` if either index is out of range.
    #[must_use]
    pub fn endpoints(&self, atoms: &[Vec3]) -> Option<(Vec3, Vec3)> {
        let start = atoms.get(self.a as usize)?;
        let end = atoms.get(self.b as usize)?;
        Some((*start, *end))
    }

    /// Bond length, or `None` if either index is out of range.
    #[must_use]
    pub fn length(&self, atoms: &[Vec3]) -> Option<f32> {
        self.endpoints(atoms).map(|(start, end)| start.distance(end))
    }
}

/// Bond every pair of atoms strictly closer than `threshold`.
///
/// All-pairs scan in `(i, j)` lexicographic order with `i < j`; the cages
/// are small enough (at most a few thousand pairs) that no spatial index
/// is needed.
#[must_use]
pub fn infer_bonds(atoms: &[Vec3], threshold: f32) -> Vec<Bond> {
    let mut bonds = Vec::new();
    for (i, pos_i) in atoms.iter().enumerate() {
        for (j, pos_j) in atoms.iter().enumerate().skip(i + 1) {
            if pos_i.distance(*pos_j) < threshold {
                bonds.push(Bond {
                    a: i as u32,
                    b: j as u32,
                });
            }
        }
    }
    bonds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_orders_indices() {
        assert_eq!(Bond::new(5, 2), Some(Bond { a: 2, b: 5 }));
        assert_eq!(Bond::new(2, 5), Some(Bond { a: 2, b: 5 }));
        assert_eq!(Bond::new(3, 3), None);
    }

    #[test]
    fn threshold_is_strict() {
        // 0-1 is 1.0 apart, 1-2 exactly 2.0, 0-2 is 3.0.
        let atoms = [Vec3::ZERO, Vec3::X, Vec3::new(3.0, 0.0, 0.0)];
        let bonds = infer_bonds(&atoms, 2.0);
        assert_eq!(bonds, vec![Bond { a: 0, b: 1 }]);

        let looser = infer_bonds(&atoms, 2.5);
        assert_eq!(looser, vec![Bond { a: 0, b: 1 }, Bond { a: 1, b: 2 }]);
    }

    #[test]
    fn out_of_range_endpoints_are_none() {
        let atoms = [Vec3::ZERO, Vec3::X];
        let bond = Bond { a: 0, b: 7 };
        assert!(bond.endpoints(&atoms).is_none());
        assert!(bond.length(&atoms).is_none());
    }

    #[test]
    fn empty_and_single_atom_inputs_have_no_bonds() {
        assert!(infer_bonds(&[], 10.0).is_empty());
        assert!(infer_bonds(&[Vec3::ONE], 10.0).is_empty());
    }
}
