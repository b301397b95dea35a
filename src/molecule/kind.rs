use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::info::{self, MoleculeInfo};
use super::sampling::{Colatitude, SamplingParams};
use crate::error::BuckyError;

/// The fullerene cages the viewer knows how to build.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum MoleculeKind {
    /// Buckminsterfullerene, 60 atoms on a sphere.
    #[default]
    C60,
    /// 70 atoms on an ellipsoid stretched along y.
    C70,
    /// 84 atoms on a larger sphere.
    C84,
}

impl MoleculeKind {
    /// Every supported cage, in menu order.
    pub const ALL: [Self; 3] = [Self::C60, Self::C70, Self::C84];

    /// Number of carbon atoms in the cage.
    #[must_use]
    pub const fn atom_count(self) -> usize {
        match self {
            Self::C60 => 60,
            Self::C70 => 70,
            Self::C84 => 84,
        }
    }

    /// Lowercase tag used in config files and on the command line.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::C60 => "c60",
            Self::C70 => "c70",
            Self::C84 => "c84",
        }
    }

    /// Sampling parameters used to place atoms and infer bonds.
    #[must_use]
    pub const fn sampling(self) -> SamplingParams {
        let (scale, y_stretch, bond_threshold) = match self {
            Self::C60 => (3.0, 1.0, 2.5),
            Self::C70 => (3.0, 1.3, 2.8),
            Self::C84 => (3.5, 1.0, 3.0),
        };
        SamplingParams {
            atom_count: self.atom_count(),
            scale,
            y_stretch,
            sweep: 1,
            colatitude: Colatitude::Linear,
            bond_threshold,
        }
    }

    /// Static display metadata for this cage.
    #[must_use]
    pub fn info(self) -> &'static MoleculeInfo {
        match self {
            Self::C60 => &info::C60_INFO,
            Self::C70 => &info::C70_INFO,
            Self::C84 => &info::C84_INFO,
        }
    }

    /// Lenient lookup: unknown tags fall back to [`MoleculeKind::C60`].
    ///
    /// This mirrors what a UI selector should do with a value it does not
    /// recognize. Use [`str::parse`] when an error is wanted instead.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|_| {
            log::warn!("unknown molecule tag '{tag}', using c60");
            Self::default()
        })
    }
}

impl FromStr for MoleculeKind {
    type Err = BuckyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let digits = lower.strip_prefix('c').unwrap_or(&lower);
        match digits {
            "60" => Ok(Self::C60),
            "70" => Ok(Self::C70),
            "84" => Ok(Self::C84),
            _ => Err(BuckyError::UnknownMolecule(s.to_owned())),
        }
    }
}

impl fmt::Display for MoleculeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::C60 => f.write_str("C60"),
            Self::C70 => f.write_str("C70"),
            Self::C84 => f.write_str("C84"),
        }
    }
}
