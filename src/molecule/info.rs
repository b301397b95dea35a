//! Static descriptive metadata shown next to each cage.

use std::fmt;

use serde::Serialize;

/// Title, blurb and fact list for one cage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoleculeInfo {
    /// Display title.
    pub title: &'static str,
    /// One-paragraph description.
    pub description: &'static str,
    /// Ordered list of short facts.
    pub facts: &'static [&'static str],
}

pub(super) static C60_INFO: MoleculeInfo = MoleculeInfo {
    title: "C₆₀ (Buckminsterfullerene)",
    description: "The archetypal buckyball: a truncated-icosahedron cage of \
                  sixty carbon atoms, shaped like a soccer ball.",
    facts: &[
        "Carbon atoms: 60",
        "Pentagonal rings: 12",
        "Hexagonal rings: 20",
        "Diameter: about 1.1 nm",
    ],
};

pub(super) static C70_INFO: MoleculeInfo = MoleculeInfo {
    title: "C₇₀",
    description: "A higher fullerene with an extra belt of hexagons around \
                  its waist, giving it the shape of a rugby ball.",
    facts: &[
        "Carbon atoms: 70",
        "Pentagonal rings: 12",
        "Hexagonal rings: 25",
        "Shape: ellipsoid",
    ],
};

pub(super) static C84_INFO: MoleculeInfo = MoleculeInfo {
    title: "C₈₄",
    description: "One of the most abundant higher fullerenes after C₆₀ and \
                  C₇₀, a larger and nearly spherical cage.",
    facts: &[
        "Carbon atoms: 84",
        "Pentagonal rings: 12",
        "Hexagonal rings: 32",
        "Diameter: about 1.2 nm",
    ],
};

/// Renders as the info-panel card: title, description, then one bullet per
/// fact.
impl fmt::Display for MoleculeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.description)?;
        for fact in self.facts {
            writeln!(f, "  • {fact}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::molecule::MoleculeKind;

    #[test]
    fn every_cage_has_twelve_pentagons() {
        for kind in MoleculeKind::ALL {
            assert!(kind.info().facts.contains(&"Pentagonal rings: 12"));
        }
    }

    #[test]
    fn hexagon_count_matches_euler_formula() {
        // A closed fullerene with N atoms has N/2 - 10 hexagons.
        for kind in MoleculeKind::ALL {
            let expected =
                format!("Hexagonal rings: {}", kind.atom_count() / 2 - 10);
            assert!(kind.info().facts.iter().any(|f| *f == expected));
        }
    }

    #[test]
    fn display_lists_title_description_then_facts() {
        let info = MoleculeKind::C70.info();
        let card = info.to_string();
        let lines: Vec<&str> = card.lines().collect();
        assert_eq!(lines[0], "C₇₀");
        assert_eq!(lines[1], info.description);
        assert!(lines[2..].iter().all(|l| l.starts_with("  • ")));
        assert_eq!(lines.len(), 2 + 4);
        assert_eq!(lines[5], "  • Shape: ellipsoid");
    }
}
