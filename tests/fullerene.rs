//! End-to-end checks on generated cages and the viewer flow built on them.

use std::collections::HashSet;

use bucky::engine::{ViewerCommand, ViewerEngine};
use bucky::input::{InputEvent, MouseButton};
use bucky::molecule::{generate, Fullerene, MoleculeKind};
use bucky::options::Options;
use glam::Vec2;

#[test]
fn atom_counts_match_kind() {
    for (kind, expected) in [
        (MoleculeKind::C60, 60),
        (MoleculeKind::C70, 70),
        (MoleculeKind::C84, 84),
    ] {
        assert_eq!(generate(kind).atoms().len(), expected);
        assert_eq!(kind.atom_count(), expected);
    }
}

#[test]
fn bonds_are_ordered_valid_and_unique() {
    for kind in MoleculeKind::ALL {
        let cage = generate(kind);
        let n = cage.atoms().len() as u32;
        let mut seen = HashSet::new();
        for bond in cage.bonds() {
            assert!(bond.a < bond.b, "{kind}: {bond:?} not ordered");
            assert!(bond.b < n, "{kind}: {bond:?} out of range");
            assert!(seen.insert((bond.a, bond.b)), "{kind}: duplicate {bond:?}");
        }
    }
}

#[test]
fn threshold_partitions_all_pairs() {
    for kind in MoleculeKind::ALL {
        let cage = generate(kind);
        let threshold = cage.bond_threshold();
        let bonded: HashSet<(u32, u32)> =
            cage.bonds().iter().map(|b| (b.a, b.b)).collect();
        let atoms = cage.atoms();
        for i in 0..atoms.len() {
            for j in i + 1..atoms.len() {
                let d = atoms[i].distance(atoms[j]);
                if bonded.contains(&(i as u32, j as u32)) {
                    assert!(d < threshold, "{kind}: bond {i}-{j} at {d}");
                } else {
                    assert!(d >= threshold, "{kind}: missed pair {i}-{j} at {d}");
                }
            }
        }
    }
}

#[test]
fn generation_is_deterministic() {
    for kind in MoleculeKind::ALL {
        assert_eq!(generate(kind), generate(kind));
    }
}

#[test]
fn unknown_tag_yields_c60() {
    let fallback = Fullerene::from_tag("buckytube");
    assert_eq!(fallback, generate(MoleculeKind::C60));
    assert!("buckytube".parse::<MoleculeKind>().is_err());
    assert_eq!("C70".parse::<MoleculeKind>().ok(), Some(MoleculeKind::C70));
}

#[test]
fn c60_has_bonds() {
    let cage = generate(MoleculeKind::C60);
    assert_eq!(cage.atoms().len(), 60);
    assert!(!cage.bonds().is_empty());
}

#[test]
fn c70_is_stretched_along_y() {
    let cage = generate(MoleculeKind::C70);
    let mut flat = MoleculeKind::C70.sampling();
    flat.y_stretch = 1.0;
    for (i, atom) in cage.atoms().iter().enumerate() {
        let reference = flat.position(i);
        assert!((atom.x - reference.x).abs() < 1e-5);
        assert!((atom.y - reference.y * 1.3).abs() < 1e-4, "atom {i}");
        assert!((atom.z - reference.z).abs() < 1e-5);
    }
}

#[test]
fn json_export_lists_geometry() {
    let cage = generate(MoleculeKind::C84);
    let json = cage.to_json().expect("export");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
    assert_eq!(value["atoms"].as_array().map(Vec::len), Some(84));
    assert_eq!(
        value["bonds"].as_array().map(Vec::len),
        Some(cage.bonds().len())
    );
}

#[test]
fn viewer_session() {
    let mut engine = ViewerEngine::new(Options::default(), (1024, 768));

    // Drag right by 50 px with the left button held.
    let _ = engine.handle_input(InputEvent::CursorMoved { x: 100.0, y: 100.0 });
    let _ = engine.handle_input(InputEvent::MouseButton {
        button: MouseButton::Left,
        pressed: true,
    });
    assert!(engine.handle_input(InputEvent::CursorMoved { x: 150.0, y: 100.0 }));
    let _ = engine.handle_input(InputEvent::MouseButton {
        button: MouseButton::Left,
        pressed: false,
    });
    assert!(!engine.handle_input(InputEvent::CursorMoved { x: 200.0, y: 100.0 }));
    assert!((engine.state().target_rotation.y - 0.5).abs() < 1e-6);

    for _ in 0..300 {
        engine.update(1.0 / 60.0);
    }
    assert!((engine.state().rotation.y - 0.5).abs() < 1e-4);
    assert!(engine.state().spin > 0.0);

    engine.execute(ViewerCommand::SelectMolecule(MoleculeKind::C70));
    assert!((engine.state().rotation.y - 0.5).abs() < 1e-4);
    assert_eq!(engine.state().spin, 0.0);

    let frame = engine.prepare_frame();
    assert_eq!(frame.spheres.len(), 70);
    assert_eq!(frame.cylinders.len(), engine.molecule().bonds().len());
    assert!(!frame.wireframe);

    engine.execute(ViewerCommand::Rotate {
        delta: Vec2::new(0.0, 30.0),
    });
    engine.execute(ViewerCommand::ResetView);
    assert_eq!(engine.state().euler(), [0.0; 3]);
}
