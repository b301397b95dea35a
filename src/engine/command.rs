//! The viewer's complete interactive vocabulary.
//!
//! Key presses, mouse gestures and programmatic calls all reduce to a
//! [`ViewerCommand`] passed to
//! [`ViewerEngine::execute`](super::ViewerEngine::execute).

use glam::Vec2;

use crate::molecule::MoleculeKind;

/// A discrete or parameterized operation the engine can perform.
///
/// ```ignore
/// engine.execute(ViewerCommand::SelectMolecule(MoleculeKind::C70));
/// engine.execute(ViewerCommand::Zoom { delta: 1.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerCommand {
    // ── Structure ───────────────────────────────────────────────────
    /// Replace the displayed cage with a freshly generated one.
    SelectMolecule(MoleculeKind),

    // ── View ────────────────────────────────────────────────────────
    /// Zero rotation and spin, return the camera home.
    ResetView,

    /// Toggle between filled and wireframe drawing.
    ToggleWireframe,

    /// Toggle the continuous z-axis spin.
    ToggleAnimation,

    /// Rotate the cage by `delta` pixels of drag movement.
    Rotate {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Zoom the camera (positive = zoom in, negative = zoom out).
    Zoom {
        /// Scroll amount; only the sign matters.
        delta: f32,
    },

    /// Viewport changed size, in physical pixels.
    Resize {
        /// New width.
        width: u32,
        /// New height.
        height: u32,
    },
}
