use std::f32::consts::TAU;

use glam::Vec2;

use crate::molecule::MoleculeKind;
use crate::options::{DisplayOptions, InteractionOptions};

/// Reference rate the damping and spin constants are tuned for.
const REFERENCE_FPS: f32 = 60.0;

/// Explicit view and interaction state.
///
/// Rotation vectors hold `(x, y)` angles in radians: `x` tilts about the
/// screen-horizontal axis, `y` turns about the vertical axis. `spin` is the
/// z angle advanced while `animating`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Cage currently displayed.
    pub molecule: MoleculeKind,
    /// Rotation the view is easing toward.
    pub target_rotation: Vec2,
    /// Rotation currently applied.
    pub rotation: Vec2,
    /// Z rotation in `[0, 2π)`.
    pub spin: f32,
    /// Draw edges instead of filled faces.
    pub wireframe: bool,
    /// Advance `spin` every frame.
    pub animating: bool,
}

impl ViewState {
    /// Initial state from the display options, with zero rotation.
    #[must_use]
    pub fn new(display: &DisplayOptions) -> Self {
        Self {
            molecule: display.molecule,
            target_rotation: Vec2::ZERO,
            rotation: Vec2::ZERO,
            spin: 0.0,
            wireframe: display.wireframe,
            animating: display.animate,
        }
    }

    /// Accumulate a drag of `delta` pixels into the target rotation.
    ///
    /// Horizontal movement turns about y, vertical movement tilts about x.
    pub fn apply_drag(&mut self, delta: Vec2, sensitivity: f32) {
        self.target_rotation.y += delta.x * sensitivity;
        self.target_rotation.x += delta.y * sensitivity;
    }

    /// Zero target, current rotation and spin.
    pub fn reset_rotation(&mut self) {
        self.target_rotation = Vec2::ZERO;
        self.rotation = Vec2::ZERO;
        self.spin = 0.0;
    }

    /// Step the easing and spin forward by `dt` seconds.
    ///
    /// Non-finite or non-positive `dt` is ignored; large steps are clamped
    /// to `max_frame_time`, and a non-positive cap makes the step a no-op.
    pub fn advance(&mut self, dt: f32, interaction: &InteractionOptions) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let frames = dt.min(interaction.max_frame_time) * REFERENCE_FPS;
        if frames <= 0.0 || frames.is_nan() {
            return;
        }
        let keep = (1.0 - interaction.damping.clamp(0.0, 1.0)).powf(frames);
        self.rotation += (self.target_rotation - self.rotation) * (1.0 - keep);

        if self.animating {
            self.spin = (self.spin + interaction.spin_speed * frames).rem_euclid(TAU);
        }
    }

    /// Euler angles `[x, y, z]` applied in that order.
    #[must_use]
    pub fn euler(&self) -> [f32; 3] {
        [self.rotation.x, self.rotation.y, self.spin]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ViewState {
        ViewState::new(&DisplayOptions::default())
    }

    #[test]
    fn starts_at_rest() {
        let s = state();
        assert_eq!(s.molecule, MoleculeKind::C60);
        assert_eq!(s.euler(), [0.0; 3]);
        assert!(s.animating);
        assert!(!s.wireframe);
    }

    #[test]
    fn drag_maps_axes() {
        let mut s = state();
        s.apply_drag(Vec2::new(100.0, -50.0), 0.01);
        assert!((s.target_rotation.y - 1.0).abs() < 1e-6);
        assert!((s.target_rotation.x + 0.5).abs() < 1e-6);
        assert_eq!(s.rotation, Vec2::ZERO);
    }

    #[test]
    fn one_reference_frame_moves_a_tenth() {
        let mut s = state();
        s.animating = false;
        s.target_rotation = Vec2::new(1.0, 2.0);
        s.advance(1.0 / 60.0, &InteractionOptions::default());
        assert!((s.rotation.x - 0.1).abs() < 1e-5);
        assert!((s.rotation.y - 0.2).abs() < 1e-5);
    }

    #[test]
    fn damping_converges() {
        let mut s = state();
        s.target_rotation = Vec2::new(0.7, -1.3);
        for _ in 0..600 {
            s.advance(1.0 / 60.0, &InteractionOptions::default());
        }
        assert!((s.rotation - s.target_rotation).length() < 1e-4);
    }

    #[test]
    fn frame_rate_independent() {
        let options = InteractionOptions::default();
        let mut fast = state();
        let mut slow = state();
        fast.target_rotation = Vec2::ONE;
        slow.target_rotation = Vec2::ONE;
        for _ in 0..4 {
            fast.advance(1.0 / 120.0, &options);
        }
        slow.advance(1.0 / 30.0, &options);
        assert!((fast.rotation - slow.rotation).length() < 1e-5);
        assert!((fast.spin - slow.spin).abs() < 1e-6);
    }

    #[test]
    fn spin_only_while_animating() {
        let options = InteractionOptions::default();
        let mut s = state();
        s.advance(1.0 / 60.0, &options);
        assert!((s.spin - 0.005).abs() < 1e-7);

        s.animating = false;
        s.advance(1.0 / 60.0, &options);
        assert!((s.spin - 0.005).abs() < 1e-7);
    }

    #[test]
    fn bad_dt_is_ignored_and_large_dt_clamped() {
        let options = InteractionOptions::default();
        let mut s = state();
        s.target_rotation = Vec2::ONE;
        s.advance(f32::NAN, &options);
        s.advance(-1.0, &options);
        s.advance(0.0, &options);
        assert_eq!(s.rotation, Vec2::ZERO);
        assert_eq!(s.spin, 0.0);

        s.advance(10.0, &options);
        assert!((s.spin - 0.005 * 15.0).abs() < 1e-6);
    }

    #[test]
    fn negative_frame_cap_never_pushes_away() {
        let options = InteractionOptions {
            max_frame_time: -0.5,
            ..InteractionOptions::default()
        };
        let mut s = state();
        s.target_rotation = Vec2::ONE;
        s.rotation = Vec2::splat(0.5);
        s.advance(1.0 / 60.0, &options);
        assert_eq!(s.rotation, Vec2::splat(0.5));
        assert_eq!(s.spin, 0.0);
    }

    #[test]
    fn spin_wraps() {
        let mut s = state();
        s.spin = TAU - 0.001;
        s.advance(1.0 / 60.0, &InteractionOptions::default());
        assert!(s.spin >= 0.0 && s.spin < TAU);
        assert!((s.spin - 0.004).abs() < 1e-5);
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut s = state();
        s.apply_drag(Vec2::splat(10.0), 0.01);
        s.advance(0.1, &InteractionOptions::default());
        s.reset_rotation();
        assert_eq!(s.euler(), [0.0; 3]);
        assert_eq!(s.target_rotation, Vec2::ZERO);
    }
}
