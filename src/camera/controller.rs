use glam::Vec3;

use crate::camera::core::{Camera, CameraUniform};
use crate::options::CameraOptions;

/// Fixed-direction camera that looks at a focus point from `+Z`.
///
/// The molecule itself rotates (see [`ViewState`](crate::engine::ViewState)),
/// so the controller only owns distance, aspect and projection.
#[derive(Debug, Clone)]
pub struct CameraController {
    distance: f32,
    focus_point: Vec3,
    home_distance: f32,
    min_distance: f32,
    max_distance: f32,
    zoom_in_factor: f32,
    zoom_out_factor: f32,

    /// Current camera pose and projection.
    pub camera: Camera,
}

impl CameraController {
    /// Create a controller at the home distance with the given viewport
    /// size in physical pixels.
    #[must_use]
    pub fn new(options: &CameraOptions, width: u32, height: u32) -> Self {
        let max_distance = options.max_distance.max(options.min_distance);
        let mut controller = Self {
            distance: options
                .home_distance
                .clamp(options.min_distance, max_distance),
            focus_point: Vec3::ZERO,
            home_distance: options.home_distance,
            min_distance: options.min_distance,
            max_distance,
            zoom_in_factor: options.zoom_in_factor,
            zoom_out_factor: options.zoom_out_factor,
            camera: Camera {
                eye: Vec3::new(0.0, 0.0, options.home_distance),
                target: Vec3::ZERO,
                up: Vec3::Y,
                aspect: 1.0,
                fovy: options.fovy,
                znear: options.znear,
                zfar: options.zfar,
            },
        };
        controller.resize(width, height);
        controller.update_camera_pos();
        controller
    }

    /// Re-read projection and zoom limits from options, keeping the current
    /// distance (clamped to the new limits).
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.home_distance = options.home_distance;
        self.min_distance = options.min_distance;
        self.max_distance = options.max_distance.max(options.min_distance);
        self.zoom_in_factor = options.zoom_in_factor;
        self.zoom_out_factor = options.zoom_out_factor;
        self.camera.fovy = options.fovy;
        self.camera.znear = options.znear;
        self.camera.zfar = options.zfar;
        self.distance =
            self.distance.clamp(self.min_distance, self.max_distance);
        self.update_camera_pos();
    }

    fn update_camera_pos(&mut self) {
        self.camera.eye = self.focus_point + Vec3::Z * self.distance;
        self.camera.target = self.focus_point;
        self.camera.up = Vec3::Y;
    }

    /// Current eye distance from the focus point.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// GPU uniform for the current camera state.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform::from_camera(&self.camera)
    }

    /// Update the aspect ratio. A zero-sized viewport (minimized window) is
    /// ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.camera.aspect = width as f32 / height as f32;
    }

    /// One wheel step: positive `delta` moves closer, negative farther.
    pub fn zoom(&mut self, delta: f32) {
        let factor = if delta > 0.0 {
            self.zoom_in_factor
        } else if delta < 0.0 {
            self.zoom_out_factor
        } else {
            return;
        };
        self.distance =
            (self.distance * factor).clamp(self.min_distance, self.max_distance);
        self.update_camera_pos();
    }

    /// Back to the home distance, looking at the origin.
    pub fn reset(&mut self) {
        self.focus_point = Vec3::ZERO;
        self.distance =
            self.home_distance.clamp(self.min_distance, self.max_distance);
        self.update_camera_pos();
    }

    /// Adjust camera to fit the given positions, centering on their centroid
    /// and setting distance so all points are visible.
    pub fn fit_to_positions(&mut self, positions: &[Vec3]) {
        if positions.is_empty() {
            return;
        }

        let centroid: Vec3 =
            positions.iter().copied().sum::<Vec3>() / positions.len() as f32;

        let radius = positions
            .iter()
            .map(|p| (*p - centroid).length())
            .fold(0.0f32, f32::max);

        self.focus_point = centroid;

        let fovy_rad = self.camera.fovy.to_radians();
        let fit_distance = radius / (fovy_rad / 2.0).tan();
        self.distance = (fit_distance * 1.5)
            .clamp(self.min_distance, self.max_distance);

        self.update_camera_pos();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> CameraController {
        CameraController::new(&CameraOptions::default(), 800, 600)
    }

    #[test]
    fn starts_at_home_looking_at_origin() {
        let c = controller();
        assert_eq!(c.camera.eye, Vec3::new(0.0, 0.0, 15.0));
        assert_eq!(c.camera.target, Vec3::ZERO);
        assert!((c.camera.aspect - 800.0 / 600.0).abs() < 1e-6);
        assert_eq!(c.camera.fovy, 75.0);
    }

    #[test]
    fn zoom_steps_by_factor() {
        let mut c = controller();
        c.zoom(1.0);
        assert!((c.distance() - 13.5).abs() < 1e-5);
        c.zoom(-1.0);
        assert!((c.distance() - 14.85).abs() < 1e-4);
        c.zoom(0.0);
        assert!((c.distance() - 14.85).abs() < 1e-4);
        assert!((c.camera.eye.z - c.distance()).abs() < 1e-6);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut c = controller();
        for _ in 0..200 {
            c.zoom(1.0);
        }
        assert_eq!(c.distance(), CameraOptions::default().min_distance);
        for _ in 0..500 {
            c.zoom(-1.0);
        }
        assert_eq!(c.distance(), CameraOptions::default().max_distance);
    }

    #[test]
    fn reset_restores_home() {
        let mut c = controller();
        c.zoom(1.0);
        c.fit_to_positions(&[Vec3::new(5.0, 5.0, 5.0), Vec3::new(7.0, 5.0, 5.0)]);
        c.reset();
        assert_eq!(c.camera.eye, Vec3::new(0.0, 0.0, 15.0));
        assert_eq!(c.camera.target, Vec3::ZERO);
    }

    #[test]
    fn home_outside_limits_starts_where_reset_lands() {
        let options = CameraOptions {
            home_distance: 1.0,
            ..CameraOptions::default()
        };
        let mut c = CameraController::new(&options, 800, 600);
        assert_eq!(c.distance(), options.min_distance);
        assert_eq!(c.camera.eye, Vec3::new(0.0, 0.0, options.min_distance));
        c.reset();
        assert_eq!(c.distance(), options.min_distance);
    }

    #[test]
    fn zero_height_resize_is_ignored() {
        let mut c = controller();
        c.resize(1024, 0);
        assert!((c.camera.aspect - 800.0 / 600.0).abs() < 1e-6);
        c.resize(1000, 500);
        assert_eq!(c.camera.aspect, 2.0);
    }

    #[test]
    fn fit_centers_on_centroid() {
        let mut c = controller();
        c.fit_to_positions(&[Vec3::new(-1.0, 2.0, 0.0), Vec3::new(1.0, 2.0, 0.0)]);
        assert_eq!(c.camera.target, Vec3::new(0.0, 2.0, 0.0));
        assert!(c.distance() >= CameraOptions::default().min_distance);
    }

    #[test]
    fn uniform_tracks_eye() {
        let c = controller();
        let u = c.uniform();
        assert_eq!(u.position, [0.0, 0.0, 15.0]);
        assert_eq!(u.forward, [0.0, 0.0, -1.0]);
    }
}
