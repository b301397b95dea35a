//! Camera system for viewing the cage.
//!
//! Provides a perspective camera, its GPU uniform, and a controller that
//! handles zoom, reset, resize and fit-to-content.

/// Camera controller managing distance, zoom limits and projection.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;

pub use controller::CameraController;
pub use self::core::{Camera, CameraUniform};
