//! Shared utilities: packed-color conversion and frame timing.

pub mod color;
/// Delta-time and smoothed FPS measurement.
pub mod frame_timing;
