//! Packed `0xRRGGBB` color helpers.

/// Unpack `0xRRGGBB` into linear-range `[r, g, b]` floats in `0.0..=1.0`.
#[must_use]
pub fn hex_rgb(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    [channel(16), channel(8), channel(0)]
}

/// Extend an RGB triple with an alpha channel.
#[must_use]
pub fn with_alpha(rgb: [f32; 3], alpha: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], alpha]
}
