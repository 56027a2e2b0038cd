//! Writes the solved channels back into an RGBA byte buffer.
use super::mask::MaskIndex;
use crate::gamma::Gamma;
use crate::image::{ImageRgbF32, ImageRgbaU8, ImageView};
use crate::types::Placement;
use nalgebra::DVector;

/// Re-encode the whole target: `v^gamma · 255` per channel, alpha 255.
/// Target values are not clamped; the byte cast saturates.
pub fn encode_target(target: &ImageRgbF32, gamma: Gamma) -> ImageRgbaU8 {
    let mut out = ImageRgbaU8::new(target.w, target.h);
    for (x, y, px) in target.enumerate_pixels() {
        let [r, g, b] = px.0.map(|v| gamma.encode_u8(v));
        out.set_pixel(x, y, [r, g, b, u8::MAX]);
    }
    out
}

/// Overwrite the color bytes of every interior pixel with its solved value,
/// clamped to [0, 1] before gamma encoding. Returns how many channel values
/// were clamped.
pub fn write_solutions(
    out: &mut ImageRgbaU8,
    index: &MaskIndex,
    placement: Placement,
    solutions: [&DVector<f64>; 3],
    gamma: Gamma,
) -> [usize; 3] {
    let mut clamped = [0usize; 3];
    for (i, &(x, y)) in index.pixels().iter().enumerate() {
        let mut rgb = [0u8; 3];
        for (c, solution) in solutions.iter().enumerate() {
            let v = solution[i] as f32;
            if !(0.0..=1.0).contains(&v) {
                clamped[c] += 1;
            }
            rgb[c] = gamma.encode_clamped_u8(v);
        }
        let (tx, ty) = placement.to_target(x, y);
        out.set_rgb(tx, ty, rgb);
    }
    clamped
}
