//! Right-hand side of the Poisson system, one vector per color channel.
//!
//! For unknown `p` with mask coordinate `(x', y')` and target coordinate
//! `(x, y) = (x' + mx, y' + my)`:
//!
//! ```text
//! b[p] = Σ_q (s(p) - s(q))  +  Σ_{q ∉ Ω} t(q)
//! ```
//!
//! where `q` runs over the four grid neighbors, `s` is the source (guidance
//! field) read in mask-local coordinates and `t` is the target read in target
//! coordinates. Source reads past the source edge clamp to the edge pixel.
use super::mask::{MaskIndex, Neighbor};
use crate::image::ImageRgbF32;
use crate::types::{Channel, Placement};
use nalgebra::DVector;

/// Guidance term for one neighbor pair: the source gradient `s(p) - s(q)`.
#[inline]
fn guidance(source_p: f32, source_q: f32) -> f64 {
    (source_p - source_q) as f64
}

/// Assemble `b` for one channel.
///
/// Expects inputs that passed [`super::placement::validate_inputs`]: every
/// neighbor of an interior pixel then lies inside the target.
pub fn assemble_rhs(
    index: &MaskIndex,
    source: &ImageRgbF32,
    target: &ImageRgbF32,
    placement: Placement,
    channel: Channel,
) -> DVector<f64> {
    let mut b = DVector::zeros(index.len());
    for (row, &(x, y)) in index.pixels().iter().enumerate() {
        let sp = source.channel(x, y, channel);
        let (tx, ty) = placement.to_target(x, y);
        let mut acc = 0.0f64;
        for neighbor in Neighbor::ALL {
            let (nx, ny) = neighbor.of(x, y);
            let sq = source.get_clamped(nx, ny).map_or(sp, |px| px[channel]);
            acc += guidance(sp, sq);

            if !index.is_interior(nx, ny) {
                let (dx, dy) = neighbor.offset();
                let qx = (tx as isize + dx) as usize;
                let qy = (ty as isize + dy) as usize;
                acc += target.channel(qx, qy, channel) as f64;
            }
        }
        b[row] = acc;
    }
    b
}
