#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod blend;
pub mod config;
pub mod diagnostics;
pub mod gamma;
pub mod image;
pub mod types;

// --- High-level re-exports -------------------------------------------------

// Main entry points: blender + errors.
pub use crate::blend::{blend, BlendError, BlendInputs, BlendParams, PoissonBlender};
pub use crate::types::{Channel, Placement};

// Diagnostics returned by the blender.
pub use crate::diagnostics::{BlendReport, DetailedBlend};

pub use crate::gamma::{Gamma, DEFAULT_GAMMA};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use poisson_blend::prelude::*;
///
/// # fn main() {
/// let target = ImageRgbF32::filled(64, 64, Rgb::splat(0.2));
/// let source = ImageRgbF32::filled(16, 16, Rgb::splat(0.8));
/// let mask = ImageRgbF32::filled(16, 16, Rgb::splat(1.0));
///
/// let blender = PoissonBlender::new(BlendParams::default());
/// let inputs = BlendInputs { mask: &mask, source: &source, target: &target };
/// let out = blender.blend(inputs, Placement::new(24, 24)).expect("blend");
/// println!("{}x{} RGBA", out.w, out.h);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageRgbF32, ImageRgbaU8, Rgb};
    pub use crate::{BlendError, BlendInputs, BlendParams, Placement, PoissonBlender};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    pub use crate::blend::composite::{encode_target, write_solutions};
    pub use crate::blend::placement::{validate_inputs, validate_placement};
    pub use crate::blend::rhs::assemble_rhs;
    pub use crate::blend::system::assemble_matrix;
    pub use crate::blend::{FactoredSystem, MaskIndex, Neighbor, SolveError};
}
