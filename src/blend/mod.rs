//! Poisson image blending over a masked region.
//!
//! Overview
//! - Validates that the mask sits strictly inside the target with a one-pixel
//!   margin, so every interior pixel has four grid neighbors.
//! - Indexes interior mask pixels (red > threshold) as unknowns in row-major
//!   order.
//! - Assembles the 5-point Laplacian over the unknowns once and factorizes it
//!   with a sparse Cholesky decomposition.
//! - For each color channel, builds the right-hand side from source gradients
//!   plus target values on the boundary, and solves with the cached factor.
//! - Re-encodes the target with gamma and overwrites the interior with the
//!   clamped, gamma-encoded solution.
//!
//! Modules
//! - [`placement`] – margin check run before any matrix work.
//! - [`mask`] – interior predicate, unknown index and stencil neighbors.
//! - [`system`] – coefficient matrix assembly.
//! - [`rhs`] – per-channel right-hand side assembly.
//! - [`solver`] – factorize once, solve many.
//! - [`composite`] – output buffer encoding.
//! - `pipeline` – the [`PoissonBlender`] tying the stages together.

pub mod composite;
pub mod error;
pub mod mask;
pub mod params;
mod pipeline;
pub mod placement;
pub mod rhs;
pub mod solver;
pub mod system;

pub use error::BlendError;
pub use mask::{MaskIndex, Neighbor};
pub use params::{BlendParams, DEFAULT_MASK_THRESHOLD};
pub use pipeline::{blend, BlendInputs, PoissonBlender};
pub use solver::{FactoredSystem, SolveError};
