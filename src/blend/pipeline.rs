//! Blend pipeline orchestrating validation, assembly, factorization, the three
//! channel solves and compositing.
//!
//! Typical usage:
//! ```no_run
//! use poisson_blend::{BlendInputs, BlendParams, Placement, PoissonBlender};
//! use poisson_blend::image::ImageRgbF32;
//!
//! # fn example(mask: ImageRgbF32, source: ImageRgbF32, target: ImageRgbF32) {
//! let blender = PoissonBlender::new(BlendParams::default());
//! let inputs = BlendInputs { mask: &mask, source: &source, target: &target };
//! match blender.blend_with_diagnostics(inputs, Placement::new(10, 20)) {
//!     Ok(detailed) => println!("unknowns: {}", detailed.report.system.unknowns),
//!     Err(err) => eprintln!("blend failed: {err}"),
//! }
//! # }
//! ```

// Stages
// - validate: placement margin and source coverage, before any matrix work.
// - index: interior mask pixels -> unknowns (row-major).
// - assemble: Laplacian triplets, built once.
// - factorize: sparse Cholesky, once.
// - solve: per channel, assemble b and back-substitute (optionally on rayon).
// - composite: gamma re-encode of the target, then overwrite interior pixels.

use super::composite::{encode_target, write_solutions};
use super::error::BlendError;
use super::mask::{MaskIndex, Neighbor};
use super::params::BlendParams;
use super::placement::validate_inputs;
use super::rhs::assemble_rhs;
use super::solver::FactoredSystem;
use super::system::{assemble_matrix, STENCIL_DIAGONAL, STENCIL_NEIGHBOR};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{
    BlendReport, ChannelStats, DetailedBlend, InputDescriptor, SystemStats, TimingBreakdown,
};
use crate::image::{ImageRgbF32, ImageRgbaU8};
use crate::types::{Channel, Placement};
use log::{debug, info, warn};
use nalgebra::DVector;
use rayon::prelude::*;
use std::time::Instant;

/// The three images a blend reads. All are borrowed read-only.
#[derive(Clone, Copy, Debug)]
pub struct BlendInputs<'a> {
    /// Interior where red > threshold; its size is the pasted region.
    pub mask: &'a ImageRgbF32,
    /// Guidance image, addressed in mask-local coordinates.
    pub source: &'a ImageRgbF32,
    /// Background that supplies boundary values and the output size.
    pub target: &'a ImageRgbF32,
}

/// Right-hand side and solution of one channel.
struct ChannelSolve {
    channel: Channel,
    rhs: DVector<f64>,
    solution: DVector<f64>,
}

/// Gradient-domain compositor.
#[derive(Clone, Debug, Default)]
pub struct PoissonBlender {
    params: BlendParams,
}

impl PoissonBlender {
    pub fn new(params: BlendParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &BlendParams {
        &self.params
    }

    /// Blend and return only the output buffer.
    pub fn blend(
        &self,
        inputs: BlendInputs<'_>,
        placement: Placement,
    ) -> Result<ImageRgbaU8, BlendError> {
        self.blend_with_diagnostics(inputs, placement)
            .map(|detailed| detailed.output)
    }

    /// Run the full pipeline and capture a report of every stage.
    pub fn blend_with_diagnostics(
        &self,
        inputs: BlendInputs<'_>,
        placement: Placement,
    ) -> Result<DetailedBlend, BlendError> {
        let total_start = Instant::now();
        let gamma = self.params.gamma()?;
        let mut timings = TimingBreakdown::default();

        timings.time("validate", || {
            validate_inputs(inputs.mask, inputs.source, inputs.target, placement)
        })?;

        let index = timings.time("index", || {
            MaskIndex::build(inputs.mask, self.params.mask_threshold)
        });
        if index.is_empty() {
            warn!(
                "PoissonBlender: mask has no pixel with red > {}",
                self.params.mask_threshold
            );
            return Err(BlendError::DegenerateMask);
        }
        let unknowns = index.len();
        debug!("PoissonBlender: {unknowns} unknowns at ({}, {})", placement.x, placement.y);

        let matrix = timings.time("assemble", || assemble_matrix(&index));
        let system = timings
            .time("factorize", || FactoredSystem::factorize(&matrix))
            .map_err(|_| BlendError::FactorizationFailure {
                unknowns,
                channel: None,
            })?;

        let solves = timings.time("solve", || {
            self.solve_channels(&index, &system, inputs, placement)
        })?;

        let (output, clamped) = timings.time("composite", || {
            let mut out = encode_target(inputs.target, gamma);
            let solutions = [&solves[0].solution, &solves[1].solution, &solves[2].solution];
            let clamped = write_solutions(&mut out, &index, placement, solutions, gamma);
            (out, clamped)
        });

        let channels = solves
            .iter()
            .map(|s| channel_stats(&index, s, clamped[s.channel.index()]))
            .collect();
        timings.total_ms = elapsed_ms(total_start);
        info!(
            "PoissonBlender: blended {unknowns} pixels in {:.3} ms",
            timings.total_ms
        );

        let report = BlendReport {
            input: InputDescriptor {
                target_width: inputs.target.w,
                target_height: inputs.target.h,
                mask_width: inputs.mask.w,
                mask_height: inputs.mask.h,
                placement,
                gamma: gamma.value(),
            },
            system: SystemStats {
                unknowns,
                nonzeros: system.nonzeros(),
                boundary_terms: index.boundary_terms(),
            },
            channels,
            timings,
        };
        Ok(DetailedBlend { output, report })
    }

    fn solve_channels(
        &self,
        index: &MaskIndex,
        system: &FactoredSystem,
        inputs: BlendInputs<'_>,
        placement: Placement,
    ) -> Result<Vec<ChannelSolve>, BlendError> {
        let solve = |&channel: &Channel| solve_channel(index, system, inputs, placement, channel);
        if self.params.parallel_channels {
            Channel::ALL[..].par_iter().map(solve).collect()
        } else {
            Channel::ALL.iter().map(solve).collect()
        }
    }
}

fn solve_channel(
    index: &MaskIndex,
    system: &FactoredSystem,
    inputs: BlendInputs<'_>,
    placement: Placement,
    channel: Channel,
) -> Result<ChannelSolve, BlendError> {
    let rhs = assemble_rhs(index, inputs.source, inputs.target, placement, channel);
    let solution = system.solve(&rhs).map_err(|err| {
        warn!("PoissonBlender: {channel} channel solve failed: {err:?}");
        BlendError::FactorizationFailure {
            unknowns: index.len(),
            channel: Some(channel),
        }
    })?;
    Ok(ChannelSolve {
        channel,
        rhs,
        solution,
    })
}

/// `max |A x - b|`, evaluated straight from the stencil.
fn max_residual(index: &MaskIndex, rhs: &DVector<f64>, x: &DVector<f64>) -> f64 {
    index
        .pixels()
        .iter()
        .enumerate()
        .map(|(row, &(px, py))| {
            let mut ax = STENCIL_DIAGONAL * x[row];
            for neighbor in Neighbor::ALL {
                let (nx, ny) = neighbor.of(px, py);
                if let Some(col) = index.index_of(nx, ny) {
                    ax += STENCIL_NEIGHBOR * x[col];
                }
            }
            (ax - rhs[row]).abs()
        })
        .fold(0.0, f64::max)
}

fn channel_stats(index: &MaskIndex, solve: &ChannelSolve, clamped: usize) -> ChannelStats {
    ChannelStats {
        channel: solve.channel,
        min: solve.solution.min(),
        max: solve.solution.max(),
        clamped,
        max_residual: max_residual(index, &solve.rhs, &solve.solution),
    }
}

/// Blend `source` into `target` at `(mx, my)` through `mask` with default
/// parameters and the given gamma.
pub fn blend(
    mask: &ImageRgbF32,
    source: &ImageRgbF32,
    target: &ImageRgbF32,
    mx: usize,
    my: usize,
    gamma: f32,
) -> Result<ImageRgbaU8, BlendError> {
    PoissonBlender::new(BlendParams::default().with_gamma(gamma)).blend(
        BlendInputs {
            mask,
            source,
            target,
        },
        Placement::new(mx, my),
    )
}
