//! Diagnostics returned by [`PoissonBlender::blend_with_diagnostics`](crate::PoissonBlender).
//!
//! `DetailedBlend` pairs the output buffer with a `BlendReport` describing the
//! inputs, the assembled system, per-channel solve quality and stage timings.

pub mod report;
pub mod timing;

pub use report::{BlendReport, ChannelStats, DetailedBlend, InputDescriptor, SystemStats};
pub use timing::{StageTiming, TimingBreakdown};
