use super::timing::TimingBreakdown;
use crate::image::ImageRgbaU8;
use crate::types::{Channel, Placement};
use serde::Serialize;

/// Output buffer plus the report describing how it was produced.
#[derive(Clone, Debug)]
pub struct DetailedBlend {
    pub output: ImageRgbaU8,
    pub report: BlendReport,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlendReport {
    pub input: InputDescriptor,
    pub system: SystemStats,
    pub channels: Vec<ChannelStats>,
    pub timings: TimingBreakdown,
}

impl BlendReport {
    pub fn channel(&self, channel: Channel) -> Option<&ChannelStats> {
        self.channels.iter().find(|c| c.channel == channel)
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub target_width: usize,
    pub target_height: usize,
    pub mask_width: usize,
    pub mask_height: usize,
    pub placement: Placement,
    pub gamma: f32,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStats {
    /// Interior mask pixels, i.e. the system size `N`.
    pub unknowns: usize,
    /// Stored entries of the coefficient matrix.
    pub nonzeros: usize,
    /// Dirichlet terms folded into each right-hand side.
    pub boundary_terms: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStats {
    pub channel: Channel,
    pub min: f64,
    pub max: f64,
    /// Solved values outside [0, 1] that the compositor clamped.
    pub clamped: usize,
    /// `max |A x - b|` over all rows.
    pub max_residual: f64,
}
