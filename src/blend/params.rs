//! Parameters configuring a blend.
//!
//! Defaults reproduce the classic tool: gamma 2.2, mask threshold 0.99 and a
//! sequential per-channel solve.

use super::error::BlendError;
use crate::gamma::{Gamma, DEFAULT_GAMMA};
use serde::Deserialize;

/// Mask pixels whose red channel is strictly above this value are interior.
/// Lossy encodings rarely hit exactly 1.0, hence the margin.
pub const DEFAULT_MASK_THRESHOLD: f32 = 0.99;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlendParams {
    /// Exponent shared with the image loader; the compositor applies `v^gamma`.
    pub gamma: f32,
    /// Red-channel threshold of the mask predicate.
    pub mask_threshold: f32,
    /// Solve the three channels on the rayon pool instead of one after another.
    pub parallel_channels: bool,
}

impl Default for BlendParams {
    fn default() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
            mask_threshold: DEFAULT_MASK_THRESHOLD,
            parallel_channels: false,
        }
    }
}

impl BlendParams {
    pub fn with_gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    pub fn with_mask_threshold(mut self, threshold: f32) -> Self {
        self.mask_threshold = threshold;
        self
    }

    pub fn with_parallel_channels(mut self, parallel: bool) -> Self {
        self.parallel_channels = parallel;
        self
    }

    /// Validated gamma.
    pub fn gamma(&self) -> Result<Gamma, BlendError> {
        Gamma::new(self.gamma).ok_or(BlendError::InvalidGamma(self.gamma))
    }
}
