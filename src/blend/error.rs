use crate::types::Channel;

/// Reasons a blend can fail. None of them are retryable: the same inputs fail
/// the same way every time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BlendError {
    /// The mask does not sit strictly inside the target with a one-pixel
    /// margin on every side.
    InvalidPlacement {
        mask_min: (usize, usize),
        mask_max: (usize, usize),
        target_width: usize,
        target_height: usize,
    },
    /// The source is addressed in mask-local coordinates and must cover the
    /// mask's bounding box.
    SourceTooSmall {
        source: (usize, usize),
        mask: (usize, usize),
    },
    /// The mask has no interior pixel, so there is nothing to solve.
    DegenerateMask,
    /// The coefficient matrix could not be factorized, or a channel solve
    /// produced non-finite values (`channel` names it).
    FactorizationFailure {
        unknowns: usize,
        channel: Option<Channel>,
    },
    /// Gamma must be finite and strictly positive.
    InvalidGamma(f32),
}

impl std::fmt::Display for BlendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlendError::InvalidPlacement {
                mask_min,
                mask_max,
                target_width,
                target_height,
            } => write!(
                f,
                "mask (min = ({}, {}), max = ({}, {})) does not fit in target {}x{} \
                 (allowed min = (1, 1), max < ({}, {}))",
                mask_min.0,
                mask_min.1,
                mask_max.0,
                mask_max.1,
                target_width,
                target_height,
                target_width.saturating_sub(1),
                target_height.saturating_sub(1)
            ),
            BlendError::SourceTooSmall { source, mask } => write!(
                f,
                "source image {}x{} is smaller than mask {}x{}",
                source.0, source.1, mask.0, mask.1
            ),
            BlendError::DegenerateMask => {
                write!(f, "mask has no interior pixels (red channel > threshold)")
            }
            BlendError::FactorizationFailure {
                unknowns,
                channel: None,
            } => write!(
                f,
                "coefficient matrix ({unknowns} unknowns) is not positive definite"
            ),
            BlendError::FactorizationFailure {
                unknowns,
                channel: Some(c),
            } => write!(
                f,
                "{c} channel solve over {unknowns} unknowns produced non-finite values"
            ),
            BlendError::InvalidGamma(g) => write!(f, "invalid gamma {g} (must be finite and > 0)"),
        }
    }
}

impl std::error::Error for BlendError {}
