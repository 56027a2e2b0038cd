//! Placement gate run before any matrix work.
//!
//! Interior mask pixels must never sit on the target border, so every unknown
//! has exactly four grid neighbors. We enforce that by requiring a margin of
//! at least one pixel between the mask's bounding box and the target edges:
//! `mx > 0`, `my > 0`, `mx + W < Tw - 1`, `my + H < Th - 1`.
use super::error::BlendError;
use crate::image::{ImageRgbF32, ImageView};
use crate::types::Placement;

/// Check the mask's bounding box against the target dimensions.
pub fn validate_placement(
    mask_w: usize,
    mask_h: usize,
    target_w: usize,
    target_h: usize,
    placement: Placement,
) -> Result<(), BlendError> {
    // `x + w < target - 1` rewritten to avoid underflow on tiny targets;
    // offsets large enough to overflow never fit.
    let fits_axis = |offset: usize, extent: usize, target: usize| {
        offset > 0
            && offset
                .checked_add(extent)
                .and_then(|end| end.checked_add(1))
                .is_some_and(|end| end < target)
    };
    if fits_axis(placement.x, mask_w, target_w) && fits_axis(placement.y, mask_h, target_h) {
        Ok(())
    } else {
        Err(BlendError::InvalidPlacement {
            mask_min: (placement.x, placement.y),
            mask_max: (
                placement.x.saturating_add(mask_w),
                placement.y.saturating_add(mask_h),
            ),
            target_width: target_w,
            target_height: target_h,
        })
    }
}

/// Validate placement and the source/mask size relation for a set of inputs.
pub fn validate_inputs(
    mask: &ImageRgbF32,
    source: &ImageRgbF32,
    target: &ImageRgbF32,
    placement: Placement,
) -> Result<(), BlendError> {
    let (mask_w, mask_h) = mask.dims();
    let (target_w, target_h) = target.dims();
    validate_placement(mask_w, mask_h, target_w, target_h, placement)?;
    let (source_w, source_h) = source.dims();
    if source_w < mask_w || source_h < mask_h {
        return Err(BlendError::SourceTooSmall {
            source: (source_w, source_h),
            mask: (mask_w, mask_h),
        });
    }
    Ok(())
}
