use image::RgbaImage;

use crate::{
    foundation::core::Dimension,
    foundation::error::{StoryboardError, StoryboardResult},
    foundation::settings::RenderSettings,
    raster::ops,
};

/// Resize `image` so that its `dim` extent equals `target`, preserving aspect ratio.
///
/// The other extent is `other * target / along`, truncated, and never less than 1.
/// Returns a fresh image; the source is untouched.
pub fn scale_to_dimension(
    image: &RgbaImage,
    dim: Dimension,
    target: u32,
    settings: &RenderSettings,
) -> StoryboardResult<RgbaImage> {
    if target == 0 {
        return Err(StoryboardError::invalid_argument(format!(
            "scale target {dim:?} must be > 0"
        )));
    }

    let along = ops::extent(image, dim);
    if along == 0 {
        return Err(StoryboardError::invalid_dimension(format!(
            "cannot scale image with zero {dim:?} ({}x{})",
            ops::width(image),
            ops::height(image)
        )));
    }

    let other = scaled_other_extent(ops::extent(image, dim.other()), along, target)?;
    let (w, h) = dim.size(target, other);
    if (w, h) == image.dimensions() {
        return Ok(image.clone());
    }

    Ok(ops::resize(image, w, h, settings.filter))
}

/// `other * target / along` in exact integer arithmetic, clamped to `1..=u32::MAX`.
pub(crate) fn scaled_other_extent(other: u32, along: u32, target: u32) -> StoryboardResult<u32> {
    debug_assert!(along > 0);
    let scaled = u64::from(other) * u64::from(target) / u64::from(along);
    let scaled = u32::try_from(scaled).map_err(|_| {
        StoryboardError::invalid_dimension(format!(
            "scaled extent {scaled} does not fit in u32"
        ))
    })?;
    Ok(scaled.max(1))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/scale.rs"]
mod tests;
