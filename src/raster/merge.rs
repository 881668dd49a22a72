use std::borrow::Cow;

use image::RgbaImage;

use crate::{
    foundation::core::Axis,
    foundation::error::{StoryboardError, StoryboardResult},
    foundation::settings::RenderSettings,
    raster::{ops, scale::scale_to_dimension},
};

/// Stitch `images` into one raster along `axis`.
///
/// Every image is downscaled (never enlarged) so that its perpendicular extent matches the
/// smallest one among the inputs, then drawn in input order at cumulative along-axis offsets
/// with a perpendicular offset of zero.
pub fn merge_along_axis(
    images: &[Option<&RgbaImage>],
    axis: Axis,
    settings: &RenderSettings,
) -> StoryboardResult<RgbaImage> {
    if images.is_empty() {
        return Err(StoryboardError::empty_input(format!(
            "cannot merge zero images along {axis:?}"
        )));
    }

    let mut present = Vec::with_capacity(images.len());
    for (idx, img) in images.iter().copied().enumerate() {
        let img = img.ok_or_else(|| {
            StoryboardError::missing_image(format!("entry {idx} of {axis:?} merge has no image"))
        })?;
        if img.width() == 0 || img.height() == 0 {
            return Err(StoryboardError::invalid_dimension(format!(
                "entry {idx} of {axis:?} merge is {}x{}",
                img.width(),
                img.height()
            )));
        }
        present.push(img);
    }

    let perp = axis.perpendicular();
    let reference = present
        .iter()
        .map(|img| ops::extent(img, perp))
        .min()
        .ok_or_else(|| StoryboardError::empty_input("no images after filtering"))?;

    let mut scaled = Vec::<Cow<'_, RgbaImage>>::with_capacity(present.len());
    for img in present {
        if ops::extent(img, perp) > reference {
            scaled.push(Cow::Owned(scale_to_dimension(img, perp, reference, settings)?));
        } else {
            scaled.push(Cow::Borrowed(img));
        }
    }

    let along = axis.along();
    let total = scaled.iter().try_fold(0u32, |acc, img| {
        acc.checked_add(ops::extent(img, along)).ok_or_else(|| {
            StoryboardError::invalid_dimension(format!("{axis:?} merge extent overflows u32"))
        })
    })?;

    let (w, h) = axis.canvas_size(total, reference);
    let mut canvas = ops::allocate_canvas(w, h, settings.background_rgba);

    let mut cursor = 0u32;
    for img in &scaled {
        let (x, y) = axis.offset(cursor);
        ops::draw_at(&mut canvas, img, x, y);
        cursor += ops::extent(img, along);
    }

    tracing::trace!(?axis, inputs = scaled.len(), width = w, height = h, "merged");
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/merge.rs"]
mod tests;
