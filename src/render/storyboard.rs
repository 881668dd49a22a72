use image::RgbaImage;

use crate::{
    foundation::core::Dimension,
    foundation::error::{StoryboardError, StoryboardResult},
    foundation::settings::RenderSettings,
    raster::scale::scale_to_dimension,
    render::renderer::render_stack,
    tree::cell::Row,
};

/// Render the tree under `root` and rescale the result to exactly `width` pixels wide.
///
/// Height follows proportionally. Unlike merging, this final rescale may enlarge.
#[tracing::instrument(skip(root, settings), fields(children = root.len()))]
pub fn render_storyboard(
    root: &Row,
    width: u32,
    settings: &RenderSettings,
) -> StoryboardResult<RgbaImage> {
    if width == 0 {
        return Err(StoryboardError::invalid_argument(
            "storyboard width must be > 0",
        ));
    }

    let root_image = render_stack(root.stack(), root.axis(), settings)?;
    let out = scale_to_dimension(&root_image, Dimension::Width, width, settings)?;
    tracing::info!(
        width = out.width(),
        height = out.height(),
        "storyboard rendered"
    );
    Ok(out)
}

/// [`render_storyboard`] with [`RenderSettings::default`].
pub fn render_storyboard_default(root: &Row, width: u32) -> StoryboardResult<RgbaImage> {
    render_storyboard(root, width, &RenderSettings::default())
}

#[cfg(test)]
#[path = "../../tests/unit/render/storyboard.rs"]
mod tests;
