use std::sync::Arc;

use image::RgbaImage;

use crate::{
    foundation::core::Axis,
    foundation::error::StoryboardResult,
    foundation::settings::RenderSettings,
    raster::merge::merge_along_axis,
    tree::cell::{Cell, Stack},
};

/// Render `cell` to a single image.
///
/// Leaves return their stored image. Composites are rendered post-order: every composite
/// child (row or column, at any depth) is rendered and cached before the parent merges.
/// A composite that already holds a cached image returns it without re-merging; call
/// [`Cell::reset_cache`] to force recomputation.
pub fn render(cell: &Cell, settings: &RenderSettings) -> StoryboardResult<Arc<RgbaImage>> {
    match cell {
        Cell::Leaf(leaf) => Ok(Arc::clone(leaf.image())),
        Cell::Row(row) => render_stack(row.stack(), row.axis(), settings),
        Cell::Column(col) => render_stack(col.stack(), col.axis(), settings),
    }
}

#[tracing::instrument(level = "trace", skip(stack, settings), fields(children = stack.len()))]
pub(crate) fn render_stack(
    stack: &Stack,
    axis: Axis,
    settings: &RenderSettings,
) -> StoryboardResult<Arc<RgbaImage>> {
    if let Some(done) = stack.cached_image() {
        return Ok(Arc::clone(done));
    }

    for child in stack.children() {
        if child.is_composite() {
            render(child, settings)?;
        }
    }

    let images = stack
        .children()
        .iter()
        .map(|c| c.image().map(Arc::as_ref))
        .collect::<Vec<_>>();
    let merged = merge_along_axis(&images, axis, settings)?;

    tracing::debug!(
        ?axis,
        children = stack.len(),
        width = merged.width(),
        height = merged.height(),
        "rendered composite"
    );
    Ok(stack.store(Arc::new(merged)))
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
