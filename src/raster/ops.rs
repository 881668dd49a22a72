//! Thin seam over the `image` crate primitives used by the scaler and merger.

use image::{Rgba, RgbaImage, imageops};

use crate::foundation::{core::Dimension, settings::ResizeFilter};

pub fn width(img: &RgbaImage) -> u32 {
    img.width()
}

pub fn height(img: &RgbaImage) -> u32 {
    img.height()
}

pub fn extent(img: &RgbaImage, dim: Dimension) -> u32 {
    dim.of(img.dimensions())
}

/// New canvas filled with a straight RGBA8 color.
pub fn allocate_canvas(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(rgba))
}

/// Copy `img` onto `canvas` with its top-left corner at `(x, y)`, overwriting pixels.
pub fn draw_at(canvas: &mut RgbaImage, img: &RgbaImage, x: u32, y: u32) {
    imageops::replace(canvas, img, i64::from(x), i64::from(y));
}

/// Resample to exactly `width` x `height`; aspect ratio is the caller's concern.
pub fn resize(img: &RgbaImage, width: u32, height: u32, filter: ResizeFilter) -> RgbaImage {
    imageops::resize(img, width, height, filter.into())
}
