use std::path::Path;

use anyhow::Context;
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::foundation::error::{StoryboardError, StoryboardResult};

/// Decode encoded image bytes into straight RGBA8.
pub fn decode_image(bytes: &[u8]) -> StoryboardResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(dyn_img.to_rgba8())
}

/// Read and decode an image file.
pub fn load_image(path: impl AsRef<Path>) -> StoryboardResult<RgbaImage> {
    let path = path.as_ref();
    let bytes =
        std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    let img =
        decode_image(&bytes).with_context(|| format!("decode image '{}'", path.display()))?;
    Ok(img)
}

/// Encode `img` to `path`, choosing the format from the file extension.
///
/// Formats without an alpha channel (JPEG) get the alpha dropped first. Missing parent
/// directories are created.
pub fn save_image(path: impl AsRef<Path>, img: &RgbaImage) -> StoryboardResult<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path).map_err(|_| {
        StoryboardError::invalid_argument(format!(
            "unsupported output extension for '{}'",
            path.display()
        ))
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let rgba = DynamicImage::ImageRgba8(img.clone());
    let encoded = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(rgba.to_rgb8()),
        _ => rgba,
    };
    encoded
        .save_with_format(path, format)
        .with_context(|| format!("write image '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
