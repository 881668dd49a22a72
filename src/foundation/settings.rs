use image::imageops::FilterType;

/// Knobs that affect pixels but not geometry.
///
/// Geometry (canvas sizes, offsets, scaled extents) is fully determined by the tree; these
/// settings only choose how resampled pixels are computed and what the blank canvas holds.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Resampling filter used whenever an image is rescaled.
    pub filter: ResizeFilter,
    /// Straight RGBA8 fill for freshly allocated canvases.
    pub background_rgba: [u8; 4],
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            filter: ResizeFilter::CatmullRom,
            background_rgba: [0, 0, 0, 255],
        }
    }
}

/// Resampling filter, mirrored from [`image::imageops::FilterType`] so it can be configured
/// from JSON (`catmull_rom`) or the command line (`catmull-rom`).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ResizeFilter {
    /// Nearest neighbour; pixel-exact for solid fills.
    Nearest,
    /// Linear (tent) filter.
    Triangle,
    /// Cubic filter.
    #[default]
    CatmullRom,
    /// Gaussian filter.
    Gaussian,
    /// Lanczos with window 3.
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(value: ResizeFilter) -> Self {
        match value {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/settings.rs"]
mod tests;
