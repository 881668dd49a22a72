use std::{fs::File, io::BufReader, io::Read, path::Path};

use crate::{
    foundation::error::{StoryboardError, StoryboardResult},
    foundation::settings::RenderSettings,
};

/// A storyboard described as JSON.
///
/// ```json
/// { "width": 1000, "root": { "row": [ { "image": "a.png" }, { "column": [] } ] } }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutDocument {
    /// Output width; may be left out when the caller supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Pixel settings; every field has a default.
    #[serde(default)]
    pub settings: RenderSettings,
    /// Tree root; must be a `row` to be rendered as a storyboard.
    pub root: LayoutNode,
}

/// One node of a [`LayoutDocument`] tree.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutNode {
    /// Image file, relative to the document's directory.
    Image(String),
    /// Children stitched left to right.
    Row(Vec<LayoutNode>),
    /// Children stitched top to bottom.
    Column(Vec<LayoutNode>),
}

impl LayoutDocument {
    /// Read and parse a layout JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> StoryboardResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StoryboardError::layout(format!("open layout JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse a layout from any reader.
    pub fn from_reader(r: impl Read) -> StoryboardResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| StoryboardError::layout(format!("parse layout JSON: {e}")))
    }

    /// Parse a layout from a JSON string.
    pub fn from_json_str(s: &str) -> StoryboardResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| StoryboardError::layout(format!("parse layout JSON: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/model.rs"]
mod tests;
