use std::{
    collections::HashMap,
    path::{Component, Path, PathBuf},
    sync::Arc,
};

use image::RgbaImage;

use crate::{
    assets::decode::load_image,
    foundation::error::{StoryboardError, StoryboardResult},
    layout::model::{LayoutDocument, LayoutNode},
    tree::cell::{Cell, Column, Row},
};

/// Decoded images keyed by normalized relative path.
///
/// A path that appears several times in a layout is read and decoded once; every leaf built
/// from it shares the same `Arc`.
#[derive(Debug)]
pub struct ImageCache {
    root: PathBuf,
    images: HashMap<String, Arc<RgbaImage>>,
}

impl ImageCache {
    /// Cache resolving relative paths against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            images: HashMap::new(),
        }
    }

    /// Fetch (loading on first use) the image at `source`.
    pub fn get_or_load(&mut self, source: &str) -> StoryboardResult<Arc<RgbaImage>> {
        let key = normalize_rel_path(source)?;
        if let Some(img) = self.images.get(&key) {
            return Ok(Arc::clone(img));
        }
        let img = Arc::new(load_image(self.root.join(&key))?);
        tracing::debug!(path = %key, width = img.width(), height = img.height(), "loaded image");
        self.images.insert(key, Arc::clone(&img));
        Ok(img)
    }

    /// Number of distinct images decoded so far.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether nothing has been decoded yet.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Normalize a layout image path to a `/`-joined key.
///
/// Backslashes count as separators and `.` segments are dropped. Rooted paths, drive
/// prefixes and `..` are rejected so a layout cannot reach outside its own directory.
pub fn normalize_rel_path(source: &str) -> StoryboardResult<String> {
    let unified = source.replace('\\', "/");
    let mut parts = Vec::<&str>::new();
    for component in Path::new(&unified).components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str().ok_or_else(|| {
                StoryboardError::layout(format!("image path '{source}' is not valid UTF-8"))
            })?),
            Component::CurDir => {}
            Component::ParentDir => {
                return Err(StoryboardError::layout(format!(
                    "image path '{source}' escapes the layout directory"
                )));
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(StoryboardError::layout(format!(
                    "image path '{source}' must be relative"
                )));
            }
        }
    }

    if parts.is_empty() {
        return Err(StoryboardError::layout(format!(
            "image path '{source}' names no file"
        )));
    }
    Ok(parts.join("/"))
}

/// Build a cell tree from `node`, decoding images through `cache`.
pub fn build_tree(node: &LayoutNode, cache: &mut ImageCache) -> StoryboardResult<Cell> {
    Ok(match node {
        LayoutNode::Image(source) => Cell::leaf(cache.get_or_load(source)?),
        LayoutNode::Row(children) => {
            let mut row = Row::new();
            for child in children {
                row.push(build_tree(child, cache)?);
            }
            row.into()
        }
        LayoutNode::Column(children) => {
            let mut col = Column::new();
            for child in children {
                col.push(build_tree(child, cache)?);
            }
            col.into()
        }
    })
}

/// Build the storyboard root of `doc`, resolving images against `assets_root`.
pub fn build_root(doc: &LayoutDocument, assets_root: impl AsRef<Path>) -> StoryboardResult<Row> {
    let LayoutNode::Row(children) = &doc.root else {
        return Err(StoryboardError::invalid_argument(
            "storyboard root must be a row",
        ));
    };

    let mut cache = ImageCache::new(assets_root.as_ref());
    let mut row = Row::new();
    for child in children {
        row.push(build_tree(child, &mut cache)?);
    }
    tracing::debug!(images = cache.len(), "built storyboard tree");
    Ok(row)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/build.rs"]
mod tests;
