//! Storyboard composes a tree of images into a single flattened raster.
//!
//! A tree is built from three kinds of [`Cell`]: a [`Leaf`] holding an image, a [`Row`]
//! stitching its children left to right, and a [`Column`] stitching them top to bottom.
//! Rows and columns nest freely.
//!
//! # Pipeline overview
//!
//! 1. **Build**: construct the tree with [`Row::add`] / [`Column::add`], or from JSON with
//!    [`LayoutDocument`] and [`build_root`].
//! 2. **Render**: [`render`] walks the tree post-order; each composite merges its children
//!    with [`merge_along_axis`] and caches the result.
//! 3. **Rescale**: [`render_storyboard`] renders the root row and scales it to the requested
//!    width with [`scale_to_dimension`].
//!
//! Merging never enlarges: every child is downscaled so its extent across the merge axis
//! matches the smallest sibling, then children are placed edge to edge, top/left aligned.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No IO while rendering**: images are decoded up front (see [`load_image`]).
//! - **Straight RGBA8** throughout; drawing overwrites and never blends.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;
mod layout;
mod raster;
mod render;
mod tree;

pub use assets::decode::{decode_image, load_image, save_image};
pub use foundation::core::{Axis, Dimension};
pub use foundation::error::{StoryboardError, StoryboardResult};
pub use foundation::settings::{RenderSettings, ResizeFilter};
pub use layout::build::{ImageCache, build_root, build_tree, normalize_rel_path};
pub use layout::model::{LayoutDocument, LayoutNode};
pub use raster::merge::merge_along_axis;
pub use raster::scale::scale_to_dimension;
pub use render::renderer::render;
pub use render::storyboard::{render_storyboard, render_storyboard_default};
pub use tree::cell::{Cell, Column, Leaf, Row, Stack};
