use std::sync::{Arc, OnceLock};

use image::RgbaImage;

use crate::foundation::core::Axis;

/// A node in the composition tree.
///
/// Leaves own a decoded image. Rows and columns own an ordered list of children and a
/// write-once slot holding their rendered image; the slot is filled by
/// [`crate::render()`] and is the only part of the tree that changes after construction.
#[derive(Clone, Debug)]
pub enum Cell {
    /// A single image.
    Leaf(Leaf),
    /// Children stitched left to right.
    Row(Row),
    /// Children stitched top to bottom.
    Column(Column),
}

/// A cell holding a concrete raster image.
#[derive(Clone, Debug)]
pub struct Leaf {
    image: Arc<RgbaImage>,
}

impl Leaf {
    /// Wrap an image. Passing an `Arc` lets several leaves share one decoded image.
    pub fn new(image: impl Into<Arc<RgbaImage>>) -> Self {
        Self {
            image: image.into(),
        }
    }

    /// The stored image.
    pub fn image(&self) -> &Arc<RgbaImage> {
        &self.image
    }
}

/// Shared body of rows and columns.
#[derive(Clone, Debug, Default)]
pub struct Stack {
    children: Vec<Cell>,
    cached: OnceLock<Arc<RgbaImage>>,
}

impl Stack {
    /// Children in insertion order.
    pub fn children(&self) -> &[Cell] {
        &self.children
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether no child has been added.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The rendered image, once the renderer has visited this node.
    pub fn cached_image(&self) -> Option<&Arc<RgbaImage>> {
        self.cached.get()
    }

    /// Store the rendered image. The first write wins; the stored value is returned.
    pub(crate) fn store(&self, image: Arc<RgbaImage>) -> Arc<RgbaImage> {
        Arc::clone(self.cached.get_or_init(|| image))
    }

    fn push(&mut self, child: Cell) {
        self.children.push(child);
        self.cached.take();
    }

    fn reset_cache(&mut self) {
        self.cached.take();
        for child in &mut self.children {
            child.reset_cache();
        }
    }
}

macro_rules! stack_cell {
    ($name:ident, $axis:expr, $doc:literal) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Default)]
        pub struct $name(Stack);

        impl $name {
            /// Empty container.
            pub fn new() -> Self {
                Self::default()
            }

            /// Append `child` and return `self` for chaining.
            pub fn add(mut self, child: impl Into<Cell>) -> Self {
                self.0.push(child.into());
                self
            }

            /// Append `child` in place. Drops this node's cached image, if any.
            pub fn push(&mut self, child: impl Into<Cell>) -> &mut Self {
                self.0.push(child.into());
                self
            }

            /// Axis this container stitches along.
            pub fn axis(&self) -> Axis {
                $axis
            }

            /// Shared container body.
            pub fn stack(&self) -> &Stack {
                &self.0
            }

            /// Children in insertion order.
            pub fn children(&self) -> &[Cell] {
                self.0.children()
            }

            /// Number of direct children.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Whether no child has been added.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// The rendered image, once the renderer has visited this node.
            pub fn cached_image(&self) -> Option<&Arc<RgbaImage>> {
                self.0.cached_image()
            }

            /// Forget every cached image in this subtree.
            pub fn reset_cache(&mut self) {
                self.0.reset_cache();
            }
        }

        impl From<$name> for Cell {
            fn from(value: $name) -> Self {
                Cell::$name(value)
            }
        }
    };
}

stack_cell!(Row, Axis::Horizontal, "A horizontal container.");
stack_cell!(Column, Axis::Vertical, "A vertical container.");

impl Cell {
    /// Leaf cell around `image`.
    pub fn leaf(image: impl Into<Arc<RgbaImage>>) -> Self {
        Cell::Leaf(Leaf::new(image))
    }

    /// Image currently available for this cell: the leaf image, or the cached composite
    /// image if the node has been rendered.
    pub fn image(&self) -> Option<&Arc<RgbaImage>> {
        match self {
            Cell::Leaf(leaf) => Some(leaf.image()),
            Cell::Row(row) => row.cached_image(),
            Cell::Column(col) => col.cached_image(),
        }
    }

    /// Merge axis for composites; `None` for leaves.
    pub fn axis(&self) -> Option<Axis> {
        match self {
            Cell::Leaf(_) => None,
            Cell::Row(row) => Some(row.axis()),
            Cell::Column(col) => Some(col.axis()),
        }
    }

    /// Container body for composites; `None` for leaves.
    pub fn stack(&self) -> Option<&Stack> {
        match self {
            Cell::Leaf(_) => None,
            Cell::Row(row) => Some(row.stack()),
            Cell::Column(col) => Some(col.stack()),
        }
    }

    /// Whether this is a row or column.
    pub fn is_composite(&self) -> bool {
        !matches!(self, Cell::Leaf(_))
    }

    /// Forget every cached image in this subtree. Leaves are unaffected.
    pub fn reset_cache(&mut self) {
        match self {
            Cell::Leaf(_) => {}
            Cell::Row(row) => row.reset_cache(),
            Cell::Column(col) => col.reset_cache(),
        }
    }

    /// Longest path from this cell to a leaf, counting this cell (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        match self.stack() {
            None => 1,
            Some(stack) => 1 + stack.children().iter().map(Cell::depth).max().unwrap_or(0),
        }
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self.stack() {
            None => 1,
            Some(stack) => stack.children().iter().map(Cell::leaf_count).sum(),
        }
    }
}

impl From<Leaf> for Cell {
    fn from(value: Leaf) -> Self {
        Cell::Leaf(value)
    }
}

impl From<RgbaImage> for Cell {
    fn from(value: RgbaImage) -> Self {
        Cell::leaf(value)
    }
}

impl From<Arc<RgbaImage>> for Cell {
    fn from(value: Arc<RgbaImage>) -> Self {
        Cell::leaf(value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tree/cell.rs"]
mod tests;
