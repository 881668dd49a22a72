/// Direction along which a composite stitches its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Left to right; used by rows.
    Horizontal,
    /// Top to bottom; used by columns.
    Vertical,
}

impl Axis {
    /// Dimension parallel to the axis (summed when merging).
    pub fn along(self) -> Dimension {
        match self {
            Axis::Horizontal => Dimension::Width,
            Axis::Vertical => Dimension::Height,
        }
    }

    /// Dimension orthogonal to the axis (normalized to the minimum when merging).
    pub fn perpendicular(self) -> Dimension {
        self.along().other()
    }

    /// Top-left offset of an image placed `along` units down the axis.
    pub fn offset(self, along: u32) -> (u32, u32) {
        match self {
            Axis::Horizontal => (along, 0),
            Axis::Vertical => (0, along),
        }
    }

    /// Canvas `(width, height)` for the given along/perpendicular extents.
    pub fn canvas_size(self, along: u32, perpendicular: u32) -> (u32, u32) {
        match self {
            Axis::Horizontal => (along, perpendicular),
            Axis::Vertical => (perpendicular, along),
        }
    }
}

/// One of the two raster extents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Horizontal extent.
    Width,
    /// Vertical extent.
    Height,
}

impl Dimension {
    /// The orthogonal dimension.
    pub fn other(self) -> Dimension {
        match self {
            Dimension::Width => Dimension::Height,
            Dimension::Height => Dimension::Width,
        }
    }

    /// Picks this dimension out of a `(width, height)` pair.
    pub fn of(self, (width, height): (u32, u32)) -> u32 {
        match self {
            Dimension::Width => width,
            Dimension::Height => height,
        }
    }

    /// Builds a `(width, height)` pair from this dimension's extent and the other one.
    pub fn size(self, this: u32, other: u32) -> (u32, u32) {
        match self {
            Dimension::Width => (this, other),
            Dimension::Height => (other, this),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
