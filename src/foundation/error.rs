/// Convenience result type used across the crate.
pub type StoryboardResult<T> = Result<T, StoryboardError>;

/// Error taxonomy for tree building, merging and rendering.
///
/// Every variant is fail-fast: a render call that hits one of these returns no partial image.
#[derive(thiserror::Error, Debug)]
pub enum StoryboardError {
    /// A merge was invoked with zero images.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// An image was required at merge time but was absent.
    #[error("missing image: {0}")]
    MissingImage(String),

    /// An image extent is zero (undefined scale ratio) or out of range.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// A caller-supplied argument is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A layout document is malformed.
    #[error("layout error: {0}")]
    Layout(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoryboardError {
    /// Build a [`StoryboardError::EmptyInput`] value.
    pub fn empty_input(msg: impl Into<String>) -> Self {
        Self::EmptyInput(msg.into())
    }

    /// Build a [`StoryboardError::MissingImage`] value.
    pub fn missing_image(msg: impl Into<String>) -> Self {
        Self::MissingImage(msg.into())
    }

    /// Build a [`StoryboardError::InvalidDimension`] value.
    pub fn invalid_dimension(msg: impl Into<String>) -> Self {
        Self::InvalidDimension(msg.into())
    }

    /// Build a [`StoryboardError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`StoryboardError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
