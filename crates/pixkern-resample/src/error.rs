use pixkern_core::{CoreError, ImageSize};

/// An error type for the resample module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ResampleError {
    /// Error when a slice does not match its declared grid size.
    #[error(transparent)]
    Buffer(#[from] CoreError),

    /// Error when the source grid has no pixels to sample from.
    #[error("Cannot resample from an empty source ({0}) into {1}")]
    EmptySource(ImageSize, ImageSize),
}
