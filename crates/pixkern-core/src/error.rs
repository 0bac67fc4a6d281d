/// An error type for the core module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CoreError {
    /// Error when the slice length does not match the grid size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidBufferLength(usize, usize),
}
