#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the resample module.
pub mod error;

/// utilities for interpolation.
pub mod interpolation;

/// module containing parallization utilities.
pub mod parallel;

/// utility functions for resizing pixel grids.
pub mod resize;

pub use crate::error::ResampleError;
pub use crate::interpolation::InterpolationMode;
pub use crate::parallel::ExecutionStrategy;
pub use crate::resize::{resize, resize_bicubic, resize_bilinear, resize_buffer};
