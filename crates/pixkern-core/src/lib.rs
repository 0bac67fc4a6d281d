#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// the arithmetic contract every pixel value must satisfy.
pub mod sample;

/// floating types usable as interpolation weights.
pub mod scalar;

/// reference color type implementing the sample contract.
pub mod color;

/// grid dimensions.
pub mod size;

/// accessor and writer adapters over caller-owned slices.
pub mod buffer;

/// clipping and blending helpers.
pub mod ops;

/// Error types for the core module.
pub mod error;

pub use crate::buffer::{PixelBuffer, PixelBufferMut};
pub use crate::color::{Rgb, RgbF32, RgbF64};
pub use crate::error::CoreError;
pub use crate::sample::Sample;
pub use crate::scalar::Scalar;
pub use crate::size::ImageSize;
