//! Pixel interpolation methods for resampling.
//!
//! Every kernel reads its neighbours through an accessor `Fn(x, y) -> S` and
//! clamps the neighbour coordinates to the source grid first, so the accessor
//! only ever sees in-range reads.
//!
//! # Interpolation Modes
//!
//! - **Bilinear**: weighted blend of the 4 surrounding samples
//! - **Bicubic**: cubic convolution over the 4x4 surrounding samples

mod bicubic;
mod bilinear;
pub(crate) mod interpolate;

pub use bicubic::{bicubic_interpolate, cubic_interpolate};
pub(crate) use interpolate::interpolate_pixel;
pub use interpolate::InterpolationMode;
