use crate::scalar::Scalar;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Arithmetic a pixel value must support to flow through the kernels.
///
/// `F` is the floating type used for weights and interpolation factors. The
/// trait is implemented for every type with the required operators, so plain
/// `f32`/`f64` grids and [`crate::Rgb`] colors work out of the box.
///
/// The kernels never mutate a sample in place: every blend produces a new value.
pub trait Sample<F: Scalar>:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<F, Output = Self>
    + Div<F, Output = Self>
{
}

impl<F, T> Sample<F> for T
where
    F: Scalar,
    T: Copy
        + Add<Output = T>
        + Sub<Output = T>
        + Neg<Output = T>
        + Mul<F, Output = T>
        + Div<F, Output = T>,
{
}
