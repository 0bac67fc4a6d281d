use super::bicubic::bicubic_interpolation;
use super::bilinear::bilinear_interpolation;
use pixkern_core::{ImageSize, Sample, Scalar};

/// Interpolation mode for the resize operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Bilinear interpolation
    #[default]
    Bilinear,
    /// Bicubic interpolation
    Bicubic,
}

/// Kernel for interpolating a sample at a real-valued source coordinate
///
/// # Arguments
///
/// * `source` - The source accessor, valid over `[0, width) x [0, height)`.
/// * `size` - The source grid size, must not be empty.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// The interpolated sample.
///
/// # Panics
///
/// Panics if `size` is empty.
pub(crate) fn interpolate_pixel<F, S>(
    source: &impl Fn(usize, usize) -> S,
    size: ImageSize,
    u: F,
    v: F,
    interpolation: InterpolationMode,
) -> S
where
    F: Scalar,
    S: Sample<F>,
{
    assert!(!size.is_empty(), "cannot interpolate inside {size}");
    match interpolation {
        InterpolationMode::Bilinear => bilinear_interpolation(source, size, u, v),
        InterpolationMode::Bicubic => bicubic_interpolation(source, size, u, v),
    }
}
