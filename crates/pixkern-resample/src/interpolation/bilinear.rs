use pixkern_core::{ImageSize, Sample, Scalar};

/// Kernel for bilinear interpolation
///
/// # Arguments
///
/// * `source` - The source accessor.
/// * `size` - The source grid size, must not be empty.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated sample.
pub(crate) fn bilinear_interpolation<F, S>(
    source: &impl Fn(usize, usize) -> S,
    size: ImageSize,
    u: F,
    v: F,
) -> S
where
    F: Scalar,
    S: Sample<F>,
{
    let (x_l, x_h, x_weight) = linear_taps(u, size.width);
    let (y_l, y_h, y_weight) = linear_taps(v, size.height);

    let x_weight_inv = F::one() - x_weight;
    let y_weight_inv = F::one() - y_weight;

    let a = source(x_l, y_l);
    let b = source(x_h, y_l);
    let c = source(x_l, y_h);
    let d = source(x_h, y_h);

    a * x_weight_inv * y_weight_inv
        + b * x_weight * y_weight_inv
        + c * y_weight * x_weight_inv
        + d * x_weight * y_weight
}

/// Floor and ceiling neighbours of `coord` clamped to `[0, len)`, with the
/// distance from the floor as weight.
#[inline]
fn linear_taps<F: Scalar>(coord: F, len: usize) -> (usize, usize, F) {
    let last = len - 1;
    let floor = coord.floor();
    let lo = floor.to_usize().min(last);
    let hi = coord.ceil().to_usize().min(last);
    (lo, hi, coord - floor)
}
