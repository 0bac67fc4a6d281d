use pixkern_core::{ImageSize, Sample, Scalar};

/// Four-point cubic convolution between `v1` and `v2`.
///
/// `v0` and `v3` are the outer neighbours and `t` is the fractional position
/// past `v1`. The result is not clamped: overshoot beyond the input range is
/// part of the kernel's response.
///
/// # Example
///
/// ```
/// use pixkern_resample::interpolation::cubic_interpolate;
///
/// assert_eq!(cubic_interpolate(0.0f32, 1.0, 2.0, 3.0, 0.0f32), 1.0);
/// assert_eq!(cubic_interpolate(5.0f32, 5.0, 5.0, 5.0, 0.7f32), 5.0);
/// ```
#[inline]
pub fn cubic_interpolate<F, S>(v0: S, v1: S, v2: S, v3: S, t: F) -> S
where
    F: Scalar,
    S: Sample<F>,
{
    let a = (v3 - v2) - (v0 - v1);
    let b = (v0 - v1) - a;
    let c = v2 - v0;
    let d = v1;
    d + (c + (b + a * t) * t) * t
}

/// Separable cubic convolution over a row-major 4x4 neighbourhood.
///
/// Each row is interpolated along x with `fx`, then the four row results are
/// interpolated along y with `fy`.
#[inline]
pub fn bicubic_interpolate<F, S>(ndata: &[S; 16], fx: F, fy: F) -> S
where
    F: Scalar,
    S: Sample<F>,
{
    let row = |r: usize| {
        cubic_interpolate(
            ndata[r * 4],
            ndata[r * 4 + 1],
            ndata[r * 4 + 2],
            ndata[r * 4 + 3],
            fx,
        )
    };
    cubic_interpolate(row(0), row(1), row(2), row(3), fy)
}

/// Kernel for bicubic interpolation
///
/// Gathers the samples at offsets -1..=2 around the floor of `(u, v)`,
/// replicating the border for neighbours that fall outside the grid.
pub(crate) fn bicubic_interpolation<F, S>(
    source: &impl Fn(usize, usize) -> S,
    size: ImageSize,
    u: F,
    v: F,
) -> S
where
    F: Scalar,
    S: Sample<F>,
{
    let (u_floor, v_floor) = (u.floor(), v.floor());
    let (ix, iy) = (u_floor.to_isize(), v_floor.to_isize());
    let (max_x, max_y) = (size.width as isize - 1, size.height as isize - 1);

    let ndata: [S; 16] = std::array::from_fn(|k| {
        let dx = (k % 4) as isize - 1;
        let dy = (k / 4) as isize - 1;
        let x = (ix + dx).clamp(0, max_x) as usize;
        let y = (iy + dy).clamp(0, max_y) as usize;
        source(x, y)
    });

    bicubic_interpolate(&ndata, u - u_floor, v - v_floor)
}
