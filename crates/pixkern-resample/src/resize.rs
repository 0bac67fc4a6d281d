use crate::error::ResampleError;
use crate::interpolation::{interpolate_pixel, InterpolationMode};
use crate::parallel::{for_each_row_mut, ExecutionStrategy};
use pixkern_core::{ImageSize, PixelBuffer, PixelBufferMut, Sample, Scalar};

/// Per-axis ratio mapping destination indices onto source coordinates.
#[inline]
fn scale_ratios<F: Scalar>(src_size: ImageSize, dst_size: ImageSize) -> (F, F) {
    (
        F::from_usize(src_size.width) / F::from_usize(dst_size.width),
        F::from_usize(src_size.height) / F::from_usize(dst_size.height),
    )
}

/// Resample a grid to a new size.
///
/// Destination pixel `(j, i)` is interpolated at source coordinate
/// `(j * src.width / dst.width, i * src.height / dst.height)`. The writer is
/// called exactly once per destination pixel, row by row, left to right.
///
/// An empty destination produces no writes. An empty source cannot be sampled
/// and produces no writes either.
///
/// # Arguments
///
/// * `src_size` - The size of the source grid.
/// * `source` - The source accessor, called only inside `src_size`.
/// * `dst_size` - The size of the destination grid.
/// * `write` - The destination writer, called as `write(x, y, sample)`.
/// * `interpolation` - The interpolation mode to use.
///
/// # Example
///
/// ```
/// use pixkern_core::ImageSize;
/// use pixkern_resample::{resize, InterpolationMode};
///
/// let src = [0.0f32, 1.0];
/// let mut dst = vec![0.0f32; 4];
///
/// resize::<f32, _>(
///     ImageSize { width: 2, height: 1 },
///     |x, y| src[y * 2 + x],
///     ImageSize { width: 4, height: 1 },
///     |x, y, v| dst[y * 4 + x] = v,
///     InterpolationMode::Bilinear,
/// );
///
/// assert_eq!(dst, vec![0.0, 0.5, 1.0, 1.0]);
/// ```
pub fn resize<F, S>(
    src_size: ImageSize,
    source: impl Fn(usize, usize) -> S,
    dst_size: ImageSize,
    mut write: impl FnMut(usize, usize, S),
    interpolation: InterpolationMode,
) where
    F: Scalar,
    S: Sample<F>,
{
    if dst_size.is_empty() {
        return;
    }
    if src_size.is_empty() {
        log::debug!("skipping resize from empty source {src_size} into {dst_size}");
        return;
    }

    let (ratio_x, ratio_y): (F, F) = scale_ratios(src_size, dst_size);

    for i in 0..dst_size.height {
        let v = ratio_y * F::from_usize(i);
        for j in 0..dst_size.width {
            let u = ratio_x * F::from_usize(j);
            write(j, i, interpolate_pixel(&source, src_size, u, v, interpolation));
        }
    }
}

/// Resample a grid to a new size by blending the 4 nearest source samples.
///
/// See [`resize`] for the coordinate mapping and write order. When the sizes
/// match the mapping is the identity and every sample is copied unchanged.
pub fn resize_bilinear<F, S>(
    src_size: ImageSize,
    source: impl Fn(usize, usize) -> S,
    dst_size: ImageSize,
    write: impl FnMut(usize, usize, S),
) where
    F: Scalar,
    S: Sample<F>,
{
    resize(src_size, source, dst_size, write, InterpolationMode::Bilinear)
}

/// Resample a grid to a new size by cubic convolution over the 4x4 nearest
/// source samples.
///
/// Neighbours past the border replicate the edge sample. Results are not
/// clamped, so sharp edges may ring beyond the input value range.
pub fn resize_bicubic<F, S>(
    src_size: ImageSize,
    source: impl Fn(usize, usize) -> S,
    dst_size: ImageSize,
    write: impl FnMut(usize, usize, S),
) where
    F: Scalar,
    S: Sample<F>,
{
    resize(src_size, source, dst_size, write, InterpolationMode::Bicubic)
}

/// Resample a row-major slice into another row-major slice.
///
/// Produces the same values as [`resize`] reading from `src` and writing into
/// `dst`, optionally splitting the destination rows over the rayon pool.
///
/// # Errors
///
/// Returns an error if a slice length does not match its size, or if `src` is
/// empty while `dst` is not.
pub fn resize_buffer<F, S>(
    src: &[S],
    src_size: ImageSize,
    dst: &mut [S],
    dst_size: ImageSize,
    interpolation: InterpolationMode,
    strategy: ExecutionStrategy,
) -> Result<(), ResampleError>
where
    F: Scalar,
    S: Sample<F> + Send + Sync,
{
    let src = PixelBuffer::new(src_size, src)?;
    let mut dst = PixelBufferMut::new(dst_size, dst)?;

    if dst_size.is_empty() {
        return Ok(());
    }
    if src_size.is_empty() {
        return Err(ResampleError::EmptySource(src_size, dst_size));
    }

    log::debug!("resizing {src_size} into {dst_size} ({interpolation:?}, {strategy:?})");

    let (ratio_x, ratio_y): (F, F) = scale_ratios(src_size, dst_size);
    let source = |x: usize, y: usize| src.get(x, y);

    for_each_row_mut(dst.as_slice_mut(), dst_size.width, strategy, |i, row| {
        let v = ratio_y * F::from_usize(i);
        for (j, out) in row.iter_mut().enumerate() {
            let u = ratio_x * F::from_usize(j);
            *out = interpolate_pixel(&source, src_size, u, v, interpolation);
        }
    });

    Ok(())
}
