use crate::vertex::Vertex;
use pixkern_core::{Sample, Scalar};

/// Positions reached by adding `1` to `min` until the sum exceeds `max`.
///
/// Stops early once an addition no longer changes the position.
fn axis_steps<F: Scalar>(min: F, max: F) -> impl Iterator<Item = F> {
    std::iter::successors(Some(min), |&x| {
        let next = x + F::one();
        (next != x).then_some(next)
    })
    .take_while(move |&x| x <= max)
}

/// Draws a line with a digital differential analyzer.
///
/// The line is stepped one unit at a time along its dominant axis, from the
/// smaller endpoint coordinate up to and including the larger one. The other
/// coordinate follows the slope, and both are truncated before each write.
/// Samples are interpolated by the progress `(coord - start) / delta` along the
/// dominant axis, so `v1.color` lands on `v1` and `v2.color` is only reached if
/// the last step falls exactly on `v2`.
///
/// When both endpoints coincide a single pixel is written with `v1.color`.
/// Endpoints with NaN or infinite coordinates write nothing.
///
/// # Example
///
/// ```
/// use pixkern_raster::{draw_line, Vertex};
///
/// let mut pixels = Vec::new();
/// draw_line(
///     Vertex::new(0.0f32, 0.0, 0.0f32),
///     Vertex::new(4.0, 0.0, 1.0),
///     |x, y, v| pixels.push((x, y, v)),
/// );
/// assert_eq!(
///     pixels,
///     vec![(0, 0, 0.0), (1, 0, 0.25), (2, 0, 0.5), (3, 0, 0.75), (4, 0, 1.0)]
/// );
/// ```
pub fn draw_line<F, S>(v1: Vertex<F, S>, v2: Vertex<F, S>, mut write: impl FnMut(i32, i32, S))
where
    F: Scalar,
    S: Sample<F>,
{
    let x_diff = v2.x - v1.x;
    let y_diff = v2.y - v1.y;

    if x_diff == F::zero() && y_diff == F::zero() {
        write(v1.x.to_i32(), v1.y.to_i32(), v1.color);
        return;
    }
    if !(x_diff.is_finite() && y_diff.is_finite()) {
        log::debug!("skipping unbounded line ({x_diff:?}, {y_diff:?})");
        return;
    }

    let color_diff = v2.color - v1.color;

    if x_diff.abs() > y_diff.abs() {
        // draw line in terms of y slope
        let (x_min, x_max) = if v1.x < v2.x { (v1.x, v2.x) } else { (v2.x, v1.x) };
        let slope = y_diff / x_diff;
        for x in axis_steps(x_min, x_max) {
            let y = v1.y + (x - v1.x) * slope;
            write(x.to_i32(), y.to_i32(), v1.color + color_diff * ((x - v1.x) / x_diff));
        }
    } else {
        // draw line in terms of x slope
        let (y_min, y_max) = if v1.y < v2.y { (v1.y, v2.y) } else { (v2.y, v1.y) };
        let slope = x_diff / y_diff;
        for y in axis_steps(y_min, y_max) {
            let x = v1.x + (y - v1.y) * slope;
            write(x.to_i32(), y.to_i32(), v1.color + color_diff * ((y - v1.y) / y_diff));
        }
    }
}

/// Draws connected line segments through `vertices`.
///
/// With `closed` the last vertex is joined back to the first. Shared corners
/// are written by both adjoining segments.
pub fn draw_polyline<F, S>(
    vertices: &[Vertex<F, S>],
    closed: bool,
    mut write: impl FnMut(i32, i32, S),
) where
    F: Scalar,
    S: Sample<F>,
{
    for pair in vertices.windows(2) {
        draw_line(pair[0], pair[1], &mut write);
    }
    if closed && vertices.len() > 2 {
        if let (Some(first), Some(last)) = (vertices.first(), vertices.last()) {
            draw_line(*last, *first, &mut write);
        }
    }
}

/// Draws the three edges of a triangle.
pub fn draw_triangle_outline<F, S>(
    v1: Vertex<F, S>,
    v2: Vertex<F, S>,
    v3: Vertex<F, S>,
    write: impl FnMut(i32, i32, S),
) where
    F: Scalar,
    S: Sample<F>,
{
    draw_polyline(&[v1, v2, v3], true, write);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pixkern_core::RgbF32;

    fn line(p1: (f32, f32, RgbF32), p2: (f32, f32, RgbF32)) -> Vec<(i32, i32, RgbF32)> {
        let mut pixels = Vec::new();
        draw_line(Vertex::from(p1), Vertex::from(p2), |x, y, c| pixels.push((x, y, c)));
        pixels
    }

    #[test]
    fn test_single_point() {
        let red = RgbF32::new(1.0, 0.0, 0.0);
        assert_eq!(line((0.0, 0.0, red), (0.0, 0.0, red)), vec![(0, 0, red)]);
        // a zero-length line always uses the first color
        assert_eq!(
            line((2.7, 3.2, red), (2.7, 3.2, RgbF32::ZERO)),
            vec![(2, 3, red)]
        );
    }

    #[test]
    fn test_horizontal_gradient() {
        let pixels = line((0.0, 0.0, RgbF32::ZERO), (4.0, 0.0, RgbF32::ONE));
        assert_eq!(pixels.len(), 5);
        for (i, &(x, y, c)) in pixels.iter().enumerate() {
            assert_eq!((x, y), (i as i32, 0));
            assert_relative_eq!(c, RgbF32::splat(i as f32 / 4.0));
        }
        assert!(pixels.windows(2).all(|w| w[0].2 < w[1].2));
    }

    #[test]
    fn test_steep_line_steps_along_y() {
        let pixels = line((0.0, 0.0, RgbF32::ZERO), (1.0, 3.0, RgbF32::ONE));
        let coords: Vec<(i32, i32)> = pixels.iter().map(|p| (p.0, p.1)).collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (0, 2), (1, 3)]);
    }

    #[test]
    fn test_reversed_line_steps_from_minimum() {
        let pixels = line((4.0, 2.0, RgbF32::ZERO), (0.0, 0.0, RgbF32::ONE));
        let coords: Vec<(i32, i32)> = pixels.iter().map(|p| (p.0, p.1)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]);
        // the far endpoint keeps its own color
        assert_eq!(pixels[0].2, RgbF32::ONE);
        assert_eq!(pixels[4].2, RgbF32::ZERO);
    }

    #[test]
    fn test_diagonal_tie_steps_along_y() {
        let pixels = line((0.0, 0.0, RgbF32::ZERO), (3.0, 3.0, RgbF32::ONE));
        let coords: Vec<(i32, i32)> = pixels.iter().map(|p| (p.0, p.1)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_fractional_end_is_not_reached() {
        // boundary-sensitive: the last step lands at 2.5, short of 3.0
        let pixels = line((0.5, 0.0, RgbF32::ZERO), (3.0, 0.0, RgbF32::ONE));
        let xs: Vec<i32> = pixels.iter().map(|p| p.0).collect();
        assert_eq!(xs, vec![0, 1, 2]);
        assert_relative_eq!(pixels[2].2, RgbF32::splat(0.8));
    }

    #[test]
    fn test_fractional_endpoints_match_accumulated_steps() {
        for a in 0..40 {
            for b in 0..40 {
                let x1 = 0.05f32 + 0.1 * a as f32;
                let x2 = x1 + 4.0 + 0.1 * b as f32;

                let mut expected = 0;
                let mut x = x1;
                while x <= x2 {
                    expected += 1;
                    x += 1.0;
                }

                let horizontal = line((x1, 0.0, RgbF32::ZERO), (x2, 0.5, RgbF32::ONE));
                assert_eq!(horizontal.len(), expected, "x from {x1} to {x2}");
                let vertical = line((0.5, x2, RgbF32::ZERO), (0.0, x1, RgbF32::ONE));
                assert_eq!(vertical.len(), expected, "y from {x1} to {x2}");
            }
        }
    }

    #[test]
    fn test_unit_span_with_fractional_start() {
        // the end sits exactly four accumulated steps past the start
        let end = 0.45f32 + 1.0 + 1.0 + 1.0 + 1.0;
        let xs: Vec<i32> = line((0.45, 0.0, RgbF32::ZERO), (end, 0.0, RgbF32::ONE))
            .iter()
            .map(|p| p.0)
            .collect();
        assert_eq!(xs, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_large_magnitude_line_terminates() {
        // 2^24 + 1 is not representable in f32, so stepping stalls at 2^24
        let start = 16_777_216.0f32;
        let pixels = line((start, 0.0, RgbF32::ZERO), (start + 4.0, 0.0, RgbF32::ONE));
        assert_eq!(pixels.len(), 1);
    }

    #[test]
    fn test_non_finite_lines_write_nothing() {
        assert!(line((0.0, 0.0, RgbF32::ZERO), (f32::NAN, 0.0, RgbF32::ONE)).is_empty());
        assert!(line((0.0, 0.0, RgbF32::ZERO), (f32::INFINITY, 1.0, RgbF32::ONE)).is_empty());
    }

    #[test]
    fn test_polyline() {
        let v = |x: f32, y: f32| Vertex::new(x, y, 1.0f32);
        let mut open = Vec::new();
        draw_polyline(&[v(0.0, 0.0), v(2.0, 0.0), v(2.0, 2.0)], false, |x, y, _| {
            open.push((x, y))
        });
        assert_eq!(open, vec![(0, 0), (1, 0), (2, 0), (2, 0), (2, 1), (2, 2)]);

        let mut outline = Vec::new();
        draw_triangle_outline(v(0.0, 0.0), v(2.0, 0.0), v(2.0, 2.0), |x, y, _| {
            outline.push((x, y))
        });
        assert_eq!(outline.len(), open.len() + 3);
        assert_eq!(&outline[6..], &[(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_polyline_degenerate_inputs() {
        let mut count = 0;
        draw_polyline::<f32, f32>(&[], true, |_, _, _| count += 1);
        draw_polyline(&[Vertex::new(1.0f32, 1.0, 0.0f32)], true, |_, _, _| count += 1);
        assert_eq!(count, 0);
    }
}
