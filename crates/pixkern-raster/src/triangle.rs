use crate::edge::{Edge, Span};
use crate::vertex::Vertex;
use pixkern_core::{Sample, Scalar};

/// Draw a span at row `y`, interpolating its samples from left to right.
///
/// Pixels `x1..x2` are written; the right endpoint is exclusive, so a
/// degenerate span writes nothing.
pub fn draw_span<F, S>(span: &Span<S>, y: i32, mut write: impl FnMut(i32, i32, S))
where
    F: Scalar,
    S: Sample<F>,
{
    if span.is_degenerate() {
        return;
    }

    let color_diff = span.color2 - span.color1;
    let x_start = F::from_i32(span.x1);
    let factor_step = F::one() / (F::from_i32(span.x2) - x_start);

    for x in span.x1..span.x2 {
        let factor = (F::from_i32(x) - x_start) * factor_step;
        write(x, y, span.color1 + color_diff * factor);
    }
}

/// Fill the scanlines `short.y1..short.y2` between a triangle's long edge and
/// one of its short edges.
///
/// On every row both edges are interpolated by their own progress
/// `(y - edge.y1) / (edge.y2 - edge.y1)` and the resulting span is drawn with
/// [`draw_span`]. If either edge is horizontal nothing is drawn.
pub fn draw_spans_between_edges<F, S>(
    long: &Edge<S>,
    short: &Edge<S>,
    mut write: impl FnMut(i32, i32, S),
) where
    F: Scalar,
    S: Sample<F>,
{
    if long.is_degenerate() || short.is_degenerate() {
        return;
    }

    let walk = EdgeWalk::<F, S>::new(long);
    let short_walk = EdgeWalk::<F, S>::new(short);

    for y in short.y1..short.y2 {
        let (long_color, long_x) = walk.at(y);
        let (short_color, short_x) = short_walk.at(y);
        let span = Span::new(long_color, long_x, short_color, short_x);
        draw_span::<F, S>(&span, y, &mut write);
    }
}

/// Interpolation state of one non-degenerate edge.
struct EdgeWalk<'a, F, S> {
    edge: &'a Edge<S>,
    color_diff: S,
    x_diff: F,
    y_start: F,
    y_diff: F,
}

impl<'a, F: Scalar, S: Sample<F>> EdgeWalk<'a, F, S> {
    fn new(edge: &'a Edge<S>) -> Self {
        let y_start = F::from_i32(edge.y1);
        Self {
            edge,
            color_diff: edge.color2 - edge.color1,
            x_diff: F::from_i32(edge.x2) - F::from_i32(edge.x1),
            y_start,
            y_diff: F::from_i32(edge.y2) - y_start,
        }
    }

    /// Sample and truncated x where the edge crosses row `y`.
    #[inline]
    fn at(&self, y: i32) -> (S, i32) {
        let factor = (F::from_i32(y) - self.y_start) / self.y_diff;
        let color = self.edge.color1 + self.color_diff * factor;
        let x = self.edge.x1.saturating_add((self.x_diff * factor).to_i32());
        (color, x)
    }
}

/// Index of the edge with the greatest vertical extent.
///
/// Ties keep the earliest edge.
pub fn select_long_edge<S>(edges: &[Edge<S>; 3]) -> usize {
    let mut max_length = 0;
    let mut long_edge = 0;
    for (i, edge) in edges.iter().enumerate() {
        let length = edge.height();
        if length > max_length {
            max_length = length;
            long_edge = i;
        }
    }
    long_edge
}

/// Fill a triangle with samples interpolated from its three vertices.
///
/// Vertex positions are truncated to integers. The edge with the greatest
/// vertical extent is walked against each of the two other edges in turn,
/// producing horizontal spans in increasing `y` for each pass. Rows
/// `y_min..y_max` are covered, the bottom row and the right end of every span
/// are exclusive, so triangles sharing an edge do not overdraw much.
///
/// Zero-area input (all three vertices on one row, or every span empty)
/// writes nothing.
///
/// # Example
///
/// ```
/// use pixkern_raster::{draw_triangle, Vertex};
///
/// let mut pixels = Vec::new();
/// draw_triangle(
///     Vertex::new(0.0f32, 0.0, 1.0f32),
///     Vertex::new(4.0, 0.0, 1.0),
///     Vertex::new(0.0, 4.0, 1.0),
///     |x, y, _| pixels.push((x, y)),
/// );
/// assert_eq!(pixels.len(), 4 + 3 + 2 + 1);
/// ```
pub fn draw_triangle<F, S>(
    v1: Vertex<F, S>,
    v2: Vertex<F, S>,
    v3: Vertex<F, S>,
    mut write: impl FnMut(i32, i32, S),
) where
    F: Scalar,
    S: Sample<F>,
{
    let (x1, y1) = (v1.x.to_i32(), v1.y.to_i32());
    let (x2, y2) = (v2.x.to_i32(), v2.y.to_i32());
    let (x3, y3) = (v3.x.to_i32(), v3.y.to_i32());

    let edges = [
        Edge::new(v1.color, x1, y1, v2.color, x2, y2),
        Edge::new(v2.color, x2, y2, v3.color, x3, y3),
        Edge::new(v3.color, x3, y3, v1.color, x1, y1),
    ];

    let long_edge = select_long_edge(&edges);
    if edges[long_edge].is_degenerate() {
        log::trace!("skipping flat triangle at y = {y1}");
        return;
    }

    draw_spans_between_edges::<F, S>(&edges[long_edge], &edges[(long_edge + 1) % 3], &mut write);
    draw_spans_between_edges::<F, S>(&edges[long_edge], &edges[(long_edge + 2) % 3], &mut write);
}
