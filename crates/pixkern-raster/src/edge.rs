/// Segment between two triangle corners, ordered so that `y1 <= y2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<S> {
    /// Sample at the upper endpoint.
    pub color1: S,
    /// Sample at the lower endpoint.
    pub color2: S,
    /// x of the upper endpoint.
    pub x1: i32,
    /// y of the upper endpoint.
    pub y1: i32,
    /// x of the lower endpoint.
    pub x2: i32,
    /// y of the lower endpoint.
    pub y2: i32,
}

impl<S> Edge<S> {
    /// Build an edge, swapping the endpoints (and their samples) when the
    /// first one lies below the second.
    pub fn new(color1: S, x1: i32, y1: i32, color2: S, x2: i32, y2: i32) -> Self {
        if y1 < y2 {
            Self {
                color1,
                color2,
                x1,
                y1,
                x2,
                y2,
            }
        } else {
            Self {
                color1: color2,
                color2: color1,
                x1: x2,
                y1: y2,
                x2: x1,
                y2: y1,
            }
        }
    }

    /// Vertical extent `y2 - y1`, never negative.
    #[inline]
    pub fn height(&self) -> i64 {
        i64::from(self.y2) - i64::from(self.y1)
    }

    /// A horizontal edge covers no scanline.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.y1 == self.y2
    }
}

/// One scanline's extent between two edges, ordered so that `x1 <= x2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span<S> {
    /// Sample at the left endpoint.
    pub color1: S,
    /// Sample at the right endpoint.
    pub color2: S,
    /// Left endpoint.
    pub x1: i32,
    /// Right endpoint, exclusive.
    pub x2: i32,
}

impl<S> Span<S> {
    /// Build a span, swapping the endpoints (and their samples) when the
    /// first one lies right of the second.
    pub fn new(color1: S, x1: i32, color2: S, x2: i32) -> Self {
        if x1 < x2 {
            Self {
                color1,
                color2,
                x1,
                x2,
            }
        } else {
            Self {
                color1: color2,
                color2: color1,
                x1: x2,
                x2: x1,
            }
        }
    }

    /// Number of pixels the span covers.
    #[inline]
    pub fn width(&self) -> i64 {
        i64::from(self.x2) - i64::from(self.x1)
    }

    /// An empty span writes no pixels.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.x1 == self.x2
    }
}
