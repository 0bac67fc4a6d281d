/// A primitive's corner: a real-valued position and the sample carried there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex<F, S> {
    /// Horizontal position.
    pub x: F,
    /// Vertical position.
    pub y: F,
    /// Sample interpolated from this corner.
    pub color: S,
}

impl<F, S> Vertex<F, S> {
    /// Create a new vertex.
    #[inline]
    pub fn new(x: F, y: F, color: S) -> Self {
        Self { x, y, color }
    }
}

impl<F, S> From<(F, F, S)> for Vertex<F, S> {
    #[inline]
    fn from((x, y, color): (F, F, S)) -> Self {
        Self::new(x, y, color)
    }
}
