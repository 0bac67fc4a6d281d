#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Every routine reports pixels through a writer `FnMut(x, y, sample)`. No
//! clipping is performed: the writer decides what to do with coordinates
//! outside its surface, e.g. [`pixkern_core::PixelBufferMut::set`] drops them.

/// y-ordered edges and x-ordered spans.
pub mod edge;

/// line drawing.
pub mod line;

/// triangle filling.
pub mod triangle;

/// positioned, colored vertices.
pub mod vertex;

pub use crate::edge::{Edge, Span};
pub use crate::line::{draw_line, draw_polyline, draw_triangle_outline};
pub use crate::triangle::{draw_span, draw_spans_between_edges, draw_triangle};
pub use crate::vertex::Vertex;
