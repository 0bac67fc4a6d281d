use num_traits::Float;

/// Floating type used for weights, factors and mapped coordinates.
///
/// Conversions follow `as` semantics: float to integer truncates toward zero
/// and saturates at the integer range, NaN maps to zero.
pub trait Scalar: Float + Send + Sync + std::fmt::Debug + 'static {
    /// Convert a grid index.
    fn from_usize(v: usize) -> Self;

    /// Convert a raster coordinate.
    fn from_i32(v: i32) -> Self;

    /// Truncate to a grid index.
    fn to_usize(self) -> usize;

    /// Truncate to a signed grid index.
    fn to_isize(self) -> isize;

    /// Truncate to a raster coordinate.
    fn to_i32(self) -> i32;
}

macro_rules! impl_scalar {
    ($($t:ty),+) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn from_usize(v: usize) -> Self {
                    v as $t
                }

                #[inline]
                fn from_i32(v: i32) -> Self {
                    v as $t
                }

                #[inline]
                fn to_usize(self) -> usize {
                    self as usize
                }

                #[inline]
                fn to_isize(self) -> isize {
                    self as isize
                }

                #[inline]
                fn to_i32(self) -> i32 {
                    self as i32
                }
            }
        )+
    };
}

impl_scalar!(f32, f64);
