//! Three-channel color (generic precision).

use approx::{AbsDiffEq, RelativeEq};
use num_traits::Float;
use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A three-channel color value.
///
/// All arithmetic is component-wise and follows IEEE semantics: dividing by
/// zero yields infinities or NaN, it never panics and is never silently guarded.
///
/// `PartialEq` is exact. Tolerance-based comparison is provided through the
/// [`approx`] traits.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb<F> {
    /// Red channel.
    pub r: F,
    /// Green channel.
    pub g: F,
    /// Blue channel.
    pub b: F,
}

/// Single precision color.
pub type RgbF32 = Rgb<f32>;

/// Double precision color.
pub type RgbF64 = Rgb<f64>;

impl<F: Float> Rgb<F> {
    /// Create a new color from its components.
    #[inline]
    pub fn new(r: F, g: F, b: F) -> Self {
        Self { r, g, b }
    }

    /// Create a color with every channel set to `v`.
    #[inline]
    pub fn splat(v: F) -> Self {
        Self::new(v, v, v)
    }

    /// Create a color from an array.
    #[inline]
    pub fn from_array(arr: [F; 3]) -> Self {
        let [r, g, b] = arr;
        Self { r, g, b }
    }

    /// Convert the color to an array.
    #[inline]
    pub fn to_array(self) -> [F; 3] {
        [self.r, self.g, self.b]
    }

    /// Apply `f` to every channel.
    #[inline]
    pub fn map(self, f: impl Fn(F) -> F) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Largest channel value.
    #[inline]
    pub fn max_element(self) -> F {
        self.r.max(self.g).max(self.b)
    }

    /// Smallest channel value.
    #[inline]
    pub fn min_element(self) -> F {
        self.r.min(self.g).min(self.b)
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, rhs: Self) -> Self {
        Self::new(self.r.max(rhs.r), self.g.max(rhs.g), self.b.max(rhs.b))
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, rhs: Self) -> Self {
        Self::new(self.r.min(rhs.r), self.g.min(rhs.g), self.b.min(rhs.b))
    }

    /// Clamp every channel to `[lo, hi]`.
    #[inline]
    pub fn clip(self, lo: F, hi: F) -> Self {
        self.map(|c| crate::ops::clip(c, lo, hi))
    }

    /// Scale the color so that its largest channel becomes one.
    ///
    /// A black color divides by zero and yields NaN channels.
    #[inline]
    pub fn normalize_max(self) -> Self {
        self / self.max_element()
    }
}

impl Rgb<f32> {
    /// Black.
    pub const ZERO: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// White.
    pub const ONE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };
}

impl Rgb<f64> {
    /// Black.
    pub const ZERO: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// White.
    pub const ONE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };
}

impl<F: Float> From<[F; 3]> for Rgb<F> {
    #[inline]
    fn from(arr: [F; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl<F: Float> From<Rgb<F>> for [F; 3] {
    #[inline]
    fn from(c: Rgb<F>) -> Self {
        c.to_array()
    }
}

// Arithmetic operations
impl<F: Float> Add for Rgb<F> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl<F: Float> Add<F> for Rgb<F> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: F) -> Self::Output {
        self.map(|c| c + rhs)
    }
}

impl<F: Float> Sub for Rgb<F> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl<F: Float> Sub<F> for Rgb<F> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: F) -> Self::Output {
        self + (-rhs)
    }
}

impl<F: Float> Mul for Rgb<F> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl<F: Float> Mul<F> for Rgb<F> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: F) -> Self::Output {
        self.map(|c| c * rhs)
    }
}

impl<F: Float> Div<F> for Rgb<F> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: F) -> Self::Output {
        self.map(|c| c / rhs)
    }
}

impl<F: Float> Neg for Rgb<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|c| -c)
    }
}

macro_rules! impl_scalar_lhs_ops {
    ($($scalar:ty),+) => {
        $(
            impl Mul<Rgb<$scalar>> for $scalar {
                type Output = Rgb<$scalar>;

                #[inline]
                fn mul(self, rhs: Rgb<$scalar>) -> Self::Output {
                    rhs * self
                }
            }

            impl Add<Rgb<$scalar>> for $scalar {
                type Output = Rgb<$scalar>;

                #[inline]
                fn add(self, rhs: Rgb<$scalar>) -> Self::Output {
                    rhs + self
                }
            }
        )+
    };
}

impl_scalar_lhs_ops!(f32, f64);

/// Colors are ordered only when every channel agrees on the direction.
impl<F: Float> PartialOrd for Rgb<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.r < other.r && self.g < other.g && self.b < other.b {
            Some(Ordering::Less)
        } else if self.r > other.r && self.g > other.g && self.b > other.b {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl<F> AbsDiffEq for Rgb<F>
where
    F: Float + AbsDiffEq<Epsilon = F>,
{
    type Epsilon = F;

    fn default_epsilon() -> F {
        <F as AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
        F::abs_diff_eq(&self.r, &other.r, epsilon)
            && F::abs_diff_eq(&self.g, &other.g, epsilon)
            && F::abs_diff_eq(&self.b, &other.b, epsilon)
    }
}

impl<F> RelativeEq for Rgb<F>
where
    F: Float + RelativeEq<Epsilon = F>,
{
    fn default_max_relative() -> F {
        <F as RelativeEq>::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
        F::relative_eq(&self.r, &other.r, epsilon, max_relative)
            && F::relative_eq(&self.g, &other.g, epsilon, max_relative)
            && F::relative_eq(&self.b, &other.b, epsilon, max_relative)
    }
}
