use crate::{sample::Sample, scalar::Scalar};

/// Clamp `v` to `[lo, hi]`.
///
/// NaN inputs compare false everywhere and come back as `lo`.
#[inline]
pub fn clip<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    let v = if v < hi { v } else { hi };
    if lo < v {
        v
    } else {
        lo
    }
}

/// Linear interpolation from `start` to `end`.
///
/// `t` is clipped to `[0, 1]` first, so the result never leaves the segment.
#[inline]
pub fn lerp<F: Scalar, S: Sample<F>>(start: S, end: S, t: F) -> S {
    start + (end - start) * clip(t, F::zero(), F::one())
}

/// Blend `a` towards `b` by `t`.
#[inline]
pub fn mix<F: Scalar, S: Sample<F>>(a: S, b: S, t: F) -> S {
    lerp(a, b, t)
}

/// Blend `a` towards `b` by `ab`, then the result towards `c` by `bc`.
#[inline]
pub fn mix3<F: Scalar, S: Sample<F>>(a: S, b: S, c: S, ab: F, bc: F) -> S {
    mix(mix(a, b, ab), c, bc)
}
