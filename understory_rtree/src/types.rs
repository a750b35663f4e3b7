// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::cmp::Ordering;
use core::fmt::Debug;

use crate::error::Error;

/// Axis-aligned rectangle in `D` dimensions.
///
/// A rectangle is *valid* when `min[d] <= max[d]` on every axis. This is not
/// checked: inverted rectangles are accepted and simply produce signed
/// volumes (see [`volume`]).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect<T, const D: usize> {
    /// Minimum corner, one coordinate per dimension.
    pub min: [T; D],
    /// Maximum corner, one coordinate per dimension.
    pub max: [T; D],
}

impl<T, const D: usize> Rect<T, D> {
    /// Create a rectangle from its min/max corners.
    pub const fn new(min: [T; D], max: [T; D]) -> Self {
        Self { min, max }
    }
}

impl<T> Rect<T, 2> {
    /// Create a 2D rectangle from `(min_x, min_y, max_x, max_y)`.
    pub const fn new_2d(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min: [min_x, min_y],
            max: [max_x, max_y],
        }
    }
}

impl<T: Scalar, const D: usize> Rect<T, D> {
    /// The empty rectangle: the identity element of [`union`].
    ///
    /// Every minimum is [`Scalar::upper_bound`] and every maximum is
    /// [`Scalar::lower_bound`], so unioning it with any rectangle yields that rectangle.
    pub fn empty() -> Self {
        Self {
            min: [T::upper_bound(); D],
            max: [T::lower_bound(); D],
        }
    }

    /// A degenerate rectangle covering a single point.
    pub const fn point(p: [T; D]) -> Self {
        Self { min: p, max: p }
    }

    /// Build a rectangle from `2 * D` ordered coordinates.
    ///
    /// The first `D` values are the minimums and the next `D` the maximums,
    /// in dimension order. No `min <= max` validation is performed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CoordinateCount`] if `coords.len() != 2 * D`.
    pub fn from_coords(coords: &[T]) -> Result<Self, Error> {
        if coords.len() != 2 * D {
            return Err(Error::CoordinateCount {
                expected: 2 * D,
                found: coords.len(),
            });
        }
        Ok(Self {
            min: core::array::from_fn(|d| coords[d]),
            max: core::array::from_fn(|d| coords[D + d]),
        })
    }

    /// Return true if any axis is inverted (`max < min`). Assumes no NaN.
    pub fn is_empty(&self) -> bool {
        (0..D).any(|d| lt(self.max[d], self.min[d]))
    }

    /// Whether `other` lies entirely within this rectangle (edges inclusive).
    pub fn contains_rect(&self, other: &Self) -> bool {
        (0..D).all(|d| le(self.min[d], other.min[d]) && le(other.max[d], self.max[d]))
    }

    /// The union (minimum bounding rectangle) of `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        union(self, other)
    }

    /// Hyper-volume of the rectangle in the widened accumulator type.
    pub fn volume(&self) -> ScalarAcc<T> {
        volume(self)
    }
}

impl<T: Scalar, const D: usize> TryFrom<&[T]> for Rect<T, D> {
    type Error = Error;

    fn try_from(coords: &[T]) -> Result<Self, Self::Error> {
        Self::from_coords(coords)
    }
}

/// Numeric scalar abstraction for rectangle coordinates.
///
/// This trait provides the bounds needed for the empty rectangle and an
/// associated widened accumulator type for volume and cost computations
/// (e.g., f32→f64, i64→i128). Integer accumulators saturate rather than overflow.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Widened accumulator type suitable for volume/cost computations.
    type Acc: Copy + PartialOrd + Debug;

    /// Largest representable value (`+∞` for floats); the minimum of an empty rectangle.
    fn upper_bound() -> Self;

    /// Smallest representable value (`−∞` for floats); the maximum of an empty rectangle.
    fn lower_bound() -> Self;

    /// Convert a scalar to the accumulator type.
    fn widen(v: Self) -> Self::Acc;

    /// Multiplicative identity of the accumulator.
    fn acc_one() -> Self::Acc;

    /// Accumulator subtraction: a - b.
    fn acc_sub(a: Self::Acc, b: Self::Acc) -> Self::Acc;

    /// Accumulator multiplication.
    fn acc_mul(a: Self::Acc, b: Self::Acc) -> Self::Acc;

    /// Absolute value of an accumulator.
    fn acc_abs(a: Self::Acc) -> Self::Acc;
}

impl Scalar for f32 {
    type Acc = f64;

    #[inline]
    fn upper_bound() -> Self {
        Self::INFINITY
    }

    #[inline]
    fn lower_bound() -> Self {
        Self::NEG_INFINITY
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v as f64
    }

    #[inline]
    fn acc_one() -> Self::Acc {
        1.0
    }

    #[inline]
    fn acc_sub(a: Self::Acc, b: Self::Acc) -> Self::Acc {
        a - b
    }

    #[inline]
    fn acc_mul(a: Self::Acc, b: Self::Acc) -> Self::Acc {
        a * b
    }

    #[inline]
    fn acc_abs(a: Self::Acc) -> Self::Acc {
        if a < 0.0 { -a } else { a }
    }
}

impl Scalar for f64 {
    type Acc = Self;

    #[inline]
    fn upper_bound() -> Self {
        Self::INFINITY
    }

    #[inline]
    fn lower_bound() -> Self {
        Self::NEG_INFINITY
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v
    }

    #[inline]
    fn acc_one() -> Self::Acc {
        1.0
    }

    #[inline]
    fn acc_sub(a: Self::Acc, b: Self::Acc) -> Self::Acc {
        a - b
    }

    #[inline]
    fn acc_mul(a: Self::Acc, b: Self::Acc) -> Self::Acc {
        a * b
    }

    #[inline]
    fn acc_abs(a: Self::Acc) -> Self::Acc {
        if a < 0.0 { -a } else { a }
    }
}

impl Scalar for i64 {
    type Acc = i128;

    #[inline]
    fn upper_bound() -> Self {
        Self::MAX
    }

    #[inline]
    fn lower_bound() -> Self {
        Self::MIN
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v as i128
    }

    #[inline]
    fn acc_one() -> Self::Acc {
        1
    }

    #[inline]
    fn acc_sub(a: Self::Acc, b: Self::Acc) -> Self::Acc {
        a.saturating_sub(b)
    }

    #[inline]
    fn acc_mul(a: Self::Acc, b: Self::Acc) -> Self::Acc {
        a.saturating_mul(b)
    }

    #[inline]
    fn acc_abs(a: Self::Acc) -> Self::Acc {
        a.saturating_abs()
    }
}

impl Scalar for i32 {
    type Acc = i64;

    #[inline]
    fn upper_bound() -> Self {
        Self::MAX
    }

    #[inline]
    fn lower_bound() -> Self {
        Self::MIN
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v as i64
    }

    #[inline]
    fn acc_one() -> Self::Acc {
        1
    }

    #[inline]
    fn acc_sub(a: Self::Acc, b: Self::Acc) -> Self::Acc {
        a.saturating_sub(b)
    }

    #[inline]
    fn acc_mul(a: Self::Acc, b: Self::Acc) -> Self::Acc {
        a.saturating_mul(b)
    }

    #[inline]
    fn acc_abs(a: Self::Acc) -> Self::Acc {
        a.saturating_abs()
    }
}

/// Helper alias for the widened accumulator type associated with a scalar `T`.
pub type ScalarAcc<T> = <T as Scalar>::Acc;

/// Compute the hyper-volume of a rectangle: the product of its extents.
///
/// Extents are not clamped. An inverted axis contributes a negative factor,
/// so malformed rectangles may produce a volume of any sign.
#[inline]
pub fn volume<T: Scalar, const D: usize>(r: &Rect<T, D>) -> ScalarAcc<T> {
    (0..D).fold(T::acc_one(), |acc, d| {
        T::acc_mul(acc, T::acc_sub(T::widen(r.max[d]), T::widen(r.min[d])))
    })
}

/// Component-wise union of two rectangles.
///
/// Associative and commutative, with [`Rect::empty`] as identity.
#[inline]
pub fn union<T: PartialOrd + Copy, const D: usize>(a: &Rect<T, D>, b: &Rect<T, D>) -> Rect<T, D> {
    Rect {
        min: core::array::from_fn(|d| min_t(a.min[d], b.min[d])),
        max: core::array::from_fn(|d| max_t(a.max[d], b.max[d])),
    }
}

/// Volume that `r` gains when unioned with `by`.
#[inline]
pub fn enlargement<T: Scalar, const D: usize>(r: &Rect<T, D>, by: &Rect<T, D>) -> ScalarAcc<T> {
    T::acc_sub(volume(&union(r, by)), volume(r))
}

pub(crate) fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}

#[cfg(feature = "kurbo")]
impl From<kurbo::Rect> for Rect<f64, 2> {
    fn from(r: kurbo::Rect) -> Self {
        let r = r.abs();
        Self::new_2d(r.x0, r.y0, r.x1, r.y1)
    }
}

#[cfg(feature = "kurbo")]
impl From<Rect<f64, 2>> for kurbo::Rect {
    fn from(r: Rect<f64, 2>) -> Self {
        Self::new(r.min[0], r.min[1], r.max[0], r.max[1])
    }
}
