use crate::core::traits::Real;
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D point or vector in workspace units.
///
/// With the `serde` feature enabled it serializes as a two element array `[x, y]`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        from = "[T; 2]",
        into = "[T; 2]",
        bound(serialize = "T: Serialize + Copy", deserialize = "T: Deserialize<'de>")
    )
)]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> From<[T; 2]> for Vector2<T> {
    #[inline]
    fn from(v: [T; 2]) -> Self {
        let [x, y] = v;
        Vector2 { x, y }
    }
}

impl<T> From<Vector2<T>> for [T; 2] {
    #[inline]
    fn from(v: Vector2<T>) -> Self {
        [v.x, v.y]
    }
}

impl<T> From<(T, T)> for Vector2<T> {
    #[inline]
    fn from(v: (T, T)) -> Self {
        Vector2 { x: v.0, y: v.1 }
    }
}

impl<T> Vector2<T>
where
    T: Real,
{
    /// Create a new vector with x and y components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    /// Create a zero vector (x = 0, y = 0).
    #[inline]
    pub fn zero() -> Self {
        Vector2::new(T::zero(), T::zero())
    }

    /// Uniformly scale the vector by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        vec2(scale_factor * self.x, scale_factor * self.y)
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Perpendicular dot product (`self.x * other.y - self.y * other.x`).
    #[inline]
    pub fn perp_dot(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Squared length of the vector.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Length of the vector.
    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Normalize the vector (length = 1).
    #[inline]
    pub fn normalize(&self) -> Self {
        self.scale(T::one() / self.length())
    }

    /// Fuzzy equal comparison with another vector using `fuzzy_epsilon` given.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another vector using T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }

    /// Rotate 90 degrees clockwise as seen on a sheet whose y axis points down.
    ///
    /// This is the rotation sense used together with [Winding](crate::polyline::Winding) so that
    /// "clockwise" means the same thing for both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cutpath::core::math::*;
    /// let v = vec2(1.0, 0.0);
    /// // pointing right turns to pointing down the sheet (+y)
    /// assert!(v.rotate_cw().fuzzy_eq(vec2(0.0, 1.0)));
    /// assert!(v.rotate_ccw().fuzzy_eq(vec2(0.0, -1.0)));
    /// ```
    #[inline]
    pub fn rotate_cw(&self) -> Self {
        vec2(-self.y, self.x)
    }

    /// Rotate 90 degrees counter clockwise as seen on a sheet whose y axis points down. Inverse of
    /// [Vector2::rotate_cw].
    #[inline]
    pub fn rotate_ccw(&self) -> Self {
        vec2(self.y, -self.x)
    }
}

#[inline(always)]
pub fn vec2<T>(x: T, y: T) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(x, y)
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            #[inline]
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<&Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            #[inline]
            fn $op_func(self, rhs: &Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<Vector2<T>> for &Vector2<T> {
            type Output = Vector2<T>;
            #[inline]
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);

impl<T: Real> ops::Neg for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}
