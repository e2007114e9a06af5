use super::{Vector2, vec2};
use crate::core::traits::Real;
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D affine transform used to place a shape on the workspace.
///
/// Maps a point `p` to `(a * p.x + c * p.y + tx, b * p.x + d * p.y + ty)`. Composition with `*`
/// applies the right hand side first, so `t2 * t1` is "apply `t1` then `t2`".
///
/// # Examples
///
/// ```
/// # use cutpath::core::math::*;
/// let t = Affine2::translate(10.0, 0.0) * Affine2::scale(2.0, 3.0);
/// assert!(t.apply(vec2(1.0, 1.0)).fuzzy_eq(vec2(12.0, 3.0)));
/// assert!(t.inverse().unwrap().apply(vec2(12.0, 3.0)).fuzzy_eq(vec2(1.0, 1.0)));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Affine2<T = f64> {
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
    pub tx: T,
    pub ty: T,
}

impl<T> Affine2<T>
where
    T: Real,
{
    #[inline]
    pub fn identity() -> Self {
        Affine2 {
            a: T::one(),
            b: T::zero(),
            c: T::zero(),
            d: T::one(),
            tx: T::zero(),
            ty: T::zero(),
        }
    }

    #[inline]
    pub fn translate(tx: T, ty: T) -> Self {
        Affine2 {
            tx,
            ty,
            ..Self::identity()
        }
    }

    #[inline]
    pub fn scale(sx: T, sy: T) -> Self {
        Affine2 {
            a: sx,
            d: sy,
            ..Self::identity()
        }
    }

    /// Rotation by `angle` radians about the origin (counter clockwise with the y axis up).
    #[inline]
    pub fn rotate(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        Affine2 {
            a: c,
            b: s,
            c: -s,
            d: c,
            tx: T::zero(),
            ty: T::zero(),
        }
    }

    /// Rotation by `angle` radians about `origin`.
    pub fn rotate_about(origin: Vector2<T>, angle: T) -> Self {
        Self::translate(origin.x, origin.y)
            * Self::rotate(angle)
            * Self::translate(-origin.x, -origin.y)
    }

    /// Transform a point.
    #[inline]
    pub fn apply(&self, p: Vector2<T>) -> Vector2<T> {
        vec2(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    /// Determinant of the linear part. Negative when the transform mirrors.
    #[inline]
    pub fn determinant(&self) -> T {
        self.a * self.d - self.b * self.c
    }

    /// Inverse transform, `None` if the linear part is singular.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.fuzzy_eq_zero() {
            return None;
        }
        let inv = T::one() / det;
        let a = self.d * inv;
        let b = -self.b * inv;
        let c = -self.c * inv;
        let d = self.a * inv;
        Some(Affine2 {
            a,
            b,
            c,
            d,
            tx: -(a * self.tx + c * self.ty),
            ty: -(b * self.tx + d * self.ty),
        })
    }

    pub fn fuzzy_eq_eps(&self, other: &Self, eps: T) -> bool {
        self.a.fuzzy_eq_eps(other.a, eps)
            && self.b.fuzzy_eq_eps(other.b, eps)
            && self.c.fuzzy_eq_eps(other.c, eps)
            && self.d.fuzzy_eq_eps(other.d, eps)
            && self.tx.fuzzy_eq_eps(other.tx, eps)
            && self.ty.fuzzy_eq_eps(other.ty, eps)
    }
}

impl<T> Default for Affine2<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> ops::Mul for Affine2<T>
where
    T: Real,
{
    type Output = Affine2<T>;

    fn mul(self, rhs: Affine2<T>) -> Self::Output {
        Affine2 {
            a: self.a * rhs.a + self.c * rhs.b,
            b: self.b * rhs.a + self.d * rhs.b,
            c: self.a * rhs.c + self.c * rhs.d,
            d: self.b * rhs.c + self.d * rhs.d,
            tx: self.a * rhs.tx + self.c * rhs.ty + self.tx,
            ty: self.b * rhs.tx + self.d * rhs.ty + self.ty,
        }
    }
}
