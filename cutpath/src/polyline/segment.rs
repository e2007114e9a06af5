use crate::core::{
    math::{SegSegIntr, Vector2, dist_squared, min_max, seg_seg_intr},
    traits::Real,
};
use static_aabb2d_index::AABB;

/// Straight segment of a polyline running from `p1` to `p2`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment<T = f64> {
    pub p1: Vector2<T>,
    pub p2: Vector2<T>,
}

impl<T> Segment<T>
where
    T: Real,
{
    #[inline]
    pub fn new(p1: Vector2<T>, p2: Vector2<T>) -> Self {
        Segment { p1, p2 }
    }

    /// `p2 - p1`.
    #[inline]
    pub fn direction(&self) -> Vector2<T> {
        self.p2 - self.p1
    }

    #[inline]
    pub fn length(&self) -> T {
        dist_squared(self.p1, self.p2).sqrt()
    }

    /// True if both end points are the same position (zero length edge).
    #[inline]
    pub fn is_degenerate(&self, pos_equal_eps: T) -> bool {
        self.p1.fuzzy_eq_eps(self.p2, pos_equal_eps)
    }

    /// Same segment running the other way.
    #[inline]
    pub fn reversed(&self) -> Self {
        Segment::new(self.p2, self.p1)
    }

    /// Tight bounding box of the segment.
    #[inline]
    pub fn bounding_box(&self) -> AABB<T> {
        let (min_x, max_x) = min_max(self.p1.x, self.p2.x);
        let (min_y, max_y) = min_max(self.p1.y, self.p2.y);
        AABB::new(min_x, min_y, max_x, max_y)
    }

    /// Intersect with another segment, see [seg_seg_intr].
    #[inline]
    pub fn intersect(&self, other: &Segment<T>, epsilon: T) -> SegSegIntr<T> {
        seg_seg_intr(self.p1, self.p2, other.p1, other.p2, epsilon)
    }

    /// True if any part of the segment lies in the closed box `aabb` (Liang-Barsky clip).
    pub fn clips_aabb(&self, aabb: &AABB<T>) -> bool {
        let d = self.direction();
        let mut t0 = T::zero();
        let mut t1 = T::one();
        let edges = [
            (-d.x, self.p1.x - aabb.min_x),
            (d.x, aabb.max_x - self.p1.x),
            (-d.y, self.p1.y - aabb.min_y),
            (d.y, aabb.max_y - self.p1.y),
        ];

        for (p, q) in edges {
            if p == T::zero() {
                // parallel to this box edge
                if q < T::zero() {
                    return false;
                }
                continue;
            }

            let r = q / p;
            if p < T::zero() {
                if r > t1 {
                    return false;
                }
                if r > t0 {
                    t0 = r;
                }
            } else {
                if r < t0 {
                    return false;
                }
                if r < t1 {
                    t1 = r;
                }
            }
        }

        true
    }

    /// Closest distance from `point` to the segment.
    pub fn distance_to(&self, point: Vector2<T>) -> T {
        let v = self.direction();
        let w = point - self.p1;
        let c1 = w.dot(v);
        if c1 <= T::zero() {
            return dist_squared(point, self.p1).sqrt();
        }
        let c2 = v.length_squared();
        if c2 <= c1 {
            return dist_squared(point, self.p2).sqrt();
        }
        dist_squared(point, self.p1 + v.scale(c1 / c2)).sqrt()
    }
}
