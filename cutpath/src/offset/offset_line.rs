use crate::{
    core::{
        math::{Vector2, vec2},
        traits::Real,
    },
    polyline::Segment,
};

/// Infinite line `y = slope * x + intercept` parallel to an edge, built through the edge's start
/// point displaced by the offset radius (`anchor`).
#[derive(Debug, Copy, Clone)]
pub struct OffsetLine<T> {
    pub slope: T,
    pub intercept: T,
    pub anchor: Vector2<T>,
}

impl<T> OffsetLine<T>
where
    T: Real,
{
    /// Line through `anchor` with the slope of `direction`. A fuzzy zero run gets
    /// [Real::vertical_slope].
    pub fn through(anchor: Vector2<T>, direction: Vector2<T>) -> Self {
        let slope = if direction.x.fuzzy_eq_zero() {
            T::vertical_slope()
        } else {
            direction.y / direction.x
        };

        OffsetLine {
            slope,
            intercept: anchor.y - slope * anchor.x,
            anchor,
        }
    }

    /// Offset line for `seg` displaced by `radius`.
    ///
    /// The point `radius` along the edge from `p1` is turned a quarter about `p1`, clockwise on the
    /// sheet if `rotate_cw` is true, counter clockwise otherwise.
    pub fn from_edge(seg: &Segment<T>, radius: T, rotate_cw: bool) -> Self {
        let dir = seg.direction();
        let t = radius / seg.length();
        let ext = dir.scale(t);
        let normal = if rotate_cw {
            ext.rotate_cw()
        } else {
            ext.rotate_ccw()
        };

        Self::through(seg.p1 + normal, dir)
    }

    #[inline]
    pub fn y_at(&self, x: T) -> T {
        self.slope * x + self.intercept
    }

    /// Lines are numerically parallel, slopes compared relative to their magnitude.
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        let scale = num_traits::real::Real::max(
            T::one(),
            num_traits::real::Real::max(self.slope.abs(), other.slope.abs()),
        );
        (self.slope - other.slope).fuzzy_eq_zero_eps(T::fuzzy_epsilon() * scale)
    }

    /// Intersect with the `next` line.
    ///
    /// Parallel lines (including two vertical sentinels and edges that double back) resolve to
    /// `next.anchor`, which for collinear edges is the shared vertex displaced by the radius.
    pub fn intersect(&self, next: &Self) -> Vector2<T> {
        if self.is_parallel_to(next) {
            log::trace!(
                "parallel offset lines (slopes {:?}, {:?}), using anchor {:?}",
                self.slope,
                next.slope,
                next.anchor
            );
            return next.anchor;
        }

        let x = (next.intercept - self.intercept) / (self.slope - next.slope);
        // evaluate on the shallower line so the vertical sentinel never scales a coordinate
        let y = if self.slope.abs() <= next.slope.abs() {
            self.y_at(x)
        } else {
            next.y_at(x)
        };

        vec2(x, y)
    }
}
