use super::{PointLocation, Segment, Winding};
use crate::core::{
    math::{Affine2, SegSegIntr, Vector2, is_collinear_eps, is_left, point_from_parametric, vec2},
    traits::Real,
};
use static_aabb2d_index::{
    AABB, IndexableNum, StaticAABB2DIndex, StaticAABB2DIndexBuildError, StaticAABB2DIndexBuilder,
};
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed polyline made of straight segments.
///
/// Segment `i` runs from vertex `i` to vertex `i + 1` and the last segment runs from the last
/// vertex back to the first, the first vertex is never repeated at the end.
///
/// With the `serde` feature enabled it serializes as `{"vertexes": [[x, y], ...]}`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound(serialize = "T: Serialize + Copy", deserialize = "T: Deserialize<'de>"))
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline<T = f64> {
    /// Contiguous sequence of vertexes.
    pub vertexes: Vec<Vector2<T>>,
}

/// A crossing found by [Polyline::first_self_intersect].
#[derive(Debug, Copy, Clone)]
pub struct SelfIntersect<T> {
    /// Start vertex index of the first segment.
    pub start_index1: usize,
    /// Start vertex index of the second segment, always greater than `start_index1 + 1`.
    pub start_index2: usize,
    pub point: Vector2<T>,
}

impl<T> Default for Polyline<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Polyline<T>
where
    T: Real,
{
    /// Create a new empty [Polyline].
    #[inline]
    pub fn new() -> Self {
        Polyline {
            vertexes: Vec::new(),
        }
    }

    /// Create a new empty [Polyline] with `capacity` reserved.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Polyline {
            vertexes: Vec::with_capacity(capacity),
        }
    }

    /// Axis aligned rectangle with corner `(x, y)`, listed (x, y), (x + w, y), (x + w, y + h),
    /// (x, y + h).
    ///
    /// # Examples
    ///
    /// ```
    /// # use cutpath::polyline::*;
    /// # use cutpath::core::traits::*;
    /// let rect = Polyline::from_rect(1.0_f64, 1.0, 2.0, 3.0);
    /// assert_eq!(rect.vertex_count(), 4);
    /// assert!(rect.area().abs().fuzzy_eq(6.0));
    /// ```
    pub fn from_rect(x: T, y: T, width: T, height: T) -> Self {
        Polyline {
            vertexes: vec![
                vec2(x, y),
                vec2(x + width, y),
                vec2(x + width, y + height),
                vec2(x, y + height),
            ],
        }
    }

    /// Add a vertex at `(x, y)`.
    #[inline]
    pub fn add(&mut self, x: T, y: T) {
        self.vertexes.push(vec2(x, y));
    }

    #[inline]
    pub fn add_vertex(&mut self, v: Vector2<T>) {
        self.vertexes.push(v);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertexes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertexes.is_empty()
    }

    #[inline]
    pub fn iter_vertexes(&self) -> impl DoubleEndedIterator<Item = Vector2<T>> + Clone + '_ {
        self.vertexes.iter().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Vector2<T>> {
        self.vertexes.last().copied()
    }

    /// Next index wrapping back to 0 after the last vertex.
    #[inline]
    pub fn next_wrapping_index(&self, i: usize) -> usize {
        let next = i + 1;
        if next >= self.vertex_count() { 0 } else { next }
    }

    /// Previous index wrapping to the last vertex before 0.
    #[inline]
    pub fn prev_wrapping_index(&self, i: usize) -> usize {
        if i == 0 {
            self.vertex_count().saturating_sub(1)
        } else {
            i - 1
        }
    }

    /// Number of segments, equal to the vertex count when there are at least 2 vertexes.
    #[inline]
    pub fn segment_count(&self) -> usize {
        let vc = self.vertex_count();
        if vc < 2 { 0 } else { vc }
    }

    /// Segment starting at vertex `i`.
    #[inline]
    pub fn segment(&self, i: usize) -> Segment<T> {
        Segment::new(self[i], self[self.next_wrapping_index(i)])
    }

    /// Iterate all segments including the closing segment.
    pub fn iter_segments(&self) -> impl Iterator<Item = Segment<T>> + '_ {
        (0..self.segment_count()).map(move |i| self.segment(i))
    }

    /// Sum over segments of `(x2 - x1) * (y2 + y1)`.
    ///
    /// Equal to `-2 * self.area()`.
    pub fn winding_sum(&self) -> T {
        self.iter_segments().fold(T::zero(), |acc, s| {
            acc + (s.p2.x - s.p1.x) * (s.p2.y + s.p1.y)
        })
    }

    /// Winding direction in sheet coordinates: a negative [Polyline::winding_sum] is clockwise,
    /// anything else is counter clockwise.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cutpath::polyline::*;
    /// let mut square = Polyline::from_rect(0.0, 0.0, 1.0, 1.0);
    /// assert_eq!(square.winding(), Winding::Clockwise);
    /// square.invert_direction_mut();
    /// assert_eq!(square.winding(), Winding::CounterClockwise);
    /// ```
    #[inline]
    pub fn winding(&self) -> Winding {
        if self.winding_sum() < T::zero() {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    /// Signed shoelace area, positive when the vertexes go counter clockwise with the y axis up
    /// (which is [Winding::Clockwise] on the sheet).
    pub fn area(&self) -> T {
        let double_area = self
            .iter_segments()
            .fold(T::zero(), |acc, s| acc + s.p1.perp_dot(s.p2));
        double_area / T::two()
    }

    /// Bounding box of all vertexes, `None` if empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cutpath::pline_closed;
    /// let pl = pline_closed![(1.0, 0.0), (3.0, 1.0), (2.0, 4.0)];
    /// let ext = pl.extents().unwrap();
    /// assert_eq!((ext.min_x, ext.min_y, ext.max_x, ext.max_y), (1.0, 0.0, 3.0, 4.0));
    /// ```
    pub fn extents(&self) -> Option<AABB<T>> {
        let first = *self.vertexes.first()?;
        let mut result = AABB::new(first.x, first.y, first.x, first.y);
        for v in self.vertexes.iter().skip(1) {
            if v.x < result.min_x {
                result.min_x = v.x;
            } else if v.x > result.max_x {
                result.max_x = v.x;
            }

            if v.y < result.min_y {
                result.min_y = v.y;
            } else if v.y > result.max_y {
                result.max_y = v.y;
            }
        }

        Some(result)
    }

    /// Winding number of `point` relative to the polyline (0 means outside).
    ///
    /// Counted with the y axis up, so a polyline with positive [Polyline::area] gives +1 for an
    /// interior point.
    pub fn winding_number(&self, point: Vector2<T>) -> i32 {
        if self.vertex_count() < 3 {
            return 0;
        }

        let mut winding = 0;
        for s in self.iter_segments() {
            if s.p1.y <= point.y {
                if s.p2.y > point.y && is_left(s.p1, s.p2, point) {
                    // upward crossing
                    winding += 1;
                }
            } else if s.p2.y <= point.y && !is_left(s.p1, s.p2, point) {
                // downward crossing
                winding -= 1;
            }
        }

        winding
    }

    /// Classify `point` as inside, outside or within `pos_equal_eps` of the boundary.
    pub fn point_location(&self, point: Vector2<T>, pos_equal_eps: T) -> PointLocation {
        if self
            .iter_segments()
            .any(|s| s.distance_to(point) < pos_equal_eps)
        {
            return PointLocation::OnBoundary;
        }

        if self.winding_number(point) != 0 {
            PointLocation::Inside
        } else {
            PointLocation::Outside
        }
    }

    /// Remove consecutive repeat position vertexes (including the last vertex repeating the first).
    ///
    /// Returns `None` to avoid allocation and copy when nothing is removed.
    pub fn remove_repeat_pos(&self, pos_equal_eps: T) -> Option<Self> {
        if self.vertex_count() < 2 {
            return None;
        }

        let mut result: Option<Self> = None;
        let mut prev_pos = self[0];
        for (i, v) in self.iter_vertexes().enumerate().skip(1) {
            if v.fuzzy_eq_eps(prev_pos, pos_equal_eps) {
                result.get_or_insert_with(|| self.iter_vertexes().take(i).collect());
            } else {
                if let Some(ref mut r) = result {
                    r.add_vertex(v);
                }
                prev_pos = v;
            }
        }

        let first = self[0];
        let ends_on_first = |pl: &Self| {
            pl.vertex_count() > 1 && pl.last().is_some_and(|l| l.fuzzy_eq_eps(first, pos_equal_eps))
        };

        match result {
            Some(mut r) => {
                if ends_on_first(&r) {
                    r.vertexes.pop();
                }
                Some(r)
            }
            None if ends_on_first(self) => {
                let mut r = self.clone();
                r.vertexes.pop();
                Some(r)
            }
            None => None,
        }
    }

    /// Remove repeat position vertexes and vertexes that lie on the line through their neighbors
    /// (including spikes that double back), repeating until nothing more is removed.
    ///
    /// Returns `None` when nothing is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cutpath::pline_closed;
    /// let pl = pline_closed![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 2.0), (2.0, 2.0), (0.0, 2.0)];
    /// let cleaned = pl.remove_redundant(1e-5).unwrap();
    /// assert_eq!(cleaned.vertex_count(), 4);
    /// ```
    pub fn remove_redundant(&self, pos_equal_eps: T) -> Option<Self> {
        let mut current = self.remove_repeat_pos(pos_equal_eps);
        loop {
            let pl = current.as_ref().unwrap_or(self);
            let n = pl.vertex_count();
            if n < 3 {
                return current;
            }

            // drop one vertex at a time so a run of collinear vertexes does not vanish entirely
            let Some(drop_index) = (0..n).find(|&i| {
                let prev = pl[pl.prev_wrapping_index(i)];
                let next = pl[pl.next_wrapping_index(i)];
                is_collinear_eps(prev, next, pl[i], pos_equal_eps)
            }) else {
                return current;
            };
            let mut next: Self = pl
                .iter_vertexes()
                .enumerate()
                .filter_map(|(i, v)| (i != drop_index).then_some(v))
                .collect();
            if let Some(r) = next.remove_repeat_pos(pos_equal_eps) {
                next = r;
            }
            current = Some(next);
        }
    }

    /// Reverse the vertex order in place, keeping vertex 0 first.
    pub fn invert_direction_mut(&mut self) {
        if self.vertex_count() > 1 {
            self.vertexes[1..].reverse();
        }
    }

    /// Copy with reversed vertex order, see [Polyline::invert_direction_mut].
    pub fn inverted(&self) -> Self {
        let mut result = self.clone();
        result.invert_direction_mut();
        result
    }

    /// Apply `transform` to every vertex in place.
    ///
    /// A mirroring transform flips the winding direction.
    pub fn transform_mut(&mut self, transform: &Affine2<T>) {
        for v in self.vertexes.iter_mut() {
            *v = transform.apply(*v);
        }
    }

    /// Copy with `transform` applied to every vertex.
    pub fn transformed(&self, transform: &Affine2<T>) -> Self {
        self.iter_vertexes().map(|v| transform.apply(v)).collect()
    }

    /// Fuzzy compare vertex by vertex with another polyline.
    pub fn fuzzy_eq_eps(&self, other: &Self, eps: T) -> bool {
        self.vertex_count() == other.vertex_count()
            && self
                .iter_vertexes()
                .zip(other.iter_vertexes())
                .all(|(v1, v2)| v1.fuzzy_eq_eps(v2, eps))
    }

    /// Creates a spatial index of all the segment bounding boxes.
    ///
    /// The starting vertex index is the key of each segment box.
    ///
    /// # Panics
    ///
    /// Panics if `T` fails to cast to/from a `u16` (required by the spatial index).
    pub fn create_aabb_index(&self) -> StaticAABB2DIndex<T> {
        let mut builder = StaticAABB2DIndexBuilder::new(self.segment_count());
        for s in self.iter_segments() {
            let bb = s.bounding_box();
            builder.add(bb.min_x, bb.min_y, bb.max_x, bb.max_y);
        }

        unwrap_spatial_index(builder)
    }

    /// Find the first pair of non adjacent segments (lowest first index, then lowest second index)
    /// that cross or touch. Touches where an end point of one segment meets an end point of the
    /// other are not counted and neither are collinear overlaps.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cutpath::pline_closed;
    /// // bow tie
    /// let pl = pline_closed![(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)];
    /// let intr = pl.first_self_intersect(1e-5).unwrap();
    /// assert_eq!((intr.start_index1, intr.start_index2), (0, 2));
    /// assert!(intr.point.fuzzy_eq(cutpath::core::math::vec2(1.0, 1.0)));
    /// ```
    pub fn first_self_intersect(&self, pos_equal_eps: T) -> Option<SelfIntersect<T>> {
        let n = self.segment_count();
        if n < 4 {
            return None;
        }

        let index = self.create_aabb_index();
        let at_end = |t: T, len: T| {
            (t * len).fuzzy_eq_zero_eps(pos_equal_eps)
                || ((T::one() - t) * len).fuzzy_eq_zero_eps(pos_equal_eps)
        };

        for i in 0..n {
            let seg1 = self.segment(i);
            let bb = seg1.bounding_box();
            let mut candidates = index.query(
                bb.min_x - pos_equal_eps,
                bb.min_y - pos_equal_eps,
                bb.max_x + pos_equal_eps,
                bb.max_y + pos_equal_eps,
            );
            candidates.sort_unstable();

            for j in candidates {
                // skip self, earlier and adjacent segments
                if j <= i + 1 || (i == 0 && j == n - 1) {
                    continue;
                }

                let seg2 = self.segment(j);
                if let SegSegIntr::TrueIntersect { seg1_t, seg2_t } =
                    seg1.intersect(&seg2, pos_equal_eps)
                {
                    if at_end(seg1_t, seg1.length()) && at_end(seg2_t, seg2.length()) {
                        continue;
                    }

                    return Some(SelfIntersect {
                        start_index1: i,
                        start_index2: j,
                        point: point_from_parametric(seg1.p1, seg1.p2, seg1_t),
                    });
                }
            }
        }

        None
    }

    /// True if any non adjacent segments cross, see [Polyline::first_self_intersect].
    #[inline]
    pub fn scan_for_self_intersect(&self, pos_equal_eps: T) -> bool {
        self.first_self_intersect(pos_equal_eps).is_some()
    }
}

impl<T> Index<usize> for Polyline<T> {
    type Output = Vector2<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.vertexes[index]
    }
}

impl<T> IndexMut<usize> for Polyline<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.vertexes[index]
    }
}

impl<T> FromIterator<Vector2<T>> for Polyline<T> {
    fn from_iter<I: IntoIterator<Item = Vector2<T>>>(iter: I) -> Self {
        Polyline {
            vertexes: iter.into_iter().collect(),
        }
    }
}

impl<T> From<Vec<Vector2<T>>> for Polyline<T> {
    #[inline]
    fn from(vertexes: Vec<Vector2<T>>) -> Self {
        Polyline { vertexes }
    }
}

fn unwrap_spatial_index<T>(builder: StaticAABB2DIndexBuilder<T>) -> StaticAABB2DIndex<T>
where
    T: IndexableNum,
{
    match builder.build() {
        Ok(x) => x,
        Err(e) => match e {
            StaticAABB2DIndexBuildError::ItemCountError { .. } => {
                unreachable!("segment count mismatch when building spatial index")
            }
            StaticAABB2DIndexBuildError::NumericCastError => {
                panic!("failed to cast coordinate type: {e}")
            }
        },
    }
}
