//! Concrete outlines: material shapes (a boundary with holes) placed on the workspace, and plain
//! rectangles.
use crate::{
    core::{
        math::{Affine2, Vector2, midpoint, vec2},
        traits::Real,
    },
    plan::{Outline, bounds_area},
    polyline::Polyline,
};
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Material enclosed by `boundary` minus the area enclosed by each of `holes`.
///
/// Winding direction of the boundary and holes does not matter.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound(serialize = "T: Serialize + Copy", deserialize = "T: Deserialize<'de>"))
)]
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialShape<T = f64> {
    pub boundary: Polyline<T>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub holes: Vec<Polyline<T>>,
}

impl<T> MaterialShape<T>
where
    T: Real,
{
    #[inline]
    pub fn new(boundary: Polyline<T>) -> Self {
        MaterialShape {
            boundary,
            holes: Vec::new(),
        }
    }

    #[inline]
    pub fn with_holes(boundary: Polyline<T>, holes: Vec<Polyline<T>>) -> Self {
        MaterialShape { boundary, holes }
    }

    /// True if `point` is inside the boundary and outside every hole.
    pub fn contains_point(&self, point: Vector2<T>) -> bool {
        self.boundary.winding_number(point) != 0
            && self.holes.iter().all(|h| h.winding_number(point) == 0)
    }

    /// True if `bounds` lies entirely in material.
    ///
    /// The box centre must be in material and no boundary or hole segment may pass through the box
    /// shrunk by `eps` on every side, so segments along the box edges are allowed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cutpath::shape::MaterialShape;
    /// # use cutpath::polyline::Polyline;
    /// # use static_aabb2d_index::AABB;
    /// let ring = MaterialShape::with_holes(
    ///     Polyline::from_rect(0.0, 0.0, 10.0, 10.0),
    ///     vec![Polyline::from_rect(3.0, 3.0, 4.0, 4.0)],
    /// );
    /// assert!(ring.contains_bounds(&AABB::new(0.5, 0.5, 2.5, 2.5), 1e-5));
    /// // sits in the hole
    /// assert!(!ring.contains_bounds(&AABB::new(4.0, 4.0, 6.0, 6.0), 1e-5));
    /// // straddles the hole edge
    /// assert!(!ring.contains_bounds(&AABB::new(2.0, 2.0, 4.0, 4.0), 1e-5));
    /// ```
    pub fn contains_bounds(&self, bounds: &AABB<T>, eps: T) -> bool {
        let center = midpoint(
            vec2(bounds.min_x, bounds.min_y),
            vec2(bounds.max_x, bounds.max_y),
        );
        if !self.contains_point(center) {
            return false;
        }

        let shrunk = AABB::new(
            bounds.min_x + eps,
            bounds.min_y + eps,
            bounds.max_x - eps,
            bounds.max_y - eps,
        );
        if shrunk.min_x > shrunk.max_x || shrunk.min_y > shrunk.max_y {
            // box no bigger than the tolerance, the centre test decides
            return true;
        }

        std::iter::once(&self.boundary)
            .chain(self.holes.iter())
            .flat_map(|pl| pl.iter_segments())
            .all(|seg| !seg.clips_aabb(&shrunk))
    }

    /// Copy with `transform` applied to the boundary and every hole.
    pub fn transformed(&self, transform: &Affine2<T>) -> Self {
        MaterialShape {
            boundary: self.boundary.transformed(transform),
            holes: self.holes.iter().map(|h| h.transformed(transform)).collect(),
        }
    }

    /// Bounding box of the boundary, `None` if the boundary is empty.
    #[inline]
    pub fn extents(&self) -> Option<AABB<T>> {
        self.boundary.extents()
    }
}

impl<T> Outline for MaterialShape<T>
where
    T: Real,
{
    type Num = T;

    fn bounds(&self) -> AABB<T> {
        self.extents()
            .unwrap_or_else(|| AABB::new(T::zero(), T::zero(), T::zero(), T::zero()))
    }

    #[inline]
    fn contains_bounds(&self, bounds: &AABB<T>, eps: T) -> bool {
        MaterialShape::contains_bounds(self, bounds, eps)
    }
}

/// A [MaterialShape] placed on the workspace by `transform`.
///
/// Placed geometry is computed on demand from the untransformed shape, so the outline always
/// reflects the current transform.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound(serialize = "T: Serialize + Copy", deserialize = "T: Deserialize<'de>"))
)]
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedShape<T = f64> {
    pub shape: MaterialShape<T>,
    pub transform: Affine2<T>,
}

impl<T> PlacedShape<T>
where
    T: Real,
{
    #[inline]
    pub fn new(shape: MaterialShape<T>, transform: Affine2<T>) -> Self {
        PlacedShape { shape, transform }
    }

    /// Shape with the transform applied.
    #[inline]
    pub fn placed(&self) -> MaterialShape<T> {
        self.shape.transformed(&self.transform)
    }
}

impl<T> Outline for PlacedShape<T>
where
    T: Real,
{
    type Num = T;

    fn bounds(&self) -> AABB<T> {
        self.shape
            .boundary
            .transformed(&self.transform)
            .extents()
            .unwrap_or_else(|| {
                let t = &self.transform;
                AABB::new(t.tx, t.ty, t.tx, t.ty)
            })
    }

    /// Area of the untransformed shape's bounding box, so rotating a shape does not change where it
    /// sorts.
    fn sort_area(&self) -> T {
        self.shape
            .extents()
            .map_or(T::zero(), |bounds| bounds_area(&bounds))
    }

    #[inline]
    fn contains_bounds(&self, bounds: &AABB<T>, eps: T) -> bool {
        self.placed().contains_bounds(bounds, eps)
    }
}

/// Axis aligned rectangle outline with corner `(x, y)`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectOutline<T = f64> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> RectOutline<T>
where
    T: Real,
{
    #[inline]
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        RectOutline {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn to_polyline(&self) -> Polyline<T> {
        Polyline::from_rect(self.x, self.y, self.width, self.height)
    }
}

impl<T> Outline for RectOutline<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn bounds(&self) -> AABB<T> {
        AABB::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    fn contains_bounds(&self, bounds: &AABB<T>, eps: T) -> bool {
        let own = self.bounds();
        bounds.min_x.fuzzy_gt_eps(own.min_x, eps)
            && bounds.min_y.fuzzy_gt_eps(own.min_y, eps)
            && bounds.max_x.fuzzy_lt_eps(own.max_x, eps)
            && bounds.max_y.fuzzy_lt_eps(own.max_y, eps)
    }
}
