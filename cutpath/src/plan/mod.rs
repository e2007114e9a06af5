//! Cut order planning for nested outlines.
//!
//! A part that still holds interior cut-outs must stay in the sheet until those are cut, so every
//! outline nested inside another is emitted before its container.
mod forest;

pub use forest::{NestingForest, bounds_area};

use crate::core::traits::Real;
use static_aabb2d_index::AABB;

/// A placed outline the planner can order.
pub trait Outline {
    type Num: Real;

    /// Bounding box of the placed geometry on the workspace.
    fn bounds(&self) -> AABB<Self::Num>;

    /// Area used to order outlines before nesting them (larger first). Defaults to the area of
    /// [Outline::bounds].
    #[inline]
    fn sort_area(&self) -> Self::Num {
        bounds_area(&self.bounds())
    }

    /// True if this outline's placed geometry fully contains `bounds`. `eps` is a tolerance in
    /// workspace units for boxes that touch the geometry.
    fn contains_bounds(&self, bounds: &AABB<Self::Num>, eps: Self::Num) -> bool;
}

impl<O> Outline for &O
where
    O: Outline + ?Sized,
{
    type Num = O::Num;

    #[inline]
    fn bounds(&self) -> AABB<Self::Num> {
        (**self).bounds()
    }

    #[inline]
    fn sort_area(&self) -> Self::Num {
        (**self).sort_area()
    }

    #[inline]
    fn contains_bounds(&self, bounds: &AABB<Self::Num>, eps: Self::Num) -> bool {
        (**self).contains_bounds(bounds, eps)
    }
}

/// Struct to hold options parameters when planning a cut order.
#[derive(Debug, Clone, Copy)]
pub struct PlanOptions<T>
where
    T: Real,
{
    /// Tolerance passed to [Outline::contains_bounds].
    pub contain_eps: T,
}

impl<T> PlanOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            contain_eps: T::from(1e-5).unwrap(),
        }
    }
}

impl<T> Default for PlanOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Cut order of `outlines` as indexes into the slice, using default [PlanOptions].
#[inline]
pub fn plan_indices<O>(outlines: &[O]) -> Vec<usize>
where
    O: Outline,
{
    plan_indices_opt(outlines, &PlanOptions::new())
}

/// Cut order of `outlines` as indexes into the slice.
///
/// The result is a permutation of `0..outlines.len()` in which every outline whose bounding box is
/// contained by another outline's geometry comes before that outline. See
/// [NestingForest::build_opt] for how ties are ordered.
pub fn plan_indices_opt<O>(outlines: &[O], options: &PlanOptions<O::Num>) -> Vec<usize>
where
    O: Outline,
{
    NestingForest::build_opt(outlines, options).post_order()
}

/// Cut order of `outlines`, inner outlines first.
///
/// # Examples
///
/// ```
/// # use cutpath::plan::plan;
/// # use cutpath::shape::RectOutline;
/// let outer = RectOutline::new(0.0, 0.0, 10.0, 10.0);
/// let inner = RectOutline::new(2.0, 2.0, 3.0, 3.0);
/// let beside = RectOutline::new(20.0, 0.0, 1.0, 1.0);
/// let outlines = [outer, beside, inner];
/// let order = plan(&outlines);
/// assert_eq!(order, vec![&inner, &outer, &beside]);
/// ```
pub fn plan<O>(outlines: &[O]) -> Vec<&O>
where
    O: Outline,
{
    plan_indices(outlines)
        .into_iter()
        .map(|i| &outlines[i])
        .collect()
}

/// Same as [plan] with explicit [PlanOptions].
pub fn plan_opt<'a, O>(outlines: &'a [O], options: &PlanOptions<O::Num>) -> Vec<&'a O>
where
    O: Outline,
{
    plan_indices_opt(outlines, options)
        .into_iter()
        .map(|i| &outlines[i])
        .collect()
}
