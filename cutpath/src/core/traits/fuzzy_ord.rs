use super::FuzzyEq;
use std::ops::Add;

/// Inclusive ordering with a tolerance: values within `eps` of the bound count as inside it.
///
/// All comparisons in the crate that decide containment (a parametric value scaled to a distance
/// along a segment, a box edge against another box edge) go through these so the tolerance is
/// always applied on the same side.
pub trait FuzzyOrd: FuzzyEq + Copy + PartialOrd + Add<Output = Self> {
    /// `self` is above `other` or less than `eps` below it.
    #[inline]
    fn fuzzy_gt_eps(&self, other: Self, eps: Self) -> bool {
        *self + eps > other
    }

    /// `self` is below `other` or less than `eps` above it.
    #[inline]
    fn fuzzy_lt_eps(&self, other: Self, eps: Self) -> bool {
        *self < other + eps
    }

    /// `self` lies in `[min, max]` widened by `eps` at both ends.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cutpath::core::traits::*;
    /// assert!(0.99f64.fuzzy_in_range_eps(1.0, 2.0, 0.05));
    /// assert!(2.0f64.fuzzy_in_range_eps(1.0, 2.0, 1e-5));
    /// assert!(!2.1f64.fuzzy_in_range_eps(1.0, 2.0, 1e-5));
    ///```
    #[inline]
    fn fuzzy_in_range_eps(&self, min: Self, max: Self, eps: Self) -> bool {
        self.fuzzy_gt_eps(min, eps) && self.fuzzy_lt_eps(max, eps)
    }
}

impl FuzzyOrd for f32 {}
impl FuzzyOrd for f64 {}
