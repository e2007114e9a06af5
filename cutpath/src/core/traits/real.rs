use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number (coordinate, radius, area) that can be fuzzy compared and
/// stored in a spatial index.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyOrd
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + Send
    + Sync
    + 'static
{
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Slope used in place of infinity for lines with zero run, see
    /// [VERTICAL_SLOPE](crate::offset::VERTICAL_SLOPE).
    #[inline]
    fn vertical_slope() -> Self {
        Self::from(crate::offset::VERTICAL_SLOPE).unwrap()
    }
}

impl Real for f32 {
    #[inline]
    fn two() -> Self {
        2.0f32
    }

    #[inline]
    fn vertical_slope() -> Self {
        crate::offset::VERTICAL_SLOPE as f32
    }
}

impl Real for f64 {
    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn vertical_slope() -> Self {
        crate::offset::VERTICAL_SLOPE
    }
}
