use super::{Vector2, base_math::parametric_from_point};
use crate::core::traits::Real;

/// Result of intersecting two line segments.
#[derive(Debug, Copy, Clone)]
pub enum SegSegIntr<T>
where
    T: Real,
{
    /// Segments are parallel and not collinear, or they are collinear and do not overlap.
    NoIntersect,
    /// Segments cross or touch at a single point within both segments.
    TrueIntersect {
        /// Parametric value of the intersect along the first segment.
        seg1_t: T,
        /// Parametric value of the intersect along the second segment.
        seg2_t: T,
    },
    /// Segments are collinear and share a stretch of positive length.
    Overlapping {
        /// Parametric start of the shared stretch along the second segment.
        seg2_t0: T,
        /// Parametric end of the shared stretch along the second segment.
        seg2_t1: T,
    },
    /// The infinite lines intersect but the point lies outside at least one of the segments.
    FalseIntersect {
        /// Parametric value of the intersect along the first segment.
        seg1_t: T,
        /// Parametric value of the intersect along the second segment.
        seg2_t: T,
    },
}

/// Finds the intersect between the segments `v1->v2` and `u1->u2`.
///
/// Parametric values follow `P(t) = p0 + t * (p1 - p0)`. The parallel test, the collinear test and
/// the range checks are all scaled by segment length so `epsilon` is applied as a distance
/// regardless of segment size. Segments whose ends stay within `epsilon` of each other's line are
/// treated as collinear. Degenerate (single point)
/// segments are only reported as intersecting when the point lies on the other segment.
///
/// # Examples
///
/// ```
/// # use cutpath::core::math::*;
/// let v1 = vec2(0.0, 0.0);
/// let v2 = vec2(2.0, 2.0);
/// let u1 = vec2(0.0, 2.0);
/// let u2 = vec2(2.0, 0.0);
/// match seg_seg_intr(v1, v2, u1, u2, 1e-5) {
///     SegSegIntr::TrueIntersect { seg1_t, seg2_t } => {
///         assert_eq!(seg1_t, 0.5);
///         assert_eq!(seg2_t, 0.5);
///     }
///     r => unreachable!("expected crossing diagonals, got {:?}", r),
/// }
/// ```
pub fn seg_seg_intr<T>(
    v1: Vector2<T>,
    v2: Vector2<T>,
    u1: Vector2<T>,
    u2: Vector2<T>,
    epsilon: T,
) -> SegSegIntr<T>
where
    T: Real,
{
    use SegSegIntr::*;

    let v = v2 - v1;
    let u = u2 - u1;
    let w = v1 - u1;
    let denom = v.perp_dot(u);
    let v_len = v.length();
    let u_len = u.length();

    // |denom| / shorter length is how far the longer segment turns away from parallel over its
    // length, so both checks below compare distances against `epsilon`
    let min_len = num_traits::real::Real::min(v_len, u_len);
    if denom.abs() > epsilon * min_len {
        let seg1_t = u.perp_dot(w) / denom;
        let seg2_t = v.perp_dot(w) / denom;
        let within = (seg1_t * v_len).fuzzy_in_range_eps(T::zero(), v_len, epsilon)
            && (seg2_t * u_len).fuzzy_in_range_eps(T::zero(), u_len, epsilon);
        return if within {
            TrueIntersect { seg1_t, seg2_t }
        } else {
            FalseIntersect { seg1_t, seg2_t }
        };
    }

    // parallel, collinear when each start point is within epsilon of the other segment's line
    if v.perp_dot(w).abs() > epsilon * v_len || u.perp_dot(w).abs() > epsilon * u_len {
        return NoIntersect;
    }

    let v_is_point = v_len.fuzzy_eq_zero_eps(epsilon);
    let u_is_point = u_len.fuzzy_eq_zero_eps(epsilon);

    match (v_is_point, u_is_point) {
        (true, true) => {
            if v1.fuzzy_eq_eps(u1, epsilon) {
                TrueIntersect {
                    seg1_t: T::zero(),
                    seg2_t: T::zero(),
                }
            } else {
                NoIntersect
            }
        }
        (true, false) => {
            let seg2_t = parametric_from_point(u1, u2, v1);
            if (seg2_t * u_len).fuzzy_in_range_eps(T::zero(), u_len, epsilon) {
                TrueIntersect {
                    seg1_t: T::zero(),
                    seg2_t,
                }
            } else {
                NoIntersect
            }
        }
        (false, true) => {
            let seg1_t = parametric_from_point(v1, v2, u1);
            if (seg1_t * v_len).fuzzy_in_range_eps(T::zero(), v_len, epsilon) {
                TrueIntersect {
                    seg1_t,
                    seg2_t: T::zero(),
                }
            } else {
                NoIntersect
            }
        }
        (false, false) => {
            let mut seg2_t0 = parametric_from_point(u1, u2, v1);
            let mut seg2_t1 = parametric_from_point(u1, u2, v2);
            if seg2_t0 > seg2_t1 {
                std::mem::swap(&mut seg2_t0, &mut seg2_t1);
            }

            if !(seg2_t0 * u_len).fuzzy_lt_eps(u_len, epsilon)
                || !(seg2_t1 * u_len).fuzzy_gt_eps(T::zero(), epsilon)
            {
                return NoIntersect;
            }

            let seg2_t0 = num_traits::real::Real::max(seg2_t0, T::zero());
            let seg2_t1 = num_traits::real::Real::min(seg2_t1, T::one());

            if ((seg2_t1 - seg2_t0) * u_len).fuzzy_eq_zero_eps(epsilon) {
                // end to end touch
                let seg1_t = if v1.fuzzy_eq_eps(u1, epsilon) || v1.fuzzy_eq_eps(u2, epsilon) {
                    T::zero()
                } else {
                    T::one()
                };
                return TrueIntersect {
                    seg1_t,
                    seg2_t: seg2_t0,
                };
            }

            Overlapping { seg2_t0, seg2_t1 }
        }
    }
}
