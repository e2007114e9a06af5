//! Tool offset of closed polylines.
//!
//! Every edge is moved sideways by the radius, neighbouring moved edges are intersected to get the
//! new vertexes, and the loops that form where moved edges cross are trimmed away.
mod loop_trim;
mod offset_line;

pub use offset_line::OffsetLine;

use crate::{core::traits::Real, error::OffsetError, polyline::Polyline};

/// Slope given to offset lines of vertical edges (edges with a fuzzy zero run).
pub const VERTICAL_SLOPE: f64 = 1.0e10;

/// Struct to hold options parameters when performing an offset.
#[derive(Debug, Clone, Copy)]
pub struct OffsetOptions<T>
where
    T: Real,
{
    /// Fuzzy comparison epsilon used for determining if two positions are equal (zero length edge
    /// removal, collinear vertex removal and intersect end point tests).
    pub pos_equal_eps: T,
    /// An inward offset with absolute area below this value has collapsed.
    pub collapse_area_eps: T,
    /// Fuzzy comparison epsilon used when checking that inward offset vertexes keep the radius
    /// distance from the input.
    pub offset_dist_eps: T,
    /// If true the loops formed by crossing offset edges are trimmed away, if false the raw offset
    /// (one vertex per input vertex) is returned as is.
    pub trim_self_intersects: bool,
}

impl<T> OffsetOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            pos_equal_eps: T::from(1e-5).unwrap(),
            collapse_area_eps: T::from(1e-8).unwrap(),
            offset_dist_eps: T::from(1e-4).unwrap(),
            trim_self_intersects: true,
        }
    }
}

impl<T> Default for OffsetOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Offset `polyline` by `radius` using default [OffsetOptions], see [offset_opt].
///
/// # Examples
///
/// ```
/// # use cutpath::offset::offset;
/// # use cutpath::polyline::Polyline;
/// # use cutpath::core::math::vec2;
/// let square = Polyline::from_rect(0.0, 0.0, 1.0, 1.0);
/// let path = offset(&square, 0.1, true).unwrap();
/// assert!(path[0].fuzzy_eq(vec2(-0.1, -0.1)));
/// assert!(path[2].fuzzy_eq(vec2(1.1, 1.1)));
/// ```
#[inline]
pub fn offset<T>(polyline: &Polyline<T>, radius: T, outside: bool) -> Result<Polyline<T>, OffsetError>
where
    T: Real,
{
    offset_opt(polyline, radius, outside, &OffsetOptions::new())
}

/// Offset the closed `polyline` by `radius`, away from the enclosed area if `outside` is true and
/// into it otherwise.
///
/// Works for either winding direction. Zero length edges are dropped first; a `radius` of zero
/// returns that cleaned copy. Vertex `i` of the result is the displaced image of vertex `i` of the
/// cleaned input unless loop trimming removed vertexes.
///
/// # Errors
///
/// * [OffsetError::InvalidRadius] if `radius` is negative or not finite.
/// * [OffsetError::InsufficientGeometry] if fewer than 3 edges remain after zero length edges are
///   dropped.
/// * [OffsetError::ZeroArea] if the remaining edges enclose no area.
/// * [OffsetError::Collapsed] if an inward offset consumes the polygon.
pub fn offset_opt<T>(
    polyline: &Polyline<T>,
    radius: T,
    outside: bool,
    options: &OffsetOptions<T>,
) -> Result<Polyline<T>, OffsetError>
where
    T: Real,
{
    // NaN and infinities do not subtract to zero
    if radius - radius != T::zero() || radius < T::zero() {
        return Err(OffsetError::InvalidRadius);
    }

    let pruned = polyline
        .remove_repeat_pos(options.pos_equal_eps)
        .unwrap_or_else(|| polyline.clone());

    let usable_edges = pruned.segment_count();
    if usable_edges < 3 {
        return Err(OffsetError::InsufficientGeometry { usable_edges });
    }

    if pruned.area().abs() < options.collapse_area_eps {
        return Err(OffsetError::ZeroArea);
    }

    if radius == T::zero() {
        return Ok(pruned);
    }

    let winding = pruned.winding();
    let rotate_cw = winding.is_clockwise() ^ outside;

    let lines: Vec<OffsetLine<T>> = pruned
        .iter_segments()
        .map(|seg| OffsetLine::from_edge(&seg, radius, rotate_cw))
        .collect();

    let n = lines.len();
    let raw: Polyline<T> = (0..n)
        .map(|i| lines[(i + n - 1) % n].intersect(&lines[i]))
        .collect();

    if !options.trim_self_intersects {
        return Ok(raw);
    }

    let (trimmed, split_count) = loop_trim::trim_loops(raw, options.pos_equal_eps);

    log::debug!(
        "offset {} edges by {:?} ({}): {} loop splits, {} vertexes",
        n,
        radius,
        if outside { "outside" } else { "inside" },
        split_count,
        trimmed.as_ref().map_or(0, |pl| pl.vertex_count())
    );

    let result = trimmed.ok_or(OffsetError::Collapsed)?;

    if !outside
        && (result.vertex_count() < 3
            || result.area().abs() < options.collapse_area_eps
            || result.winding() != winding
            || !keeps_distance(&result, &pruned, radius, options.offset_dist_eps))
    {
        return Err(OffsetError::Collapsed);
    }

    Ok(result)
}

/// True if no vertex of `result` is closer than `radius` to a segment of `input`.
///
/// Catches inward offsets whose radius passes the polygon's inner width: the edges swap sides and
/// can form a loop with the original winding that sits too close to the far edges.
fn keeps_distance<T>(result: &Polyline<T>, input: &Polyline<T>, radius: T, offset_dist_eps: T) -> bool
where
    T: Real,
{
    let min_dist = radius - offset_dist_eps;
    if min_dist <= T::zero() {
        return true;
    }

    let index = input.create_aabb_index();
    result.iter_vertexes().all(|v| {
        index
            .query(v.x - min_dist, v.y - min_dist, v.x + min_dist, v.y + min_dist)
            .into_iter()
            .all(|i| input.segment(i).distance_to(v) >= min_dist)
    })
}

/// Offset every loop of a flattened shape independently.
pub fn offset_all<T>(
    polylines: &[Polyline<T>],
    radius: T,
    outside: bool,
    options: &OffsetOptions<T>,
) -> Vec<Result<Polyline<T>, OffsetError>>
where
    T: Real,
{
    polylines
        .iter()
        .map(|pl| offset_opt(pl, radius, outside, options))
        .collect()
}
