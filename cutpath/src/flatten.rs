//! Seam to the host's curve flattener and the flatten-then-offset tool path pipeline.
use crate::{
    core::{math::Affine2, traits::Real},
    error::OffsetError,
    offset::{OffsetOptions, offset_all},
    polyline::Polyline,
};

/// Converts a design shape into closed polylines.
///
/// Implemented by the host application (the crate never flattens curves itself). Each returned
/// polyline is one closed loop of the shape with `transform` applied, no straight segment deviating
/// from the true curve by more than `tolerance`.
pub trait Flatten<S: ?Sized, T: Real = f64> {
    fn flatten(&self, shape: &S, transform: &Affine2<T>, tolerance: T) -> Vec<Polyline<T>>;
}

impl<S, T, F> Flatten<S, T> for F
where
    S: ?Sized,
    T: Real,
    F: Fn(&S, &Affine2<T>, T) -> Vec<Polyline<T>>,
{
    #[inline]
    fn flatten(&self, shape: &S, transform: &Affine2<T>, tolerance: T) -> Vec<Polyline<T>> {
        self(shape, transform, tolerance)
    }
}

/// Flatten `shape` and offset every resulting loop, one result per loop in flattener order.
///
/// # Examples
///
/// ```
/// # use cutpath::flatten::{tool_paths, successful_paths};
/// # use cutpath::core::math::Affine2;
/// # use cutpath::offset::OffsetOptions;
/// # use cutpath::polyline::Polyline;
/// // "flattener" for axis aligned rectangles given as (x, y, w, h)
/// let flatten_rect = |r: &(f64, f64, f64, f64), t: &Affine2<f64>, _tol: f64| {
///     vec![Polyline::from_rect(r.0, r.1, r.2, r.3).transformed(t)]
/// };
/// let results = tool_paths(
///     &flatten_rect,
///     &(0.0, 0.0, 2.0, 1.0),
///     &Affine2::translate(5.0, 5.0),
///     0.01,
///     0.1,
///     true,
///     &OffsetOptions::new(),
/// );
/// let paths = successful_paths(results);
/// assert_eq!(paths.len(), 1);
/// assert!(paths[0][0].fuzzy_eq(cutpath::core::math::vec2(4.9, 4.9)));
/// ```
pub fn tool_paths<S, T, F>(
    flattener: &F,
    shape: &S,
    transform: &Affine2<T>,
    tolerance: T,
    radius: T,
    outside: bool,
    options: &OffsetOptions<T>,
) -> Vec<Result<Polyline<T>, OffsetError>>
where
    S: ?Sized,
    T: Real,
    F: Flatten<S, T> + ?Sized,
{
    let loops = flattener.flatten(shape, transform, tolerance);
    offset_all(&loops, radius, outside, options)
}

/// Keep the successful offsets, logging each failure at `warn` level.
pub fn successful_paths<T, I>(results: I) -> Vec<Polyline<T>>
where
    T: Real,
    I: IntoIterator<Item = Result<Polyline<T>, OffsetError>>,
{
    results
        .into_iter()
        .enumerate()
        .filter_map(|(i, r)| match r {
            Ok(pl) => Some(pl),
            Err(e) => {
                log::warn!("dropping tool path for loop {}: {}", i, e);
                None
            }
        })
        .collect()
}
