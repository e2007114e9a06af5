//! Removal of the spurious loops a raw offset forms where neighbouring offset edges cross.
use crate::{
    core::traits::Real,
    polyline::{Polyline, SelfIntersect, Winding},
};

/// Split `pline` at `intr` into the loop running forward from the crossing through the first
/// segment's end to the second segment's start, and the loop running from the second segment's end
/// around to the first segment's start. Both begin at the crossing point.
fn split_at_intersect<T>(pline: &Polyline<T>, intr: &SelfIntersect<T>) -> (Polyline<T>, Polyline<T>)
where
    T: Real,
{
    let n = pline.vertex_count();
    let i = intr.start_index1;
    let j = intr.start_index2;
    debug_assert!(i + 1 < j && j < n);

    let mut first = Polyline::with_capacity(j - i + 1);
    first.add_vertex(intr.point);
    first.vertexes.extend_from_slice(&pline.vertexes[i + 1..=j]);

    let mut second = Polyline::with_capacity(n - (j - i) + 1);
    second.add_vertex(intr.point);
    second
        .vertexes
        .extend((j + 1..=n + i).map(|k| pline.vertexes[k % n]));

    (first, second)
}

/// Pick between two trimmed sub loops: the one matching `target` winding wins, otherwise the one
/// with the larger absolute area.
fn choose_loop<T>(a: Option<Polyline<T>>, b: Option<Polyline<T>>, target: Winding) -> Option<Polyline<T>>
where
    T: Real,
{
    match (a, b) {
        (None, None) => None,
        (Some(x), None) | (None, Some(x)) => Some(x),
        (Some(a), Some(b)) => {
            let a_match = a.winding() == target;
            let b_match = b.winding() == target;
            if a_match != b_match {
                return Some(if a_match { a } else { b });
            }

            let (kept, dropped) = if a.area().abs() >= b.area().abs() {
                (a, b)
            } else {
                (b, a)
            };
            if a_match {
                // both are real islands of material, not a loop formed by crossing edges
                log::warn!(
                    "offset split into separate loops, dropping loop of area {:?} and keeping loop of area {:?}",
                    dropped.area().abs(),
                    kept.area().abs()
                );
            }
            Some(kept)
        }
    }
}

fn trim_recursive<T>(
    pline: Polyline<T>,
    target: Winding,
    pos_equal_eps: T,
    split_count: &mut usize,
) -> Option<Polyline<T>>
where
    T: Real,
{
    let pline = match pline.remove_redundant(pos_equal_eps) {
        Some(cleaned) => cleaned,
        None => pline,
    };

    if pline.vertex_count() < 3 {
        return None;
    }

    let Some(intr) = pline.first_self_intersect(pos_equal_eps) else {
        return Some(pline);
    };

    log::trace!(
        "splitting loop of {} vertexes at segments ({}, {})",
        pline.vertex_count(),
        intr.start_index1,
        intr.start_index2
    );
    *split_count += 1;

    let (a, b) = split_at_intersect(&pline, &intr);
    let a = trim_recursive(a, target, pos_equal_eps, split_count);
    let b = trim_recursive(b, target, pos_equal_eps, split_count);
    choose_loop(a, b, target)
}

/// Repeatedly split `raw` at its first self intersect and keep the sub loop that matches the
/// winding of `raw`.
///
/// Returns the surviving loop (if any survives with at least 3 vertexes) and the number of splits
/// made.
pub fn trim_loops<T>(raw: Polyline<T>, pos_equal_eps: T) -> (Option<Polyline<T>>, usize)
where
    T: Real,
{
    let target = raw.winding();
    let mut split_count = 0;
    let result = trim_recursive(raw, target, pos_equal_eps, &mut split_count);
    (result, split_count)
}
