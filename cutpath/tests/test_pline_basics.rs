use cutpath::{
    assert_fuzzy_eq,
    core::{
        math::{Affine2, Vector2, vec2},
        traits::FuzzyEq,
    },
    pline_closed,
    polyline::{PointLocation, Polyline, Winding},
};
use std::f64::consts::FRAC_PI_2;

#[test]
fn iter_vertexes() {
    let mut polyline = Polyline::<f64>::with_capacity(0);
    {
        // empty
        let mut iter = polyline.iter_vertexes();
        assert_eq!(iter.next(), None);
    }

    polyline.add(1.0, 2.0);
    polyline.add(4.0, 5.0);

    {
        let mut iter = polyline.iter_vertexes();
        assert_eq!(iter.next(), Some(Vector2::new(1.0, 2.0)));
        assert_eq!(iter.next_back(), Some(Vector2::new(4.0, 5.0)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }
}

#[test]
fn segment_count_includes_closing_segment() {
    let mut polyline = Polyline::new();
    assert_eq!(polyline.segment_count(), 0);
    polyline.add(0.0, 0.0);
    assert_eq!(polyline.segment_count(), 0);
    polyline.add(1.0, 0.0);
    assert_eq!(polyline.segment_count(), 2);
    polyline.add(1.0, 1.0);
    assert_eq!(polyline.segment_count(), 3);

    let last = polyline.segment(2);
    assert_eq!(last.p1, vec2(1.0, 1.0));
    assert_eq!(last.p2, vec2(0.0, 0.0));
}

#[test]
fn wrapping_indexes() {
    let polyline = pline_closed![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)];
    assert_eq!(polyline.next_wrapping_index(0), 1);
    assert_eq!(polyline.next_wrapping_index(2), 0);
    assert_eq!(polyline.prev_wrapping_index(0), 2);
    assert_eq!(polyline.prev_wrapping_index(1), 0);
}

#[test]
fn area_and_winding() {
    let mut polyline = pline_closed![(0.0, 0.0), (2.0, 0.0), (2.0, 3.0), (0.0, 3.0)];
    assert_fuzzy_eq!(polyline.area(), 6.0);
    assert_fuzzy_eq!(polyline.winding_sum(), -12.0);
    assert_eq!(polyline.winding(), Winding::Clockwise);

    polyline.invert_direction_mut();
    assert_fuzzy_eq!(polyline.area(), -6.0);
    assert_fuzzy_eq!(polyline.winding_sum(), 12.0);
    assert_eq!(polyline.winding(), Winding::CounterClockwise);
    assert_eq!(polyline.winding().opposite(), Winding::Clockwise);
}

#[test]
fn winding_unaffected_by_start_vertex() {
    let polyline = pline_closed![(0.0, 0.0), (4.0, 1.0), (3.0, 5.0), (-1.0, 2.0)];
    let cycled: Polyline = polyline
        .iter_vertexes()
        .cycle()
        .skip(2)
        .take(polyline.vertex_count())
        .collect();
    assert_eq!(cycled.winding(), polyline.winding());
    assert_fuzzy_eq!(cycled.area(), polyline.area());
}

#[test]
fn mirror_flips_winding() {
    let polyline = Polyline::from_rect(0.0, 0.0, 2.0, 1.0);
    let mirrored = polyline.transformed(&Affine2::scale(-1.0, 1.0));
    assert_eq!(mirrored.winding(), polyline.winding().opposite());
    assert_fuzzy_eq!(mirrored.area(), -polyline.area());
}

#[test]
fn transform_mut_rotates() {
    let mut polyline = Polyline::from_rect(0.0, 0.0, 2.0, 1.0);
    polyline.transform_mut(&Affine2::rotate(FRAC_PI_2));
    let ext = polyline.extents().unwrap();
    assert_fuzzy_eq!(ext.min_x, -1.0);
    assert_fuzzy_eq!(ext.max_x, 0.0);
    assert_fuzzy_eq!(ext.min_y, 0.0);
    assert_fuzzy_eq!(ext.max_y, 2.0);
    // rotation keeps the winding
    assert_eq!(polyline.winding(), Winding::Clockwise);
}

#[test]
fn extents_empty() {
    let polyline = Polyline::<f64>::new();
    assert!(polyline.extents().is_none());
}

#[test]
fn winding_number() {
    let polyline = Polyline::from_rect(0.0, 0.0, 4.0, 4.0);
    assert_eq!(polyline.winding_number(vec2(2.0, 2.0)), 1);
    assert_eq!(polyline.winding_number(vec2(5.0, 2.0)), 0);
    assert_eq!(polyline.inverted().winding_number(vec2(2.0, 2.0)), -1);

    // concave: point in the notch is outside
    let notched = pline_closed![
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 4.0),
        (3.0, 4.0),
        (3.0, 1.0),
        (1.0, 1.0),
        (1.0, 4.0),
        (0.0, 4.0),
    ];
    assert_eq!(notched.winding_number(vec2(2.0, 3.0)), 0);
    assert_eq!(notched.winding_number(vec2(0.5, 3.0)), 1);
    assert_eq!(
        notched.point_location(vec2(2.0, 1.0), 1e-5),
        PointLocation::OnBoundary
    );
}

#[test]
fn remove_repeat_pos() {
    let polyline = pline_closed![(0.0, 0.0), (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (1.0, 1.0)];
    let result = polyline.remove_repeat_pos(1e-5).unwrap();
    assert_eq!(
        result.vertexes,
        vec![vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(1.0, 1.0)]
    );

    // nothing to remove
    assert!(result.remove_repeat_pos(1e-5).is_none());
}

#[test]
fn remove_redundant_collinear_run() {
    let polyline = pline_closed![
        (0.0, 0.0),
        (1.0, 0.0),
        (2.0, 0.0),
        (3.0, 0.0),
        (3.0, 3.0),
        (0.0, 3.0),
        (0.0, 1.5),
    ];
    let result = polyline.remove_redundant(1e-5).unwrap();
    assert_eq!(result.vertex_count(), 4);
    assert_fuzzy_eq!(result.area(), 9.0);
    assert!(result.remove_redundant(1e-5).is_none());
}

#[test]
fn self_intersect_scan() {
    let square = Polyline::from_rect(0.0, 0.0, 2.0, 2.0);
    assert!(!square.scan_for_self_intersect(1e-5));

    // first segment crosses the fourth
    let crossed = pline_closed![
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 2.0),
        (1.0, 2.0),
        (1.0, -1.0),
        (0.0, -1.0),
    ];
    let intr = crossed.first_self_intersect(1e-5).unwrap();
    assert_eq!((intr.start_index1, intr.start_index2), (0, 3));
    assert!(intr.point.fuzzy_eq(vec2(1.0, 0.0)));
}

#[test]
fn small_and_shallow_self_intersects() {
    let tiny_bow_tie = pline_closed![(0.0, 0.0), (0.002, 0.002), (0.002, 0.0), (0.0, 0.002)];
    let intr = tiny_bow_tie.first_self_intersect(1e-5).unwrap();
    assert_eq!((intr.start_index1, intr.start_index2), (0, 2));
    assert!(intr.point.fuzzy_eq(vec2(0.001, 0.001)));

    // long thin bow tie, crossing edges meet at a shallow angle
    let thin = pline_closed![(0.0, 0.0), (0.01, 0.0004), (0.01, 0.0), (0.0, 0.0004)];
    let intr = thin.first_self_intersect(1e-5).unwrap();
    assert_eq!((intr.start_index1, intr.start_index2), (0, 2));
    assert!(intr.point.fuzzy_eq(vec2(0.005, 0.0002)));
    assert!(thin.scan_for_self_intersect(1e-5));
}

#[test]
fn index_and_from_iterator() {
    let mut polyline: Polyline = vec![vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(0.0, 1.0)]
        .into_iter()
        .collect();
    polyline[2] = vec2(0.0, 2.0);
    assert_eq!(polyline[2], vec2(0.0, 2.0));
    assert_eq!(polyline.last(), Some(vec2(0.0, 2.0)));
    assert!(polyline.fuzzy_eq_eps(
        &pline_closed![(0.0, 0.0), (1.0, 0.0), (0.0, 2.0)],
        1e-9
    ));
}
