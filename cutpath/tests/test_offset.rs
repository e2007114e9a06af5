mod test_utils;

use cutpath::{
    OffsetError, assert_fuzzy_eq,
    core::{math::vec2, traits::FuzzyEq},
    offset::{OffsetOptions, offset, offset_all, offset_opt},
    pline_closed,
    polyline::Polyline,
};
use std::f64::consts::{SQRT_2, TAU};
use test_utils::{ModifiedPlineSet, PlineProperties, assert_properties_match};

/// Offset every modified version (reversed, cycled start) of `input` and check each result against
/// `expected`.
fn offset_matches_for_all_modified(
    input: &Polyline<f64>,
    radius: f64,
    outside: bool,
    expected: &PlineProperties,
) {
    let set = ModifiedPlineSet::new(input, true, true);
    set.accept_closure(&mut |modified, state| {
        let result = offset(&modified, radius, outside)
            .unwrap_or_else(|e| panic!("offset failed: {}, modified state: {:?}", e, state));
        assert!(
            !result.scan_for_self_intersect(PlineProperties::POS_EQ_EPS),
            "result self intersects, modified state: {:?}",
            state
        );
        assert!(
            result
                .remove_repeat_pos(PlineProperties::POS_EQ_EPS)
                .is_none(),
            "result should not have repeat positioned vertexes, modified state: {:?}",
            state
        );
        let properties = PlineProperties::from_pline(&result);
        assert!(
            properties.fuzzy_eq_eps(expected, PlineProperties::PROP_CMP_EPS),
            "properties do not match, modified state: {:?}\nresult:\n{:?}\nexpected:\n{:?}",
            state,
            properties,
            expected
        );
    });
}

fn regular_polygon(vertex_count: usize, radius: f64) -> Polyline<f64> {
    (0..vertex_count)
        .map(|i| {
            let angle = i as f64 * TAU / vertex_count as f64;
            vec2(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

fn l_shape() -> Polyline<f64> {
    pline_closed![
        (0.0, 0.0),
        (2.0, 0.0),
        (2.0, 1.0),
        (1.0, 1.0),
        (1.0, 2.0),
        (0.0, 2.0),
    ]
}

/// 3 x 3 square with a 0.4 wide slot cut down from the top edge to y = 1.
fn slotted_square() -> Polyline<f64> {
    pline_closed![
        (0.0, 0.0),
        (3.0, 0.0),
        (3.0, 3.0),
        (1.7, 3.0),
        (1.7, 1.0),
        (1.3, 1.0),
        (1.3, 3.0),
        (0.0, 3.0),
    ]
}

#[test]
fn unit_square_outward() {
    let square = pline_closed![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    let result = offset(&square, 0.1, true).unwrap();
    let expected = [
        vec2(-0.1, -0.1),
        vec2(1.1, -0.1),
        vec2(1.1, 1.1),
        vec2(-0.1, 1.1),
    ];
    assert_eq!(result.vertex_count(), expected.len());
    for (r, e) in result.iter_vertexes().zip(expected) {
        assert!(r.fuzzy_eq(e), "{:?} != {:?}", r, e);
    }

    offset_matches_for_all_modified(
        &square,
        0.1,
        true,
        &PlineProperties::new(4, 1.44, 4.8, -0.1, -0.1, 1.1, 1.1),
    );
}

#[test]
fn unit_square_inward() {
    let square = Polyline::from_rect(0.0, 0.0, 1.0, 1.0);
    offset_matches_for_all_modified(
        &square,
        0.1,
        false,
        &PlineProperties::new(4, 0.64, 3.2, 0.1, 0.1, 0.9, 0.9),
    );
}

#[test]
fn diamond_outward() {
    let diamond = pline_closed![(1.0, 0.0), (2.0, 1.0), (1.0, 2.0), (0.0, 1.0)];
    let side = SQRT_2 + 0.2;
    let corner = 0.1 * SQRT_2;
    offset_matches_for_all_modified(
        &diamond,
        0.1,
        true,
        &PlineProperties::new(
            4,
            side * side,
            4.0 * side,
            -corner,
            -corner,
            2.0 + corner,
            2.0 + corner,
        ),
    );
}

#[test]
fn l_shape_inward_and_outward() {
    let l = l_shape();
    offset_matches_for_all_modified(
        &l,
        0.1,
        false,
        &PlineProperties::new(6, 2.24, 7.2, 0.1, 0.1, 1.9, 1.9),
    );
    offset_matches_for_all_modified(
        &l,
        0.1,
        true,
        &PlineProperties::new(6, 3.84, 8.8, -0.1, -0.1, 2.1, 2.1),
    );
}

#[test]
fn slot_narrower_than_tool_closes() {
    let slotted = slotted_square();
    offset_matches_for_all_modified(
        &slotted,
        0.25,
        true,
        &PlineProperties::new(4, 12.25, 14.0, -0.25, -0.25, 3.25, 3.25),
    );
}

#[test]
fn untrimmed_slot_keeps_crossing_edges() {
    let slotted = slotted_square();
    let options = OffsetOptions {
        trim_self_intersects: false,
        ..Default::default()
    };
    let raw = offset_opt(&slotted, 0.25, true, &options).unwrap();
    assert_eq!(raw.vertex_count(), slotted.vertex_count());
    assert!(raw.scan_for_self_intersect(1e-5));
    // vertex i is the displaced image of input vertex i
    assert!(raw[4].fuzzy_eq(vec2(1.45, 1.25)));
    assert!(raw[5].fuzzy_eq(vec2(1.55, 1.25)));

    let trimmed = offset_opt(&slotted, 0.25, true, &OffsetOptions::new()).unwrap();
    assert!(!trimmed.scan_for_self_intersect(1e-5));
}

#[test]
fn round_trip_convex() {
    let hexagon = regular_polygon(6, 10.0);
    for &r in &[0.05, 0.5, 1.0] {
        let grown = offset(&hexagon, r, true).unwrap();
        let back = offset(&grown, r, false).unwrap();
        assert_eq!(back.vertex_count(), hexagon.vertex_count());
        for (b, h) in back.iter_vertexes().zip(hexagon.iter_vertexes()) {
            assert!(b.fuzzy_eq_eps(h, 1e-6), "{:?} != {:?} at radius {}", b, h, r);
        }

        let shrunk = offset(&hexagon, r, false).unwrap();
        let back = offset(&shrunk, r, true).unwrap();
        assert!(back.fuzzy_eq_eps(&hexagon, 1e-6));
    }
}

#[test]
fn winding_invariance() {
    let pentagon = regular_polygon(5, 3.0);
    let reversed = pentagon.inverted();
    assert_eq!(reversed.winding(), pentagon.winding().opposite());
    for outside in [true, false] {
        let a = offset(&pentagon, 0.3, outside).unwrap();
        let b = offset(&reversed, 0.3, outside).unwrap();
        assert_properties_match(&PlineProperties::from_pline(&a), &PlineProperties::from_pline(&b));
        // same vertexes in reversed order, both starting at the image of vertex 0
        assert!(a.inverted().fuzzy_eq_eps(&b, 1e-9));
        // winding follows the input
        assert_eq!(a.winding(), pentagon.winding());
        assert_eq!(b.winding(), reversed.winding());
    }
}

#[test]
fn area_monotonic_with_radius() {
    let hexagon = regular_polygon(6, 5.0);
    let radii = [0.0, 0.1, 0.5, 1.0, 2.0, 3.0, 4.0];

    let mut prev_area = 0.0;
    for &r in radii.iter() {
        let area = offset(&hexagon, r, true).unwrap().area().abs();
        assert!(area > prev_area, "outward area {} not above {} at {}", area, prev_area, r);
        prev_area = area;
    }

    let mut prev_area = f64::INFINITY;
    for &r in radii.iter() {
        let area = offset(&hexagon, r, false).unwrap().area().abs();
        assert!(area < prev_area, "inward area {} not below {} at {}", area, prev_area, r);
        prev_area = area;
    }

    // inner radius of the hexagon is 5 * cos(30deg), about 4.33
    assert_eq!(offset(&hexagon, 4.5, false), Err(OffsetError::Collapsed));
}

#[test]
fn inward_collapse() {
    let square = Polyline::from_rect(0.0, 0.0, 4.0, 4.0);
    assert!(offset(&square, 1.9, false).is_ok());
    assert_eq!(offset(&square, 2.0, false), Err(OffsetError::Collapsed));
    assert_eq!(offset(&square, 2.5, false), Err(OffsetError::Collapsed));
    assert_eq!(offset(&square, 10.0, false), Err(OffsetError::Collapsed));
    // outward never collapses
    assert!(offset(&square, 10.0, true).is_ok());

    let l = l_shape();
    assert_eq!(offset(&l, 0.6, false), Err(OffsetError::Collapsed));
}

#[test]
fn neck_narrower_than_tool_keeps_larger_island() {
    // 3 x 3 and 2 x 2 squares joined by a 0.2 wide neck
    let dumbbell = pline_closed![
        (0.0, 0.0),
        (3.0, 0.0),
        (3.0, 1.4),
        (4.0, 1.4),
        (4.0, 0.5),
        (6.0, 0.5),
        (6.0, 2.5),
        (4.0, 2.5),
        (4.0, 1.6),
        (3.0, 1.6),
        (3.0, 3.0),
        (0.0, 3.0),
    ];
    let result = offset(&dumbbell, 0.3, false).unwrap();
    assert_eq!(result.winding(), dumbbell.winding());
    assert!(!result.scan_for_self_intersect(1e-5));
    assert_properties_match(
        &PlineProperties::from_pline(&result),
        &PlineProperties::new(4, 5.76, 9.6, 0.3, 0.3, 2.7, 2.7),
    );
}

#[test]
fn zero_length_edges_discarded() {
    let square = pline_closed![
        (0.0, 0.0),
        (0.0, 0.0),
        (1.0, 0.0),
        (1.0, 1.0),
        (1.0, 1.0),
        (0.0, 1.0),
        (0.0, 0.0),
    ];
    let result = offset(&square, 0.1, true).unwrap();
    assert_eq!(result.vertex_count(), 4);
    assert_fuzzy_eq!(result.area(), 1.44);
}

#[test]
fn insufficient_geometry() {
    let empty = Polyline::<f64>::new();
    assert_eq!(
        offset(&empty, 0.1, true),
        Err(OffsetError::InsufficientGeometry { usable_edges: 0 })
    );

    let repeated = pline_closed![(0.0, 0.0), (0.0, 0.0), (1.0, 1.0), (1.0, 1.0)];
    assert_eq!(
        offset(&repeated, 0.1, false),
        Err(OffsetError::InsufficientGeometry { usable_edges: 2 })
    );
    // checked before the radius is used
    assert_eq!(
        offset(&repeated, 0.0, false),
        Err(OffsetError::InsufficientGeometry { usable_edges: 2 })
    );
}

#[test]
fn zero_radius_returns_copy() {
    let l = l_shape();
    let result = offset(&l, 0.0, true).unwrap();
    assert!(result.fuzzy_eq_eps(&l, 1e-12));
    let result = offset(&l, 0.0, false).unwrap();
    assert!(result.fuzzy_eq_eps(&l, 1e-12));
}

#[test]
fn many_vertexes_inward() {
    let circle = regular_polygon(200, 10.0);
    let result = offset(&circle, 1.0, false).unwrap();
    assert_eq!(result.vertex_count(), 200);
    assert!(!result.scan_for_self_intersect(1e-5));
    let area = result.area().abs();
    let r_lo: f64 = 8.99;
    let r_hi: f64 = 9.01;
    assert!(area > r_lo * r_lo * TAU / 2.0 && area < r_hi * r_hi * TAU / 2.0);
}

#[test]
fn offset_all_reports_each_loop() {
    let loops = vec![
        Polyline::from_rect(0.0, 0.0, 4.0, 4.0),
        Polyline::from_rect(10.0, 0.0, 1.0, 1.0),
        pline_closed![(0.0, 0.0), (1.0, 1.0)],
    ];
    let results = offset_all(&loops, 0.75, false, &OffsetOptions::new());
    assert_eq!(results.len(), 3);
    assert_fuzzy_eq!(results[0].as_ref().unwrap().area(), 6.25);
    assert_eq!(results[1], Err(OffsetError::Collapsed));
    assert_eq!(
        results[2],
        Err(OffsetError::InsufficientGeometry { usable_edges: 2 })
    );
}

#[test]
fn single_precision() {
    let square = Polyline::<f32>::from_rect(0.0, 0.0, 1.0, 1.0);
    let result = offset(&square, 0.25, true).unwrap();
    assert_eq!(result.vertex_count(), 4);
    assert!(result[0].fuzzy_eq(vec2(-0.25f32, -0.25)));
    assert!(result.area().fuzzy_eq(2.25));
}
