use cutpath::{AABB, core::traits::FuzzyEq, polyline::Polyline};

/// Fuzzy compare AABB values
pub fn aabb_fuzzy_eq_eps(a: &AABB<f64>, b: &AABB<f64>, eps: f64) -> bool {
    a.min_x.fuzzy_eq_eps(b.min_x, eps)
        && a.min_y.fuzzy_eq_eps(b.min_y, eps)
        && a.max_x.fuzzy_eq_eps(b.max_x, eps)
        && a.max_y.fuzzy_eq_eps(b.max_y, eps)
}

/// Holds a set of properties of a polyline for comparison in tests
#[derive(Debug, Copy, Clone)]
pub struct PlineProperties {
    pub vertex_count: usize,
    pub area: f64,
    pub perimeter: f64,
    pub extents: AABB<f64>,
}

impl PlineProperties {
    // positions equal epsilon
    pub const POS_EQ_EPS: f64 = 1e-5;
    // property comparer epsilon
    pub const PROP_CMP_EPS: f64 = 1e-4;
    // epsilon for use of remove_redundant for consistent property compare
    pub const REMOVE_REDUNDANT_EPS: f64 = 1e-4;

    pub fn new(
        vertex_count: usize,
        area: f64,
        perimeter: f64,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Self {
        Self {
            vertex_count,
            area,
            perimeter,
            extents: AABB::new(min_x, min_y, max_x, max_y),
        }
    }

    /// Properties with the area taken as absolute value so results compare across windings.
    pub fn from_pline(pline: &Polyline<f64>) -> Self {
        // remove redundant vertexes for consistent vertex counts
        let rr = pline.remove_redundant(PlineProperties::REMOVE_REDUNDANT_EPS);
        let pline = rr.as_ref().unwrap_or(pline);

        Self {
            vertex_count: pline.vertex_count(),
            area: pline.area().abs(),
            perimeter: pline.iter_segments().map(|s| s.length()).sum(),
            extents: pline.extents().unwrap(),
        }
    }

    pub fn fuzzy_eq_eps(&self, other: &Self, eps: f64) -> bool {
        if self.vertex_count != other.vertex_count {
            return false;
        }
        if !self.area.fuzzy_eq_eps(other.area, eps) {
            return false;
        }
        if !self.perimeter.fuzzy_eq_eps(other.perimeter, eps) {
            return false;
        }
        if !aabb_fuzzy_eq_eps(&self.extents, &other.extents, eps) {
            return false;
        }
        true
    }
}

pub fn assert_properties_match(result: &PlineProperties, expected: &PlineProperties) {
    assert!(
        result.fuzzy_eq_eps(expected, PlineProperties::PROP_CMP_EPS),
        "properties do not match\nresult:\n{:?}\nexpected:\n{:?}",
        result,
        expected
    );
}
