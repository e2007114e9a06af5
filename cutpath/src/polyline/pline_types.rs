//! Supporting public types used by the polyline methods.

/// Rotational sense of a closed polyline's vertex order.
///
/// Reported in sheet coordinates (y axis pointing down, as on a laser bed or screen), so a polyline
/// whose vertexes go counter clockwise on a y-up plot is [Winding::Clockwise] here. See
/// [Polyline::winding](super::Polyline::winding).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

impl Winding {
    /// The other winding direction.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Winding::Clockwise => Winding::CounterClockwise,
            Winding::CounterClockwise => Winding::Clockwise,
        }
    }

    #[inline]
    pub fn is_clockwise(self) -> bool {
        self == Winding::Clockwise
    }
}

/// Position of a point relative to a closed polyline, see
/// [Polyline::point_location](super::Polyline::point_location).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointLocation {
    Inside,
    Outside,
    /// Within the position epsilon of a segment.
    OnBoundary,
}
