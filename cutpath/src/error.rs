use thiserror::Error;

/// Reasons a single offset call produces no tool path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum OffsetError {
    /// Fewer than 3 non degenerate edges remain after zero length edges are removed.
    #[error("polyline has {usable_edges} usable edges, at least 3 are required")]
    InsufficientGeometry { usable_edges: usize },
    /// The edges enclose no area (all vertexes on one line).
    #[error("polyline encloses no area")]
    ZeroArea,
    /// Radius is negative, NaN or infinite.
    #[error("offset radius must be finite and not negative")]
    InvalidRadius,
    /// Inward offset radius consumes the whole polygon.
    #[error("inward offset collapsed the polygon")]
    Collapsed,
}
