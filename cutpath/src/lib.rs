//! Tool-offset paths and nested cut ordering for laser cutter and CNC router outlines.
//!
//! * [offset] turns a closed outline into the path the tool centre follows, moved out of or into
//!   the outline by the tool radius.
//! * [plan] orders a set of placed outlines so that shapes nested inside another shape are cut
//!   before the shape that holds them.
//!
//! Coordinates follow the sheet convention (y axis pointing down) when talking about clockwise and
//! counter clockwise, see [polyline::Winding].
#[macro_use]
mod macros;

pub mod core;
pub mod error;
pub mod flatten;
pub mod offset;
pub mod plan;
pub mod polyline;
pub mod shape;

pub use error::OffsetError;
pub use static_aabb2d_index::AABB;
