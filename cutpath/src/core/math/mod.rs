//! Core 2D math: points, segment intersects and affine transforms.
mod affine;
mod base_math;
mod line_line_intersect;
mod vector2;

pub use affine::Affine2;
pub use base_math::*;
pub use line_line_intersect::{SegSegIntr, seg_seg_intr};
pub use vector2::{Vector2, vec2};
