mod pline;
mod pline_types;
mod segment;

pub use pline::*;
pub use pline_types::*;
pub use segment::*;
