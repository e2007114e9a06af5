#![allow(dead_code)]

mod pline_modifiers;
mod pline_test_properties;

pub use pline_modifiers::*;
pub use pline_test_properties::*;
