//--------------------------------------------------------------------
// lib.rs
//--------------------------------------------------------------------
// Declaration of all modules occurs here
//--------------------------------------------------------------------

extern crate approx;
extern crate derive_more;

mod coord_utils;
mod size;
mod point;
mod rect;

pub use coord_utils::*;
pub use size::*;
pub use point::*;
pub use rect::*;
