//--------------------------------------------------------------------
// coord_utils.rs
//--------------------------------------------------------------------
// Provides utilities to work with the coordinate type
//--------------------------------------------------------------------

pub type Coord = f64;
pub use std::f64 as CoordM;

pub const EPSILON: Coord = 1.0 / 32768.0;
pub const EPSILON2: Coord = EPSILON * EPSILON;

// Tolerance comparisons for Coord
pub trait Geometry where Self: Sized {
    fn roughly_zero(self) -> bool;
    fn roughly_zero_squared(self) -> bool;
    fn roughly_equals(self, other: Self) -> bool;
    fn roughly_equals_squared(self, other: Self) -> bool;
}

impl Geometry for Coord {
    fn roughly_zero(self) -> bool { self > -EPSILON && self < EPSILON }
    fn roughly_zero_squared(self) -> bool { self > -EPSILON2 && self < EPSILON2 }
    fn roughly_equals(self, other: Self) -> bool { (self - other).roughly_zero() }
    fn roughly_equals_squared(self, other: Self) -> bool { (self - other).roughly_zero_squared() }
}

/// Returns the first defined candidate, or NaN if none is defined.
///
/// Every config-based constructor goes through this, so a missing field never
/// fails construction; the NaN just flows into whatever is computed next.
pub fn pick(candidates: &[Option<Coord>]) -> Coord {
    candidates.iter().copied().flatten().next().unwrap_or(CoordM::NAN)
}
