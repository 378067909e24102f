//--------------------------------------------------------------------
// size.rs
//--------------------------------------------------------------------
// Provides a width/height magnitude pair
//--------------------------------------------------------------------

use crate::derive_more::*;
use approx::{AbsDiffEq, RelativeEq};

use super::*;

/// A width and a height.
///
/// Nothing keeps the components non-negative: a negative extent stands for
/// an inverted size, and `standardize` is how callers get rid of it.
#[derive(Copy, Clone, PartialEq, Display, Constructor)]
#[display(fmt = "<Size width: {} height: {}>", width, height)]
pub struct Size { pub width: Coord, pub height: Coord }

/// Size given as optional fields; missing fields fall back to whatever the
/// resolving constructor is given, then to NaN.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SizeConfig { pub width: Option<Coord>, pub height: Option<Coord> }

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    pub fn from_config(config: SizeConfig) -> Size { config.or_values(None, None) }
    pub fn from_point(point: Point) -> Size { Size::new(point.x, point.y) }

    pub fn standardize(&self) -> Size { Size::new(self.width.abs(), self.height.abs()) }
}

impl SizeConfig {
    pub fn new(width: Coord, height: Coord) -> SizeConfig {
        SizeConfig { width: Some(width), height: Some(height) }
    }

    /// Resolves into a `Size`; fields set here win over the positional values.
    pub fn or_values(self, width: Option<Coord>, height: Option<Coord>) -> Size {
        Size::new(pick(&[self.width, width]), pick(&[self.height, height]))
    }
}

impl From<SizeConfig> for Size {
    fn from(config: SizeConfig) -> Size { Size::from_config(config) }
}

impl From<Size> for SizeConfig {
    fn from(size: Size) -> SizeConfig { SizeConfig::new(size.width, size.height) }
}

impl From<Point> for Size {
    fn from(point: Point) -> Size { Size::from_point(point) }
}

impl AbsDiffEq for Size {
    type Epsilon = Coord;

    fn default_epsilon() -> Coord { Coord::default_epsilon() }

    fn abs_diff_eq(&self, other: &Size, epsilon: Coord) -> bool {
        self.width.abs_diff_eq(&other.width, epsilon) && self.height.abs_diff_eq(&other.height, epsilon)
    }
}

impl RelativeEq for Size {
    fn default_max_relative() -> Coord { Coord::default_max_relative() }

    fn relative_eq(&self, other: &Size, epsilon: Coord, max_relative: Coord) -> bool {
        self.width.relative_eq(&other.width, epsilon, max_relative) &&
            self.height.relative_eq(&other.height, epsilon, max_relative)
    }
}

impl std::fmt::Debug for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
