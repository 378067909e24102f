//--------------------------------------------------------------------
// point.rs
//--------------------------------------------------------------------
// Provides a point in a two-dimensional coordinate system
//--------------------------------------------------------------------

use crate::derive_more::*;
use approx::{AbsDiffEq, RelativeEq};

use super::*;

/// An absolute or relative coordinate. Larger `y` is further down.
#[derive(Copy, Clone, Add, Sub, Neg, PartialEq, From, Into, Display, Constructor)]
#[display(fmt = "<Point x: {} y: {}>", x, y)]
pub struct Point { pub x: Coord, pub y: Coord }

/// Point given as optional fields, resolved the same way as `SizeConfig`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointConfig { pub x: Option<Coord>, pub y: Option<Coord> }

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn from_config(config: PointConfig) -> Point { config.or_values(None, None) }

    pub fn length_sq(&self) -> Coord { self.x * self.x + self.y * self.y }
    pub fn length(&self) -> Coord { self.length_sq().sqrt() }

    pub fn distance_to(&self, other: Point) -> Coord {
        let xd = other.x - self.x;
        let yd = other.y - self.y;
        (xd * xd + yd * yd).sqrt()
    }

    pub fn add_point(&self, other: Point) -> Point { *self + other }
    pub fn subtract_point(&self, other: Point) -> Point { *self - other }

    pub fn roughly_equals(&self, other: Point) -> bool { (*self - other).length_sq().roughly_zero_squared() }
}

impl PointConfig {
    pub fn new(x: Coord, y: Coord) -> PointConfig { PointConfig { x: Some(x), y: Some(y) } }

    /// Resolves into a `Point`; fields set here win over the positional values.
    pub fn or_values(self, x: Option<Coord>, y: Option<Coord>) -> Point {
        Point::new(pick(&[self.x, x]), pick(&[self.y, y]))
    }
}

impl From<PointConfig> for Point {
    fn from(config: PointConfig) -> Point { Point::from_config(config) }
}

impl From<Point> for PointConfig {
    fn from(point: Point) -> PointConfig { PointConfig::new(point.x, point.y) }
}

impl From<Size> for Point {
    fn from(size: Size) -> Point { Point::new(size.width, size.height) }
}

impl AbsDiffEq for Point {
    type Epsilon = Coord;

    fn default_epsilon() -> Coord { Coord::default_epsilon() }

    fn abs_diff_eq(&self, other: &Point, epsilon: Coord) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Point {
    fn default_max_relative() -> Coord { Coord::default_max_relative() }

    fn relative_eq(&self, other: &Point, epsilon: Coord, max_relative: Coord) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative) &&
            self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
