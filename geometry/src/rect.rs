//--------------------------------------------------------------------
// rect.rs
//--------------------------------------------------------------------
// Provides an axis-aligned rectangle built from an origin and a size
//--------------------------------------------------------------------

use crate::derive_more::*;
use approx::{AbsDiffEq, RelativeEq};

use super::*;
use std::iter::Iterator;

/// An axis-aligned rectangle. `origin` is the upper-left corner and `size`
/// extends right and down, as on a screen.
///
/// None of the containment or intersection tests standardize first: with a
/// negative extent the computed max lies before the origin and the tests
/// come out false. Call `standardize` beforehand if the size may be negative.
#[derive(Copy, Clone, PartialEq, Debug, Display, Constructor)]
#[display(fmt = "<Rect origin: {} size: {}>", origin, size)]
pub struct Rect { pub origin: Point, pub size: Size }

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RectConfig { pub origin: PointConfig, pub size: SizeConfig }

impl Rect {
    pub fn from_config(config: RectConfig) -> Rect {
        Rect::new(Point::from_config(config.origin), Size::from_config(config.size))
    }

    /// Rect going from `pt1` to `pt2`. The size is left negative on any axis
    /// where `pt2` comes before `pt1`.
    pub fn from_points(pt1: Point, pt2: Point) -> Rect {
        Rect::new(pt1, Size::from_point(pt2.subtract_point(pt1)))
    }

    /// Flips each axis with a negative extent so it has a positive one,
    /// keeping the covered region. Axes are handled independently.
    pub fn standardize(&self) -> Rect {
        let Rect { mut origin, mut size } = *self;
        if self.origin.x > self.origin.x + self.size.width {
            origin.x = self.origin.x + self.size.width;
            size.width = self.size.width.abs();
        }
        if self.origin.y > self.origin.y + self.size.height {
            origin.y = self.origin.y + self.size.height;
            size.height = self.size.height.abs();
        }
        Rect { origin, size }
    }

    pub fn min_x(&self) -> Coord { self.origin.x }
    pub fn min_y(&self) -> Coord { self.origin.y }
    pub fn max_x(&self) -> Coord { self.origin.x + self.size.width }
    pub fn max_y(&self) -> Coord { self.origin.y + self.size.height }

    /// Bottom-right corner.
    pub fn max(&self) -> Point { Point::new(self.max_x(), self.max_y()) }

    /// Centre.
    pub fn mid(&self) -> Point {
        Point::new(self.origin.x + self.size.width / 2.0, self.origin.y + self.size.height / 2.0)
    }

    pub fn contains_point(&self, pt: Point) -> bool {
        self.min_x() <= pt.x && self.min_y() <= pt.y && self.max_x() >= pt.x && self.max_y() >= pt.y
    }

    pub fn contains_rect(&self, other: Rect) -> bool {
        self.contains_point(other.origin) && self.contains_point(other.max())
    }

    pub fn intersects_rect(&self, other: Rect) -> bool {
        !(self.min_x() > other.max_x() || self.max_x() < other.min_x() ||
            self.min_y() > other.max_y() || self.max_y() < other.min_y())
    }

    pub fn intersection(&self, other: Rect) -> Option<Rect> {
        if !self.intersects_rect(other) { None }
        else {
            let x1 = self.min_x().max(other.min_x());
            let x2 = self.max_x().min(other.max_x());
            let y1 = self.min_y().max(other.min_y());
            let y2 = self.max_y().min(other.max_y());

            Some(Rect::from_points(Point::new(x1, y1), Point::new(x2, y2)))
        }
    }

    pub fn translate(&self, delta: Point) -> Rect { Rect::new(self.origin.add_point(delta), self.size) }

    /// Smallest standardized rect holding every point, or `None` if there
    /// are no points.
    pub fn enclosing(pts: impl Iterator<Item = Point>) -> Option<Rect> {
        let mut pts = pts.peekable();
        pts.peek()?;

        let lo = Point::new(CoordM::INFINITY, CoordM::INFINITY);
        let (lo, hi) = pts.fold((lo, -lo), |(lo, hi), pt| (
            Point::new(lo.x.min(pt.x), lo.y.min(pt.y)),
            Point::new(hi.x.max(pt.x), hi.y.max(pt.y))
        ));
        Some(Rect::from_points(lo, hi))
    }
}

impl From<RectConfig> for Rect {
    fn from(config: RectConfig) -> Rect { Rect::from_config(config) }
}

impl AbsDiffEq for Rect {
    type Epsilon = Coord;

    fn default_epsilon() -> Coord { Coord::default_epsilon() }

    fn abs_diff_eq(&self, other: &Rect, epsilon: Coord) -> bool {
        self.origin.abs_diff_eq(&other.origin, epsilon) && self.size.abs_diff_eq(&other.size, epsilon)
    }
}

impl RelativeEq for Rect {
    fn default_max_relative() -> Coord { Coord::default_max_relative() }

    fn relative_eq(&self, other: &Rect, epsilon: Coord, max_relative: Coord) -> bool {
        self.origin.relative_eq(&other.origin, epsilon, max_relative) &&
            self.size.relative_eq(&other.size, epsilon, max_relative)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn rect(x: Coord, y: Coord, width: Coord, height: Coord) -> Rect {
        Rect::new(Point::new(x, y), Size::new(width, height))
    }

    fn rect_config(x: Coord, y: Coord, width: Coord, height: Coord) -> RectConfig {
        RectConfig { origin: PointConfig::new(x, y), size: SizeConfig::new(width, height) }
    }

    #[test]
    fn test_from_points() {
        let r = Rect::from_points(Point::new(0.0, 0.0), Point::new(10.0, 20.0));
        assert_eq!(r.origin, Point::new(0.0, 0.0));
        assert_eq!(r.size, Size::new(10.0, 20.0));

        // Not standardized
        let r = Rect::from_points(Point::new(10.0, 10.0), Point::new(4.0, 15.0));
        assert_eq!(r.origin, Point::new(10.0, 10.0));
        assert_eq!(r.size, Size::new(-6.0, 5.0));
    }

    #[test]
    fn test_from_config() {
        let r = Rect::from(rect_config(1.0, 2.0, 3.0, 4.0));
        assert_eq!(r, rect(1.0, 2.0, 3.0, 4.0));

        let partial = RectConfig { origin: PointConfig { x: Some(1.0), y: None }, ..Default::default() };
        let r = Rect::from_config(partial);
        assert_eq!(r.origin.x, 1.0);
        assert!(r.origin.y.is_nan());
        assert!(r.size.width.is_nan() && r.size.height.is_nan());
        assert!(!r.contains_point(Point::ZERO));
    }

    #[test]
    fn test_standardize_both_axes() {
        let r = Rect::from_config(rect_config(5.0, 5.0, -10.0, -10.0)).standardize();
        assert_eq!(r.origin, Point::new(-5.0, -5.0));
        assert_eq!(r.size, Size::new(10.0, 10.0));
    }

    #[test]
    fn test_standardize_axes_independently() {
        let r = rect(5.0, 5.0, -10.0, 3.0).standardize();
        assert_eq!(r, rect(-5.0, 5.0, 10.0, 3.0));

        let r = rect(5.0, 5.0, 2.0, -3.0).standardize();
        assert_eq!(r, rect(5.0, 2.0, 2.0, 3.0));

        let r = rect(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.standardize(), r);
    }

    #[test]
    fn test_contains_point() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_point(Point::new(5.0, 5.0)));
        assert!(!r.contains_point(Point::new(11.0, 5.0)));
        assert!(r.contains_point(Point::new(10.0, 10.0)));
        assert!(r.contains_point(Point::ZERO));
        assert!(!r.contains_point(Point::new(5.0, -0.5)));
    }

    #[test]
    fn test_contains_point_needs_standardized_rect() {
        let r = rect(10.0, 10.0, -10.0, -10.0);
        assert!(!r.contains_point(Point::new(5.0, 5.0)));
        assert!(r.standardize().contains_point(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_contains_rect_needs_standardized_rect() {
        let r = rect(10.0, 10.0, -10.0, -10.0);
        let inner = rect(2.0, 2.0, 3.0, 3.0);
        assert!(!r.contains_rect(inner));
        assert!(r.standardize().contains_rect(inner));
    }

    #[test]
    fn test_intersects_rect_needs_standardized_rect() {
        let r = rect(10.0, 10.0, -10.0, -10.0);
        let inner = rect(2.0, 2.0, 3.0, 3.0);
        assert!(!r.intersects_rect(inner));
        assert!(!inner.intersects_rect(r));
        assert!(r.standardize().intersects_rect(inner));
        assert!(inner.intersects_rect(r.standardize()));
    }

    #[test]
    fn test_contains_rect() {
        let outer = rect(0.0, 0.0, 10.0, 10.0);
        assert!(outer.contains_rect(rect(2.0, 2.0, 3.0, 3.0)));
        assert!(outer.contains_rect(outer));
        assert!(!outer.contains_rect(rect(8.0, 8.0, 3.0, 3.0)));
        assert!(!rect(2.0, 2.0, 3.0, 3.0).contains_rect(outer));
    }

    #[test]
    fn test_intersects_rect() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 10.0, 10.0);
        let c = rect(20.0, 20.0, 5.0, 5.0);
        assert!(a.intersects_rect(b));
        assert!(b.intersects_rect(a));
        assert!(!a.intersects_rect(c));
        assert!(!c.intersects_rect(a));

        // Touching edges count
        assert!(a.intersects_rect(rect(10.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn test_intersection() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert_eq!(a.intersection(rect(5.0, 5.0, 10.0, 10.0)), Some(rect(5.0, 5.0, 5.0, 5.0)));
        assert_eq!(a.intersection(rect(20.0, 20.0, 5.0, 5.0)), None);
        assert_eq!(a.intersection(rect(10.0, 2.0, 5.0, 5.0)), Some(rect(10.0, 2.0, 0.0, 5.0)));
    }

    #[test]
    fn test_max_mid() {
        let r = rect(2.0, 4.0, 6.0, 8.0);
        assert_eq!(r.max(), Point::new(8.0, 12.0));
        assert_eq!(r.mid(), Point::new(5.0, 8.0));
    }

    #[test]
    fn test_translate() {
        let r = rect(1.0, 1.0, 2.0, 2.0).translate(Point::new(-1.0, 3.0));
        assert_eq!(r, rect(0.0, 4.0, 2.0, 2.0));
    }

    #[test]
    fn test_enclosing() {
        let pts = vec![Point::new(3.0, -1.0), Point::new(-2.0, 4.0), Point::new(1.0, 1.0)];
        assert_eq!(Rect::enclosing(pts.into_iter()), Some(rect(-2.0, -1.0, 5.0, 5.0)));
        assert_eq!(Rect::enclosing(std::iter::empty()), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(rect(1.0, 2.0, 3.5, 4.0).to_string(),
            "<Rect origin: <Point x: 1 y: 2> size: <Size width: 3.5 height: 4>>");
    }

    proptest! {
        #[test]
        fn prop_max_is_origin_plus_size(x in -1e6..1e6f64, y in -1e6..1e6f64,
            w in -1e6..1e6f64, h in -1e6..1e6f64) {
            let r = rect(x, y, w, h);
            prop_assert_eq!(r.max(), Point::new(x + w, y + h));
        }

        #[test]
        fn prop_standardize_keeps_region(x in -1e6..1e6f64, y in -1e6..1e6f64,
            w in -1e6..1e6f64, h in -1e6..1e6f64) {
            let s = rect(x, y, w, h).standardize();
            prop_assert!(s.size.width >= 0.0 && s.size.height >= 0.0);
            assert_relative_eq!(s.mid(), rect(x, y, w, h).mid(), epsilon = 1e-6);
            prop_assert!(s.contains_point(s.mid()));
        }
    }
}
