//--------------------------------------------------------------------
// lib.rs
//--------------------------------------------------------------------
// Converts rectangles to and from the host's element model
//--------------------------------------------------------------------

extern crate geometry;
extern crate svg;

use geometry::*;
use std::io;
use svg::node::element::{tag, Rectangle};
use svg::node::element::tag::Type;
use svg::parser::Event;
use svg::Document;
use tracing::{debug, warn};

/// Position and bounding box as reported by a host element.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Coordinates { pub left: Coord, pub top: Coord, pub width: Coord, pub height: Coord }

impl Coordinates {
    pub fn new(left: Coord, top: Coord, width: Coord, height: Coord) -> Coordinates {
        Coordinates { left, top, width, height }
    }
}

impl From<Coordinates> for Rect {
    fn from(coords: Coordinates) -> Rect {
        Rect::from_config(RectConfig {
            origin: PointConfig::new(coords.left, coords.top),
            size: SizeConfig::new(coords.width, coords.height)
        })
    }
}

impl From<Rect> for Coordinates {
    fn from(rect: Rect) -> Coordinates {
        Coordinates::new(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height)
    }
}

/// Style properties placing an absolutely positioned element on `rect`.
pub fn to_styles(rect: &Rect) -> Vec<(&'static str, String)> {
    let coords = Coordinates::from(*rect);
    vec![
        ("left", format!("{}px", coords.left)),
        ("top", format!("{}px", coords.top)),
        ("width", format!("{}px", coords.width)),
        ("height", format!("{}px", coords.height))
    ]
}

/// The styles of `to_styles` as an inline `style` attribute value.
pub fn style_attribute(rect: &Rect) -> String {
    to_styles(rect).iter()
        .map(|(key, value)| format!("{}: {}", key, value))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Reads a number the lenient way: leading whitespace is skipped and the
/// longest numeric prefix is used, so `"10px"` gives 10. A signed or
/// unsigned `Infinity` prefix gives an infinity. Anything without a numeric
/// prefix gives NaN.
pub fn parse_coord(text: &str) -> Coord {
    let text = text.trim_start();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, text.strip_prefix('+').unwrap_or(text))
    };
    if unsigned.starts_with("Infinity") { return sign * CoordM::INFINITY; }

    let end = text.find(|c: char| !(c.is_ascii_digit() || "+-.eE".contains(c))).unwrap_or(text.len());
    (1..=end).rev()
        .filter_map(|len| text[..len].parse::<Coord>().ok())
        .next()
        .unwrap_or(CoordM::NAN)
}

pub fn rect_to_svg(rect: &Rect) -> Rectangle {
    Rectangle::new()
        .set("x", rect.origin.x)
        .set("y", rect.origin.y)
        .set("width", rect.size.width)
        .set("height", rect.size.height)
}

/// Puts every rect in one document whose view box encloses all of them.
pub fn document_from_rects(rects: &[Rect]) -> Document {
    let corners = rects.iter().flat_map(|r| {
        let r = r.standardize();
        vec![r.origin, r.max()]
    });
    let bounds = Rect::enclosing(corners).unwrap_or(Rect::new(Point::ZERO, Size::ZERO));

    let mut document = Document::new().set("viewBox",
        (bounds.origin.x, bounds.origin.y, bounds.size.width, bounds.size.height));
    for rect in rects {
        document = document.add(rect_to_svg(rect));
    }
    document
}

/// Collects every `<rect>` element of an SVG document, in document order.
pub fn rects_from_svg(data: &str) -> io::Result<Vec<Rect>> {
    let mut rects = Vec::new();
    for event in svg::read(data)? {
        match event {
            Event::Error(error) => return Err(io::Error::new(io::ErrorKind::InvalidData, error.to_string())),
            Event::Tag(tag::Rectangle, kind, attributes) => {
                if let Type::End = kind { continue; }

                let attribute = |name: &str| attributes.get(name).map(|value| {
                    let value = value.to_string();
                    let coord = parse_coord(&value);
                    if coord.is_nan() { warn!(attribute = name, value = %value, "non-numeric rect attribute"); }
                    coord
                });

                let config = RectConfig {
                    origin: PointConfig { x: attribute("x"), y: attribute("y") },
                    size: SizeConfig { width: attribute("width"), height: attribute("height") }
                };
                // Missing position attributes default to 0 as in SVG itself
                let rect = Rect::new(config.origin.or_values(Some(0.0), Some(0.0)), Size::from_config(config.size));
                debug!(%rect, "read rect element");
                rects.push(rect);
            }
            _ => {}
        }
    }

    Ok(rects)
}
