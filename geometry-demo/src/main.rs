//--------------------------------------------------------------------
// main.rs
//--------------------------------------------------------------------
// Provides the main function
//--------------------------------------------------------------------

extern crate geometry_svg;

use std::io::prelude::*;
use std::io;
use geometry::{Point, PointConfig, Rect};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn read_point(prompt: &str) -> io::Result<Point> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    let mut values = line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(geometry_svg::parse_coord);
    Ok(PointConfig { x: values.next(), y: values.next() }.into())
}

fn main() -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let p1 = read_point("Enter the first corner (x y): ")?;
    let p2 = read_point("Enter the second corner (x y): ")?;

    let rect = Rect::from_points(p1, p2);
    let standard = rect.standardize();
    info!(%rect, "built rectangle from points");

    println!("Rect:         {}", rect);
    println!("Standardized: {}", standard);
    println!("Mid:          {}", standard.mid());
    println!("Max:          {}", standard.max());
    println!("Diagonal:     {}", p1.distance_to(p2));
    println!("Style:        {}", geometry_svg::style_attribute(&standard));
    println!();
    println!("{}", geometry_svg::document_from_rects(&[standard]));
    Ok(())
}
