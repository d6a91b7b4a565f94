//! Points, vectors and line-side tests

use crate::color::Rgb8;
use crate::math::rotate;

/// Raster position with a color
///
/// `x` is the column and `y` is the row; `y` increases downward.
/// A point doubles as a vector when used as an orientation.
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Point {
    /// Column
    pub x: i64,
    /// Row
    pub y: i64,
    /// Color carried with the position
    pub color: Rgb8,
}

impl Point {
    /// Create a new Point at (`x`,`y`) of color `color`
    pub fn new(x: i64, y: i64, color: Rgb8) -> Self {
        Point { x, y, color }
    }
    /// Create a new black Point at (`x`,`y`)
    pub fn xy(x: i64, y: i64) -> Self {
        Self::new(x, y, Rgb8::black())
    }
    /// Same position with a different color
    pub fn with_color(self, color: Rgb8) -> Self {
        Point { color, ..self }
    }
    /// Euclidean length of the point taken as a vector
    pub fn magnitude(&self) -> f64 {
        (self.x as f64).hypot(self.y as f64)
    }
    /// Rotate the point taken as a vector by `theta` radians
    ///
    /// Color is preserved
    pub fn rotate(&self, theta: f64) -> Self {
        let (x, y) = rotate(self.x, self.y, theta);
        Point { x, y, color: self.color }
    }
    /// Translate by the position of `offset`, keeping the color of `self`
    pub fn translate(&self, offset: &Point) -> Self {
        Point { x: self.x + offset.x, y: self.y + offset.y, color: self.color }
    }
}

/// Mid point of the segment from `a` to `b`
///
/// Position and color components are averaged, rounding toward zero
///
///     use agl::{Point,Rgb8,mid_point};
///     let a = Point::new(0, 0, Rgb8::black());
///     let b = Point::new(10, 10, Rgb8::white());
///     let m = mid_point(&a, &b);
///     assert_eq!((m.x, m.y), (5, 5));
///     assert_eq!(m.color, Rgb8::gray(127));
///
pub fn mid_point(a: &Point, b: &Point) -> Point {
    let avg = |p: u8, q: u8| ((u16::from(p) + u16::from(q)) / 2) as u8;
    Point {
        x: (a.x + b.x) / 2,
        y: (a.y + b.y) / 2,
        color: Rgb8::new(avg(a.color.r, b.color.r),
                         avg(a.color.g, b.color.g),
                         avg(a.color.b, b.color.b)),
    }
}

/// Vector pointing from `p1` to `p2`, carrying the color of `p1`
pub fn directional_vector(p1: &Point, p2: &Point) -> Point {
    Point { x: p2.x - p1.x, y: p2.y - p1.y, color: p1.color }
}

/// Signed distance-like value of `p` from the line through `a` and `b`
///
/// Twice the signed area of the triangle (`a`,`b`,`p`); zero when `p` lies
///   on the line. The sign tells which side of the line `p` is on.
///
pub fn ydistance(p: &Point, a: &Point, b: &Point) -> i64 {
    (b.y - a.y) * (p.x - a.x) - (b.x - a.x) * (p.y - a.y)
}

/// Check if three points lie on a single line
pub fn collinear(a: &Point, b: &Point, c: &Point) -> bool {
    (b.x - a.x) * (c.y - a.y) == (c.x - a.x) * (b.y - a.y)
}

/// Check if `m` lies between `a` and `b` on both axes, inclusive
pub fn between(m: &Point, a: &Point, b: &Point) -> bool {
    let within = |v: i64, p: i64, q: i64| (p <= v && v <= q) || (q <= v && v <= p);
    within(m.x, a.x, b.x) && within(m.y, a.y, b.y)
}
