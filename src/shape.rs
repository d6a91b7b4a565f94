//! Polygons, Circles and Sectors
//!
//! All shapes are decomposed into a triangle fan around the center point.
//!   Ring points are found by rotating an orientation vector in equal
//!   steps and translating by the center; they take the color of the
//!   center.
//!
//! | Shape   | Start vector  | Slices            | Step          |
//! |---------|---------------|-------------------|---------------|
//! | Polygon | orientation   | `n`               | `2π / n`      |
//! | Circle  | `(r, 0)`      | `4 r`             | `2π / 4r`     |
//! | Sector  | orientation   | `floor(2 r θ / π)`| `θ / slices`  |
//!
//! Outlined shapes only draw the outer edge of each slice, never the
//!   spokes to the center.
//!
//! Work grows with the radius, a circle of radius `r` draws `4 r` slices
//!   whether or not they fall within the buffer. Each slice is clipped to
//!   the buffer before its pixels are visited.

use crate::error::CanvasError;
use crate::geometry::Point;
use crate::raster::{Fill, Rasterizer};
use crate::Pixel;

use std::f64::consts::PI;

/// Validate the number of sides of a polygon
pub fn check_sides(n: i64) -> Result<usize, CanvasError> {
    if n <= 0 {
        return Err(CanvasError::InvalidSides(n));
    }
    Ok(n as usize)
}

/// Validate the radius of a circle
pub fn check_radius(r: i64) -> Result<usize, CanvasError> {
    if r <= 0 {
        return Err(CanvasError::InvalidRadius(r));
    }
    Ok(r as usize)
}

/// Validate the angle of a sector, must be within (0, 2π]
pub fn check_angle(theta: f64) -> Result<f64, CanvasError> {
    if theta > 0.0 && theta <= 2.0 * PI {
        Ok(theta)
    } else {
        Err(CanvasError::InvalidAngle(theta))
    }
}

/// Number of slices for a sector of radius `r` sweeping `theta`
///
/// At least one slice is used for very small sectors
pub fn sector_slices(r: f64, theta: f64) -> usize {
    let n = (2.0 * r * (theta / PI)).floor() as usize;
    n.max(1)
}

/// Point on the ring of `center` at `theta` from the vector `v`
fn ring_point(center: &Point, v: &Point, theta: f64) -> Point {
    v.rotate(theta).translate(center).with_color(center.color)
}

/// Consecutive ring point pairs, one per slice
///
/// A `closed` fan makes a full turn and ends on its first ring point
fn fan(center: &Point, v: &Point, slices: usize, dtheta: f64, closed: bool) -> Vec<(Point, Point)> {
    let mut ring : Vec<_> = (0 ..= slices)
        .map(|i| ring_point(center, v, i as f64 * dtheta))
        .collect();
    if closed {
        ring[slices] = ring[0];
    }
    ring.windows(2).map(|w| (w[0], w[1])).collect()
}

/// Vertices of a regular polygon with `n` sides, without drawing
///
///     use agl::{Point,Rgb8};
///     use agl::shape::ring;
///     let c = Point::new(0, 0, Rgb8::black());
///     let v = ring(&c, &Point::xy(10, 0), 4).unwrap();
///     assert_eq!(v.len(), 4);
///     assert_eq!((v[0].x, v[0].y), (10, 0));
///     assert_eq!((v[1].x, v[1].y), (0, 10));
///
pub fn ring(center: &Point, v: &Point, n: i64) -> Result<Vec<Point>, CanvasError> {
    let n = check_sides(n)?;
    let dtheta = 2.0 * PI / n as f64;
    Ok((0 .. n).map(|i| ring_point(center, v, i as f64 * dtheta)).collect())
}

impl<P: Pixel> Rasterizer<'_, P> {
    /// Draw the slices of a fan, returning the first ring point of each
    fn draw_fan(&mut self, center: Point, slices: Vec<(Point, Point)>, fill: Fill) -> Vec<Point> {
        log::trace!("fan at ({},{}) with {} slices", center.x, center.y, slices.len());
        let mut ring = Vec::with_capacity(slices.len());
        for (p1, p2) in slices {
            match fill {
                Fill::Solid => self.triangle(center, p1, p2, Fill::Solid),
                Fill::Outline => self.line(p1, p2),
            }
            ring.push(p1);
        }
        ring
    }

    /// Draw a regular polygon with `n` sides around `center`
    ///
    /// The first vertex is at `center + v`. Returns the polygon vertices.
    ///
    ///     use agl::{Fill,PixelBuffer,Pixel,Point,Rasterizer,Rgb8};
    ///     let mut pix = PixelBuffer::new(21,21);
    ///     let mut diag = vec![];
    ///     let c = Point::new(10, 10, Rgb8::white());
    ///     let mut ras = Rasterizer::new(&mut pix, &mut diag);
    ///     let v = ras.polygon(c, Point::xy(8, 0), 6, Fill::Solid).unwrap();
    ///     assert_eq!(v.len(), 6);
    ///     assert_eq!(pix.get(10,12), Rgb8::white());
    ///
    pub fn polygon(&mut self, center: Point, v: Point, n: i64, fill: Fill) -> Result<Vec<Point>, CanvasError> {
        let n = check_sides(n)?;
        let slices = fan(&center, &v, n, 2.0 * PI / n as f64, true);
        Ok(self.draw_fan(center, slices, fill))
    }

    /// Draw a circle of radius `r` around `center`
    ///
    /// Uses `4 r` slices, the chords stay within about a pixel of the circle
    pub fn circle(&mut self, center: Point, r: i64, fill: Fill) -> Result<Vec<Point>, CanvasError> {
        let slices = 4 * check_radius(r)?;
        let v = Point::xy(r, 0);
        let slices = fan(&center, &v, slices, 2.0 * PI / slices as f64, true);
        Ok(self.draw_fan(center, slices, fill))
    }

    /// Draw a filled sector around `center`
    ///
    /// Starts at `center + v` with radius `|v|` and sweeps `theta` radians
    pub fn sector(&mut self, center: Point, v: Point, theta: f64) -> Result<Vec<Point>, CanvasError> {
        let theta = check_angle(theta)?;
        let n = sector_slices(v.magnitude(), theta);
        let slices = fan(&center, &v, n, theta / n as f64, false);
        Ok(self.draw_fan(center, slices, Fill::Solid))
    }
}
