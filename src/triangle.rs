//! Triangles using Barycentric Coordinates
//!
//! Every pixel in the bounding box of the triangle is tested against the
//!   three edge functions. Pixels inside are painted with the barycentric
//!   blend of the vertex colors.
//!
//! ### Edge ownership
//!
//! A pixel lying exactly on an edge belongs to the triangle on the same
//!   side of that edge as the probe point (-1,-1). Two triangles sharing
//!   an edge lie on opposite sides of it, so exactly one paints the shared
//!   pixels. When the probe itself is on the edge's line, the probe
//!   (-2,-1) decides instead.
//!
//! ### Degenerate triangles
//!
//! Three collinear vertices are drawn as the line segment spanning all of
//!   them, filled or not, and a [`Diagnostic::Collinear`] is reported.
//!
//! [`Diagnostic::Collinear`]: ../error/enum.Diagnostic.html

use crate::color::Rgb8;
use crate::error::Diagnostic;
use crate::geometry::{between, collinear, ydistance, Point};
use crate::math::blend3_floor;
use crate::raster::{Fill, Rasterizer};
use crate::Pixel;

use std::cmp::{max, min};

/// Edge ownership probe
const PROBE: Point = Point { x: -1, y: -1, color: Rgb8 { r: 0, g: 0, b: 0 } };
/// Edge ownership probe when `PROBE` is on the edge's line
const PROBE_ALT: Point = Point { x: -2, y: -1, color: Rgb8 { r: 0, g: 0, b: 0 } };

fn same_sign(f: i64, d: i64) -> bool {
    (f > 0 && d > 0) || (f < 0 && d < 0)
}

/// Check if a pixel on the edge `u`-`v` belongs to the triangle whose
///   opposite vertex has edge value `f`
fn owns_edge(f: i64, u: &Point, v: &Point) -> bool {
    let d = ydistance(&PROBE, u, v);
    same_sign(f, d) || (d == 0 && same_sign(f, ydistance(&PROBE_ALT, u, v)))
}

impl<P: Pixel> Rasterizer<'_, P> {
    /// Draw a triangle with vertices `a`, `b` and `c`
    ///
    /// Solid triangles blend the vertex colors, outlined triangles draw
    ///   the three edges as lines
    ///
    ///     use agl::{Fill,PixelBuffer,Pixel,Point,Rasterizer,Rgb8};
    ///     let mut pix = PixelBuffer::new(10,10);
    ///     let mut diag = vec![];
    ///     let red = Rgb8::new(255,0,0);
    ///     let (a,b,c) = (Point::new(0,0,red), Point::new(9,0,red), Point::new(0,9,red));
    ///     Rasterizer::new(&mut pix, &mut diag).triangle(a, b, c, Fill::Solid);
    ///     assert_eq!(pix.get(2,2), red);
    ///     assert_eq!(pix.get(8,8), Rgb8::black());
    ///
    pub fn triangle(&mut self, a: Point, b: Point, c: Point, fill: Fill) {
        if collinear(&a, &b, &c) {
            self.collinear_triangle(a, b, c);
            return;
        }
        match fill {
            Fill::Solid => self.fill_triangle(a, b, c),
            Fill::Outline => {
                self.line(a, b);
                self.line(a, c);
                self.line(b, c);
            }
        }
    }

    /// Draw the minimal segment containing three collinear points
    fn collinear_triangle(&mut self, a: Point, b: Point, c: Point) {
        let (from, to) = if between(&b, &a, &c) {
            (a, c)
        } else if between(&a, &b, &c) {
            (b, c)
        } else {
            (a, b)
        };
        log::warn!("collinear triangle ({},{}) ({},{}) ({},{}), drawing ({},{})-({},{})",
                   a.x, a.y, b.x, b.y, c.x, c.y, from.x, from.y, to.x, to.y);
        self.report(Diagnostic::Collinear { from, to });
        self.line(from, to);
    }

    /// Barycentric fill; `a`, `b` and `c` must not be collinear
    fn fill_triangle(&mut self, a: Point, b: Point, c: Point) {
        let f_alpha = ydistance(&a, &b, &c);
        let f_beta  = ydistance(&b, &a, &c);
        let f_gamma = ydistance(&c, &a, &b);
        debug_assert!(f_alpha != 0 && f_beta != 0 && f_gamma != 0);

        let (xmin, xmax, ymin, ymax) = self.limits();
        let x0 = max(xmin, min(a.x, min(b.x, c.x)));
        let x1 = min(xmax, max(a.x, max(b.x, c.x)));
        let y0 = max(ymin, min(a.y, min(b.y, c.y)));
        let y1 = min(ymax, max(a.y, max(b.y, c.y)));
        log::trace!("fill triangle bbox x {}..={} y {}..={}", x0, x1, y0, y1);

        let inside = |f: i64, d: i64| d == 0 || same_sign(f, d);
        for y in y0 ..= y1 {
            for x in x0 ..= x1 {
                let p = Point::xy(x, y);
                let da = ydistance(&p, &b, &c);
                let db = ydistance(&p, &a, &c);
                let dg = ydistance(&p, &a, &b);
                if !(inside(f_alpha, da) && inside(f_beta, db) && inside(f_gamma, dg)) {
                    continue;
                }
                let paint = (da != 0 && db != 0 && dg != 0)
                    || (da == 0 && owns_edge(f_alpha, &b, &c))
                    || (db == 0 && owns_edge(f_beta,  &a, &c))
                    || (dg == 0 && owns_edge(f_gamma, &a, &b));
                if !paint {
                    continue;
                }
                let w = (da as f64 / f_alpha as f64,
                         db as f64 / f_beta  as f64,
                         dg as f64 / f_gamma as f64);
                let color = Rgb8::new(blend3_floor(a.color.r, b.color.r, c.color.r, w),
                                      blend3_floor(a.color.g, b.color.g, c.color.g, w),
                                      blend3_floor(a.color.b, b.color.b, c.color.b, w));
                self.plot(x, y, color);
            }
        }
    }
}
