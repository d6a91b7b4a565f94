//! Bresenham Lines with Color Interpolation
//!
//! Lines are split by slope. Shallow lines, `|dx| > |dy|`, step along x
//!   and steep lines step along y. End points are ordered along the
//!   stepping axis, so drawing `a`-`b` and `b`-`a` covers the same pixels.
//!
//! The color at each pixel is interpolated linearly between the end point
//!   colors along the stepping axis.

use crate::color::Rgb8;
use crate::error::Diagnostic;
use crate::geometry::Point;
use crate::raster::Rasterizer;
use crate::Pixel;

use std::cmp::{max, min};

/// Color at `v` between `a` and `b` along one axis
///
/// A zero length span takes the color of `b`
fn interp(a: &Point, b: &Point, av: i64, bv: i64, v: i64) -> Rgb8 {
    if bv == av {
        return b.color;
    }
    let t = (v as f64 - av as f64) / (bv as f64 - av as f64);
    a.color.lerp(b.color, t)
}

/// Bresenham state `k` steps along the major axis of a line spanning
///   `major` by `minor`, as `(minor steps taken, decision value)`
///
/// Equivalent to stepping `k` times from the start of the line
fn skip(major: i128, minor: i128, k: i128) -> (i128, i128) {
    let n = (2 * minor * k + major - 1) / (2 * major);
    (n, 2 * minor * (k + 1) - major - 2 * major * n)
}

impl<P: Pixel> Rasterizer<'_, P> {
    /// Draw a line from `a` to `b`
    ///
    /// Pixels outside of the buffer are skipped. Equal end points draw a
    ///   single pixel in the color of `b`. Only the part of the major axis
    ///   within the buffer is stepped through; end points are expected
    ///   within ±2^62.
    ///
    ///     use agl::{PixelBuffer,Pixel,Point,Rasterizer,Rgb8};
    ///     let mut pix = PixelBuffer::new(5,1);
    ///     let mut diag = vec![];
    ///     let a = Point::new(0, 0, Rgb8::black());
    ///     let b = Point::new(4, 0, Rgb8::new(200,100,0));
    ///     Rasterizer::new(&mut pix, &mut diag).line(a, b);
    ///     assert_eq!(pix.get(0,0), Rgb8::black());
    ///     assert_eq!(pix.get(0,2), Rgb8::new(100,50,0));
    ///     assert_eq!(pix.get(0,4), Rgb8::new(200,100,0));
    ///
    pub fn line(&mut self, a: Point, b: Point) {
        let w = i128::from(b.x) - i128::from(a.x);
        let h = i128::from(b.y) - i128::from(a.y);
        if w == 0 && h == 0 {
            log::debug!("zero length line at ({},{})", b.x, b.y);
            self.report(Diagnostic::ZeroLengthLine { at: b });
            self.plot(b.x, b.y, b.color);
        } else if w.abs() > h.abs() {
            if a.x < b.x {
                self.line_low(a, b);
            } else {
                self.line_low(b, a);
            }
        } else if a.y < b.y {
            self.line_high(a, b);
        } else {
            self.line_high(b, a);
        }
    }

    /// Shallow line, `a.x < b.x`, stepping along x
    fn line_low(&mut self, a: Point, b: Point) {
        let (xmin, xmax, _, _) = self.limits();
        let (x0, x1) = (max(a.x, xmin), min(b.x, xmax));
        if x0 > x1 {
            return;
        }
        let w = i128::from(b.x) - i128::from(a.x);
        let (h, inc) = if b.y < a.y {
            (i128::from(a.y) - i128::from(b.y), -1)
        } else {
            (i128::from(b.y) - i128::from(a.y), 1)
        };
        let (n, mut f) = skip(w, h, i128::from(x0) - i128::from(a.x));
        let mut y = a.y + inc * n as i64;
        for x in x0 ..= x1 {
            let c = interp(&a, &b, a.x, b.x, x);
            self.plot(x, y, c);
            if f > 0 {
                y += inc;
                f += 2 * (h - w);
            } else {
                f += 2 * h;
            }
        }
    }

    /// Steep line, `a.y < b.y`, stepping along y
    fn line_high(&mut self, a: Point, b: Point) {
        let (_, _, ymin, ymax) = self.limits();
        let (y0, y1) = (max(a.y, ymin), min(b.y, ymax));
        if y0 > y1 {
            return;
        }
        let h = i128::from(b.y) - i128::from(a.y);
        let (w, inc) = if b.x < a.x {
            (i128::from(a.x) - i128::from(b.x), -1)
        } else {
            (i128::from(b.x) - i128::from(a.x), 1)
        };
        let (n, mut f) = skip(h, w, i128::from(y0) - i128::from(a.y));
        let mut x = a.x + inc * n as i64;
        for y in y0 ..= y1 {
            let c = interp(&a, &b, a.y, b.y, y);
            self.plot(x, y, c);
            if f > 0 {
                x += inc;
                f += 2 * (w - h);
            } else {
                f += 2 * w;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Diagnostic, PixelBuffer, Pixel, Point, Rasterizer, Rgb8};
    use std::collections::BTreeSet;

    fn painted(pix: &PixelBuffer) -> BTreeSet<(usize,usize)> {
        let mut out = BTreeSet::new();
        for row in 0 .. pix.height() {
            for col in 0 .. pix.width() {
                if pix.get(row, col) != Rgb8::black() {
                    out.insert((col, row));
                }
            }
        }
        out
    }

    fn draw(w: usize, h: usize, a: Point, b: Point) -> (PixelBuffer, Vec<Diagnostic>) {
        let mut pix = PixelBuffer::new(w, h);
        let mut diag = vec![];
        Rasterizer::new(&mut pix, &mut diag).line(a, b);
        (pix, diag)
    }

    #[test]
    fn horizontal_vertical_diagonal() {
        let white = Rgb8::white();
        let (pix, _) = draw(10, 10, Point::new(1,2,white), Point::new(8,2,white));
        let expected : BTreeSet<_> = (1 ..= 8).map(|x| (x, 2)).collect();
        assert_eq!(painted(&pix), expected);

        let (pix, _) = draw(10, 10, Point::new(3,9,white), Point::new(3,0,white));
        let expected : BTreeSet<_> = (0 ..= 9).map(|y| (3, y)).collect();
        assert_eq!(painted(&pix), expected);

        let (pix, _) = draw(10, 10, Point::new(0,9,white), Point::new(9,0,white));
        let expected : BTreeSet<_> = (0 ..= 9).map(|x| (x, 9-x)).collect();
        assert_eq!(painted(&pix), expected);
    }

    #[test]
    fn shallow_slope() {
        let white = Rgb8::white();
        let (pix, _) = draw(10, 10, Point::new(0,0,white), Point::new(8,2,white));
        let p = painted(&pix);
        assert_eq!(p.len(), 9);
        assert!(p.contains(&(0,0)));
        assert!(p.contains(&(8,2)));
        // One pixel per column
        for x in 0 ..= 8 {
            assert_eq!(p.iter().filter(|q| q.0 == x).count(), 1);
        }
    }

    #[test]
    fn symmetric() {
        let ends = [((0,0),(9,4)), ((2,9),(7,0)), ((9,3),(0,6)), ((1,1),(6,6)), ((4,8),(5,0))];
        for &((ax,ay),(bx,by)) in ends.iter() {
            let a = Point::new(ax, ay, Rgb8::new(255,0,0));
            let b = Point::new(bx, by, Rgb8::new(0,0,255));
            let (p1, _) = draw(10, 10, a, b);
            let (p2, _) = draw(10, 10, b, a);
            assert_eq!(painted(&p1), painted(&p2), "{:?} {:?}", a, b);
            assert_eq!(p1.get(ay as usize, ax as usize), a.color);
            assert_eq!(p1.get(by as usize, bx as usize), b.color);
        }
    }

    #[test]
    fn color_steep() {
        let a = Point::new(0, 0, Rgb8::new(0,0,0));
        let b = Point::new(1, 10, Rgb8::new(100,200,250));
        let (pix, _) = draw(3, 11, a, b);
        assert_eq!(pix.get(0, 0), Rgb8::new(0,0,0));
        assert_eq!(pix.get(10, 1), Rgb8::new(100,200,250));
        let mid = if pix.get(5,0) != Rgb8::black() { pix.get(5,0) } else { pix.get(5,1) };
        assert_eq!(mid, Rgb8::new(50,100,125));
    }

    #[test]
    fn equal_end_points() {
        let a = Point::new(2, 2, Rgb8::new(10,10,10));
        let b = Point::new(2, 2, Rgb8::new(20,30,40));
        let (pix, diag) = draw(5, 5, a, b);
        assert_eq!(painted(&pix).len(), 1);
        assert_eq!(pix.get(2, 2), b.color);
        assert_eq!(diag, vec![Diagnostic::ZeroLengthLine { at: b }]);
    }

    #[test]
    fn clipped_not_clamped() {
        let white = Rgb8::white();
        let (pix, _) = draw(5, 5, Point::new(-5,2,white), Point::new(9,2,white));
        let expected : BTreeSet<_> = (0 .. 5).map(|x| (x, 2)).collect();
        assert_eq!(painted(&pix), expected);

        // Entirely outside, nothing painted, nothing piled up on the border
        let (pix, _) = draw(5, 5, Point::new(-10,-3,white), Point::new(-1,-8,white));
        assert!(painted(&pix).is_empty());

        // Slope is kept: clamping would have flattened this line onto row 0
        let (pix, _) = draw(5, 5, Point::new(0,-4,white), Point::new(8,4,white));
        let p = painted(&pix);
        let expected : BTreeSet<_> = (0 .. 5).map(|y| (y + 4, y)).filter(|q| q.0 < 5).collect();
        assert_eq!(p, expected);
        assert!(!p.contains(&(0,0)));
    }

    /// Pixels of the line `a`-`b` stepping the full span, unclipped
    fn stepped(a: (i64,i64), b: (i64,i64)) -> BTreeSet<(i64,i64)> {
        let mut out = BTreeSet::new();
        let (w, h) = (b.0 - a.0, b.1 - a.1);
        // Swap to (major, minor) so a single loop covers both slopes
        let steep = h.abs() >= w.abs();
        let (mut p, mut q) = if steep { ((a.1, a.0), (b.1, b.0)) } else { (a, b) };
        if p.0 > q.0 {
            std::mem::swap(&mut p, &mut q);
        }
        let dm = q.0 - p.0;
        let (dn, inc) = if q.1 < p.1 { (p.1 - q.1, -1) } else { (q.1 - p.1, 1) };
        let mut f = 2 * dn - dm;
        let mut n = p.1;
        for m in p.0 ..= q.0 {
            out.insert(if steep { (n, m) } else { (m, n) });
            if f > 0 {
                n += inc;
                f += 2 * (dn - dm);
            } else {
                f += 2 * dn;
            }
        }
        out
    }

    #[test]
    fn clipped_matches_stepped() {
        let mut seed = 7u64;
        let mut next = || {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((seed >> 33) % 71) as i64 - 30
        };
        for _ in 0 .. 500 {
            let a = (next(), next());
            let b = (next(), next());
            if a == b {
                continue;
            }
            let white = Rgb8::white();
            let (pix, _) = draw(10, 12, Point::new(a.0, a.1, white), Point::new(b.0, b.1, white));
            let expected : BTreeSet<_> = stepped(a, b).into_iter()
                .filter(|&(x, y)| x >= 0 && x < 10 && y >= 0 && y < 12)
                .map(|(x, y)| (x as usize, y as usize))
                .collect();
            assert_eq!(painted(&pix), expected, "{:?} {:?}", a, b);
        }
    }

    #[test]
    fn far_end_points() {
        let white = Rgb8::white();
        let (pix, _) = draw(4, 4, Point::new(-2_000_000_000, 2, white), Point::new(2_000_000_000, 2, white));
        let expected : BTreeSet<_> = (0 .. 4).map(|x| (x, 2)).collect();
        assert_eq!(painted(&pix), expected);

        let (pix, _) = draw(4, 4, Point::new(0, 0, white), Point::new(2_000_000_000, 3, white));
        let expected : BTreeSet<_> = (0 .. 4).map(|x| (x, 0)).collect();
        assert_eq!(painted(&pix), expected);

        let (pix, _) = draw(4, 4, Point::new(1, -3_000_000_000, white), Point::new(1, 3_000_000_000, white));
        let expected : BTreeSet<_> = (0 .. 4).map(|y| (1, y)).collect();
        assert_eq!(painted(&pix), expected);
    }
}
