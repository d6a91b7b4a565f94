//! Rasterizer
//!
//! Converts primitives into pixel writes on anything implementing
//!   [`Pixel`](../trait.Pixel.html). The primitives themselves live in
//!   their own modules:
//!
//!   - [`line`](../line/index.html) Bresenham lines
//!   - [`triangle`](../triangle/index.html) barycentric triangles
//!   - [`shape`](../shape/index.html) polygons, circles and sectors as
//!      triangle fans
//!
//! Pixels outside of the buffer are skipped, never clamped.

use crate::color::Rgb8;
use crate::error::Diagnostic;
use crate::Pixel;

/// Fill or Outline a Shape
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum Fill {
    /// Paint the interior
    Solid,
    /// Paint only the boundary
    Outline,
}

impl From<bool> for Fill {
    fn from(filled: bool) -> Self {
        if filled { Fill::Solid } else { Fill::Outline }
    }
}

/// Immediate rasterizer attached to a pixel buffer
///
/// Drawing is done as soon as a primitive is given. Recoverable
///   conditions are appended to the attached diagnostics.
///
///     use agl::{PixelBuffer,Pixel,Point,Rasterizer,Rgb8};
///     let mut pix = PixelBuffer::new(8,8);
///     let mut diag = vec![];
///     let mut ras = Rasterizer::new(&mut pix, &mut diag);
///     ras.line(Point::new(0,0,Rgb8::white()), Point::new(7,7,Rgb8::white()));
///     assert_eq!(pix.get(3,3), Rgb8::white());
///     assert!(diag.is_empty());
///
pub struct Rasterizer<'a, P: Pixel> {
    pix: &'a mut P,
    diagnostics: &'a mut Vec<Diagnostic>,
}

impl<'a, P: Pixel> Rasterizer<'a, P> {
    /// Create a new Rasterizer drawing into `pix`
    pub fn new(pix: &'a mut P, diagnostics: &'a mut Vec<Diagnostic>) -> Self {
        Self { pix, diagnostics }
    }
    /// Paint a single pixel at column `x`, row `y`
    ///
    /// Returns false, and paints nothing, outside of the buffer
    pub fn plot(&mut self, x: i64, y: i64, c: Rgb8) -> bool {
        self.pix.put(x, y, c)
    }
    /// Limits of the buffer, `(xmin, xmax, ymin, ymax)` inclusive
    pub fn limits(&self) -> (i64,i64,i64,i64) {
        let w = self.pix.width() as i64;
        let h = self.pix.height() as i64;
        (0, w-1, 0, h-1)
    }
    pub(crate) fn report(&mut self, d: Diagnostic) {
        self.diagnostics.push(d);
    }
}
