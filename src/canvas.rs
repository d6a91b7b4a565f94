//! Canvas, the client drawing surface
//!
//! A Canvas owns a pixel buffer and a primitive session. Shapes are given
//!   between `begin` and `end` and drawn when the session ends.
//!
//!     use agl::{Canvas,PrimitiveType,Rgb8};
//!
//!     let mut canvas = Canvas::new(100, 100);
//!     canvas.begin(PrimitiveType::Lines);
//!     canvas.color(255,0,0);
//!     canvas.vertex(0,0);
//!     canvas.vertex(99,0);
//!     canvas.color(0,255,0);
//!     canvas.vertex(0,0);
//!     canvas.vertex(0,99);
//!     canvas.end();
//!
//!     assert_eq!(canvas.pixel_color(0, 50), Rgb8::new(255,0,0));
//!     assert_eq!(canvas.pixel_color(50, 0), Rgb8::new(0,255,0));
//!

use crate::buffer::PixelBuffer;
use crate::color::Rgb8;
use crate::error::{CanvasError, Diagnostic};
use crate::geometry::{self, Point};
use crate::raster::{Fill, Rasterizer};
use crate::session::{Primitive, PrimitiveType, Session};
use crate::shape;
use crate::Pixel;

use std::path::Path;

/// Drawing surface with an immediate-mode primitive session
#[derive(Debug)]
pub struct Canvas {
    pix: PixelBuffer,
    session: Session,
    polygon_vertices: Vec<Point>,
    diagnostics: Vec<Diagnostic>,
}

impl Canvas {
    /// Create a new black Canvas of `width` x `height` pixels
    pub fn new(width: usize, height: usize) -> Self {
        Canvas {
            pix: PixelBuffer::new(width, height),
            session: Session::new(),
            polygon_vertices: vec![],
            diagnostics: vec![],
        }
    }
    /// Width in pixels
    pub fn width(&self) -> usize {
        self.pix.width()
    }
    /// Height in pixels
    pub fn height(&self) -> usize {
        self.pix.height()
    }
    /// Underlying pixel buffer
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pix
    }
    /// Current session state
    pub fn session(&self) -> &Session {
        &self.session
    }
    /// Type of the active session, `Undefined` when idle
    pub fn primitive(&self) -> PrimitiveType {
        self.session.primitive()
    }
    /// Write the image to `filename`, format from the file extension
    pub fn save<P: AsRef<Path>>(&self, filename: P) -> Result<(), CanvasError> {
        self.pix.save(filename)
    }

    /// Start a session of `kind` primitives
    ///
    /// # Panics
    ///
    /// If a session is already active or `kind` is `Undefined`
    pub fn begin(&mut self, kind: PrimitiveType) {
        if let Err(err) = self.try_begin(kind) {
            panic!("{}", err);
        }
    }
    /// Start a session of `kind` primitives
    pub fn try_begin(&mut self, kind: PrimitiveType) -> Result<(), CanvasError> {
        self.session.begin(kind)?;
        log::debug!("begin {:?}", kind);
        Ok(())
    }
    /// Draw all primitives of the session and end it
    ///
    /// # Panics
    ///
    /// If no session is active or the session is incomplete or invalid;
    ///   see [`try_end`](#method.try_end)
    pub fn end(&mut self) {
        if let Err(err) = self.try_end() {
            panic!("{}", err);
        }
    }
    /// Draw all primitives of the session and end it
    ///
    /// The session is validated before anything is drawn, an error leaves
    ///   the pixels untouched. The session is reset in either case.
    pub fn try_end(&mut self) -> Result<(), CanvasError> {
        let kind = self.session.primitive();
        let prims = self.session.drain()?;
        log::debug!("end {:?}, {} primitives", kind, prims.len());
        for p in prims {
            self.draw(p)?;
        }
        Ok(())
    }

    fn draw(&mut self, p: Primitive) -> Result<(), CanvasError> {
        log::trace!("draw {:?}", p);
        let mut ras = Rasterizer::new(&mut self.pix, &mut self.diagnostics);
        let ring = match p {
            Primitive::Point(p) => {
                ras.plot(p.x, p.y, p.color);
                return Ok(());
            }
            Primitive::Line(a, b) => {
                ras.line(a, b);
                return Ok(());
            }
            Primitive::Triangle(a, b, c, fill) => {
                ras.triangle(a, b, c, fill);
                return Ok(());
            }
            Primitive::Polygon { center, orientation, sides, fill } =>
                ras.polygon(center, orientation, sides, fill)?,
            Primitive::Circle { center, radius, fill } =>
                ras.circle(center, radius, fill)?,
            Primitive::Sector { center, orientation, angle } =>
                ras.sector(center, orientation, angle)?,
        };
        self.polygon_vertices.extend(ring);
        Ok(())
    }

    /// Add a vertex at column `x`, row `y` in the current color
    pub fn vertex(&mut self, x: i64, y: i64) {
        let c = self.session.color();
        self.session.push_vertex(Point::new(x, y, c));
    }
    /// Add a vertex with its own color
    pub fn vertex_point(&mut self, p: Point) {
        self.session.push_vertex(p);
    }
    /// Add a center at column `x`, row `y` in the current color
    pub fn center(&mut self, x: i64, y: i64) {
        let c = self.session.color();
        self.session.push_center(Point::new(x, y, c));
    }
    /// Add a center with its own color
    pub fn center_point(&mut self, p: Point) {
        self.session.push_center(p);
    }
    /// Add an orientation vector (`x`,`y`) for a polygon or sector
    pub fn orientation(&mut self, x: i64, y: i64) {
        self.session.push_orientation(Point::xy(x, y));
    }
    /// Add the number of sides of a polygon
    pub fn side(&mut self, n: i64) {
        self.session.push_side(n);
    }
    /// Add the radius of a circle
    pub fn radius(&mut self, r: i64) {
        self.session.push_radius(r);
    }
    /// Add the angle of a sector in radians
    pub fn angle(&mut self, theta: f64) {
        self.session.push_angle(theta);
    }
    /// Set the current color
    pub fn color(&mut self, r: u8, g: u8, b: u8) {
        self.session.set_color(Rgb8::new(r, g, b));
    }

    /// Fill the canvas with `color`
    pub fn background(&mut self, color: Rgb8) {
        self.pix.fill(color);
    }
    /// Fill the canvas by blending the colors of the four corners
    ///
    /// The canvas is split along the diagonal from the top left to the
    ///   bottom right corner and each half is drawn as a triangle, so
    ///   colors blend barycentrically, not bilinearly. The top and left
    ///   borders face the edge ownership probe and belong to neither
    ///   triangle, they are drawn as lines between their corners.
    ///
    ///     use agl::{Canvas,Rgb8};
    ///     let mut canvas = Canvas::new(2, 2);
    ///     let (tl, tr) = (Rgb8::new(255,0,0), Rgb8::new(0,255,0));
    ///     let (bl, br) = (Rgb8::new(0,0,255), Rgb8::new(9,9,9));
    ///     canvas.background_corners(tl, tr, bl, br);
    ///     assert_eq!(canvas.pixel_color(0,0), tl);
    ///     assert_eq!(canvas.pixel_color(0,1), tr);
    ///     assert_eq!(canvas.pixel_color(1,0), bl);
    ///     assert_eq!(canvas.pixel_color(1,1), br);
    ///
    pub fn background_corners(&mut self, tl: Rgb8, tr: Rgb8, bl: Rgb8, br: Rgb8) {
        let (w, h) = (self.width() as i64, self.height() as i64);
        let tl = Point::new(0, 0, tl);
        let tr = Point::new(w - 1, 0, tr);
        let bl = Point::new(0, h - 1, bl);
        let br = Point::new(w - 1, h - 1, br);
        let mut ras = Rasterizer::new(&mut self.pix, &mut self.diagnostics);
        ras.triangle(tl, bl, br, Fill::Solid);
        ras.triangle(tl, tr, br, Fill::Solid);
        if w > 1 {
            ras.line(tl, tr);
        }
        if h > 1 {
            ras.line(tl, bl);
        }
    }

    /// Draw a line from `a` to `b` immediately, outside of any session
    pub fn line(&mut self, a: Point, b: Point) {
        Rasterizer::new(&mut self.pix, &mut self.diagnostics).line(a, b);
    }
    /// Draw a triangle immediately, outside of any session
    pub fn triangle(&mut self, a: Point, b: Point, c: Point, filled: bool) {
        Rasterizer::new(&mut self.pix, &mut self.diagnostics).triangle(a, b, c, Fill::from(filled));
    }

    /// Mid point of `a` and `b`, see [`geometry::mid_point`](../geometry/fn.mid_point.html)
    pub fn mid_point(&self, a: &Point, b: &Point) -> Point {
        geometry::mid_point(a, b)
    }
    /// Vector from `p1` to `p2`
    pub fn directional_vector(&self, p1: &Point, p2: &Point) -> Point {
        geometry::directional_vector(p1, p2)
    }
    /// Color of the pixel at `row`, `col`
    ///
    /// # Panics
    ///
    /// If the location is outside of the canvas
    pub fn pixel_color(&self, row: usize, col: usize) -> Rgb8 {
        self.pix.get(row, col)
    }

    /// Record the vertices of a regular polygon without drawing it
    ///
    /// Vertices are appended to [`polygon_vertices`](#method.polygon_vertices)
    ///
    /// # Panics
    ///
    /// If `n` is not positive
    pub fn polygon(&mut self, center: Point, v: Point, n: i64) {
        if let Err(err) = self.try_polygon(center, v, n) {
            panic!("{}", err);
        }
    }
    /// Record the vertices of a regular polygon without drawing it
    pub fn try_polygon(&mut self, center: Point, v: Point, n: i64) -> Result<(), CanvasError> {
        let ring = shape::ring(&center, &v, n)?;
        self.polygon_vertices.extend(ring);
        Ok(())
    }
    /// Ring vertices recorded by polygons, circles and sectors
    ///
    /// Kept until [`clear_polygon_vertices`](#method.clear_polygon_vertices)
    pub fn polygon_vertices(&self) -> &[Point] {
        &self.polygon_vertices
    }
    /// Forget the recorded ring vertices
    pub fn clear_polygon_vertices(&mut self) {
        self.polygon_vertices.clear();
    }
    /// Diagnostics collected while drawing
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
    /// Take the collected diagnostics, leaving none
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::replace(&mut self.diagnostics, vec![])
    }
}
