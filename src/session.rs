//! Primitive Sessions
//!
//! A session collects attributes between `begin` and `end`:
//!
//! ```text
//! begin(type)
//!   color, vertex, center, orientation, side, radius, angle ...
//! end()
//! ```
//!
//! On `end` the buffers are drained in order, in batches set by the type:
//!
//! | Type                         | Primary   | Batch                        |
//! |------------------------------|-----------|------------------------------|
//! | Points                       | vertices  | 1 vertex                     |
//! | Lines                        | vertices  | 2 vertices                   |
//! | Triangles, OutlinedTriangles | vertices  | 3 vertices                   |
//! | Polygons, OutlinedPolygons   | centers   | center, orientation, side    |
//! | Circles, OutlinedCircles     | centers   | center, radius               |
//! | Sectors                      | centers   | center, orientation, angle   |
//!
//! Draining stops when the primary buffer is exhausted; unused secondary
//!   attributes are dropped. Afterwards every buffer is cleared and the
//!   type returns to `Undefined`, whether or not draining succeeded.

use crate::color::Rgb8;
use crate::error::CanvasError;
use crate::geometry::Point;
use crate::raster::Fill;
use crate::shape::{check_angle, check_radius, check_sides};

/// Kind of primitive drawn by a session
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum PrimitiveType {
    /// No session active
    Undefined,
    Points,
    Lines,
    Triangles,
    Polygons,
    Circles,
    Sectors,
    OutlinedTriangles,
    OutlinedPolygons,
    OutlinedCircles,
}

impl Default for PrimitiveType {
    fn default() -> PrimitiveType {
        PrimitiveType::Undefined
    }
}

impl PrimitiveType {
    /// Fill mode of the primitive
    pub fn fill(self) -> Fill {
        match self {
            PrimitiveType::OutlinedTriangles |
            PrimitiveType::OutlinedPolygons |
            PrimitiveType::OutlinedCircles => Fill::Outline,
            _ => Fill::Solid,
        }
    }
}

/// A single complete primitive drained from a Session
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum Primitive {
    Point(Point),
    Line(Point, Point),
    Triangle(Point, Point, Point, Fill),
    Polygon { center: Point, orientation: Point, sides: i64, fill: Fill },
    Circle { center: Point, radius: i64, fill: Fill },
    Sector { center: Point, orientation: Point, angle: f64 },
}

/// Attribute buffers and state of a primitive session
#[derive(Debug,Default)]
pub struct Session {
    kind: PrimitiveType,
    color: Rgb8,
    vertices: Vec<Point>,
    centers: Vec<Point>,
    orientations: Vec<Point>,
    sides: Vec<i64>,
    radii: Vec<i64>,
    angles: Vec<f64>,
}

fn missing(primitive: PrimitiveType, attribute: &'static str, required: usize, available: usize) -> CanvasError {
    CanvasError::MissingAttribute { primitive, attribute, required, available }
}

impl Session {
    /// Create a new idle Session painting in black
    pub fn new() -> Self {
        Self::default()
    }
    /// Type of the active session, `Undefined` if idle
    pub fn primitive(&self) -> PrimitiveType {
        self.kind
    }
    /// Check if a session is between `begin` and `end`
    pub fn is_recording(&self) -> bool {
        self.kind != PrimitiveType::Undefined
    }
    /// Check if all attribute buffers are empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.centers.is_empty() &&
            self.orientations.is_empty() && self.sides.is_empty() &&
            self.radii.is_empty() && self.angles.is_empty()
    }
    /// Start recording primitives of type `kind`
    pub fn begin(&mut self, kind: PrimitiveType) -> Result<(), CanvasError> {
        if kind == PrimitiveType::Undefined {
            return Err(CanvasError::ShapeNotSpecified);
        }
        if self.is_recording() {
            return Err(CanvasError::SessionActive { active: self.kind, requested: kind });
        }
        self.kind = kind;
        Ok(())
    }
    /// Current paint color
    pub fn color(&self) -> Rgb8 {
        self.color
    }
    /// Set the current paint color
    pub fn set_color(&mut self, c: Rgb8) {
        self.color = c;
    }
    pub fn push_vertex(&mut self, p: Point) {
        self.vertices.push(p);
    }
    pub fn push_center(&mut self, p: Point) {
        self.centers.push(p);
    }
    pub fn push_orientation(&mut self, v: Point) {
        self.orientations.push(v);
    }
    pub fn push_side(&mut self, n: i64) {
        self.sides.push(n);
    }
    pub fn push_radius(&mut self, r: i64) {
        self.radii.push(r);
    }
    pub fn push_angle(&mut self, theta: f64) {
        self.angles.push(theta);
    }
    /// Clear all buffers and return to `Undefined`
    ///
    /// The paint color is kept
    pub fn reset(&mut self) {
        self.vertices.clear();
        self.centers.clear();
        self.orientations.clear();
        self.sides.clear();
        self.radii.clear();
        self.angles.clear();
        self.kind = PrimitiveType::Undefined;
    }
    /// End the session, returning its primitives in order
    ///
    /// All batches are validated before any is returned. The session is
    ///   reset in every case.
    pub fn drain(&mut self) -> Result<Vec<Primitive>, CanvasError> {
        let out = self.primitives();
        self.reset();
        out
    }

    fn primitives(&self) -> Result<Vec<Primitive>, CanvasError> {
        use PrimitiveType::*;
        let kind = self.kind;
        let fill = kind.fill();
        let out = match kind {
            Undefined => return Err(CanvasError::ShapeNotSpecified),
            Points => self.vertices.iter().map(|&p| Primitive::Point(p)).collect(),
            Lines => {
                self.check_vertices(2)?;
                self.vertices.chunks_exact(2)
                    .map(|v| Primitive::Line(v[0], v[1]))
                    .collect()
            }
            Triangles | OutlinedTriangles => {
                self.check_vertices(3)?;
                self.vertices.chunks_exact(3)
                    .map(|v| Primitive::Triangle(v[0], v[1], v[2], fill))
                    .collect()
            }
            Polygons | OutlinedPolygons => {
                self.check_centers("orientations", self.orientations.len())?;
                self.check_centers("sides", self.sides.len())?;
                let mut out = Vec::with_capacity(self.centers.len());
                for (i, &center) in self.centers.iter().enumerate() {
                    let sides = self.sides[i];
                    check_sides(sides)?;
                    out.push(Primitive::Polygon { center, orientation: self.orientations[i], sides, fill });
                }
                out
            }
            Circles | OutlinedCircles => {
                self.check_centers("radii", self.radii.len())?;
                let mut out = Vec::with_capacity(self.centers.len());
                for (&center, &radius) in self.centers.iter().zip(self.radii.iter()) {
                    check_radius(radius)?;
                    out.push(Primitive::Circle { center, radius, fill });
                }
                out
            }
            Sectors => {
                self.check_centers("orientations", self.orientations.len())?;
                self.check_centers("angles", self.angles.len())?;
                let mut out = Vec::with_capacity(self.centers.len());
                for (i, &center) in self.centers.iter().enumerate() {
                    let angle = check_angle(self.angles[i])?;
                    out.push(Primitive::Sector { center, orientation: self.orientations[i], angle });
                }
                out
            }
        };
        Ok(out)
    }

    /// Vertices must come in complete batches of `n`
    fn check_vertices(&self, n: usize) -> Result<(), CanvasError> {
        let len = self.vertices.len();
        if len % n != 0 {
            let required = (len / n + 1) * n;
            return Err(missing(self.kind, "vertices", required, len));
        }
        Ok(())
    }
    /// Each center needs one entry of a secondary attribute
    fn check_centers(&self, attribute: &'static str, available: usize) -> Result<(), CanvasError> {
        if available < self.centers.len() {
            return Err(missing(self.kind, attribute, self.centers.len(), available));
        }
        Ok(())
    }
}
