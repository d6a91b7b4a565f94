//! Errors and Diagnostics

use crate::geometry::Point;
use crate::session::PrimitiveType;

use thiserror::Error;

/// Failures reported by a Canvas
///
/// All variants except [`CanvasError::Image`] are broken usage contracts,
///   a client bug rather than a runtime condition. [`Canvas::end`] and
///   [`Canvas::begin`] panic on them, [`Canvas::try_end`] and
///   [`Canvas::try_begin`] return them.
///
/// [`Canvas::end`]: ../canvas/struct.Canvas.html#method.end
/// [`Canvas::begin`]: ../canvas/struct.Canvas.html#method.begin
/// [`Canvas::try_end`]: ../canvas/struct.Canvas.html#method.try_end
/// [`Canvas::try_begin`]: ../canvas/struct.Canvas.html#method.try_begin
#[derive(Debug, Error)]
pub enum CanvasError {
    /// `end` without an active primitive, or `begin(Undefined)`
    #[error("the shape is not specified for the drawing")]
    ShapeNotSpecified,
    /// `begin` called before the previous session ended
    #[error("begin({requested:?}) called while a {active:?} session is recording")]
    SessionActive {
        active: PrimitiveType,
        requested: PrimitiveType,
    },
    /// Not enough buffered attributes to complete a primitive
    #[error("{primitive:?} requires {required} {attribute}, {available} given")]
    MissingAttribute {
        primitive: PrimitiveType,
        attribute: &'static str,
        required: usize,
        available: usize,
    },
    /// Polygon with a non-positive number of sides
    #[error("the number of sides must be positive, got {0}")]
    InvalidSides(i64),
    /// Circle with a non-positive radius
    #[error("the radius must be positive, got {0}")]
    InvalidRadius(i64),
    /// Sector angle outside of (0, 2π]
    #[error("the sector angle must be in (0, 2π], got {0}")]
    InvalidAngle(f64),
    /// Image encoding or file failure
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Recoverable conditions detected while drawing
///
/// Drawing continues with a fallback; diagnostics are collected on the
///   Canvas and also sent to the log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Diagnostic {
    /// Three collinear points given as a triangle; the line segment
    ///   `from`-`to` containing all three was drawn instead
    Collinear { from: Point, to: Point },
    /// A line with equal end points; a single pixel was drawn in the
    ///   color of the latter
    ZeroLengthLine { at: Point },
}
