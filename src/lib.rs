//! Immediate-mode 2D software rasterizer
//!
//! How does this work
//!
//! ```text
//! canvas.begin(type)
//!   color, vertex, center, orientation, side, radius, angle ...
//! canvas.end()
//!   session.drain()        -- validate all batches, reset the session
//!   for each primitive
//!     Rasterizer
//!       line()             -- Bresenham, color interpolated
//!       triangle()         -- barycentric, edge ownership tie-break
//!       polygon()          -- triangle fan around the center
//!       circle()
//!       sector()
//!         put()            -- bounds check, skip if outside
//! canvas.save("image.ppm")
//! ```
//!
//! A small example
//!
//!     use agl::{Canvas,PrimitiveType,Rgb8};
//!
//!     let mut canvas = Canvas::new(64, 64);
//!     canvas.background(Rgb8::white());
//!     canvas.begin(PrimitiveType::Triangles);
//!     canvas.color(255,0,0);
//!     canvas.vertex(32, 4);
//!     canvas.color(0,255,0);
//!     canvas.vertex(4, 60);
//!     canvas.color(0,0,255);
//!     canvas.vertex(60, 60);
//!     canvas.end();
//!
//!     let top = canvas.pixel_color(10, 32);
//!     assert!(top.r > top.g && top.r > top.b);
//!     assert_ne!(canvas.pixel_color(40, 32), Rgb8::white());
//!     assert_eq!(canvas.pixel_color(0, 0), Rgb8::white());
//!

pub mod color;
pub mod math;
pub mod geometry;
pub mod buffer;
pub mod ppm;
pub mod error;
pub mod raster;
pub mod line;
pub mod triangle;
pub mod shape;
pub mod session;
pub mod canvas;

pub use color::*;
pub use geometry::*;
pub use buffer::*;
pub use error::*;
pub use raster::*;
pub use session::*;
pub use canvas::*;

/// Access Pixel Colors
///
/// Rows run top to bottom, columns left to right. `get` and `set` panic
///   outside of the image, `put` skips those pixels.
pub trait Pixel {
    /// Width in pixels
    fn width(&self) -> usize;
    /// Height in pixels
    fn height(&self) -> usize;
    /// Color at `row`, `col`
    fn get(&self, row: usize, col: usize) -> Rgb8;
    /// Set the color at `row`, `col`
    fn set(&mut self, row: usize, col: usize, c: Rgb8);
    /// Set the color at column `x`, row `y` if within the image
    ///
    /// Returns true if the pixel was painted
    fn put(&mut self, x: i64, y: i64, c: Rgb8) -> bool {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return false;
        }
        self.set(y as usize, x as usize, c);
        true
    }
}
