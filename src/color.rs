//! Colors

use crate::math::lerp_floor;

/// Color as Red, Green, Blue
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Rgb8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb8 {
    /// White Color (255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255)
    }
    /// Black Color (0,0,0)
    pub fn black() -> Self {
        Self::new(0,0,0)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    /// Gray scale color with all components equal to `g`
    pub fn gray(g: u8) -> Self {
        Self::new(g,g,g)
    }
    /// Interpolate between `self` and `other` at `t`, flooring each component
    ///
    /// `t = 0` is `self` and `t = 1` is `other`
    ///
    ///     use agl::Rgb8;
    ///     let c = Rgb8::black().lerp(Rgb8::white(), 0.5);
    ///     assert_eq!(c, Rgb8::gray(127));
    ///
    pub fn lerp(self, other: Rgb8, t: f64) -> Rgb8 {
        Rgb8::new(lerp_floor(self.r, other.r, t),
                  lerp_floor(self.g, other.g, t),
                  lerp_floor(self.b, other.b, t))
    }
    /// Components as an array, `[r, g, b]`
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8;3]> for Rgb8 {
    fn from(c: [u8;3]) -> Rgb8 {
        Rgb8::new( c[0], c[1], c[2] )
    }
}
impl From<(u8,u8,u8)> for Rgb8 {
    fn from(c: (u8,u8,u8)) -> Rgb8 {
        Rgb8::new( c.0, c.1, c.2 )
    }
}
