//! Pixel buffer

use crate::color::Rgb8;
use crate::error::CanvasError;
use crate::ppm;
use crate::Pixel;

use std::path::Path;

/// Bytes per pixel, Red, Green and Blue
const BPP: usize = 3;

/// Pixel Buffer of Rgb8 colors
///
/// Data is stored as row-major order (C-format), three components per pixel.
/// New buffers are black.
///
///     use agl::{PixelBuffer,Pixel,Rgb8};
///     let mut pix = PixelBuffer::new(4, 2);
///     pix.set(1, 3, Rgb8::white());
///     assert_eq!(pix.get(1, 3), Rgb8::white());
///     assert_eq!(pix.get(0, 0), Rgb8::black());
///
#[derive(Debug,Clone,PartialEq)]
pub struct PixelBuffer {
    /// Pixel / Component level data of Image
    data: Vec<u8>,
    /// Image Width in pixels
    width: usize,
    /// Image Height in pixels
    height: usize,
}

impl PixelBuffer {
    /// Create a new buffer of width and height
    ///
    /// Data for the Image is allocated
    pub fn new(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            panic!("Cannot create pixel buffer with 0 width or height");
        }
        PixelBuffer { width, height, data: vec![0u8; width * height * BPP] }
    }
    /// Raw component data, `[r,g,b,r,g,b,...]`
    pub fn data(&self) -> &[u8] {
        &self.data
    }
    /// Size of underlying data in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Rgb8) {
        let c = color.to_array();
        self.data.chunks_exact_mut(BPP).for_each(|p| p.copy_from_slice(&c));
    }
    /// Write the image to `filename`
    ///
    /// Format is chosen from the file extension, e.g. `.ppm` or `.png`
    pub fn save<P: AsRef<Path>>(&self, filename: P) -> Result<(), CanvasError> {
        ppm::write_file(&self.data, self.width, self.height, filename)?;
        Ok(())
    }
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(col < self.width, "request {} >= {} width :: col", col, self.width);
        assert!(row < self.height, "request {} >= {} height :: row", row, self.height);
        (row * self.width + col) * BPP
    }
}

impl Pixel for PixelBuffer {
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn get(&self, row: usize, col: usize) -> Rgb8 {
        let i = self.offset(row, col);
        Rgb8::new(self.data[i], self.data[i+1], self.data[i+2])
    }
    fn set(&mut self, row: usize, col: usize, c: Rgb8) {
        let i = self.offset(row, col);
        self.data[i..i+BPP].copy_from_slice(&c.to_array());
    }
}

#[cfg(test)]
mod tests {
    use crate::{PixelBuffer, Pixel, Rgb8};

    #[test]
    fn pixel_buffer_test() {
        let mut p = PixelBuffer::new(10, 5);
        assert_eq!(p.len(), 150);
        assert_eq!(p.width(), 10);
        assert_eq!(p.height(), 5);

        p.set(4, 9, Rgb8::new(1,2,3));
        assert_eq!(p.get(4, 9), Rgb8::new(1,2,3));
        assert_eq!(&p.data()[147..150], &[1,2,3]);

        p.fill(Rgb8::white());
        for row in 0 .. 5 {
            for col in 0 .. 10 {
                assert_eq!(p.get(row, col), Rgb8::white());
            }
        }
    }
    #[test]
    fn put_clips() {
        let mut p = PixelBuffer::new(3, 3);
        let red = Rgb8::new(255,0,0);
        assert!(p.put(2, 1, red));
        assert_eq!(p.get(1, 2), red);
        assert!(!p.put(-1, 0, red));
        assert!(!p.put(0, 3, red));
        assert!(!p.put(3, 0, red));
        let n = p.data().iter().filter(|&&v| v != 0).count();
        assert_eq!(n, 1);
    }
    #[test]
    #[should_panic]
    fn get_out_of_range() {
        let p = PixelBuffer::new(3, 3);
        p.get(3, 0);
    }
}
