//! Reading and Writing of PPM (Portable Pixmap Format) and other image files
//!
//! See <https://en.wikipedia.org/wiki/Netpbm_format#PPM_example>
//!
//! The format is taken from the file extension; `.ppm` and `.png` are
//!   supported.
//!
use std::path::Path;

/// Read an image as RGB data, returning `(data, width, height)`
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize),image::ImageError> {
    let img = image::open(filename)?.to_rgb8();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}

/// Write RGB data of `width` x `height` to `filename`
pub fn write_file<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize, filename: P) -> Result<(), image::ImageError> {
    log::debug!("write {}x{} image to {}", width, height, filename.as_ref().display());
    image::save_buffer(filename, buf, width as u32, height as u32, image::ExtendedColorType::Rgb8)
}

/// Compare two image files pixel by pixel
///
/// Differing components are reported through the log at `info` level
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool,image::ImageError> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        log::info!("image sizes differ: {}x{} {}x{}", w1, h1, w2, h2);
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            log::info!("{} [{},{},{}]: {} {}", i, (i/3)%w1,(i/3)/w1,i%3, v1,v2);
            flag = false;
        }
    }
    Ok(flag)
}
