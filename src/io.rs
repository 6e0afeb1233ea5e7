//! Reading and writing of image files
//!
//! Framebuffers are written top row first, the way image viewers expect,
//! using the [image](https://docs.rs/image) crate. The format is chosen by
//! the file extension.
use crate::buffer::Framebuffer;
use crate::Result;

use std::path::Path;

/// Write the framebuffer as an RGBA image
pub fn write_file<P: AsRef<Path>>(fb: &Framebuffer, filename: P) -> Result<()> {
    let buf = fb.to_rgba8_bytes();
    image::save_buffer(filename, &buf, fb.width() as u32, fb.height() as u32, image::RGBA(8))?;
    Ok(())
}

/// Read an image as RGBA bytes, top row first, with its width and height
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize)> {
    let img = image::open(filename)?.to_rgba();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}

/// Compare two image files pixel by pixel
///
/// Differences are logged at debug level
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        log::debug!("img_diff: sizes differ {}x{} {}x{}", w1, h1, w2, h2);
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            log::debug!("img_diff: {} [{},{},{}]: {} {}", i, (i/4)%w1, (i/4)/w1, i%4, v1, v2);
            flag = false;
        }
    }
    Ok(flag)
}
