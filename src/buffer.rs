//! Framebuffer

use crate::color::{Rgba, Rgba8};
use crate::Color;

use std::ops::Index;
use std::ops::IndexMut;
use std::path::Path;

/// Framebuffer
///
/// Pixels are stored in row-major order, `y * width + x`, with row 0 at the
/// bottom of the image
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Framebuffer {
    /// Pixel data
    data: Vec<Rgba>,
    /// Image Width in pixels
    width: usize,
    /// Image Height in pixels
    height: usize,
}

impl Framebuffer {
    /// Create a new framebuffer of width * height pixels
    ///
    /// All pixels start out as transparent black
    pub fn new(width: usize, height: usize) -> Self {
        Framebuffer {
            width, height, data: vec![Rgba::default(); width * height]
        }
    }
    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }
    /// Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }
    /// Number of pixels, width * height
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// All pixels, row-major from the bottom row
    pub fn pixels(&self) -> &[Rgba] {
        &self.data
    }
    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }
    /// Color of the pixel at (`x`,`y`), `None` outside the framebuffer
    ///
    ///     use tinyraster::{Framebuffer, Rgba};
    ///     let mut fb = Framebuffer::new(2, 2);
    ///     fb.copy_pixel(1, 0, Rgba::white());
    ///     assert_eq!(fb.pixel(1, 0), Some(Rgba::white()));
    ///     assert_eq!(fb.pixel(2, 0), None);
    ///
    pub fn pixel(&self, x: i64, y: i64) -> Option<Rgba> {
        self.offset(x, y).map(|i| self.data[i])
    }
    /// Copies the color `c` to the pixel at (`x`,`y`)
    ///
    /// Locations outside of the framebuffer are ignored
    pub fn copy_pixel(&mut self, x: i64, y: i64, c: Rgba) {
        if let Some(i) = self.offset(x, y) {
            self.data[i] = c;
        }
    }
    /// Set every pixel to `c`
    pub fn fill(&mut self, c: Rgba) {
        self.data.iter_mut().for_each(|p| *p = c);
    }
    /// Pixels as RGBA bytes, top row first
    ///
    /// This is the layout image files and most display surfaces expect
    pub fn to_rgba8_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len() * 4);
        if self.width == 0 {
            return out;
        }
        for row in self.data.chunks(self.width).rev() {
            for p in row {
                let c = Rgba8::from_trait(*p);
                out.extend_from_slice(&[c.r, c.g, c.b, c.a]);
            }
        }
        out
    }
    /// Write the framebuffer to an image file, format chosen by extension
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> crate::Result<()> {
        crate::io::write_file(self, filename)
    }
}

impl Index<(usize,usize)> for Framebuffer {
    type Output = Rgba;
    fn index(&self, index: (usize, usize)) -> &Rgba {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        &self.data[index.1 * self.width + index.0]
    }
}
impl IndexMut<(usize,usize)> for Framebuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Rgba {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        &mut self.data[index.1 * self.width + index.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_are_flipped_top_down() {
        let mut fb = Framebuffer::new(1, 2);
        fb[(0,0)] = Rgba::white();
        let bytes = fb.to_rgba8_bytes();
        // bottom row is written last
        assert_eq!(&bytes[..4], &[0, 0, 0, 0]);
        assert_eq!(&bytes[4..], &[255, 255, 255, 255]);
    }
    #[test]
    fn writes_outside_are_dropped() {
        let mut fb = Framebuffer::new(3, 3);
        fb.copy_pixel(-1, 0, Rgba::white());
        fb.copy_pixel(0, 3, Rgba::white());
        assert!(fb.pixels().iter().all(|p| *p == Rgba::default()));
    }
}
