//! Colors

use crate::Color;

/// Convert an f64 [0,1] component to a u8 [0,255] component
///
/// Values outside of [0,1] are clamped
pub fn cu8(v: f64) -> u8 {
    (v.max(0.0).min(1.0) * 255.0).round() as u8
}

fn color_u8_to_f64(x: u8) -> f64 {
    f64::from(x) / 255.0
}

/// Color as Red, Green, Blue, and Alpha, each an f32 in [0,1]
///
/// This is the pixel type of the [Framebuffer](../buffer/struct.Framebuffer.html)
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rgba {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

impl Rgba {
    /// Create new color
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Rgba { r, g, b, a }
    }
    /// White Color (1,1,1,1)
    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }
    /// Black Color (0,0,0,1)
    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
    /// Linear interpolation towards `other`
    ///
    /// All four components are interpolated: `self + t * (other - self)`
    ///
    ///     use tinyraster::Rgba;
    ///     let red  = Rgba::new(1.0, 0.0, 0.0, 1.0);
    ///     let blue = Rgba::new(0.0, 0.0, 1.0, 1.0);
    ///     assert_eq!(red.lerp(&blue, 0.5), Rgba::new(0.5, 0.0, 0.5, 1.0));
    ///
    pub fn lerp(&self, other: &Rgba, t: f32) -> Rgba {
        Rgba::new(self.r + t * (other.r - self.r),
                  self.g + t * (other.g - self.g),
                  self.b + t * (other.b - self.b),
                  self.a + t * (other.a - self.a))
    }
    /// Paint this color over `old` using this color's alpha
    ///
    /// out = alpha * new + (1 - alpha) * old
    ///
    /// The alpha channel is blended the same way as the color channels
    ///
    /// See [Alpha Compositing](https://en.wikipedia.org/wiki/Alpha_compositing)
    pub fn blend_over(&self, old: &Rgba) -> Rgba {
        let a = self.a;
        let mix = |new: f32, old: f32| a * new + (1.0 - a) * old;
        Rgba::new(mix(self.r, old.r),
                  mix(self.g, old.g),
                  mix(self.b, old.b),
                  mix(self.a, old.a))
    }
}

impl Color for Rgba {
    fn   red(&self) -> f64 { f64::from(self.r) }
    fn green(&self) -> f64 { f64::from(self.g) }
    fn  blue(&self) -> f64 { f64::from(self.b) }
    fn alpha(&self) -> f64 { f64::from(self.a) }
    fn   red8(&self) -> u8 { cu8(self.red()) }
    fn green8(&self) -> u8 { cu8(self.green()) }
    fn  blue8(&self) -> u8 { cu8(self.blue()) }
    fn alpha8(&self) -> u8 { cu8(self.alpha()) }
}

/// Color as Red, Green, Blue, and Alpha bytes
///
/// Used when pixels leave the rasterizer, e.g. written to an image file
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgba8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba8 {
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }
    /// Convert from any other [Color](../trait.Color.html)
    pub fn from_trait<C: Color>(c: C) -> Self {
        Self::new(c.red8(), c.green8(), c.blue8(), c.alpha8())
    }
}

impl Color for Rgba8 {
    fn   red(&self) -> f64 { color_u8_to_f64(self.r) }
    fn green(&self) -> f64 { color_u8_to_f64(self.g) }
    fn  blue(&self) -> f64 { color_u8_to_f64(self.b) }
    fn alpha(&self) -> f64 { color_u8_to_f64(self.a) }
    fn   red8(&self) -> u8 { self.r }
    fn green8(&self) -> u8 { self.g }
    fn  blue8(&self) -> u8 { self.b }
    fn alpha8(&self) -> u8 { self.a }
}

impl From<Rgba> for Rgba8 {
    fn from(c: Rgba) -> Rgba8 {
        Rgba8::from_trait(c)
    }
}
impl From<Rgba8> for Rgba {
    fn from(c: Rgba8) -> Rgba {
        Rgba::new(c.red() as f32, c.green() as f32, c.blue() as f32, c.alpha() as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_half_red_over_white() {
        let red = Rgba::new(1.0, 0.0, 0.0, 0.5);
        let out = red.blend_over(&Rgba::white());
        assert_eq!(out, Rgba::new(1.0, 0.5, 0.5, 0.75));
    }
    #[test]
    fn opaque_blend_replaces() {
        let c = Rgba::new(0.2, 0.4, 0.6, 1.0);
        assert_eq!(c.blend_over(&Rgba::black()), c);
    }
    #[test]
    fn byte_conversion_clamps() {
        let c = Rgba8::from(Rgba::new(1.5, -0.5, 0.5, 1.0));
        assert_eq!(c, Rgba8::new(255, 0, 128, 255));
    }
}
