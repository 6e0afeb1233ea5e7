//! Software 2D rasterizer
//!
//! Points, lines, polygons and circles are converted into pixels of an
//! in-memory RGBA [Framebuffer] without any help from a GPU.
//!
//! # How does this work
//!
//! ```text
//! ras = Rasterizer::new(w, h)
//! ras.set_*(...)                     -- colors, modes, clip rectangle
//! ras.draw_line(v1, v2, thickness)
//!   clip.clip_line()                 -- Cohen-Sutherland, colors re-lerped
//!   raster_line()
//!     Octant::classify()             -- one transform per line
//!     Bresenham                      -- integer walk in octant 1
//!       plot()                       -- scissor, blend, write
//!       record()                     -- scanline crossings (Polygon mode)
//! ras.scanline_fill_polygon(vertices)
//!   scanlines.clear()
//!   outline()                        -- populates the scanline table
//!   scanlines.spans(rule)            -- sort rows, pair crossings
//!   raster_line() per span
//! ```
//!
//! A small example, drawing and filling a triangle:
//!
//!     use tinyraster::{Rasterizer, Rgba, Vertex2D};
//!
//!     let mut ras = Rasterizer::new(32, 32);
//!     ras.clear(Rgba::black());
//!     let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
//!     let tri = [Vertex2D::new(0.0, 0.0, red),
//!                Vertex2D::new(10.0, 0.0, red),
//!                Vertex2D::new(5.0, 10.0, red)];
//!     ras.scanline_fill_polygon(&tri);
//!     assert_eq!(ras.framebuffer().pixel(5, 3), Some(red));
//!
//! [Framebuffer]: buffer/struct.Framebuffer.html

pub mod error;
pub mod color;
pub mod buffer;
pub mod geometry;
pub mod clip;
pub mod octant;
pub mod scan;
pub mod raster;
pub mod io;

pub use crate::error::*;
pub use crate::color::*;
pub use crate::buffer::*;
pub use crate::geometry::*;
pub use crate::clip::*;
pub use crate::octant::*;
pub use crate::scan::*;
pub use crate::raster::*;

/// Access to the color components of a pixel
///
/// Components are reported both as `f64` values in [0,1] and as bytes
pub trait Color: std::fmt::Debug + Copy {
    /// Red component [0,1]
    fn red(&self) -> f64;
    /// Green component [0,1]
    fn green(&self) -> f64;
    /// Blue component [0,1]
    fn blue(&self) -> f64;
    /// Alpha component [0,1]
    fn alpha(&self) -> f64;
    /// Red component [0,255]
    fn red8(&self) -> u8;
    /// Green component [0,255]
    fn green8(&self) -> u8;
    /// Blue component [0,255]
    fn blue8(&self) -> u8;
    /// Alpha component [0,255]
    fn alpha8(&self) -> u8;
}
