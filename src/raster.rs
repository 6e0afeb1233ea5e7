//! Rasterizer
//!
//! Owns the framebuffer and the scanline table, holds the drawing state and
//! implements every drawing operation on top of a single line routine.

use crate::buffer::Framebuffer;
use crate::clip::ClipRect;
use crate::color::Rgba;
use crate::geometry::{Circle2D, Point, Vertex2D};
use crate::octant::Bresenham;
use crate::scan::{FillRule, ScanlineEntry, ScanlineTable};

use log::{debug, trace};

/// What a drawing call produces
#[derive(Debug,PartialEq,Eq,Copy,Clone)]
pub enum GeometryMode {
    /// Bare strokes
    Line,
    /// Polygon edges, crossings are recorded in the scanline table
    Polygon,
}
impl Default for GeometryMode {
    fn default() -> GeometryMode {
        GeometryMode::Line
    }
}

/// How pixels of a line are colored
#[derive(Debug,PartialEq,Eq,Copy,Clone)]
pub enum FillMode {
    Unfilled,
    /// Constant color, taken from the vertex the traversal starts at
    SolidFilled,
    /// Linear interpolation between the vertex colors
    InterpolatedFilled,
}
impl Default for FillMode {
    fn default() -> FillMode {
        FillMode::Unfilled
    }
}

#[derive(Debug,PartialEq,Eq,Copy,Clone)]
pub enum BlendMode {
    NoBlend,
    /// Paint over existing pixels, only while in Polygon geometry mode
    AlphaBlend,
}
impl Default for BlendMode {
    fn default() -> BlendMode {
        BlendMode::NoBlend
    }
}

/// Drawing state read by every drawing call
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct RasterState {
    pub fg_color: Rgba,
    pub bg_color: Rgba,
    pub geometry: GeometryMode,
    pub fill: FillMode,
    pub blend: BlendMode,
    pub fill_rule: FillRule,
    pub clip: ClipRect,
}

impl RasterState {
    /// Default state for a `width` x `height` framebuffer
    ///
    /// White foreground, black background, Line geometry, Unfilled,
    ///   no blending, even-odd filling, clip rectangle covering everything
    pub fn new(width: usize, height: usize) -> Self {
        RasterState {
            fg_color: Rgba::white(),
            bg_color: Rgba::black(),
            geometry: GeometryMode::default(),
            fill: FillMode::default(),
            blend: BlendMode::default(),
            fill_rule: FillRule::default(),
            clip: ClipRect::new(0.0, width as f64, 0.0, height as f64),
        }
    }
}

/// Pixel coordinates are kept within +/- 2^28 so that line deltas and
///   their products fit in an i64
const COORD_LIMIT : f64 = 268_435_456.0;

/// Pixel containing the point `p`
fn pixel_of(p: &Point) -> (i64, i64) {
    let c = |v: f64| v.floor().max(-COORD_LIMIT).min(COORD_LIMIT) as i64;
    (c(p.x), c(p.y))
}

/// Color of the pixels of one line
struct Shade {
    interpolate: bool,
    solid: Rgba,
    c1: Rgba,
    c2: Rgba,
    origin: Point,
    length: f64,
}

impl Shade {
    fn new(v1: &Vertex2D, v2: &Vertex2D, p1: (i64, i64), p2: (i64, i64), fill: FillMode) -> Self {
        let steep = (p2.1 - p1.1).abs() > (p2.0 - p1.0).abs();
        // Second color only for lines running towards -x, steep lines
        //   running up excepted
        let solid = if p2.0 < p1.0 && ! (steep && p1.1 < p2.1) { v2.color } else { v1.color };
        let origin = Point::new(p1.0 as f64, p1.1 as f64);
        Shade {
            interpolate: fill == FillMode::InterpolatedFilled,
            solid,
            c1: v1.color,
            c2: v2.color,
            origin,
            length: origin.distance(&Point::new(p2.0 as f64, p2.1 as f64)),
        }
    }
    /// Interpolation follows the caller's vertex order, not the traversal
    fn at(&self, x: i64, y: i64) -> Rgba {
        if ! self.interpolate {
            return self.solid;
        }
        let t = if self.length > 0.0 {
            (self.origin.distance(&Point::new(x as f64, y as f64)) / self.length).min(1.0)
        } else {
            0.0
        };
        self.c1.lerp(&self.c2, t as f32)
    }
}

/// Software Rasterizer
#[derive(Debug,Clone)]
pub struct Rasterizer {
    framebuffer: Framebuffer,
    scanlines: ScanlineTable,
    state: RasterState,
}

impl Rasterizer {
    /// Create a new rasterizer drawing into a `width` x `height` framebuffer
    pub fn new(width: usize, height: usize) -> Self {
        debug!("rasterizer: {}x{}", width, height);
        Rasterizer {
            framebuffer: Framebuffer::new(width, height),
            scanlines: ScanlineTable::new(height),
            state: RasterState::new(width, height),
        }
    }
    /// Reallocate the framebuffer and the scanline table
    ///
    /// Pixels are lost, the clip rectangle is reset to the new size; colors
    ///   and modes are kept
    pub fn resize(&mut self, width: usize, height: usize) {
        debug!("rasterizer: resize to {}x{}", width, height);
        self.framebuffer = Framebuffer::new(width, height);
        self.scanlines = ScanlineTable::new(height);
        self.state.clip = ClipRect::new(0.0, width as f64, 0.0, height as f64);
    }
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }
    /// Crossings recorded by the last polygon drawn in Polygon mode
    pub fn scanlines(&self) -> &ScanlineTable {
        &self.scanlines
    }
    pub fn state(&self) -> &RasterState {
        &self.state
    }
    pub fn set_state(&mut self, state: RasterState) {
        self.state = state;
    }
    /// Run `draw` with a temporarily modified state
    ///
    /// The state in effect before the call is restored afterwards
    ///
    ///     use tinyraster::{Rasterizer, FillMode};
    ///     let mut ras = Rasterizer::new(8, 8);
    ///     ras.with_state(|s| s.fill = FillMode::SolidFilled, |ras| {
    ///         assert_eq!(ras.fill_mode(), FillMode::SolidFilled);
    ///     });
    ///     assert_eq!(ras.fill_mode(), FillMode::Unfilled);
    ///
    pub fn with_state<S, F>(&mut self, setup: S, draw: F)
        where S: FnOnce(&mut RasterState),
              F: FnOnce(&mut Self)
    {
        let saved = self.state;
        setup(&mut self.state);
        draw(self);
        self.state = saved;
    }

    pub fn fg_color(&self) -> Rgba { self.state.fg_color }
    pub fn set_fg_color(&mut self, c: Rgba) { self.state.fg_color = c; }
    pub fn bg_color(&self) -> Rgba { self.state.bg_color }
    pub fn set_bg_color(&mut self, c: Rgba) { self.state.bg_color = c; }
    pub fn geometry_mode(&self) -> GeometryMode { self.state.geometry }
    pub fn set_geometry_mode(&mut self, mode: GeometryMode) { self.state.geometry = mode; }
    pub fn fill_mode(&self) -> FillMode { self.state.fill }
    pub fn set_fill_mode(&mut self, mode: FillMode) { self.state.fill = mode; }
    pub fn blend_mode(&self) -> BlendMode { self.state.blend }
    pub fn set_blend_mode(&mut self, mode: BlendMode) { self.state.blend = mode; }
    pub fn fill_rule(&self) -> FillRule { self.state.fill_rule }
    pub fn set_fill_rule(&mut self, rule: FillRule) { self.state.fill_rule = rule; }
    pub fn clip_rectangle(&self) -> ClipRect { self.state.clip }
    /// Define the clipping region
    ///
    /// Lines are clipped against it and no pixel outside of it is written
    pub fn set_clip_rectangle(&mut self, left: f64, right: f64, bottom: f64, top: f64) {
        self.state.clip = ClipRect::new(left, right, bottom, top);
    }

    /// Set the background color and fill every pixel with it
    pub fn clear(&mut self, color: Rgba) {
        self.state.bg_color = color;
        self.framebuffer.fill(color);
    }

    /// Write a single pixel, honoring the clip rectangle and blend mode
    fn plot(&mut self, x: i64, y: i64, color: Rgba) {
        if ! self.state.clip.contains(x, y) {
            return;
        }
        let color = if self.state.blend == BlendMode::AlphaBlend &&
            self.state.geometry == GeometryMode::Polygon {
                match self.framebuffer.pixel(x, y) {
                    Some(old) => color.blend_over(&old),
                    None => return,
                }
            } else {
                color
            };
        self.framebuffer.copy_pixel(x, y, color);
    }

    /// Append a crossing of row `y` for an edge spanning rows `ymin..=ymax`
    fn record(&mut self, entry: ScanlineEntry, y: i64, ymin: i64, ymax: i64, first: &mut bool) {
        match self.state.fill_rule {
            FillRule::EvenOdd => {
                // Half-open: [ymin, ymax), nothing for horizontal edges
                if ymin == ymax || y == ymax || y < 0 {
                    return;
                }
                self.scanlines.push(y as usize, entry);
            },
            FillRule::Compat => {
                let row = y.unsigned_abs() as usize;
                self.scanlines.push(row, entry);
                if *first {
                    self.scanlines.push(row, entry);
                    *first = false;
                }
            },
        }
    }

    /// Draw a point of `size` x `size` pixels in the foreground color
    pub fn draw_point(&mut self, pt: &Point, size: u32) {
        let (x, y) = pixel_of(pt);
        let color = self.state.fg_color;
        if size <= 1 {
            self.plot(x, y, color);
            return;
        }
        let size = i64::from(size);
        let lo = (size - 1) / 2;
        for j in 0 .. size {
            for i in 0 .. size {
                self.plot(x - lo + i, y - lo + j, color);
            }
        }
    }

    /// Draw a line from `v1` to `v2`, `thickness` pixels wide
    ///
    /// The line is clipped against the clip rectangle first. In Polygon
    ///   geometry mode the crossings are recorded in the scanline table.
    ///
    /// Extra pixels of thick lines are added along the minor axis, first on
    ///   the side the line moves towards: above a rising shallow line, below
    ///   a falling one.
    ///
    /// Unless interpolating, the line takes the color of `v1`, or of `v2`
    ///   when it runs towards -x and is not a steep line running up.
    pub fn draw_line(&mut self, v1: &Vertex2D, v2: &Vertex2D, thickness: u32) {
        let record = self.state.geometry == GeometryMode::Polygon;
        self.clipped_line(v1, v2, thickness, record);
    }

    fn clipped_line(&mut self, v1: &Vertex2D, v2: &Vertex2D, thickness: u32, record: bool) {
        let c = match self.state.clip.clip_line(v1.position, v2.position) {
            Some(c) => c,
            None => {
                trace!("line: {:?} -> {:?} outside clip rectangle", v1.position, v2.position);
                return;
            }
        };
        // Unclipped endpoints keep their exact colors
        let c1 = if c.t0 == 0.0 { v1.color } else { v1.color.lerp(&v2.color, c.t0 as f32) };
        let c2 = if c.t1 == 1.0 { v2.color } else { v1.color.lerp(&v2.color, c.t1 as f32) };
        self.raster_line(&Vertex2D::at(c.p1, c1), &Vertex2D::at(c.p2, c2), thickness, record);
    }

    /// Rasterize a line without clipping; pixels are still scissored
    ///
    /// Only the part of the line over the framebuffer is walked, and only
    ///   the first pixel of each table row is visited for recording, so
    ///   far away endpoints cost nothing
    fn raster_line(&mut self, v1: &Vertex2D, v2: &Vertex2D, thickness: u32, record: bool) {
        let p1 = pixel_of(&v1.position);
        let p2 = pixel_of(&v2.position);
        let line = Bresenham::new(p1, p2);
        let octant = line.octant();
        let shade = Shade::new(v1, v2, p1, p2, self.state.fill);

        let major = if octant.steep { self.framebuffer.height() } else { self.framebuffer.width() };
        for (x, y) in line.clone().window(0, major as i64 - 1) {
            let color = shade.at(x, y);
            self.plot(x, y, color);
            // Extra pixels alternate sides: +1, -1, +2, -2, ... mirrored
            //   when the minor coordinate decreases
            for k in 1 .. i64::from(thickness) {
                let side = if k % 2 == 1 { (k + 1) / 2 } else { -(k / 2) };
                let side = if octant.negate { -side } else { side };
                let (tx, ty) = octant.offset(x, y, side);
                self.plot(tx, ty, color);
            }
        }
        if ! record {
            return;
        }
        let last = self.scanlines.height() as i64 - 1;
        let lo = match self.state.fill_rule {
            FillRule::EvenOdd => 0,
            FillRule::Compat => -last,
        };
        let (ymin, ymax) = (p1.1.min(p2.1), p1.1.max(p2.1));
        let starts = line.row_starts(lo, last);
        let mut first = starts.first() == Some(&line.start());
        for (x, y) in starts {
            let color = shade.at(x, y);
            self.record(ScanlineEntry { x, color }, y, ymin, ymax, &mut first);
        }
    }

    /// Edges of a closed polygon
    ///
    /// In Polygon geometry mode edges are not clipped so every crossing
    ///   reaches the scanline table
    fn outline(&mut self, vertices: &[Vertex2D]) {
        let n = vertices.len();
        let polygon = self.state.geometry == GeometryMode::Polygon;
        for i in 0 .. n {
            let (a, b) = (&vertices[i], &vertices[(i + 1) % n]);
            if polygon {
                self.raster_line(a, b, 1, true);
            } else {
                self.clipped_line(a, b, 1, false);
            }
        }
    }

    /// Draw the outline of a closed polygon, vertex `i` to vertex `i+1`
    pub fn draw_unfilled_polygon(&mut self, vertices: &[Vertex2D]) {
        debug!("polygon: {} vertices, {:?}", vertices.len(), self.state.geometry);
        self.outline(vertices);
    }

    fn fill_polygon(&mut self, vertices: &[Vertex2D]) {
        self.scanlines.clear();
        self.outline(vertices);
        let crossings = self.scanlines.len();
        let spans = self.scanlines.spans(self.state.fill_rule, vertices.len());
        debug!("fill: {} vertices, {} crossings, {} spans, {:?} {:?}",
               vertices.len(), crossings, spans.len(),
               self.state.fill, self.state.fill_rule);
        for span in spans {
            let a = Vertex2D::new(span.start.x as f64, span.y as f64, span.start.color);
            let b = Vertex2D::new(span.end.x as f64, span.y as f64, span.end.color);
            trace!("span y {} x {} .. {}", span.y, span.start.x, span.end.x);
            self.clipped_line(&a, &b, 1, false);
        }
    }

    /// Fill a polygon with solid colors
    ///
    /// Geometry mode is Polygon and fill mode SolidFilled for the duration
    ///   of the call
    pub fn scanline_fill_polygon(&mut self, vertices: &[Vertex2D]) {
        self.with_state(|s| {
            s.geometry = GeometryMode::Polygon;
            s.fill = FillMode::SolidFilled;
        }, |ras| ras.fill_polygon(vertices));
    }

    /// Fill a polygon interpolating the vertex colors
    ///
    /// Geometry mode is Polygon and fill mode InterpolatedFilled for the
    ///   duration of the call
    pub fn scanline_interpolated_fill_polygon(&mut self, vertices: &[Vertex2D]) {
        self.with_state(|s| {
            s.geometry = GeometryMode::Polygon;
            s.fill = FillMode::InterpolatedFilled;
        }, |ras| ras.fill_polygon(vertices));
    }

    /// Draw a circle approximated by a 30 sided polygon
    ///
    /// The outline is drawn in the current modes; when `filled` the interior
    ///   is filled with a solid color. Negative radii draw nothing.
    pub fn draw_circle(&mut self, circle: &Circle2D, filled: bool) {
        let finite = circle.radius.is_finite() &&
            circle.centre.x.is_finite() && circle.centre.y.is_finite();
        if ! finite || circle.radius < 0.0 {
            debug!("circle: ignoring {:?}", circle);
            return;
        }
        let vertices = circle.vertices();
        self.draw_unfilled_polygon(&vertices);
        if filled {
            self.scanline_fill_polygon(&vertices);
        }
    }
}
