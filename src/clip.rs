//! Clipping Region

use crate::geometry::Point;

/// Inside Region
///
/// See [Cohen Sutherland](https://en.wikipedia.org/wiki/Cohen%E2%80%93Sutherland_algorithm)
pub const INSIDE : u8 = 0b0000;
/// Left of Region
pub const LEFT   : u8 = 0b0000_0001;
/// Right of Region
pub const RIGHT  : u8 = 0b0000_0010;
/// Below Region
pub const BOTTOM : u8 = 0b0000_0100;
/// Above Region
pub const TOP    : u8 = 0b0000_1000;

/// Segments that have not converged after this many steps are rejected
///   (NaN coordinates)
const MAX_CLIP_STEPS : usize = 16;

/// Rounding slack when a clipped point lands just outside the left or
///   bottom edge
const SNAP_EPSILON : f64 = 1e-9;

/// Clipping Rectangle
///
/// A coordinate is inside when `left <= x < right` and `bottom <= y < top`
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct ClipRect {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

/// Segment remaining after clipping
///
/// `t0` and `t1` are the parameters of the new endpoints along the original
///   segment, used to recompute endpoint colors
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct ClippedLine {
    pub p1: Point,
    pub p2: Point,
    pub t0: f64,
    pub t1: f64,
}

impl ClipRect {
    /// Create a new clipping rectangle
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        ClipRect { left, right, bottom, top }
    }
    /// Get location of point relative to rectangle
    ///
    /// Returned is an a u8 made up of the following bits:
    /// - [INSIDE](constant.INSIDE.html)
    /// - [LEFT](constant.LEFT.html)
    /// - [RIGHT](constant.RIGHT.html)
    /// - [BOTTOM](constant.BOTTOM.html)
    /// - [TOP](constant.TOP.html)
    ///
    ///     use tinyraster::{ClipRect, Point, INSIDE, LEFT, TOP};
    ///     let r = ClipRect::new(0.0, 10.0, 0.0, 10.0);
    ///     assert_eq!(r.outcode(&Point::new(5.0, 5.0)), INSIDE);
    ///     assert_eq!(r.outcode(&Point::new(-1.0, 10.0)), LEFT | TOP);
    ///
    pub fn outcode(&self, p: &Point) -> u8 {
        let mut code = INSIDE;
        if p.x < self.left {
            code |= LEFT;
        } else if p.x >= self.right {
            code |= RIGHT;
        }
        if p.y < self.bottom {
            code |= BOTTOM;
        } else if p.y >= self.top {
            code |= TOP;
        }
        code
    }
    /// Is pixel (`x`,`y`) inside the rectangle
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.outcode(&Point::new(x as f64, y as f64)) == INSIDE
    }
    /// Clip the segment from `p1` to `p2` with the Cohen-Sutherland algorithm
    ///
    /// Points on the right or top are moved onto the last pixel column or
    ///   row, `right - 1` or `top - 1`. Returns `None` if nothing is left.
    pub fn clip_line(&self, p1: Point, p2: Point) -> Option<ClippedLine> {
        let (mut a, mut b) = (p1, p2);
        let (mut t0, mut t1) = (0.0, 1.0);
        let mut code_a = self.outcode(&a);
        let mut code_b = self.outcode(&b);
        let (dx, dy) = (p2.x - p1.x, p2.y - p1.y);
        let (xmax, ymax) = (self.right - 1.0, self.top - 1.0);

        for _ in 0 .. MAX_CLIP_STEPS {
            if code_a | code_b == INSIDE {
                return Some(ClippedLine { p1: a, p2: b, t0, t1 });
            }
            // Both points on the same outside side
            if code_a & code_b != INSIDE {
                return None;
            }
            let code_out = if code_a != INSIDE { code_a } else { code_b };
            // Parameter along the original segment
            let t = if code_out & TOP != 0 {
                (ymax - p1.y) / dy
            } else if code_out & BOTTOM != 0 {
                (self.bottom - p1.y) / dy
            } else if code_out & RIGHT != 0 {
                (xmax - p1.x) / dx
            } else {
                (self.left - p1.x) / dx
            };
            if ! t.is_finite() {
                return None;
            }
            let mut p = p1.lerp(&p2, t);
            // Snap the coordinate on the clip edge exactly
            if code_out & TOP != 0 {
                p.y = ymax;
            } else if code_out & BOTTOM != 0 {
                p.y = self.bottom;
            } else if code_out & RIGHT != 0 {
                p.x = xmax;
            } else {
                p.x = self.left;
            }
            if code_out & (TOP | BOTTOM) != 0 {
                if p.x < self.left && self.left - p.x < SNAP_EPSILON {
                    p.x = self.left;
                }
            } else if p.y < self.bottom && self.bottom - p.y < SNAP_EPSILON {
                p.y = self.bottom;
            }
            if code_out == code_a {
                a = p;
                t0 = t;
                code_a = self.outcode(&a);
            } else {
                b = p;
                t1 = t;
                code_b = self.outcode(&b);
            }
        }
        log::trace!("clip: rejecting segment {:?} {:?}, no convergence", p1, p2);
        None
    }
}
