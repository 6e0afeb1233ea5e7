//! Octant transform and integer line traversal
//!
//! The incremental error line algorithm only handles slopes in [0,1] with
//! increasing x, octant 0 below. Every other direction is mapped into it by
//! one [Octant] transform: optionally swap the roles of x and y (`steep`),
//! optionally walk from the second endpoint (`swap`), optionally negate the
//! minor coordinate (`negate`). The eight combinations are the eight
//! octants.
//!
//! ```text
//!    \ 2 | 1 /
//!   3 \  |  / 0
//!  ----- + -----
//!   4 /  |  \ 7
//!    / 5 | 6 \
//! ```
//!
//! [Octant]: struct.Octant.html

/// Transform from true pixel space into synthetic octant 0 space
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Octant {
    /// |dy| > |dx|, x and y exchange roles
    pub steep: bool,
    /// Traverse from the second endpoint to the first
    pub swap: bool,
    /// Negate the minor coordinate
    pub negate: bool,
}

const fn octant(steep: bool, swap: bool, negate: bool) -> Octant {
    Octant { steep, swap, negate }
}

/// Transform for each octant, counter-clockwise from the positive x axis
pub const OCTANTS : [Octant; 8] = [
    octant(false, false, false),
    octant(true,  false, false),
    octant(true,  false, true ),
    octant(false, true,  true ),
    octant(false, true,  false),
    octant(true,  true,  false),
    octant(true,  true,  true ),
    octant(false, false, true ),
];

impl Octant {
    /// Find the transform for a line with direction (`dx`,`dy`)
    ///
    ///     use tinyraster::Octant;
    ///     assert_eq!(Octant::classify(5, 2).index(), 0);
    ///     assert_eq!(Octant::classify(-2, 5).index(), 2);
    ///     assert_eq!(Octant::classify(5, -2).index(), 7);
    ///
    pub fn classify(dx: i64, dy: i64) -> Octant {
        let steep = dy.abs() > dx.abs();
        let (du, dv) = if steep { (dy, dx) } else { (dx, dy) };
        let swap = du < 0;
        let dv = if swap { -dv } else { dv };
        Octant { steep, swap, negate: dv < 0 }
    }
    /// Position of this transform in [OCTANTS](constant.OCTANTS.html)
    pub fn index(&self) -> usize {
        OCTANTS.iter().position(|o| o == self).unwrap_or(0)
    }
    /// Map a true pixel into synthetic space
    pub fn forward(&self, x: i64, y: i64) -> (i64, i64) {
        let (u, v) = if self.steep { (y, x) } else { (x, y) };
        if self.negate { (u, -v) } else { (u, v) }
    }
    /// Map a synthetic point back into true pixel space
    pub fn inverse(&self, u: i64, v: i64) -> (i64, i64) {
        let v = if self.negate { -v } else { v };
        if self.steep { (v, u) } else { (u, v) }
    }
    /// Offset a true pixel by `k` along the minor axis of the line
    ///
    /// y for shallow lines, x for steep lines
    pub fn offset(&self, x: i64, y: i64, k: i64) -> (i64, i64) {
        if self.steep { (x + k, y) } else { (x, y + k) }
    }
}

/// Integer line walker, Bresenham's algorithm generalized to all octants
///
/// Yields every pixel from the traversal start to the end, in true pixel
///   coordinates. The traversal starts at `p1`, or at `p2` when the
///   transform swaps the endpoints; see [Bresenham::start].
///
///     use tinyraster::Bresenham;
///     let px : Vec<_> = Bresenham::new((0,0), (5,2)).collect();
///     assert_eq!(px, vec![(0,0),(1,0),(2,1),(3,1),(4,2),(5,2)]);
///
/// [Bresenham::start]: struct.Bresenham.html#method.start
#[derive(Debug,Clone)]
pub struct Bresenham {
    octant: Octant,
    start: (i64, i64),
    /// First synthetic x
    x0: i64,
    /// First synthetic y
    y0: i64,
    /// Current synthetic x
    x: i64,
    /// Current synthetic y
    y: i64,
    /// Last synthetic x
    ex: i64,
    dx: i64,
    dy: i64,
    epsilon: i64,
}

impl Bresenham {
    /// Walk the line from `p1` to `p2`
    pub fn new(p1: (i64, i64), p2: (i64, i64)) -> Self {
        let octant = Octant::classify(p2.0 - p1.0, p2.1 - p1.1);
        let (start, end) = if octant.swap { (p2, p1) } else { (p1, p2) };
        let (x0, y0) = octant.forward(start.0, start.1);
        let (x1, y1) = octant.forward(end.0, end.1);
        debug_assert!(x1 >= x0 && y1 >= y0 && y1 - y0 <= x1 - x0);
        Bresenham { octant, start, x0, y0,
                    x: x0, y: y0, ex: x1,
                    dx: x1 - x0, dy: y1 - y0,
                    epsilon: 0 }
    }
    /// Transform used for this line
    pub fn octant(&self) -> Octant {
        self.octant
    }
    /// First pixel emitted
    pub fn start(&self) -> (i64, i64) {
        self.start
    }
    /// Jump to synthetic x `u`, the same state as reached by stepping
    ///
    /// After `k` steps y has advanced by `floor((2k dy + dx) / 2dx)`
    fn seek(&mut self, u: i64) {
        let u = u.max(self.x0);
        self.x = u;
        if u > self.ex || self.dx == 0 {
            return;
        }
        let k = u - self.x0;
        let m = (2 * k * self.dy + self.dx).div_euclid(2 * self.dx);
        self.y = self.y0 + m;
        self.epsilon = k * self.dy - m * self.dx;
    }
    /// Only walk the pixels whose major coordinate lies in `lo..=hi`
    ///
    /// The major coordinate is y for steep lines and x otherwise. The pixels
    ///   are the ones a full walk emits; skipped steps cost nothing.
    ///
    ///     use tinyraster::Bresenham;
    ///     let px : Vec<_> = Bresenham::new((0,0), (50,20)).window(10, 12).collect();
    ///     assert_eq!(px, vec![(10,4),(11,4),(12,5)]);
    ///
    pub fn window(mut self, lo: i64, hi: i64) -> Self {
        self.seek(lo);
        self.ex = self.ex.min(hi);
        self
    }
    /// Synthetic x of the first pixel on synthetic row `v`
    fn minor_start(&self, v: i64) -> Option<i64> {
        let m = v - self.y0;
        if m < 0 || m > self.dy {
            return None;
        }
        if m == 0 {
            return Some(self.x0);
        }
        // Smallest k with 2k dy + dx >= 2m dx
        let num = (2 * m - 1) * self.dx;
        let den = 2 * self.dy;
        Some(self.x0 + (num + den - 1) / den)
    }
    /// First pixel, in traversal order, of every row `lo..=hi` the line
    ///   touches
    ///
    /// Cost is proportional to the number of rows, not to the length of
    ///   the line
    pub fn row_starts(&self, lo: i64, hi: i64) -> Vec<(i64, i64)> {
        if lo > hi {
            return vec![];
        }
        if self.octant.steep {
            return self.clone().window(lo, hi).collect();
        }
        let (vlo, vhi) = if self.octant.negate { (-hi, -lo) } else { (lo, hi) };
        let vlo = vlo.max(self.y0);
        let vhi = vhi.min(self.y0 + self.dy);
        (vlo ..= vhi)
            .filter_map(|v| self.minor_start(v).map(|u| self.octant.inverse(u, v)))
            .collect()
    }
}

impl Iterator for Bresenham {
    type Item = (i64, i64);
    fn next(&mut self) -> Option<Self::Item> {
        if self.x > self.ex {
            return None;
        }
        let p = self.octant.inverse(self.x, self.y);
        self.epsilon += self.dy;
        if self.epsilon << 1 >= self.dx {
            self.y += 1;
            self.epsilon -= self.dx;
        }
        self.x += 1;
        Some(p)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.ex - self.x + 1).max(0) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Bresenham {}
