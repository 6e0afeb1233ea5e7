//! Scanline lookup table
//!
//! Polygon outlines record where they cross each row; the fill pass pairs
//! the crossings of a row into horizontal spans.

use crate::color::Rgba;

/// Vertex count at or below which [FillRule::Compat] joins every crossing
///   to the last crossing of the row
///
/// [FillRule::Compat]: enum.FillRule.html#variant.Compat
pub const COMPAT_SMALL_POLYGON : usize = 5;

/// How crossings of a row are paired into spans
#[derive(Debug,PartialEq,Eq,Copy,Clone)]
pub enum FillRule {
    /// Parity fill, consecutive sorted crossings form a span
    ///
    /// Edges record crossings on the half-open row range [ymin, ymax),
    ///   horizontal edges record nothing
    EvenOdd,
    /// Legacy recording and pairing
    ///
    /// Edges record every row they touch, the first crossing of every line
    ///   is recorded twice, and polygons with few vertices pair each crossing
    ///   with the last crossing of the row. Correct for convex shapes only.
    Compat,
}
impl Default for FillRule {
    fn default() -> FillRule {
        FillRule::EvenOdd
    }
}

/// Crossing of a polygon edge with a row
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct ScanlineEntry {
    pub x: i64,
    pub color: Rgba,
}

/// Horizontal span between two crossings of row `y`
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Span {
    pub y: i64,
    pub start: ScanlineEntry,
    pub end: ScanlineEntry,
}

/// Crossings, one list per row
#[derive(Debug,Default,Clone)]
pub struct ScanlineTable {
    rows: Vec<Vec<ScanlineEntry>>,
}

impl ScanlineTable {
    /// Create a table with `height` empty rows
    pub fn new(height: usize) -> Self {
        ScanlineTable { rows: vec![vec![]; height] }
    }
    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }
    /// Remove all crossings, keeping the rows
    pub fn clear(&mut self) {
        for row in self.rows.iter_mut() {
            row.clear();
        }
    }
    /// Append a crossing to row `y`
    ///
    /// Rows outside the table are ignored
    pub fn push(&mut self, y: usize, entry: ScanlineEntry) {
        if let Some(row) = self.rows.get_mut(y) {
            row.push(entry);
        }
    }
    /// Crossings of row `y` in recording order
    pub fn row(&self, y: usize) -> &[ScanlineEntry] {
        self.rows.get(y).map(|r| r.as_slice()).unwrap_or(&[])
    }
    /// Total number of crossings
    pub fn len(&self) -> usize {
        self.rows.iter().map(|r| r.len()).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|r| r.is_empty())
    }
    /// Sort each row by x, descending, and pair the crossings into spans
    ///
    /// `vertex_count` is the number of vertices of the polygon that produced
    ///   the crossings, only used by [FillRule::Compat]
    ///
    /// [FillRule::Compat]: enum.FillRule.html#variant.Compat
    pub fn spans(&mut self, rule: FillRule, vertex_count: usize) -> Vec<Span> {
        let mut spans = vec![];
        for (y, row) in self.rows.iter_mut().enumerate() {
            if row.len() < 2 {
                continue;
            }
            row.sort_by(|a, b| b.x.cmp(&a.x));
            let y = y as i64;
            match rule {
                FillRule::EvenOdd => {
                    for pair in row.chunks_exact(2) {
                        spans.push(Span { y, start: pair[0], end: pair[1] });
                    }
                },
                FillRule::Compat => {
                    let last = row[row.len() - 1];
                    for j in (0 .. row.len()).step_by(2) {
                        let end = if vertex_count <= COMPAT_SMALL_POLYGON {
                            last
                        } else {
                            match row.get(j + 1) {
                                Some(e) => *e,
                                None => break,
                            }
                        };
                        spans.push(Span { y, start: row[j], end });
                    }
                },
            }
            log::trace!("scanline row {}: {} crossings", y, row.len());
        }
        spans
    }
}
