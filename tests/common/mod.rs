#![allow(dead_code)]

use std::collections::BTreeSet;
use std::path::PathBuf;

use tinyraster::{Framebuffer, Rgba, Vertex2D};

pub fn red() -> Rgba { Rgba::new(1.0, 0.0, 0.0, 1.0) }
pub fn green() -> Rgba { Rgba::new(0.0, 1.0, 0.0, 1.0) }
pub fn blue() -> Rgba { Rgba::new(0.0, 0.0, 1.0, 1.0) }

pub fn vtx(x: f64, y: f64, c: Rgba) -> Vertex2D {
    Vertex2D::new(x, y, c)
}

/// Pixels that differ from the background `bg`
pub fn drawn(fb: &Framebuffer, bg: Rgba) -> BTreeSet<(i64,i64)> {
    let mut out = BTreeSet::new();
    for y in 0 .. fb.height() as i64 {
        for x in 0 .. fb.width() as i64 {
            if fb.pixel(x, y) != Some(bg) {
                out.insert((x, y));
            }
        }
    }
    out
}

/// Drawn pixels of row `y`, sorted
pub fn row(fb: &Framebuffer, bg: Rgba, y: i64) -> Vec<i64> {
    (0 .. fb.width() as i64).filter(|&x| fb.pixel(x, y) != Some(bg)).collect()
}

/// Assert that the drawn pixels of every row form one contiguous run
pub fn assert_rows_solid(fb: &Framebuffer, bg: Rgba, rows: std::ops::RangeInclusive<i64>) {
    for y in rows {
        let xs = row(fb, bg, y);
        assert!(! xs.is_empty(), "row {} empty", y);
        let (lo, hi) = (xs[0], xs[xs.len() - 1]);
        assert_eq!(xs.len() as i64, hi - lo + 1, "gap in row {}: {:?}", y, xs);
    }
}

pub fn close(a: Rgba, b: Rgba, eps: f32) -> bool {
    (a.r - b.r).abs() <= eps && (a.g - b.g).abs() <= eps &&
        (a.b - b.b).abs() <= eps && (a.a - b.a).abs() <= eps
}

/// Write a scene to tests/tmp/`name`
pub fn save(fb: &Framebuffer, name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("tmp");
    std::fs::create_dir_all(&path).unwrap();
    path.push(name);
    fb.to_file(&path).unwrap();
    path
}
