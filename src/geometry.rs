//! Geometry primitives

use crate::color::Rgba;

use std::f64::consts::PI;

/// Number of segments used to approximate a circle
pub const CIRCLE_SEGMENTS : usize = 30;

/// Point in 2D
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
    /// Euclidean distance to `other`
    pub fn distance(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
    /// Point at parameter `t` along the segment from `self` to `other`
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point::new(self.x + t * (other.x - self.x),
                   self.y + t * (other.y - self.y))
    }
}

/// Position and color of a polygon or line vertex
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Vertex2D {
    pub position: Point,
    pub color: Rgba,
}

impl Vertex2D {
    pub fn new(x: f64, y: f64, color: Rgba) -> Self {
        Vertex2D { position: Point::new(x, y), color }
    }
    pub fn at(position: Point, color: Rgba) -> Self {
        Vertex2D { position, color }
    }
}

/// Circle with a centre, radius and color
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Circle2D {
    pub centre: Point,
    pub radius: f64,
    pub color: Rgba,
}

impl Circle2D {
    pub fn new(centre: Point, radius: f64, color: Rgba) -> Self {
        Circle2D { centre, radius, color }
    }
    /// Vertices of the regular polygon approximating the circle
    ///
    /// [CIRCLE_SEGMENTS] points at uniform angular steps starting at angle 0,
    ///   independent of the radius
    ///
    ///     use tinyraster::{Circle2D, Point, Rgba};
    ///     let c = Circle2D::new(Point::new(10.0, 10.0), 5.0, Rgba::white());
    ///     let v = c.vertices();
    ///     assert_eq!(v.len(), 30);
    ///     assert_eq!(v[0].position, Point::new(15.0, 10.0));
    ///
    /// [CIRCLE_SEGMENTS]: constant.CIRCLE_SEGMENTS.html
    pub fn vertices(&self) -> Vec<Vertex2D> {
        let dt = 2.0 * PI / CIRCLE_SEGMENTS as f64;
        (0 .. CIRCLE_SEGMENTS)
            .map(|k| k as f64 * dt)
            .map(|t| Point::new(self.centre.x + self.radius * t.cos(),
                                self.centre.y + self.radius * t.sin()))
            .map(|p| Vertex2D::at(p, self.color))
            .collect()
    }
}
