//! Points and polygons in buffer-pixel space

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A point in buffer-pixel coordinates. May lie outside the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Integer pixel containing this point, truncating toward zero
    #[inline]
    pub fn to_pixel(self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }

    pub fn min(self, other: Point) -> Point {
        Point::new(self.x.min(other.x), self.y.min(other.y))
    }

    pub fn max(self, other: Point) -> Point {
        Point::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Component-wise (min, max) corners of a point set, or None when empty
pub fn bounds(points: &[Point]) -> Option<(Point, Point)> {
    let first = *points.first()?;
    Some(
        points
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

/// Closed-loop edges as (current, previous) vertex pairs; the first vertex
/// pairs with the last
pub fn edges(vertices: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + n - 1) % n]))
}

/// A closed polygon; the last vertex connects back to the first.
/// Serializes as a bare vertex array.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    pub fn from_vertices(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn add_vertex(&mut self, x: f32, y: f32) {
        self.vertices.push(Point::new(x, y));
    }

    /// Fewer than three vertices encloses nothing
    pub fn is_closed(&self) -> bool {
        self.vertices.len() >= 3
    }

    /// Component-wise (min, max) corners, or None for an empty polygon
    pub fn bounds(&self) -> Option<(Point, Point)> {
        bounds(&self.vertices)
    }

    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        edges(&self.vertices)
    }
}

impl AsRef<[Point]> for Polygon {
    fn as_ref(&self) -> &[Point] {
        &self.vertices
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(vertices: Vec<Point>) -> Self {
        Self::from_vertices(vertices)
    }
}
