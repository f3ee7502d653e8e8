//! Thick line segments drawn as capsules

use std::f32::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use super::{fill_circle, fill_polygon};
use crate::color::Color;
use crate::display::PixelBuffer;
use crate::geometry::Point;

/// One thick segment to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeRequest {
    pub start: Point,
    pub end: Point,
    pub width: f32,
    pub color: Color,
}

impl StrokeRequest {
    pub fn new(start: Point, end: Point, width: f32, color: Color) -> Self {
        Self {
            start,
            end,
            width,
            color,
        }
    }

    pub fn draw<B: PixelBuffer + ?Sized>(&self, buffer: &mut B) {
        draw_stroke(buffer, self.start, self.end, self.width, self.color);
    }
}

/// Rectangle of thickness `width` running from `start` to `end`:
/// `[start - perp, start + perp, end + perp, end - perp]`.
///
/// The heading is `atan2(dx, dy)`, x first, and the offset is
/// `(sin, cos)` of the heading turned a quarter turn. A zero-length segment
/// therefore gets a horizontal offset.
pub fn stroke_quad(start: Point, end: Point, width: f32) -> [Point; 4] {
    let heading = (end.x - start.x).atan2(end.y - start.y);
    let turned = heading + FRAC_PI_2;
    let perp = Point::new(turned.sin(), turned.cos()) * (width / 2.0);
    [start - perp, start + perp, end + perp, end - perp]
}

/// Draw a round-capped thick line.
///
/// Fills the body quad, then a disk of radius `floor(width / 2)` on each
/// endpoint's pixel. A zero width leaves only the two endpoint pixels.
/// Negative or non-finite widths and non-finite endpoints draw nothing.
pub fn draw_stroke<B: PixelBuffer + ?Sized>(
    buffer: &mut B,
    start: Point,
    end: Point,
    width: f32,
    color: Color,
) {
    if !(width >= 0.0 && width.is_finite()) || !start.is_finite() || !end.is_finite() {
        return;
    }

    fill_polygon(buffer, &stroke_quad(start, end, width), color);

    let radius = (width / 2.0).floor() as i32;
    let (x0, y0) = start.to_pixel();
    let (x1, y1) = end.to_pixel();
    fill_circle(buffer, x0, y0, radius, color);
    fill_circle(buffer, x1, y1, radius, color);
}
