//! Freehand painting on top of the rasterizers.
//!
//! A session turns a stream of pointer samples in normalized canvas space into
//! connected capsule strokes. It only tracks pointer and brush state; every
//! pixel goes through [`draw_stroke`].

use crate::color::{Color, PaletteCursor};
use crate::display::PixelBuffer;
use crate::geometry::Point;
use crate::raster::{draw_stroke, StrokeRequest};
use serde::{Deserialize, Serialize};

/// Brush widths in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrushSize {
    #[default]
    Large,
    Medium,
    Small,
}

impl BrushSize {
    pub const ALL: [BrushSize; 3] = [BrushSize::Large, BrushSize::Medium, BrushSize::Small];

    pub fn width(self) -> f32 {
        match self {
            BrushSize::Large => 60.0,
            BrushSize::Medium => 24.0,
            BrushSize::Small => 12.0,
        }
    }

    /// Brush for a zero-based selector slot
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PaintSession {
    brush: BrushSize,
    palette: PaletteCursor,
    last: Option<Point>,
}

impl PaintSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn brush(&self) -> BrushSize {
        self.brush
    }

    pub fn select_brush(&mut self, brush: BrushSize) {
        self.brush = brush;
    }

    pub fn shift_palette(&mut self, hue_delta: i32, value_delta: i32) {
        self.palette.shift(hue_delta, value_delta);
    }

    pub fn palette(&self) -> PaletteCursor {
        self.palette
    }

    pub fn color(&self) -> Color {
        self.palette.color()
    }

    pub fn is_stroking(&self) -> bool {
        self.last.is_some()
    }

    /// Pointer went down: the next sample starts a fresh stroke
    pub fn press(&mut self) {
        self.last = None;
    }

    /// Pointer went up or left the canvas
    pub fn release(&mut self) {
        self.last = None;
    }

    /// Continue the stroke to `uv` (0..1 on both axes of the buffer).
    ///
    /// The first sample after a press draws a dot. Returns the stroke drawn,
    /// in buffer pixels, so callers can record it.
    pub fn drag_to<B: PixelBuffer + ?Sized>(&mut self, buffer: &mut B, uv: Point) -> StrokeRequest {
        let size = Point::new(buffer.width() as f32, buffer.height() as f32);
        let here = Point::new(uv.x * size.x, uv.y * size.y);
        let from = self.last.unwrap_or(here);

        let stroke = StrokeRequest::new(from, here, self.brush.width(), self.color());
        draw_stroke(buffer, stroke.start, stroke.end, stroke.width, stroke.color);
        self.last = Some(here);
        stroke
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Framebuffer;
    use crate::raster::fill_circle;

    #[test]
    fn test_first_sample_draws_a_dot() {
        let mut fb = Framebuffer::new(100, 100);
        let mut session = PaintSession::new();
        session.select_brush(BrushSize::Small);
        session.press();
        let stroke = session.drag_to(&mut fb, Point::new(0.5, 0.5));

        assert_eq!(stroke.start, stroke.end);
        assert_eq!(stroke.start, Point::new(50.0, 50.0));
        assert!(session.is_stroking());

        let mut dot = Framebuffer::new(100, 100);
        fill_circle(&mut dot, 50, 50, 6, session.color());
        assert_eq!(fb, dot);
    }

    #[test]
    fn test_samples_connect() {
        let mut fb = Framebuffer::new(200, 100);
        let mut session = PaintSession::new();
        session.select_brush(BrushSize::Small);
        session.press();
        session.drag_to(&mut fb, Point::new(0.1, 0.5));
        let stroke = session.drag_to(&mut fb, Point::new(0.9, 0.5));
        assert_eq!(stroke.start, Point::new(20.0, 50.0));
        assert_eq!(stroke.end, Point::new(180.0, 50.0));

        let ink = session.color();
        for x in 20..=180 {
            assert_eq!(fb.get_pixel(x, 50), Some(ink), "gap at x={}", x);
        }
    }

    #[test]
    fn test_release_breaks_the_stroke() {
        let mut fb = Framebuffer::new(100, 100);
        let mut session = PaintSession::new();
        session.drag_to(&mut fb, Point::new(0.2, 0.2));
        session.release();
        assert!(!session.is_stroking());
        let stroke = session.drag_to(&mut fb, Point::new(0.8, 0.8));
        assert_eq!(stroke.start, stroke.end);
    }

    #[test]
    fn test_brush_and_palette_feed_the_stroke() {
        let mut fb = Framebuffer::new(64, 64);
        let mut session = PaintSession::new();
        session.select_brush(BrushSize::Medium);
        session.shift_palette(1, 0);
        let stroke = session.drag_to(&mut fb, Point::new(0.5, 0.5));
        assert_eq!(stroke.width, 24.0);
        assert_eq!(stroke.color, Color::rgb(255, 26, 26));
    }

    #[test]
    fn test_brush_slots() {
        assert_eq!(BrushSize::from_index(0), Some(BrushSize::Large));
        assert_eq!(BrushSize::from_index(2), Some(BrushSize::Small));
        assert_eq!(BrushSize::from_index(3), None);
        assert_eq!(BrushSize::default().width(), 60.0);
    }
}
