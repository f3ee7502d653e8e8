//! Solid-color rasterizers. Every write is an opaque overwrite clipped to the
//! buffer; nothing here keeps state between calls.

mod circle;
mod polygon;
mod stroke;

pub use circle::fill_circle;
pub use polygon::fill_polygon;
pub use stroke::{draw_stroke, stroke_quad, StrokeRequest};


#[cfg(test)]
mod tests {
    use super::testing::Recorder;
    use super::*;
    use crate::color::Color;
    use crate::display::{Framebuffer, PixelBuffer};
    use crate::geometry::Point;

    #[test]
    fn test_sweep_stays_in_bounds() {
        // Shapes walked across and past every edge of a small buffer
        for step in -6..12 {
            let o = step as f32 * 3.1;
            let mut rec = Recorder::new(13, 9);
            let tri = [Point::new(o, -2.0), Point::new(o + 9.0, 4.5), Point::new(o - 3.0, 11.0)];
            fill_polygon(&mut rec, &tri, Color::BLACK);
            fill_circle(&mut rec, step * 2, 12 - step, 5, Color::BLACK);
            draw_stroke(
                &mut rec,
                Point::new(o, o * 0.5),
                Point::new(12.0 - o, 3.0),
                7.0,
                Color::BLACK,
            );
            rec.assert_contained();
        }
    }

    #[test]
    fn test_works_through_trait_object() {
        let mut fb = Framebuffer::new(8, 8);
        {
            let target: &mut dyn PixelBuffer = &mut fb;
            fill_circle(target, 4, 4, 2, Color::BLACK);
            draw_stroke(target, Point::new(0.0, 0.0), Point::new(7.0, 0.0), 2.0, Color::BLACK);
        }
        assert_eq!(fb.get_pixel(4, 4), Some(Color::BLACK));
        assert_eq!(fb.get_pixel(6, 0), Some(Color::BLACK));
    }

    #[test]
    fn test_last_color_wins() {
        let mut fb = Framebuffer::new(9, 9);
        let red = Color::rgb(255, 0, 0);
        let blue = Color::rgba(0, 0, 255, 128);
        fill_circle(&mut fb, 4, 4, 3, red);
        fill_circle(&mut fb, 4, 4, 1, blue);
        assert_eq!(fb.get_pixel(4, 4), Some(blue));
        assert_eq!(fb.get_pixel(4, 1), Some(red));
    }
}
