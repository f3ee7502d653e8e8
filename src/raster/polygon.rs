//! Scanline polygon fill (edge-crossing method from alienryderflex.com/polygon_fill)

use crate::color::Color;
use crate::display::PixelBuffer;
use crate::geometry::{bounds, edges, Point};

/// Fill a polygon given as an ordered vertex list.
///
/// Each integer row `y` collects the x-intercepts of every edge with exactly
/// one endpoint strictly above `y`; sorted intercepts are filled pairwise as
/// half-open spans `[x_a, x_b)`. Concave and self-intersecting polygons fill
/// by even-odd parity. Fewer than three vertices, or any non-finite vertex,
/// draws nothing.
pub fn fill_polygon<B: PixelBuffer + ?Sized>(buffer: &mut B, vertices: &[Point], color: Color) {
    if vertices.len() < 3 || !vertices.iter().all(Point::is_finite) {
        return;
    }
    let Some((lo, hi)) = bounds(vertices) else {
        return;
    };

    let min_x = (lo.x.floor() as i32).max(0);
    let min_y = (lo.y.floor() as i32).max(0);
    let max_x = ((hi.x + 1.0).floor() as i32).min(clamp_extent(buffer.width()));
    let max_y = ((hi.y + 1.0).floor() as i32).min(clamp_extent(buffer.height()));
    if min_x >= max_x || min_y >= max_y {
        return;
    }

    // Reused across rows
    let mut nodes: Vec<i32> = Vec::with_capacity(vertices.len());

    for y in min_y..max_y {
        nodes.clear();
        let yf = y as f32;

        for (a, b) in edges(vertices) {
            if (a.y < yf && b.y >= yf) || (b.y < yf && a.y >= yf) {
                // Multiply before dividing so integer vertices give exact intercepts
                let x = a.x + (yf - a.y) * (b.x - a.x) / (b.y - a.y);
                nodes.push(x.floor() as i32);
            }
        }

        nodes.sort_unstable();
        fill_spans(buffer, y, &nodes, min_x, max_x, color);
    }
}

/// Fill sorted intercepts pairwise on row `y`, clipped to `[min_x, max_x)`.
/// An unpaired trailing intercept is dropped.
fn fill_spans<B: PixelBuffer + ?Sized>(
    buffer: &mut B,
    y: i32,
    nodes: &[i32],
    min_x: i32,
    max_x: i32,
    color: Color,
) {
    for pair in nodes.chunks_exact(2) {
        let (x_a, x_b) = (pair[0], pair[1]);
        // Sorted, so every later span starts further right
        if x_a >= max_x {
            break;
        }
        if x_b > min_x {
            let x_a = x_a.max(min_x);
            let x_b = x_b.min(max_x);
            if x_a < x_b {
                buffer.hline(x_a, x_b - 1, y, color);
            }
        }
    }
}

#[inline]
fn clamp_extent(extent: u32) -> i32 {
    extent.min(i32::MAX as u32) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Framebuffer;
    use crate::raster::testing::Recorder;

    fn pts(coords: &[(f32, f32)]) -> Vec<Point> {
        coords.iter().map(|&c| Point::from(c)).collect()
    }

    #[test]
    fn test_triangle_scanlines() {
        let mut fb = Framebuffer::new(10, 10);
        let tri = pts(&[(1.0, 1.0), (8.0, 1.0), (1.0, 8.0)]);
        fill_polygon(&mut fb, &tri, Color::BLACK);

        // Row y covers [1, 9 - y); the top edge row and the apex row are empty
        for y in 0..10 {
            for x in 0..10 {
                let inside = (2..=7).contains(&y) && x >= 1 && x < 9 - y;
                let expected = if inside { Color::BLACK } else { Color::WHITE };
                assert_eq!(fb.get_pixel(x, y), Some(expected), "pixel ({}, {})", x, y);
            }
        }
        assert_eq!(fb.count(Color::BLACK), 6 + 5 + 4 + 3 + 2 + 1);
    }

    #[test]
    fn test_too_few_vertices_is_noop() {
        let mut fb = Framebuffer::new(8, 8);
        fill_polygon(&mut fb, &[], Color::BLACK);
        fill_polygon(&mut fb, &pts(&[(1.0, 1.0)]), Color::BLACK);
        fill_polygon(&mut fb, &pts(&[(1.0, 1.0), (6.0, 6.0)]), Color::BLACK);
        assert_eq!(fb, Framebuffer::new(8, 8));
    }

    #[test]
    fn test_non_finite_vertex_is_noop() {
        let mut fb = Framebuffer::new(8, 8);
        let poly = pts(&[(1.0, 1.0), (f32::NAN, 6.0), (1.0, 6.0)]);
        fill_polygon(&mut fb, &poly, Color::BLACK);
        let poly = pts(&[(1.0, 1.0), (f32::INFINITY, 6.0), (1.0, 6.0)]);
        fill_polygon(&mut fb, &poly, Color::BLACK);
        assert_eq!(fb.count(Color::BLACK), 0);
    }

    #[test]
    fn test_rectangle_is_half_open() {
        let mut fb = Framebuffer::new(10, 10);
        let rect = pts(&[(2.0, 3.0), (6.0, 3.0), (6.0, 7.0), (2.0, 7.0)]);
        fill_polygon(&mut fb, &rect, Color::BLACK);
        // rows 4..=7, columns 2..6
        assert_eq!(fb.row_mask(3, Color::BLACK), "..........");
        for y in 4..=7 {
            assert_eq!(fb.row_mask(y, Color::BLACK), "..####....");
        }
        assert_eq!(fb.row_mask(8, Color::BLACK), "..........");
    }

    #[test]
    fn test_concave_polygon_has_two_spans() {
        // U shape opening upward
        let mut fb = Framebuffer::new(10, 8);
        let u = pts(&[
            (1.0, 1.0),
            (3.0, 1.0),
            (3.0, 4.0),
            (6.0, 4.0),
            (6.0, 1.0),
            (8.0, 1.0),
            (8.0, 7.0),
            (1.0, 7.0),
        ]);
        fill_polygon(&mut fb, &u, Color::BLACK);
        assert_eq!(fb.row_mask(2, Color::BLACK), ".##...##..");
        assert_eq!(fb.row_mask(6, Color::BLACK), ".#######..");
    }

    #[test]
    fn test_self_intersecting_bowtie_fills_both_lobes() {
        let mut fb = Framebuffer::new(12, 12);
        let bowtie = pts(&[(1.0, 1.0), (10.0, 10.0), (10.0, 1.0), (1.0, 10.0)]);
        fill_polygon(&mut fb, &bowtie, Color::BLACK);
        // Row 3: left lobe [1, 3), right lobe [8, 10)
        assert_eq!(fb.row_mask(3, Color::BLACK), ".##.....##..");
        // Lobes are mirror images of each other
        for y in 0..12 {
            let row = fb.row_mask(y, Color::BLACK);
            let rev: String = row[..11].chars().rev().collect();
            assert_eq!(&row[..11], rev.as_str(), "row {}", y);
        }
    }

    #[test]
    fn test_convex_rows_are_contiguous() {
        let mut fb = Framebuffer::new(32, 32);
        let diamond = pts(&[(16.0, 2.5), (29.3, 15.0), (16.0, 28.7), (3.1, 16.2)]);
        fill_polygon(&mut fb, &diamond, Color::BLACK);
        for y in 0..32 {
            let row = fb.row_mask(y, Color::BLACK);
            let runs = row.split('.').filter(|s| !s.is_empty()).count();
            assert!(runs <= 1, "row {} has {} spans: {}", y, runs, row);
        }
        assert!(fb.count(Color::BLACK) > 200);
    }

    #[test]
    fn test_clipped_to_buffer() {
        let mut rec = Recorder::new(16, 12);
        let poly = pts(&[(-20.0, -5.0), (40.0, 3.0), (25.0, 30.0), (-8.0, 18.0)]);
        fill_polygon(&mut rec, &poly, Color::BLACK);
        assert!(!rec.writes.is_empty());
        rec.assert_contained();

        let mut rec = Recorder::new(16, 12);
        let outside = pts(&[(-20.0, -5.0), (-2.0, -5.0), (-2.0, -1.0)]);
        fill_polygon(&mut rec, &outside, Color::BLACK);
        assert!(rec.writes.is_empty());
    }

    #[test]
    fn test_covering_polygon_fills_whole_buffer() {
        let mut fb = Framebuffer::new(6, 4);
        let big = pts(&[(-100.0, -100.0), (100.0, -100.0), (100.0, 100.0), (-100.0, 100.0)]);
        fill_polygon(&mut fb, &big, Color::BLACK);
        assert_eq!(fb.count(Color::BLACK), 24);
    }

    #[test]
    fn test_idempotent() {
        let poly = pts(&[(0.5, 2.2), (9.7, 0.3), (7.1, 8.8), (3.3, 5.0)]);
        let mut once = Framebuffer::new(10, 10);
        fill_polygon(&mut once, &poly, Color::BLACK);
        let mut twice = once.clone();
        fill_polygon(&mut twice, &poly, Color::BLACK);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_odd_intercept_count_drops_trailing_node() {
        let mut fb = Framebuffer::new(10, 1);
        fill_spans(&mut fb, 0, &[1, 4, 6], 0, 10, Color::BLACK);
        assert_eq!(fb.row_mask(0, Color::BLACK), ".###......");
    }

    #[test]
    fn test_span_left_of_buffer_does_not_stop_row() {
        let mut fb = Framebuffer::new(10, 1);
        fill_spans(&mut fb, 0, &[-9, -4, 2, 5], 0, 10, Color::BLACK);
        assert_eq!(fb.row_mask(0, Color::BLACK), "..###.....");
    }
}
