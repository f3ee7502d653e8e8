//! Software rasterization of solid filled shapes into a caller-owned pixel
//! buffer: scanline polygons, midpoint disks and round-capped thick lines.
//!
//! ```
//! use brushfill::{draw_stroke, Color, Framebuffer, PixelBuffer, Point};
//!
//! let mut canvas = Framebuffer::new(12, 10);
//! draw_stroke(&mut canvas, Point::new(2.0, 5.0), Point::new(8.0, 5.0), 4.0, Color::BLACK);
//! assert_eq!(canvas.get_pixel(5, 5), Some(Color::BLACK));
//! ```

pub mod color;
pub mod display;
pub mod geometry;
pub mod paint;
pub mod raster;
pub mod sketch;

pub use color::{Color, PaletteCursor};
pub use display::{Framebuffer, PixelBuffer, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use geometry::{Point, Polygon};
pub use paint::{BrushSize, PaintSession};
pub use raster::{draw_stroke, fill_circle, fill_polygon, stroke_quad, StrokeRequest};
pub use sketch::{DrawOp, Sketch};
