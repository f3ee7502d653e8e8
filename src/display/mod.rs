mod pixel_buffer;
#[cfg(feature = "viewer")]
mod window;

pub use pixel_buffer::Framebuffer;
#[cfg(feature = "viewer")]
pub use window::{Screen, Viewer, ViewerEvent};

use crate::color::Color;

/// Canvas size of the original paint surface
pub const DEFAULT_WIDTH: u32 = 256;
pub const DEFAULT_HEIGHT: u32 = 384;

/// A caller-owned grid of colors the rasterizers draw into.
///
/// Rasterizers borrow the buffer mutably for the duration of one call and
/// never keep it. Implementations only need the four required methods;
/// `hline` has a clipped default that backends may override with a faster
/// span write.
pub trait PixelBuffer {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Read a pixel. Returns None outside the buffer.
    fn get_pixel(&self, x: i32, y: i32) -> Option<Color>;

    /// Overwrite a pixel. Coordinates outside the buffer are ignored.
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);

    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as i64) < self.width() as i64 && y >= 0 && (y as i64) < self.height() as i64
    }

    /// Fill the inclusive span `x1..=x2` on row `y`, clipped to the buffer
    fn hline(&mut self, x1: i32, x2: i32, y: i32, color: Color) {
        if y < 0 || y as i64 >= self.height() as i64 {
            return;
        }
        let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let start = x1.max(0);
        let end = (x2 as i64).min(self.width() as i64 - 1) as i32;
        for x in start..=end {
            self.set_pixel(x, y, color);
        }
    }
}

impl<B: PixelBuffer + ?Sized> PixelBuffer for &mut B {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        (**self).get_pixel(x, y)
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        (**self).set_pixel(x, y, color);
    }

    fn hline(&mut self, x1: i32, x2: i32, y: i32, color: Color) {
        (**self).hline(x1, x2, y, color);
    }
}
