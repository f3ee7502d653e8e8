use super::PixelBuffer;
use crate::color::Color;

/// Write ABGR pixel to slice (RGBA8888 little-endian byte order)
#[inline]
fn write_pixel(dest: &mut [u8], color: Color) {
    dest[0] = color.a;
    dest[1] = color.b;
    dest[2] = color.g;
    dest[3] = color.r;
}

#[inline]
fn read_pixel(src: &[u8]) -> Color {
    Color::rgba(src[3], src[2], src[1], src[0])
}

// ============================================================================
// Framebuffer
// ============================================================================

/// Owned RGBA8888 canvas.
/// Bytes are laid out for an SDL2 `RGBA8888` streaming texture, so `as_bytes`
/// can be uploaded as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// Create a white canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::WHITE)
    }

    /// Create a canvas filled with `color`
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let mut fb = Self {
            pixels: vec![0; width as usize * height as usize * 4],
            width,
            height,
        };
        fb.clear(color);
        fb
    }

    /// Calculate byte offset for pixel at (x, y)
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    pub fn clear(&mut self, color: Color) {
        for px in self.pixels.chunks_exact_mut(4) {
            write_pixel(px, color);
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Iterate `(x, y, color)` in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = (i32, i32, Color)> + '_ {
        let width = self.width.max(1) as usize;
        self.pixels.chunks_exact(4).enumerate().map(move |(i, px)| {
            ((i % width) as i32, (i / width) as i32, read_pixel(px))
        })
    }

    /// Number of pixels currently holding `color`
    pub fn count(&self, color: Color) -> usize {
        self.pixels
            .chunks_exact(4)
            .filter(|px| read_pixel(px) == color)
            .count()
    }

    /// Render one row as text, `#` for `ink` and `.` for anything else
    pub fn row_mask(&self, y: i32, ink: Color) -> String {
        (0..self.width as i32)
            .map(|x| {
                if self.get_pixel(x, y) == Some(ink) {
                    '#'
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl PixelBuffer for Framebuffer {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            Some(read_pixel(&self.pixels[idx..idx + 4]))
        } else {
            None
        }
    }

    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            write_pixel(&mut self.pixels[idx..idx + 4], color);
        }
    }

    /// Clipped span write over the row slice
    fn hline(&mut self, x1: i32, x2: i32, y: i32, color: Color) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let start = x1.max(0);
        let end = x2.min(self.width as i32 - 1);
        if start > end {
            return;
        }

        let from = self.pixel_index(start as u32, y as u32);
        let to = self.pixel_index(end as u32, y as u32) + 4;
        for px in self.pixels[from..to].chunks_exact_mut(4) {
            write_pixel(px, color);
        }
    }
}
