//! Filled disks from midpoint circle stepping

use crate::color::Color;
use crate::display::PixelBuffer;

/// Fill a disk centred on a pixel.
///
/// Steps one octant of the midpoint circle and, at every step, fills the four
/// horizontal spans its eight symmetric boundary points bound. The centre row
/// spans `cx - radius ..= cx + radius`. A zero radius fills the centre pixel;
/// a negative radius draws nothing.
///
/// Steps whose rows all fall outside the buffer are jumped over, so a huge
/// disk over a small buffer costs about as much as the rows it covers.
pub fn fill_circle<B: PixelBuffer + ?Sized>(
    buffer: &mut B,
    cx: i32,
    cy: i32,
    radius: i32,
    color: Color,
) {
    if radius < 0 {
        return;
    }

    // i64 keeps cx ± radius from overflowing near the i32 limits
    let (cx, cy, radius) = (cx as i64, cy as i64, radius as i64);
    let (width, height) = (buffer.width() as i64, buffer.height() as i64);
    if cx + radius < 0 || cy + radius < 0 || cx - radius >= width || cy - radius >= height {
        return;
    }

    // Row distances from cy that land inside the buffer
    let near = 0i64.max(-cy).max(cy - height + 1);
    let far = cy.max(height - 1 - cy);

    let mut span = |half: i64, row: i64| {
        if row < 0 || row >= height || cx + half < 0 || cx - half >= width {
            return;
        }
        let x1 = (cx - half).max(-1);
        let x2 = (cx + half).min(width);
        buffer.hline(x1 as i32, x2 as i32, row as i32, color);
    };

    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;

    while x >= y {
        // y <= x, so neither row pair can reach the buffer again
        if x < near {
            break;
        }
        if !(near..=far).contains(&y) {
            // Rows cy ± y are off the buffer: skip to the next step that
            // changes anything, i.e. x reaching the buffer or x about to drop
            let target = if x > far {
                first_step_within(radius, far)
            } else if err < 0 {
                first_step_within(radius, x - 1) - 1
            } else {
                y
            };
            let target = if y < near { target.min(near) } else { target };
            if target > y {
                y = target;
                x = octant_x(radius, y);
                err = decision(radius, x, y);
                continue;
            }
        }

        span(x, cy + y);
        if y != 0 {
            span(x, cy - y);
        }
        // Rows cy ± x widen while x holds; fill them once, on the last step before x drops
        if x != y && err >= 0 {
            span(y, cy + x);
            span(y, cy - x);
        }

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

// Closed forms of the stepping above, for radius >= 1. Inside the octant the
// state at step y is x = the largest x with x(x - 1) < r² - y², and
// err = x² - x + y² + 2y + 1 - r².

fn octant_x(radius: i64, y: i64) -> i64 {
    let n = (radius as i128).pow(2) - (y as i128).pow(2);
    if n <= 0 {
        return -1;
    }
    ((isqrt(4 * n - 3) + 1) / 2) as i64
}

fn decision(radius: i64, x: i64, y: i64) -> i64 {
    let (r, x, y) = (radius as i128, x as i128, y as i128);
    (x * x - x + y * y + 2 * y + 1 - r * r) as i64
}

/// First step whose x is at most `limit`
fn first_step_within(radius: i64, limit: i64) -> i64 {
    let (r, d) = (radius as i128, limit as i128);
    let m = (r * r - d * (d + 1)).max(0);
    let s = isqrt(m);
    (if s * s < m { s + 1 } else { s }) as i64
}

fn isqrt(n: i128) -> i128 {
    let mut s = (n as f64).sqrt() as i128;
    while s * s > n {
        s -= 1;
    }
    while (s + 1) * (s + 1) <= n {
        s += 1;
    }
    s
}
